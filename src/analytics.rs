use std::rc::Rc;

use log::{debug, info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;

use crate::attribution::enrich::EventParams;
use crate::attribution::record::AttributionRecord;
use crate::attribution::store::AttributionStore;

/// Something that can deliver an analytics event. Delivery is best effort:
/// implementations swallow their own failures.
pub trait EventReporter {
    fn report(&self, event_name: &str, params: &EventParams);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = gtag)]
    fn gtag_event(command: &str, event_name: &str, params: &JsValue) -> Result<(), JsValue>;
}

fn gtag_loaded() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str("gtag")).ok())
        .map(|gtag| gtag.is_function())
        .unwrap_or(false)
}

/// Sends events through the Google tag loaded by index.html.
pub struct GtagReporter;

impl EventReporter for GtagReporter {
    fn report(&self, event_name: &str, params: &EventParams) {
        // Ad blockers routinely strip the tag
        if !gtag_loaded() {
            debug!("gtag not loaded, skipping {}", event_name);
            return;
        }

        // Plain JS objects rather than Maps, gtag ignores Map entries
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let payload = match params.serialize(&serializer) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Could not convert {} params: {}", event_name, e);
                return;
            }
        };

        if let Err(e) = gtag_event("event", event_name, &payload) {
            warn!("gtag rejected {}: {:?}", event_name, e);
        }
    }
}

/// Attribution store plus reporter, shared with components via context.
#[derive(Clone)]
pub struct Tracker {
    store: Rc<AttributionStore>,
    reporter: Rc<dyn EventReporter>,
}

impl PartialEq for Tracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && Rc::as_ptr(&self.reporter) as *const () == Rc::as_ptr(&other.reporter) as *const ()
    }
}

impl Tracker {
    pub fn new(store: Rc<AttributionStore>, reporter: Rc<dyn EventReporter>) -> Self {
        Self { store, reporter }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(AttributionStore::browser()), Rc::new(GtagReporter))
    }

    /// Records campaign parameters of the address the page was opened with.
    pub fn capture_page_load(&self) -> Option<AttributionRecord> {
        let Some(address) = web_sys::window().and_then(|w| w.location().href().ok()) else {
            debug!("No page address to capture attribution from");
            return self.store.load();
        };
        self.capture_address(&address)
    }

    pub fn capture_address(&self, address: &str) -> Option<AttributionRecord> {
        self.store.capture_or_retrieve(address)
    }

    /// Enriches `base_params` with the session's attribution and reports it.
    pub fn track(&self, event_name: &str, base_params: EventParams) -> EventParams {
        let params = self.store.enrich_event(event_name, &base_params);
        info!("Tracking {}", event_name);
        self.reporter.report(event_name, &params);
        params
    }

    pub fn source_label(&self) -> String {
        self.store.source_label()
    }
}

/// Base params for a click or view tied to one spot on the page.
pub fn location_params(button_location: &str) -> EventParams {
    let mut params = EventParams::new();
    params.insert("button_location".to_string(), button_location.into());
    params
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::*;

    pub struct NoopReporter;

    impl EventReporter for NoopReporter {
        fn report(&self, _event_name: &str, _params: &EventParams) {}
    }

    /// Keeps every reported event for assertions.
    #[derive(Default)]
    pub struct RecordingReporter {
        pub events: RefCell<Vec<(String, EventParams)>>,
    }

    impl EventReporter for RecordingReporter {
        fn report(&self, event_name: &str, params: &EventParams) {
            self.events
                .borrow_mut()
                .push((event_name.to_string(), params.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{NoopReporter, RecordingReporter};
    use super::*;
    use crate::attribution::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};

    fn memory_store() -> Rc<AttributionStore> {
        Rc::new(AttributionStore::new(Rc::new(MemoryStorage::default()), "tracker_test"))
    }

    fn tracker_with(reporter: Rc<RecordingReporter>) -> Tracker {
        Tracker::new(memory_store(), reporter)
    }

    #[test]
    fn test_track_reports_enriched_params() {
        let reporter = Rc::new(RecordingReporter::default());
        let store = memory_store();
        let tracker = Tracker::new(store.clone(), reporter.clone());
        store.capture_or_retrieve_at(
            "https://mirinae.kr/landing?utm_source=daangn&utm_campaign=spring",
            Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
        );

        tracker.track("click_cta", location_params("floating"));

        let events = reporter.events.borrow();
        assert_eq!(events.len(), 1);
        let (name, params) = &events[0];
        assert_eq!(name, "click_cta");
        assert_eq!(params["button_location"], "floating");
        assert_eq!(params["utm_source"], "daangn");
        assert_eq!(params["utm_campaign"], "spring");
        assert_eq!(params["traffic_source"], "daangn");
    }

    #[test]
    fn test_track_without_attribution_is_direct() {
        let reporter = Rc::new(RecordingReporter::default());
        let tracker = tracker_with(reporter.clone());

        let params = tracker.track("view_coming_soon", location_params("hero"));
        assert_eq!(params["traffic_source"], "direct");
        assert_eq!(params["utm_source"], "(direct)");
        assert_eq!(reporter.events.borrow()[0].1, params);
    }

    #[test]
    fn test_noop_reporter_still_returns_params() {
        let tracker = Tracker::new(memory_store(), Rc::new(NoopReporter));
        let params = tracker.track("click_store", location_params("download"));
        assert_eq!(params["button_location"], "download");
        assert_eq!(params["utm_medium"], "(none)");
    }

    #[test]
    fn test_tracker_equality_is_by_identity() {
        let reporter = Rc::new(RecordingReporter::default());
        let tracker = tracker_with(reporter.clone());
        assert!(tracker == tracker.clone());
        assert!(tracker != tracker_with(reporter));
    }

    #[test]
    fn test_captured_address_tags_later_events() {
        let reporter = Rc::new(RecordingReporter::default());
        let tracker = tracker_with(reporter.clone());

        let record = tracker
            .capture_address("https://mirinae.kr/landing?utm_source=instagram&utm_medium=social")
            .unwrap();
        assert_eq!(record.entry_path, "/landing");

        // A later untagged load keeps the campaign
        let kept = tracker.capture_address("https://mirinae.kr/");
        assert_eq!(kept, Some(record));

        tracker.track("click_cta", location_params("hero"));
        let events = reporter.events.borrow();
        assert_eq!(events[0].1["utm_source"], "instagram");
        assert_eq!(events[0].1["utm_medium"], "social");
        assert_eq!(events[0].1["traffic_source"], "instagram");
        assert_eq!(tracker.source_label(), "인스타그램");
    }
}
