use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use super::enrich::{enrich, EventParams};
use super::error::AttributionError;
use super::labels::label_for;
use super::record::{address_path, parse_attribution, AttributionRecord};
use super::storage::{browser_session_storage, SessionStorage};
use crate::config;

/// Owns the one attribution record of the browsing session.
///
/// `capture_or_retrieve` is the only writer and runs once per page load;
/// everything else only reads.
pub struct AttributionStore {
    storage: Rc<dyn SessionStorage>,
    key: String,
}

impl AttributionStore {
    pub fn new(storage: Rc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn browser() -> Self {
        Self::new(browser_session_storage(), config::ATTRIBUTION_STORAGE_KEY)
    }

    fn try_load(&self) -> Result<Option<AttributionRecord>, AttributionError> {
        match self.storage.read(&self.key)? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(AttributionError::Decode),
            None => Ok(None),
        }
    }

    fn save(&self, record: &AttributionRecord) -> Result<(), AttributionError> {
        let json = serde_json::to_string(record).map_err(AttributionError::Encode)?;
        self.storage.write(&self.key, &json)
    }

    /// The stored record. Unreadable or malformed entries count as absent.
    pub fn load(&self) -> Option<AttributionRecord> {
        match self.try_load() {
            Ok(record) => record,
            Err(e) => {
                warn!("Ignoring stored attribution: {}", e);
                None
            }
        }
    }

    pub fn capture_or_retrieve(&self, current_address: &str) -> Option<AttributionRecord> {
        self.capture_or_retrieve_at(current_address, Utc::now())
    }

    /// Replaces the stored record when `current_address` carries campaign
    /// parameters, otherwise hands back whatever is stored untouched.
    pub fn capture_or_retrieve_at(
        &self,
        current_address: &str,
        now: DateTime<Utc>,
    ) -> Option<AttributionRecord> {
        let Some(raw) = parse_attribution(current_address) else {
            return self.load();
        };

        let record = AttributionRecord::capture(&raw, &address_path(current_address), now);
        match self.save(&record) {
            Ok(()) => info!(
                "Captured attribution from {} (source: {})",
                record.entry_path,
                record.utm_source.as_deref().unwrap_or("-")
            ),
            // The record still tags events for the rest of this page
            Err(e) => warn!("Failed to persist attribution: {}", e),
        }
        Some(record)
    }

    pub fn enrich_event(&self, event_name: &str, base_params: &EventParams) -> EventParams {
        let record = self.load();
        debug!(
            "Enriching {} with {} attribution",
            event_name,
            if record.is_some() { "stored" } else { "direct" }
        );
        enrich(record.as_ref(), base_params)
    }

    pub fn source_label(&self) -> String {
        let record = self.load();
        label_for(record.as_ref().and_then(|r| r.utm_source.as_deref()))
    }
}
