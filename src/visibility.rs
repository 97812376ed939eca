use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

pub struct VisibilityChange {
    pub target: Element,
    pub visible: bool,
}

/// Returned by the change handler: keep watching the target or let it go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Keep,
    Stop,
}

/// Reveal-on-scroll policy: once an element has shown up it stays revealed.
pub fn reveal_once(visible: bool) -> Observation {
    if visible {
        Observation::Stop
    } else {
        Observation::Keep
    }
}

/// Viewport intersection reduced to one "visibility changed" callback.
/// Disconnects when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _on_entries: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new<F>(options: ObserverOptions, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(&VisibilityChange) -> Observation + 'static,
    {
        let on_entries = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let change = VisibilityChange {
                    target: entry.target(),
                    visible: entry.is_intersecting(),
                };
                if on_change(&change) == Observation::Stop {
                    observer.unobserve(&change.target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _on_entries: on_entries,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    /// Observes every element in the document matching `selector`.
    pub fn observe_all(&self, selector: &str) -> usize {
        let elements = crate::dom::query_all(selector);
        for element in &elements {
            self.observe(element);
        }
        debug!("Observing {} elements matching {}", elements.len(), selector);
        elements.len()
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
