use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Id referenced by an in-page link, `None` for a bare `#` or other hrefs.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        warn!("Invalid selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        debug!("Could not add class {}: {:?}", class, e);
    }
}

pub fn add_body_class(class: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        add_class(&body, class);
    }
}

/// Smooth-scrolls the element with `id` to the top of the viewport.
/// Returns false when there is no such element.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(target) = by_id(id) else {
        debug!("No scroll target #{}", id);
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Failed to open {}: {:?}", url, e);
    }
}
