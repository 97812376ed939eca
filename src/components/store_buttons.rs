use yew::prelude::*;

use crate::analytics::{location_params, Tracker};
use crate::config;
use crate::device::{Destination, Device, StoreLink};
use crate::dom;

/// Sends the visitor to `destination`. Unreleased stores open the
/// coming-soon modal, tagged with the spot that was clicked.
pub fn follow(destination: Destination, location: &'static str, on_coming_soon: &Callback<&'static str>) {
    match destination {
        Destination::External(url) => dom::open_in_new_tab(url),
        Destination::ScrollTo(id) => {
            dom::scroll_to_id(id);
        }
        Destination::ComingSoon => on_coming_soon.emit(location),
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreButtonsProps {
    pub location: &'static str,
    pub on_coming_soon: Callback<&'static str>,
}

/// App Store and Google Play badges. Each opens its own store regardless
/// of the visitor's device.
#[function_component(StoreButtons)]
pub fn store_buttons(props: &StoreButtonsProps) -> Html {
    let tracker = use_context::<Tracker>();

    let store_click = |store: Device, link: StoreLink| {
        let tracker = tracker.clone();
        let location = props.location;
        let on_coming_soon = props.on_coming_soon.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(tracker) = &tracker {
                let mut params = location_params(location);
                params.insert("store".to_string(), store.as_str().into());
                tracker.track("click_store", params);
            }
            follow(link.into(), location, &on_coming_soon);
        })
    };

    let links = config::STORE_LINKS;

    html! {
        <div class="store-buttons">
            <a
                id="app-store-btn"
                class="store-button app-store"
                href={links.ios.url}
                target="_blank"
                rel="noopener noreferrer"
                onclick={store_click(Device::Ios, links.ios)}
            >
                <span class="store-icon">{"🍎"}</span>
                <span class="store-text">
                    <small>{"Download on the"}</small>
                    {"App Store"}
                </span>
            </a>
            <a
                id="play-store-btn"
                class="store-button play-store"
                href={links.android.url}
                target="_blank"
                rel="noopener noreferrer"
                onclick={store_click(Device::Android, links.android)}
            >
                <span class="store-icon">{"▶"}</span>
                <span class="store-text">
                    <small>{"GET IT ON"}</small>
                    {"Google Play"}
                </span>
            </a>
        </div>
    }
}
