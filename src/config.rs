use log::Level;

use crate::device::{StoreLink, StoreLinks};
use crate::visibility::ObserverOptions;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// sessionStorage key holding the serialized attribution record.
pub const ATTRIBUTION_STORAGE_KEY: &str = "mirinae_attribution";

pub const STORE_LINKS: StoreLinks = StoreLinks {
    // Placeholder listing until the App Store release. Replace the id and set
    // `launched: true` to open the store directly instead of the modal.
    ios: StoreLink {
        url: "https://apps.apple.com/app/id000000000",
        launched: false,
    },
    android: StoreLink {
        url: "https://play.google.com/store/apps/details?id=com.likeflameyungun.mirinae_drug_frontend",
        launched: true,
    },
};

pub const DOWNLOAD_SECTION_ID: &str = "download";
pub const HERO_SECTION_ID: &str = "hero";

pub const REVEAL_CLASS: &str = "animate-on-scroll";
pub const VISIBLE_CLASS: &str = "visible";
pub const HIDDEN_CLASS: &str = "hidden";
pub const LOADED_CLASS: &str = "loaded";

// Trigger 100px before the element reaches the bottom edge, once 10% shows
pub const REVEAL_OBSERVER: ObserverOptions = ObserverOptions {
    root_margin: "0px 0px -100px 0px",
    threshold: 0.1,
};

pub const HERO_OBSERVER: ObserverOptions = ObserverOptions {
    root_margin: "0px",
    threshold: 0.0,
};

/// Delay between consecutive hero elements on first load.
pub const HERO_STAGGER_MS: u32 = 100;
