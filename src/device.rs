use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Ios,
    Android,
    Desktop,
}

impl Device {
    /// Classifies a user agent. `has_ms_stream` is the legacy IE11 marker,
    /// whose user agent pretends to be an iPhone.
    pub fn detect(user_agent: &str, has_ms_stream: bool) -> Self {
        let apple_mobile = ["iPad", "iPhone", "iPod"]
            .iter()
            .any(|model| user_agent.contains(model));
        if apple_mobile && !has_ms_stream {
            return Device::Ios;
        }

        if user_agent.to_lowercase().contains("android") {
            return Device::Android;
        }

        Device::Desktop
    }

    pub fn current() -> Self {
        let Some(window) = web_sys::window() else {
            return Device::Desktop;
        };
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let has_ms_stream = Reflect::has(&window, &JsValue::from_str("MSStream")).unwrap_or(false);
        Self::detect(&user_agent, has_ms_stream)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Device::Ios => "ios",
            Device::Android => "android",
            Device::Desktop => "desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLink {
    pub url: &'static str,
    /// False while the listing is a placeholder.
    pub launched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLinks {
    pub ios: StoreLink,
    pub android: StoreLink,
}

/// Where a call-to-action click takes the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    External(&'static str),
    ScrollTo(&'static str),
    ComingSoon,
}

impl From<StoreLink> for Destination {
    fn from(link: StoreLink) -> Self {
        if link.launched {
            Destination::External(link.url)
        } else {
            Destination::ComingSoon
        }
    }
}

pub fn destination_for(device: Device, links: &StoreLinks) -> Destination {
    match device {
        Device::Ios => links.ios.into(),
        Device::Android => links.android.into(),
        Device::Desktop => Destination::ScrollTo(config::DOWNLOAD_SECTION_ID),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
    const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
    const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; SM-S918N) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
    const MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

    const LINKS: StoreLinks = StoreLinks {
        ios: StoreLink { url: "https://apps.apple.com/app/id1", launched: true },
        android: StoreLink { url: "https://play.google.com/store/apps/details?id=x", launched: true },
    };

    #[test]
    fn test_detect_devices() {
        assert_eq!(Device::detect(IPHONE, false), Device::Ios);
        assert_eq!(Device::detect(IPAD, false), Device::Ios);
        assert_eq!(Device::detect(ANDROID, false), Device::Android);
        assert_eq!(Device::detect(MAC, false), Device::Desktop);
        assert_eq!(Device::detect("", false), Device::Desktop);
    }

    #[test]
    fn test_ms_stream_is_not_ios() {
        let ie_mobile = "Mozilla/5.0 (Windows Phone 8.1; ARM; Trident/7.0; Touch; rv:11.0; IEMobile/11.0) like iPhone OS 7_0_3 Mac OS X";
        assert_eq!(Device::detect(ie_mobile, true), Device::Desktop);
    }

    #[test]
    fn test_apple_models_match_case_sensitively() {
        assert_eq!(Device::detect("custom-iphone-bot", false), Device::Desktop);
        assert_eq!(Device::detect("ANDROID-bot", false), Device::Android);
    }

    #[test]
    fn test_destinations() {
        assert_eq!(destination_for(Device::Ios, &LINKS), Destination::External("https://apps.apple.com/app/id1"));
        assert_eq!(
            destination_for(Device::Android, &LINKS),
            Destination::External("https://play.google.com/store/apps/details?id=x")
        );
        assert_eq!(destination_for(Device::Desktop, &LINKS), Destination::ScrollTo("download"));
    }

    #[test]
    fn test_unlaunched_store_shows_coming_soon() {
        let links = StoreLinks {
            ios: StoreLink { launched: false, ..LINKS.ios },
            ..LINKS
        };
        assert_eq!(destination_for(Device::Ios, &links), Destination::ComingSoon);
        assert_eq!(destination_for(Device::Ios, &config::STORE_LINKS), Destination::ComingSoon);
        assert!(matches!(destination_for(Device::Android, &config::STORE_LINKS), Destination::External(_)));
    }

    #[test]
    fn test_launching_ios_opens_the_store() {
        let links = StoreLinks {
            ios: StoreLink { launched: true, ..config::STORE_LINKS.ios },
            ..config::STORE_LINKS
        };
        assert_eq!(
            destination_for(Device::Ios, &links),
            Destination::External(config::STORE_LINKS.ios.url)
        );
    }
}
