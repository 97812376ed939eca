use serde_json::{Map, Value};

use super::record::{AttributionRecord, UtmParam};

/// Parameters handed to the analytics tag: string keys, primitive values.
pub type EventParams = Map<String, Value>;

pub const DIRECT_TRAFFIC: &str = "direct";

fn default_for(param: UtmParam) -> &'static str {
    match param {
        UtmParam::Source => "(direct)",
        UtmParam::Medium => "(none)",
        UtmParam::Campaign => "(not set)",
        UtmParam::Term | UtmParam::Content => "",
    }
}

/// Copies `base` and adds the `utm_*` fields plus `traffic_source`.
/// Missing values fall back to direct-traffic defaults field by field.
pub fn enrich(record: Option<&AttributionRecord>, base: &EventParams) -> EventParams {
    let mut params = base.clone();

    for param in UtmParam::ALL {
        let value = record
            .and_then(|r| r.get(param))
            .unwrap_or_else(|| default_for(param));
        params.insert(param.key().to_string(), Value::from(value));
    }

    let traffic_source = record
        .and_then(|r| r.utm_source.as_deref())
        .unwrap_or(DIRECT_TRAFFIC);
    params.insert("traffic_source".to_string(), Value::from(traffic_source));

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(source: Option<&str>, campaign: Option<&str>) -> AttributionRecord {
        AttributionRecord {
            utm_source: source.map(str::to_string),
            utm_medium: None,
            utm_campaign: campaign.map(str::to_string),
            utm_term: None,
            utm_content: None,
            captured_at: "2026-03-14T09:30:00.000Z".to_string(),
            entry_path: "/landing".to_string(),
        }
    }

    fn as_params(value: Value) -> EventParams {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_no_record_uses_direct_defaults() {
        let params = enrich(None, &EventParams::new());
        assert_eq!(
            Value::Object(params),
            json!({
                "utm_source": "(direct)",
                "utm_medium": "(none)",
                "utm_campaign": "(not set)",
                "utm_term": "",
                "utm_content": "",
                "traffic_source": "direct",
            })
        );
    }

    #[test]
    fn test_source_only_record() {
        let stored = record(Some("daangn"), None);
        let params = enrich(Some(&stored), &EventParams::new());
        assert_eq!(params["traffic_source"], "daangn");
        assert_eq!(params["utm_source"], "daangn");
        assert_eq!(params["utm_medium"], "(none)");
        assert_eq!(params["utm_campaign"], "(not set)");
    }

    #[test]
    fn test_record_without_source_counts_as_direct() {
        let stored = record(None, Some("spring"));
        let params = enrich(Some(&stored), &EventParams::new());
        assert_eq!(params["utm_source"], "(direct)");
        assert_eq!(params["utm_campaign"], "spring");
        assert_eq!(params["traffic_source"], "direct");
    }

    #[test]
    fn test_base_params_are_kept() {
        let base = as_params(json!({ "button_location": "hero", "step": 2, "first_visit": true }));
        let params = enrich(None, &base);
        assert_eq!(params["button_location"], "hero");
        assert_eq!(params["step"], 2);
        assert_eq!(params["first_visit"], true);
        assert_eq!(params.len(), base.len() + 6);
    }

    #[test]
    fn test_attribution_fields_override_base() {
        let base = as_params(json!({ "utm_source": "spoofed", "traffic_source": "spoofed" }));
        let stored = record(Some("instagram"), None);
        let params = enrich(Some(&stored), &base);
        assert_eq!(params["utm_source"], "instagram");
        assert_eq!(params["traffic_source"], "instagram");
    }
}
