use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// The five campaign parameters recognized in the landing address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UtmParam {
    Source,
    Medium,
    Campaign,
    Term,
    Content,
}

impl UtmParam {
    pub const ALL: [UtmParam; 5] = [
        UtmParam::Source,
        UtmParam::Medium,
        UtmParam::Campaign,
        UtmParam::Term,
        UtmParam::Content,
    ];

    pub fn key(self) -> &'static str {
        match self {
            UtmParam::Source => "utm_source",
            UtmParam::Medium => "utm_medium",
            UtmParam::Campaign => "utm_campaign",
            UtmParam::Term => "utm_term",
            UtmParam::Content => "utm_content",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.key() == key)
    }
}

/// Campaign parameters found in an address, empty values already dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttribution(BTreeMap<UtmParam, String>);

impl RawAttribution {
    pub fn get(&self, param: UtmParam) -> Option<&str> {
        self.0.get(&param).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scans the query string of `current_address` for campaign parameters.
///
/// Like `URLSearchParams.get`, only the first occurrence of a name counts,
/// so `?utm_source=&utm_source=x` yields no source. Returns `None` when the
/// address can't be parsed or carries no non-empty recognized parameter.
pub fn parse_attribution(current_address: &str) -> Option<RawAttribution> {
    let url = Url::parse(current_address).ok()?;

    let mut first_seen: BTreeMap<UtmParam, String> = BTreeMap::new();
    for (key, value) in url.query_pairs() {
        if let Some(param) = UtmParam::from_key(&key) {
            if let Entry::Vacant(slot) = first_seen.entry(param) {
                slot.insert(value.into_owned());
            }
        }
    }
    first_seen.retain(|_, value| !value.is_empty());

    if first_seen.is_empty() {
        None
    } else {
        Some(RawAttribution(first_seen))
    }
}

/// Path component of an address, `/` when it can't be parsed.
pub fn address_path(current_address: &str) -> String {
    Url::parse(current_address)
        .map(|url| url.path().to_string())
        .unwrap_or_else(|_| "/".to_string())
}

/// Session-persisted snapshot of the campaign that brought the visitor in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    pub captured_at: String,
    pub entry_path: String,
}

impl AttributionRecord {
    pub fn capture(raw: &RawAttribution, entry_path: &str, captured_at: DateTime<Utc>) -> Self {
        let field = |param| raw.get(param).map(str::to_string);
        Self {
            utm_source: field(UtmParam::Source),
            utm_medium: field(UtmParam::Medium),
            utm_campaign: field(UtmParam::Campaign),
            utm_term: field(UtmParam::Term),
            utm_content: field(UtmParam::Content),
            // Same shape as Date.prototype.toISOString
            captured_at: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            entry_path: entry_path.to_string(),
        }
    }

    pub fn get(&self, param: UtmParam) -> Option<&str> {
        let value = match param {
            UtmParam::Source => &self.utm_source,
            UtmParam::Medium => &self.utm_medium,
            UtmParam::Campaign => &self.utm_campaign,
            UtmParam::Term => &self.utm_term,
            UtmParam::Content => &self.utm_content,
        };
        value.as_deref()
    }
}
