pub const DIRECT_VISIT_LABEL: &str = "직접 방문";

// Lowercase source id -> display label
const SOURCE_LABELS: &[(&str, &str)] = &[
    ("daangn", "당근마켓"),
    ("karrot", "당근마켓"),
    ("instagram", "인스타그램"),
    ("facebook", "페이스북"),
    ("naver", "네이버"),
    ("kakao", "카카오톡"),
    ("google", "구글"),
    ("youtube", "유튜브"),
    ("threads", "스레드"),
];

/// Display label for a stored `utm_source`. Unknown sources come back as-is.
pub fn label_for(source: Option<&str>) -> String {
    let Some(source) = source else {
        return DIRECT_VISIT_LABEL.to_string();
    };

    let lowered = source.to_lowercase();
    SOURCE_LABELS
        .iter()
        .find(|(id, _)| *id == lowered)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| source.to_string())
}
