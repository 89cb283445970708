const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("JP", "Japan"),
    ("CN", "China"),
    ("IN", "India"),
    ("BR", "Brazil"),
    ("AE", "UAE"),
    ("PK", "Pakistan"),
    ("SA", "Saudi Arabia"),
    ("IT", "Italy"),
    ("ES", "Spain"),
    ("NL", "Netherlands"),
    ("RU", "Russia"),
    ("KR", "South Korea"),
    ("SG", "Singapore"),
    ("MY", "Malaysia"),
];

/// English name for an ISO 3166 alpha-2 code; unknown codes are returned as-is.
#[must_use]
pub fn country_name(code: &str) -> &str {
    COUNTRY_NAMES
        .iter()
        .find_map(|(candidate, name)| (*candidate == code).then_some(*name))
        .unwrap_or(code)
}
