//! Static reference tables from the GNews API documentation.
//!
//! These are process-wide and read-only: validation and the catalog
//! resources both derive from them, nothing ever writes to them.

/// Two-letter language codes accepted by the `lang` parameter.
pub static SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("zh", "Chinese"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("fr", "French"),
    ("de", "German"),
    ("el", "Greek"),
    ("hi", "Hindi"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("no", "Norwegian"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("es", "Spanish"),
    ("sv", "Swedish"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("uk", "Ukrainian"),
];

/// Two-letter country codes accepted by the `country` parameter.
pub static SUPPORTED_COUNTRIES: &[(&str, &str)] = &[
    ("au", "Australia"),
    ("br", "Brazil"),
    ("ca", "Canada"),
    ("cn", "China"),
    ("eg", "Egypt"),
    ("fr", "France"),
    ("de", "Germany"),
    ("gr", "Greece"),
    ("hk", "Hong Kong"),
    ("in", "India"),
    ("ie", "Ireland"),
    ("it", "Italy"),
    ("jp", "Japan"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("pk", "Pakistan"),
    ("pe", "Peru"),
    ("ph", "Philippines"),
    ("pt", "Portugal"),
    ("ro", "Romania"),
    ("ru", "Russian Federation"),
    ("sg", "Singapore"),
    ("es", "Spain"),
    ("se", "Sweden"),
    ("ch", "Switzerland"),
    ("tw", "Taiwan"),
    ("ua", "Ukraine"),
    ("gb", "United Kingdom"),
    ("us", "United States"),
];

/// Fixed category set for `get_top_headlines`, in documentation order.
pub static CATEGORIES: &[&str] = &[
    "general",
    "world",
    "nation",
    "business",
    "technology",
    "entertainment",
    "sports",
    "science",
    "health",
];

pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

pub fn is_supported_country(code: &str) -> bool {
    SUPPORTED_COUNTRIES.iter().any(|(c, _)| *c == code)
}

pub fn is_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

/// Comma-joined language codes, for validation messages and catalogs.
pub fn language_codes() -> String {
    join_codes(SUPPORTED_LANGUAGES)
}

/// Comma-joined country codes, for validation messages and catalogs.
pub fn country_codes() -> String {
    join_codes(SUPPORTED_COUNTRIES)
}

pub fn category_names() -> String {
    CATEGORIES.join(", ")
}

fn join_codes(table: &[(&str, &str)]) -> String {
    table
        .iter()
        .map(|(c, _)| *c)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_members() {
        assert!(is_supported_language("en"));
        assert!(is_supported_language("uk"));
        assert!(is_supported_country("us"));
        assert!(is_supported_country("gb"));
        assert!(is_category("technology"));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(!is_supported_language("xx"));
        assert!(!is_supported_country("zz"));
        assert!(!is_category("finance"));
    }

    #[test]
    fn keys_are_unique_two_letter_lowercase() {
        for table in [SUPPORTED_LANGUAGES, SUPPORTED_COUNTRIES] {
            let mut seen = std::collections::HashSet::new();
            for (code, name) in table {
                assert!(seen.insert(*code), "duplicate code {code}");
                assert_eq!(code.len(), 2);
                assert!(code.chars().all(|c| c.is_ascii_lowercase()));
                assert!(!name.is_empty());
            }
        }
    }

    #[test]
    fn joined_codes_start_with_table_order() {
        assert!(language_codes().starts_with("ar, zh, nl, en"));
        assert!(country_codes().starts_with("au, br, ca"));
        assert!(category_names().starts_with("general, world"));
    }
}
