//! Embedded locale tables.
//!
//! Each table is a plain-text file under `src/dictionaries/` in the format
//! read by [`Dictionary::load`](crate::Dictionary::load).

static BUILTIN: &[(&str, &str)] = &[
    ("de", include_str!("dictionaries/de.txt")),
    ("en", include_str!("dictionaries/en.txt")),
    ("es", include_str!("dictionaries/es.txt")),
    ("fr", include_str!("dictionaries/fr.txt")),
    ("he", include_str!("dictionaries/he.txt")),
];

/// Identifiers of the embedded locale tables.
pub fn available_locales() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(locale, _)| *locale)
}

/// Source text of an embedded locale table. Identifiers are matched
/// case-insensitively.
pub(crate) fn source(locale: &str) -> Option<&'static str> {
    BUILTIN.iter().find(|(name, _)| name.eq_ignore_ascii_case(locale)).map(|(_, source)| *source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert!(source("EN").is_some());
        assert!(source("he").is_some());
        assert!(source("klingon").is_none());
        assert_eq!(available_locales().collect::<Vec<_>>(), ["de", "en", "es", "fr", "he"]);
    }
}
