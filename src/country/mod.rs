//! Country code registry: ISO codes, localized display names, aliases and
//! answer normalization.

mod aliases;
mod normalize;
mod table;

use std::collections::{HashMap, HashSet};

pub use self::normalize::normalize;
pub use self::table::{COUNTRIES, Country};

/// Locales the registry can render display names in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// German display names.
    De,
    /// English display names.
    En,
}

/// Display name of `code` in the requested locale.
///
/// Unknown codes fall back to the upper-cased code itself so callers always
/// get something renderable.
pub fn display_name(code: &str, locale: Locale) -> String {
    match lookup(code) {
        Some(country) => match locale {
            Locale::De => country.de.to_string(),
            Locale::En => country.en.to_string(),
        },
        None => code.to_uppercase(),
    }
}

/// Whether `code` (case-insensitive) is a known ISO 3166-1 alpha-2 code.
pub fn is_valid_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// Unicode flag emoji for `code` (regional indicator pair).
///
/// Inputs that are not two ASCII letters are returned unchanged.
pub fn flag_emoji(code: &str) -> String {
    let upper = code.to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) if a.is_ascii_uppercase() && b.is_ascii_uppercase() => {
            const BASE: u32 = 0x1F1E6;
            let first = char::from_u32(BASE + (a as u32 - 'A' as u32));
            let second = char::from_u32(BASE + (b as u32 - 'A' as u32));
            match (first, second) {
                (Some(first), Some(second)) => format!("{first}{second}"),
                _ => code.to_string(),
            }
        }
        _ => code.to_string(),
    }
}

/// CDN URL of a large flag image for `code`.
pub fn flag_image_url(code: &str) -> String {
    format!("https://flagcdn.com/w1024/{}.png", code.to_lowercase())
}

fn lookup(code: &str) -> Option<&'static Country> {
    let upper = code.to_uppercase();
    COUNTRIES
        .binary_search_by(|country| country.code.cmp(upper.as_str()))
        .ok()
        .map(|index| &COUNTRIES[index])
}

/// Alias-aware registry resolving user input to country codes and building
/// per-round accepted-answer sets.
///
/// The built-in alias table can be extended with deployment-specific
/// spellings from [`crate::config::AppConfig`]; override keys are normalized
/// on ingestion so config files may use natural spelling.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    alias_to_code: HashMap<String, String>,
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryRegistry {
    /// Registry with only the built-in alias table.
    pub fn new() -> Self {
        let alias_to_code = aliases::BUILT_IN
            .iter()
            .map(|(alias, code)| (alias.to_string(), code.to_string()))
            .collect();
        Self { alias_to_code }
    }

    /// Registry with the built-in aliases plus deployment overrides.
    ///
    /// Overrides pointing at unknown codes are dropped with a warning rather
    /// than poisoning lookups.
    pub fn with_aliases<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut registry = Self::new();
        for (alias, code) in overrides {
            let code = code.to_uppercase();
            if !is_valid_code(&code) {
                tracing::warn!(alias, code, "ignoring alias override for unknown country code");
                continue;
            }
            let key = normalize(&alias);
            if key.is_empty() {
                continue;
            }
            registry.alias_to_code.insert(key, code);
        }
        registry
    }

    /// Resolve free-form user input to an ISO code.
    ///
    /// Tries, in order: a bare two-letter code, the alias table, and an exact
    /// match against the normalized German/English display names.
    pub fn resolve_to_code(&self, input: &str) -> Option<String> {
        let norm = normalize(input);
        if norm.len() == 2 {
            let upper = norm.to_uppercase();
            if is_valid_code(&upper) {
                return Some(upper);
            }
        }
        if let Some(code) = self.alias_to_code.get(&norm) {
            return Some(code.clone());
        }
        COUNTRIES
            .iter()
            .find(|country| norm == normalize(country.de) || norm == normalize(country.en))
            .map(|country| country.code.to_string())
    }

    /// Normalized strings that count as a correct guess for `code`: the
    /// German and English display names plus every alias mapped to the code.
    pub fn accepted_answers(&self, code: &str) -> HashSet<String> {
        let mut set = HashSet::new();
        set.insert(normalize(&display_name(code, Locale::De)));
        set.insert(normalize(&display_name(code, Locale::En)));
        for (alias, alias_code) in &self.alias_to_code {
            if alias_code.eq_ignore_ascii_case(code) {
                set.insert(alias.clone());
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_known_and_unknown() {
        assert_eq!(display_name("DE", Locale::De), "Deutschland");
        assert_eq!(display_name("de", Locale::En), "Germany");
        assert_eq!(display_name("xx", Locale::En), "XX");
    }

    #[test]
    fn resolve_bare_code() {
        let registry = CountryRegistry::new();
        assert_eq!(registry.resolve_to_code("de").as_deref(), Some("DE"));
        assert_eq!(registry.resolve_to_code(" US ").as_deref(), Some("US"));
        assert_eq!(registry.resolve_to_code("zq"), None);
    }

    #[test]
    fn resolve_via_alias() {
        let registry = CountryRegistry::new();
        assert_eq!(registry.resolve_to_code("UK").as_deref(), Some("GB"));
        assert_eq!(registry.resolve_to_code("Holland").as_deref(), Some("NL"));
        assert_eq!(registry.resolve_to_code("U.S.A.").as_deref(), Some("US"));
    }

    #[test]
    fn resolve_via_localized_names() {
        let registry = CountryRegistry::new();
        assert_eq!(registry.resolve_to_code("Deutschland").as_deref(), Some("DE"));
        assert_eq!(registry.resolve_to_code("germany").as_deref(), Some("DE"));
        assert_eq!(registry.resolve_to_code("Elfenbeinküste").as_deref(), Some("CI"));
        assert_eq!(registry.resolve_to_code("Atlantis"), None);
    }

    #[test]
    fn accepted_answers_cover_names_and_aliases() {
        let registry = CountryRegistry::new();
        let answers = registry.accepted_answers("US");
        assert!(answers.contains("united states"));
        assert!(answers.contains("vereinigte staaten"));
        assert!(answers.contains("usa"));
        assert!(answers.contains("amerika"));
    }

    #[test]
    fn alias_overrides_merge_and_validate() {
        let registry = CountryRegistry::with_aliases([
            ("Doichland".to_string(), "de".to_string()),
            ("nowhere".to_string(), "ZZ".to_string()),
        ]);
        assert_eq!(registry.resolve_to_code("doichland").as_deref(), Some("DE"));
        assert_eq!(registry.resolve_to_code("nowhere"), None);
        assert!(registry.accepted_answers("DE").contains("doichland"));
    }

    #[test]
    fn flag_emoji_maps_to_regional_indicators() {
        assert_eq!(flag_emoji("DE"), "\u{1F1E9}\u{1F1EA}");
        assert_eq!(flag_emoji("us"), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(flag_emoji("???"), "???");
    }

    #[test]
    fn flag_image_url_is_lowercased() {
        assert_eq!(flag_image_url("DE"), "https://flagcdn.com/w1024/de.png");
    }
}
