//! Locale precedence resolution for the page shell.
//!
//! The order is: explicit `lang` query parameter, then the `locale`
//! cookie, then the first supported `Accept-Language` entry, then the
//! default. Query and cookie values are taken verbatim; only the
//! header path filters against the supported set.

/// Locales the translation catalogs ship for.
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "id"];

/// Fallback when the request carries no usable preference.
pub const DEFAULT_LOCALE: &str = "en";

/// A resolved locale plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub locale: String,
    /// True when the `lang` query parameter chose the locale, which is
    /// what triggers cookie persistence.
    pub from_query: bool,
}

/// Resolve the locale for a request. First match wins.
pub fn resolve_locale(
    query_lang: Option<&str>,
    cookie_locale: Option<&str>,
    accept_language: Option<&str>,
) -> ResolvedLocale {
    if let Some(lang) = query_lang.filter(|lang| !lang.is_empty()) {
        return ResolvedLocale {
            locale: lang.to_string(),
            from_query: true,
        };
    }

    if let Some(cookie) = cookie_locale.filter(|cookie| !cookie.is_empty()) {
        return ResolvedLocale {
            locale: cookie.to_string(),
            from_query: false,
        };
    }

    if let Some(preferred) = preferred_locale(accept_language) {
        return ResolvedLocale {
            locale: preferred,
            from_query: false,
        };
    }

    ResolvedLocale {
        locale: DEFAULT_LOCALE.to_string(),
        from_query: false,
    }
}

/// First supported language in an `Accept-Language` header, after
/// stripping quality values and region suffixes (`en-US` counts as `en`).
fn preferred_locale(accept_language: Option<&str>) -> Option<String> {
    let header = accept_language?;

    header
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .map(|language| language.trim().to_lowercase())
        .filter_map(|language| {
            language.split('-').next().map(|base| base.to_string())
        })
        .find(|language| SUPPORTED_LOCALES.contains(&language.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_wins() {
        let resolved = resolve_locale(Some("id"), Some("en"), Some("en-US,en;q=0.9"));
        assert_eq!(resolved.locale, "id");
        assert!(resolved.from_query);
    }

    #[test]
    fn test_cookie_wins_without_query() {
        let resolved = resolve_locale(None, Some("en"), Some("id,en;q=0.9"));
        assert_eq!(resolved.locale, "en");
        assert!(!resolved.from_query);
    }

    #[test]
    fn test_header_fallback_strips_region_and_quality() {
        let resolved = resolve_locale(None, None, Some("fr-FR,id;q=0.8"));
        assert_eq!(resolved.locale, "id");
        assert!(!resolved.from_query);
    }

    #[test]
    fn test_header_region_variant_matches_base_language() {
        let resolved = resolve_locale(None, None, Some("en-GB,fr;q=0.7"));
        assert_eq!(resolved.locale, "en");
    }

    #[test]
    fn test_header_case_insensitive() {
        let resolved = resolve_locale(None, None, Some("ID-id"));
        assert_eq!(resolved.locale, "id");
    }

    #[test]
    fn test_default_when_nothing_matches() {
        let resolved = resolve_locale(None, None, Some("fr-FR,de;q=0.8"));
        assert_eq!(resolved.locale, DEFAULT_LOCALE);
        assert!(!resolved.from_query);
    }

    #[test]
    fn test_default_without_any_source() {
        let resolved = resolve_locale(None, None, None);
        assert_eq!(resolved.locale, "en");
        assert!(!resolved.from_query);
    }

    #[test]
    fn test_empty_query_and_cookie_are_ignored() {
        let resolved = resolve_locale(Some(""), Some(""), Some("id"));
        assert_eq!(resolved.locale, "id");
        assert!(!resolved.from_query);
    }

    #[test]
    fn test_query_value_taken_verbatim() {
        // The original front-end performs no validation on the explicit
        // parameter; unknown locales fall back at render time.
        let resolved = resolve_locale(Some("fr"), None, None);
        assert_eq!(resolved.locale, "fr");
        assert!(resolved.from_query);
    }
}
