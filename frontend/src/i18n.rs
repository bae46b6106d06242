//! Translation bootstrap.
//!
//! Catalogs are embedded at compile time, one JSON file per locale and
//! namespace, and looked up as `"namespace.key"`. Unknown locales and
//! missing keys fall back to the default locale, then to the key
//! itself so a broken catalog never blanks the UI.

use std::collections::BTreeMap;

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Locales the catalogs ship for.
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "id"];

/// Locale used when no preference is found.
pub const DEFAULT_LOCALE: &str = "en";

const CATALOGS: [(&str, &str, &str); 4] = [
    ("en", "common", include_str!("../i18n/en/common.json")),
    ("en", "navigation", include_str!("../i18n/en/navigation.json")),
    ("id", "common", include_str!("../i18n/id/common.json")),
    ("id", "navigation", include_str!("../i18n/id/navigation.json")),
];

/// Locale display names, shared by every locale so the language
/// switcher can always label its options.
const LANG_CATALOG: &str = include_str!("../i18n/lang.json");

/// Flattened translation tables keyed by locale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translations {
    tables: BTreeMap<String, BTreeMap<String, String>>,
}

impl Translations {
    /// Parse the embedded catalogs.
    pub fn load() -> Self {
        let mut translations = Self::default();

        for (locale, namespace, raw) in CATALOGS {
            translations.insert_catalog(locale, namespace, raw);
        }
        for locale in SUPPORTED_LOCALES {
            translations.insert_catalog(locale, "lang", LANG_CATALOG);
        }

        translations
    }

    fn insert_catalog(&mut self, locale: &str, namespace: &str, raw: &str) {
        let entries: BTreeMap<String, String> = match serde_json::from_str(raw) {
            Ok(entries) => entries,
            Err(err) => {
                gloo::console::error!(format!(
                    "invalid {}/{} catalog: {}",
                    locale, namespace, err
                ));
                return;
            }
        };

        let table = self.tables.entry(locale.to_string()).or_default();
        for (key, value) in entries {
            table.insert(format!("{}.{}", namespace, key), value);
        }
    }

    /// Look up `"namespace.key"` for a locale.
    pub fn get(&self, locale: &str, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(DEFAULT_LOCALE, key))
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<String> {
        self.tables.get(locale)?.get(key).cloned()
    }
}

/// Client-side locale detection for the shell: explicit `lang` query
/// parameter, then the `locale` cookie, then the default. The
/// Accept-Language step runs server-side where the header is visible.
pub fn detect_locale(search: &str, cookies: &str) -> String {
    query_param(search, "lang")
        .filter(|lang| !lang.is_empty())
        .or_else(|| cookie_value(cookies, "locale").filter(|locale| !locale.is_empty()))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Locale for the current browser context.
pub fn client_locale() -> String {
    let Some(window) = web_sys::window() else {
        return DEFAULT_LOCALE.to_string();
    };

    let search = window.location().search().unwrap_or_default();
    let cookies = window
        .document()
        .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
        .and_then(|document| document.cookie().ok())
        .unwrap_or_default();

    detect_locale(&search, &cookies)
}

/// Explicit `lang` parameter of the current page URL, when present.
pub fn client_lang_param() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    query_param(&search, "lang").filter(|lang| !lang.is_empty())
}

/// Path of the current page, handed to the layout loader.
pub fn client_pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_parse() {
        let translations = Translations::load();
        assert_eq!(translations.get("en", "common.transactions"), "Transactions");
        assert_eq!(translations.get("id", "common.transactions"), "Transaksi");
        assert_eq!(translations.get("id", "navigation.dashboard"), "Dasbor");
    }

    #[test]
    fn test_lang_catalog_available_in_every_locale() {
        let translations = Translations::load();
        assert_eq!(translations.get("en", "lang.id"), "Bahasa Indonesia");
        assert_eq!(translations.get("id", "lang.en"), "English");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_default() {
        let translations = Translations::load();
        assert_eq!(translations.get("fr", "common.transactions"), "Transactions");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let translations = Translations::load();
        assert_eq!(translations.get("en", "common.nope"), "common.nope");
    }

    #[test]
    fn test_detect_locale_prefers_query() {
        assert_eq!(detect_locale("?lang=id", "locale=en"), "id");
    }

    #[test]
    fn test_detect_locale_reads_cookie() {
        assert_eq!(detect_locale("", "session=abc; locale=id"), "id");
    }

    #[test]
    fn test_detect_locale_defaults() {
        assert_eq!(detect_locale("", ""), "en");
        assert_eq!(detect_locale("?lang=", "locale="), "en");
    }

    #[test]
    fn test_query_param_among_others() {
        assert_eq!(
            query_param("?page=2&lang=id&limit=10", "lang"),
            Some("id".to_string())
        );
        assert_eq!(query_param("?page=2", "lang"), None);
    }
}
