//! Site metadata and navigation configuration.

/// Static description of the site used for the header and meta tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub url: &'static str,
    pub og_image: &'static str,
    pub twitter: &'static str,
    pub github: &'static str,
    pub google_verification: &'static str,
    pub yandex_verification: &'static str,
    pub home: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    name: "Kas Butuh Kidul",
    logo: "/favicon.svg",
    description: "Kas Butuh Kidul is a personal finance management app designed to help you track your income and expenses effectively.",
    keywords: "finance, income, expenses, budgeting",
    url: "https://kas.butuhkidul.my.id",
    og_image: "https://kas.butuhkidul.my.id/og.png",
    twitter: "https://twitter.com/butuhkidul",
    github: "https://github.com/savioruz/kas-butuhkidul",
    google_verification: "",
    yandex_verification: "",
    home: "https://butuhkidul.my.id",
};

/// Base URL external navigation links are derived from. Overridable at
/// build time for staging deployments.
const BASE_URL: &str = match option_env!("KAS_BASE_URL") {
    Some(url) => url,
    None => "https://butuhkidul.my.id/",
};

/// A single entry in the site navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: String,
    pub label: &'static str,
    /// Key into the `navigation` translation namespace.
    pub translation_key: &'static str,
}

/// Navigation entries rendered by the header.
pub fn navigation() -> Vec<NavItem> {
    let domain = trim_domain(BASE_URL);

    vec![NavItem {
        href: format!("https://dash.{}", domain),
        label: "Dashboard",
        translation_key: "dashboard",
    }]
}

/// Strip the scheme and any trailing slash from a base URL.
fn trim_domain(base_url: &str) -> &str {
    let trimmed = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .unwrap_or(base_url);
    trimmed.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_domain_strips_scheme_and_slash() {
        assert_eq!(trim_domain("https://butuhkidul.my.id/"), "butuhkidul.my.id");
        assert_eq!(trim_domain("http://localhost:8080"), "localhost:8080");
        assert_eq!(trim_domain("butuhkidul.my.id"), "butuhkidul.my.id");
    }

    #[test]
    fn test_navigation_links_to_dashboard_subdomain() {
        let items = navigation();
        assert_eq!(items.len(), 1);
        assert!(items[0].href.starts_with("https://dash."));
        assert_eq!(items[0].translation_key, "dashboard");
    }
}
