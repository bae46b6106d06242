//! Server-side layout loader.
//!
//! Runs once per shell request: resolves the locale, persists an
//! explicit choice into the `locale` cookie, and hands the resolved
//! locale plus the request path back to the rendering layer.

use axum::{
    extract::Query,
    http::{header, HeaderMap, Uri},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use shared::LayoutData;
use tracing::debug;

use crate::locale::resolve_locale;

/// Name of the cookie the locale choice is persisted under.
pub const LOCALE_COOKIE: &str = "locale";

const ONE_YEAR: time::Duration = time::Duration::days(365);

/// Query parameters the layout loader understands.
#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    /// Explicit locale override, persisted into the cookie.
    pub lang: Option<String>,
    /// Path of the page the shell is rendering, when the client
    /// supplies it. Defaults to the request path.
    pub path: Option<String>,
}

/// Axum handler for `GET /api/layout`.
pub async fn layout(
    Query(query): Query<LayoutQuery>,
    jar: CookieJar,
    headers: HeaderMap,
    uri: Uri,
) -> (CookieJar, Json<LayoutData>) {
    let cookie_locale = jar.get(LOCALE_COOKIE).map(|cookie| cookie.value());
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let resolved = resolve_locale(query.lang.as_deref(), cookie_locale, accept_language);
    debug!("resolved locale '{}' for {}", resolved.locale, uri.path());

    let jar = if resolved.from_query {
        jar.add(locale_cookie(resolved.locale.clone()))
    } else {
        jar
    };

    let pathname = query.path.unwrap_or_else(|| uri.path().to_string());

    (
        jar,
        Json(LayoutData {
            locale: resolved.locale,
            pathname,
        }),
    )
}

/// One-year, site-wide locale cookie.
fn locale_cookie(locale: String) -> Cookie<'static> {
    Cookie::build((LOCALE_COOKIE, locale))
        .path("/")
        .max_age(ONE_YEAR)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route("/api/layout", get(layout))
    }

    async fn layout_data(response: axum::response::Response) -> LayoutData {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("layout data")
    }

    #[tokio::test]
    async fn test_lang_query_resolves_and_sets_cookie() {
        let request = Request::builder()
            .uri("/api/layout?lang=id")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("locale cookie should be set")
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("locale=id"));
        // One year in seconds.
        assert!(set_cookie.contains("Max-Age=31536000"));
        assert!(set_cookie.contains("Path=/"));

        let data = layout_data(response).await;
        assert_eq!(data.locale, "id");
    }

    #[tokio::test]
    async fn test_cookie_resolves_without_persisting_again() {
        let request = Request::builder()
            .uri("/api/layout")
            .header(header::COOKIE, "locale=en")
            .header(header::ACCEPT_LANGUAGE, "id")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let data = layout_data(response).await;
        assert_eq!(data.locale, "en");
    }

    #[tokio::test]
    async fn test_accept_language_header_fallback() {
        let request = Request::builder()
            .uri("/api/layout")
            .header(header::ACCEPT_LANGUAGE, "fr-FR,id;q=0.8")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let data = layout_data(response).await;
        assert_eq!(data.locale, "id");
    }

    #[tokio::test]
    async fn test_default_locale_without_any_preference() {
        let request = Request::builder()
            .uri("/api/layout")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let data = layout_data(response).await;
        assert_eq!(data.locale, "en");
    }

    #[tokio::test]
    async fn test_pathname_from_path_param() {
        let request = Request::builder()
            .uri("/api/layout?path=/transactions")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let data = layout_data(response).await;
        assert_eq!(data.pathname, "/transactions");
    }

    #[tokio::test]
    async fn test_pathname_defaults_to_request_path() {
        let request = Request::builder()
            .uri("/api/layout?lang=en")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let data = layout_data(response).await;
        assert_eq!(data.pathname, "/api/layout");
    }
}
