use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    ErrorResponse, GetCategoriesResponse, GetTransactionsResponse, LayoutData, SummaryResponse,
    TransactionFilters,
};

/// Base URL of the finance API. Overridable at build time.
const API_BASE_URL: &str = match option_env!("KAS_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// API client for the finance service backing the site.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL.
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Resolve the locale for the page at `path`. An explicit `lang`
    /// choice is persisted server-side into the locale cookie.
    pub async fn get_layout(&self, lang: Option<&str>, path: &str) -> Result<LayoutData, String> {
        let mut url = format!("{}/layout?path={}", self.base_url, path);
        if let Some(lang) = lang {
            url.push_str(&format!("&lang={}", lang));
        }

        get_json(&url, "layout").await
    }

    /// Get a page of transactions matching the given filters.
    pub async fn get_transactions(
        &self,
        filters: &TransactionFilters,
    ) -> Result<GetTransactionsResponse, String> {
        let query = filters.to_query_string();
        let url = if query.is_empty() {
            format!("{}/transactions", self.base_url)
        } else {
            format!("{}/transactions?{}", self.base_url, query)
        };

        get_json(&url, "transactions").await
    }

    /// Get a page of categories.
    pub async fn get_categories(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<GetCategoriesResponse, String> {
        let mut pairs = Vec::new();
        if let Some(page) = page {
            pairs.push(format!("page={}", page));
        }
        if let Some(limit) = limit {
            pairs.push(format!("limit={}", limit));
        }

        let url = if pairs.is_empty() {
            format!("{}/categories", self.base_url)
        } else {
            format!("{}/categories?{}", self.base_url, pairs.join("&"))
        };

        get_json(&url, "categories").await
    }

    /// Get the income/expense summary.
    pub async fn get_summary(&self) -> Result<SummaryResponse, String> {
        let url = format!("{}/transactions/summary", self.base_url);
        get_json(&url, "summary").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn get_json<T: DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    match Request::get(url).send().await {
        Ok(response) => {
            if response.ok() {
                response
                    .json::<T>()
                    .await
                    .map_err(|e| format!("Failed to parse {}: {}", what, e))
            } else {
                Err(error_message(&response).await)
            }
        }
        Err(e) => Err(format!("Failed to fetch {}: {}", what, e)),
    }
}

/// Decode an API error envelope into a displayable message, falling
/// back to the status code when the body is not the expected shape.
async fn error_message(response: &Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(envelope) => envelope.to_message(),
        Err(_) => format!("Server error {}", response.status()),
    }
}
