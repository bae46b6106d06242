use shared::Category;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Categories are few; one page covers them all.
const CATEGORY_LIMIT: u32 = 50;

#[derive(Clone, PartialEq)]
pub struct CategoriesState {
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseCategoriesResult {
    pub state: CategoriesState,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_categories(api_client: &ApiClient) -> UseCategoriesResult {
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let api_client = api_client.clone();
        let categories = categories.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let categories = categories.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_categories(Some(1), Some(CATEGORY_LIMIT)).await {
                    Ok(response) => {
                        let fetched = response
                            .data
                            .map(|data| data.categories)
                            .unwrap_or_default();
                        categories.set(fetched);
                        error.set(None);
                    }
                    Err(message) => {
                        gloo::console::error!("Failed to fetch categories:", message.clone());
                        error.set(Some(message));
                    }
                }

                loading.set(false);
            });
        })
    };

    UseCategoriesResult {
        state: CategoriesState {
            categories: (*categories).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        refresh,
    }
}
