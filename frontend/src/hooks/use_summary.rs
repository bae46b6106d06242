use shared::SummaryData;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct SummaryState {
    pub summary: Option<SummaryData>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseSummaryResult {
    pub state: SummaryState,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_summary(api_client: &ApiClient) -> UseSummaryResult {
    let summary = use_state(|| Option::<SummaryData>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let api_client = api_client.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let summary = summary.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_summary().await {
                    Ok(response) => {
                        summary.set(response.data);
                        error.set(None);
                    }
                    Err(message) => {
                        gloo::console::error!("Failed to fetch summary:", message.clone());
                        error.set(Some(message));
                    }
                }

                loading.set(false);
            });
        })
    };

    UseSummaryResult {
        state: SummaryState {
            summary: *summary,
            loading: *loading,
            error: (*error).clone(),
        },
        refresh,
    }
}
