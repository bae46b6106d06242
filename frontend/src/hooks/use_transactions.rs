use shared::{Paging, Transaction, TransactionFilters};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Page size for the transaction table.
const PAGE_LIMIT: u32 = 10;

#[derive(Clone, PartialEq)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub paging: Option<Paging>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseTransactionsActions {
    pub refresh: Callback<()>,
    pub set_page: Callback<u32>,
}

pub struct UseTransactionsResult {
    pub state: TransactionsState,
    pub actions: UseTransactionsActions,
}

#[hook]
pub fn use_transactions(api_client: &ApiClient) -> UseTransactionsResult {
    let transactions = use_state(Vec::<Transaction>::new);
    let paging = use_state(|| Option::<Paging>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let page = use_state(|| 1u32);

    // Shared loader; both refresh and set_page funnel through it.
    let load_page = {
        let api_client = api_client.clone();
        let transactions = transactions.clone();
        let paging = paging.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |requested: u32, _| {
            let api_client = api_client.clone();
            let transactions = transactions.clone();
            let paging = paging.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                let filters = TransactionFilters {
                    active: Some(true),
                    page: Some(requested),
                    limit: Some(PAGE_LIMIT),
                    ..Default::default()
                };

                match api_client.get_transactions(&filters).await {
                    Ok(response) => {
                        let fetched = response
                            .data
                            .map(|data| data.transactions)
                            .unwrap_or_default();
                        transactions.set(fetched);
                        paging.set(response.paging);
                        error.set(None);
                    }
                    Err(message) => {
                        gloo::console::error!("Failed to fetch transactions:", message.clone());
                        error.set(Some(message));
                    }
                }

                loading.set(false);
            });
        })
    };

    let refresh = {
        let load_page = load_page.clone();
        let page = page.clone();

        use_callback((), move |_, _| {
            load_page.emit(*page);
        })
    };

    let set_page = {
        let load_page = load_page.clone();
        let page = page.clone();

        use_callback((), move |requested: u32, _| {
            page.set(requested);
            load_page.emit(requested);
        })
    };

    UseTransactionsResult {
        state: TransactionsState {
            transactions: (*transactions).clone(),
            paging: *paging,
            loading: *loading,
            error: (*error).clone(),
        },
        actions: UseTransactionsActions { refresh, set_page },
    }
}
