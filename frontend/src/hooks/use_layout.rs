use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::i18n;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct LayoutState {
    pub locale: String,
    pub pathname: String,
}

/// Shell bootstrap mirroring the server-side layout loader.
///
/// Starts from client-side detection so the first paint is already
/// localized, then asks the server to run the full resolution chain;
/// the server also persists an explicit `?lang=` choice into the
/// locale cookie.
#[hook]
pub fn use_layout(api_client: &ApiClient) -> LayoutState {
    let locale = use_state(i18n::client_locale);
    let pathname = use_state(i18n::client_pathname);

    {
        let api_client = api_client.clone();
        let locale = locale.clone();
        let pathname = pathname.clone();

        use_effect_with((), move |_| {
            let path = (*pathname).clone();

            spawn_local(async move {
                let lang = i18n::client_lang_param();

                match api_client.get_layout(lang.as_deref(), &path).await {
                    Ok(layout) => {
                        locale.set(layout.locale);
                        pathname.set(layout.pathname);
                    }
                    Err(message) => {
                        gloo::console::error!("Failed to load layout:", message);
                    }
                }
            });
            || ()
        });
    }

    LayoutState {
        locale: (*locale).clone(),
        pathname: (*pathname).clone(),
    }
}
