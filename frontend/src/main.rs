use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod i18n;
mod services;

use components::header::Header;
use components::summary_cards::SummaryCards;
use components::transaction_table::TransactionTable;
use config::SITE;
use hooks::use_categories::use_categories;
use hooks::use_layout::use_layout;
use hooks::use_summary::use_summary;
use hooks::use_transactions::use_transactions;
use i18n::Translations;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let translations = use_memo((), |_| Translations::load());

    let layout = use_layout(&api_client);
    let summary = use_summary(&api_client);
    let transactions = use_transactions(&api_client);
    let categories = use_categories(&api_client);

    let locale = layout.locale;

    // Initial load, once per mount.
    {
        let refresh_summary = summary.refresh.clone();
        let refresh_transactions = transactions.actions.refresh.clone();
        let refresh_categories = categories.refresh.clone();

        use_effect_with((), move |_| {
            refresh_summary.emit(());
            refresh_transactions.emit(());
            refresh_categories.emit(());
            || ()
        });
    }

    {
        let title = document_title(&translations, &locale);
        use_effect_with(title.clone(), move |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                document.set_title(&title);
            }
            || ()
        });
    }

    {
        let canonical = format!("{}{}", SITE.url, layout.pathname);
        use_effect_with(canonical.clone(), move |_| {
            set_canonical_link(&canonical);
            || ()
        });
    }

    let category_list = if categories.state.loading {
        Html::default()
    } else {
        html! {
            <section class="categories">
                <h2>{ translations.get(&locale, "common.categories") }</h2>
                <ul class="category-list">
                    { for categories.state.categories.iter().map(|category| html! {
                        <li key={category.id.clone()}>{ category.name.clone() }</li>
                    }) }
                </ul>
            </section>
        }
    };

    html! {
        <>
            <Header locale={locale.clone()} translations={translations.clone()} />
            <main class="container">
                <SummaryCards
                    summary={summary.state.summary}
                    loading={summary.state.loading}
                    locale={locale.clone()}
                    translations={translations.clone()}
                />
                <TransactionTable
                    transactions={transactions.state.transactions.clone()}
                    paging={transactions.state.paging}
                    loading={transactions.state.loading}
                    locale={locale.clone()}
                    translations={translations.clone()}
                    on_page_change={transactions.actions.set_page.clone()}
                />
                { category_list }
            </main>
        </>
    }
}

/// Point the canonical link tag at the page the layout loader resolved.
fn set_canonical_link(href: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let link = document
        .query_selector("link[rel='canonical']")
        .ok()
        .flatten()
        .or_else(|| {
            let link = document.create_element("link").ok()?;
            link.set_attribute("rel", "canonical").ok()?;
            document.head()?.append_child(&link).ok()?;
            Some(link)
        });

    if let Some(link) = link {
        let _ = link.set_attribute("href", href);
    }
}

fn document_title(translations: &Translations, locale: &str) -> String {
    let title = translations.get(locale, "common.title");
    if title == SITE.name {
        title
    } else {
        format!("{} - {}", title, SITE.name)
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
