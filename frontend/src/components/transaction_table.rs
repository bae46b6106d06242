use std::rc::Rc;

use shared::{Paging, Transaction};
use yew::prelude::*;

use crate::i18n::Translations;
use crate::services::format::{format_amount, format_date};

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub paging: Option<Paging>,
    pub loading: bool,
    pub locale: String,
    pub translations: Rc<Translations>,
    pub on_page_change: Callback<u32>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let t = |key: &str| props.translations.get(&props.locale, key);

    if props.loading {
        return html! {
            <section class="transactions loading">{ t("common.loading") }</section>
        };
    }

    html! {
        <section class="transactions">
            <h2>{ t("common.transactions") }</h2>
            if props.transactions.is_empty() {
                <p class="empty">{ t("common.empty") }</p>
            } else {
                <table class="transaction-table">
                    <thead>
                        <tr>
                            <th>{ t("common.date") }</th>
                            <th>{ t("common.description") }</th>
                            <th>{ t("common.category") }</th>
                            <th>{ t("common.amount") }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.transactions.iter().map(render_row) }
                    </tbody>
                </table>
            }
            { pagination(props) }
        </section>
    }
}

fn render_row(transaction: &Transaction) -> Html {
    let amount_class = if transaction.is_income() {
        "amount positive"
    } else {
        "amount negative"
    };
    let sign = if transaction.is_income() { "+" } else { "-" };

    html! {
        <tr key={transaction.id.clone()}>
            <td>{ format_date(&transaction.date) }</td>
            <td>{ transaction.description.clone() }</td>
            <td>{ transaction.category_name.clone() }</td>
            <td class={amount_class}>
                { format!("{}{}", sign, format_amount(transaction.amount)) }
            </td>
        </tr>
    }
}

fn pagination(props: &TransactionTableProps) -> Html {
    let t = |key: &str| props.translations.get(&props.locale, key);

    let Some(paging) = props.paging else {
        return Html::default();
    };
    if paging.total_page <= 1 {
        return Html::default();
    }

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        let page = paging.page;
        Callback::from(move |_| on_page_change.emit(page - 1))
    };
    let on_next = {
        let on_page_change = props.on_page_change.clone();
        let page = paging.page;
        Callback::from(move |_| on_page_change.emit(page + 1))
    };

    html! {
        <div class="pagination">
            <button disabled={paging.page <= 1} onclick={on_previous}>
                { t("common.previous") }
            </button>
            <span class="page-indicator">
                { format!("{} / {}", paging.page, paging.total_page) }
            </span>
            <button disabled={paging.page >= paging.total_page} onclick={on_next}>
                { t("common.next") }
            </button>
        </div>
    }
}
