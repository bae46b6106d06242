use std::rc::Rc;

use shared::SummaryData;
use yew::prelude::*;

use crate::i18n::Translations;
use crate::services::format::format_amount;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Option<SummaryData>,
    pub loading: bool,
    pub locale: String,
    pub translations: Rc<Translations>,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let t = |key: &str| props.translations.get(&props.locale, key);

    if props.loading {
        return html! {
            <section class="summary loading">{ t("common.loading") }</section>
        };
    }

    let Some(summary) = props.summary else {
        return Html::default();
    };

    html! {
        <section class="summary">
            <h2>{ t("common.summary") }</h2>
            <div class="summary-cards">
                <div class="summary-card income">
                    <span class="summary-label">{ t("common.total_income") }</span>
                    <span class="summary-value">{ format_amount(summary.total_income) }</span>
                </div>
                <div class="summary-card expense">
                    <span class="summary-label">{ t("common.total_expense") }</span>
                    <span class="summary-value">{ format_amount(summary.total_expense) }</span>
                </div>
                <div class="summary-card balance">
                    <span class="summary-label">{ t("common.balance") }</span>
                    <span class="summary-value">{ format_amount(summary.balance()) }</span>
                </div>
            </div>
        </section>
    }
}
