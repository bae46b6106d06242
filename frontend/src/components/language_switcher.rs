use std::rc::Rc;

use yew::prelude::*;

use crate::i18n::{Translations, SUPPORTED_LOCALES};

#[derive(Properties, PartialEq)]
pub struct LanguageSwitcherProps {
    pub locale: String,
    pub translations: Rc<Translations>,
}

/// Links that reload the page with an explicit `?lang=` parameter so
/// the server persists the choice into the locale cookie.
#[function_component(LanguageSwitcher)]
pub fn language_switcher(props: &LanguageSwitcherProps) -> Html {
    html! {
        <div class="language-switcher">
            { for SUPPORTED_LOCALES.iter().map(|code| {
                let name = props
                    .translations
                    .get(&props.locale, &format!("lang.{}", code));
                let class = if *code == props.locale {
                    "language-link active"
                } else {
                    "language-link"
                };

                html! {
                    <a {class} href={format!("?lang={}", code)}>{ name }</a>
                }
            }) }
        </div>
    }
}
