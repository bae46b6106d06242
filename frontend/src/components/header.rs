use std::rc::Rc;

use yew::prelude::*;

use super::language_switcher::LanguageSwitcher;
use crate::config::{navigation, SITE};
use crate::i18n::Translations;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub locale: String,
    pub translations: Rc<Translations>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_items = navigation();

    html! {
        <header class="header">
            <div class="container">
                <a class="site-brand" href={SITE.home}>
                    <img class="site-logo" src={SITE.logo} alt={SITE.name} />
                    <span class="site-name">{ SITE.name }</span>
                </a>
                <nav class="site-nav">
                    { for nav_items.iter().map(|item| {
                        let label = props.translations.get(
                            &props.locale,
                            &format!("navigation.{}", item.translation_key),
                        );
                        html! {
                            <a class="nav-link" href={item.href.clone()}>{ label }</a>
                        }
                    }) }
                    <LanguageSwitcher
                        locale={props.locale.clone()}
                        translations={props.translations.clone()}
                    />
                </nav>
            </div>
        </header>
    }
}
