use yew::prelude::*;

use crate::i18n::use_i18n;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let i18n = use_i18n();
    let onclick = {
        let next = i18n.language.toggled();
        let set_language = i18n.set_language.clone();
        Callback::from(move |_: MouseEvent| set_language.emit(next))
    };

    html! {
        <button class="language-switcher" {onclick}>
            <span class="language-globe">{"🌐"}</span>
            // Label names the language you would switch to.
            { i18n.t("nav", "language", "العربية") }
        </button>
    }
}
