use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_i18n;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let i18n = use_i18n();
    html! {
        <main style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1 style="font-size: 4rem; font-weight: 700; color: #facc15;">{"404"}</h1>
            <p>{ i18n.t("not_found", "title", "Page not found") }</p>
            <Link<Route> to={Route::Home} classes="service-card-link">
                { i18n.t("not_found", "home", "Go home") }
            </Link<Route>>
        </main>
    }
}
