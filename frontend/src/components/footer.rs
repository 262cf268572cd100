use chrono::{Datelike, Utc};
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_i18n;
use crate::sections::catalogue::FEATURED;
use crate::store::models::slugify;
use crate::viewport::window::scroll_to_section;
use crate::Route;

/// Navigates to `route` and then scrolls to the section `anchor` once the
/// page has rendered.
pub fn jump_to(navigator: Option<Navigator>, route: Route, anchor: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(navigator) = &navigator {
            navigator.push(&route);
        }
        Timeout::new(100, move || {
            scroll_to_section(anchor);
        })
        .forget();
    })
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_i18n();
    let navigator = use_navigator();
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{"Why "}<span>{"Media"}</span></h3>
                    <p>{ i18n.t("footer", "tagline", "Where Ideas Meet Innovation – Your Digital Solutions Start Here!") }</p>
                </div>
                <div>
                    <h4>{ i18n.t("footer", "services", "Services") }</h4>
                    <ul>
                        { for FEATURED.iter().map(|name| html! {
                            <li key={*name}>
                                <Link<Route> to={Route::Service { service_id: slugify(name) }}>{ *name }</Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{ i18n.t("footer", "company", "Company") }</h4>
                    <ul>
                        <li><Link<Route> to={Route::About}>{ i18n.t("nav", "about", "About Us") }</Link<Route>></li>
                        <li>
                            <a href="/about#team" onclick={jump_to(navigator.clone(), Route::About, "team")}>
                                { i18n.t("footer", "team", "Our Team") }
                            </a>
                        </li>
                        <li>
                            <a href="/services#careers" onclick={jump_to(navigator.clone(), Route::Services, "careers")}>
                                { i18n.t("footer", "careers", "Careers") }
                            </a>
                        </li>
                    </ul>
                </div>
                <div>
                    <h4>{ i18n.t("footer", "contact", "Contact") }</h4>
                    <ul>
                        <li><a href="mailto:info@whymaidua.com">{ i18n.t("footer", "email", "Email: info@whymaidua.com") }</a></li>
                        <li><a href="tel:0930429893">{ i18n.t("footer", "phone", "Phone: 0930429893") }</a></li>
                        <li>
                            <a href="/#contact" onclick={jump_to(navigator.clone(), Route::Home, "contact")}>
                                { i18n.t("footer", "address", "Address: Baramka Damascus Tajheez Area") }
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                { format!("© {} {}", year, i18n.t("footer", "rights", "Why Maidua. All rights reserved.")) }
            </div>
            <style>
                {r#"
                .site-footer { background: #111827; color: white; padding: 3rem 1rem; }
                .footer-grid {
                    max-width: 72rem; margin: 0 auto; display: grid; gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                }
                .footer-brand span { color: #facc15; }
                .site-footer p, .site-footer ul { color: #9ca3af; }
                .site-footer ul { list-style: none; padding: 0; }
                .site-footer li { margin-bottom: 0.5rem; }
                .site-footer a { color: inherit; text-decoration: none; }
                .site-footer a:hover { color: #facc15; }
                .footer-bottom {
                    max-width: 72rem; margin: 3rem auto 0; padding-top: 2rem;
                    border-top: 1px solid #1f2937; text-align: center; color: #9ca3af;
                }
                "#}
            </style>
        </footer>
    }
}
