use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod listeners;
mod hooks;
mod i18n;
mod store;
mod viewport;
mod motion {
    pub mod progress;
    pub mod transform;
    pub mod shadow;
    pub mod spring;
    pub mod parallax;
    pub mod reveal;
    pub mod page;
    pub mod tilt;
}
mod components {
    pub mod scroll_effect;
    pub mod parallax;
    pub mod reveal;
    pub mod progress_bar;
    pub mod tilt;
    pub mod status;
    pub mod language_switcher;
    pub mod footer;
    pub mod faq_item;
}
mod sections {
    pub mod catalogue;
    pub mod hero;
    pub mod services;
    pub mod testimonials;
    pub mod contact;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod service;
    pub mod about;
    pub mod not_found;
}
mod admin {
    pub mod forms;
    pub mod layout;
    pub mod services_table;
    pub mod service_details_table;
    pub mod faq_table;
}

use pages::{
    home::{Home, SECTIONS},
    services::ServicesOverview,
    service::ServicePage,
    about::AboutUs,
    not_found::NotFound,
};

use admin::{
    layout::AdminLayout,
    services_table::ServicesTable,
    service_details_table::ServiceDetailsTable,
    faq_table::FaqTable,
};

use components::{
    footer::{jump_to, Footer},
    language_switcher::LanguageSwitcher,
    progress_bar::ScrollProgress,
    scroll_effect::ScrollEffect3D,
};
use hooks::use_page_scroll;
use i18n::{use_i18n, LanguageProvider};
use store::DataStore;
use viewport::window::{scroll_to_top, section_bounds};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:service_id")]
    ServicesAnchor { service_id: String },
    #[at("/service/:service_id")]
    Service { service_id: String },
    #[at("/about")]
    About,
    #[at("/admin")]
    Admin,
    #[at("/admin/services")]
    AdminServices,
    #[at("/admin/service-details")]
    AdminServiceDetails,
    #[at("/admin/faqs")]
    AdminFaqs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Admin routes render without the site header and footer.
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Route::Admin | Route::AdminServices | Route::AdminServiceDetails | Route::AdminFaqs
        )
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesOverview /> }
        },
        Route::ServicesAnchor { service_id } => {
            info!("Rendering Services page at {}", service_id);
            html! { <ServicesOverview anchor={Some(service_id)} /> }
        },
        Route::Service { service_id } => {
            info!("Rendering Service page for {}", service_id);
            html! { <ServicePage slug={service_id} /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <AboutUs /> }
        },
        Route::Admin | Route::AdminServices => {
            info!("Rendering Admin services");
            html! { <AdminLayout active={routes}><ServicesTable /></AdminLayout> }
        },
        Route::AdminServiceDetails => {
            info!("Rendering Admin service details");
            html! { <AdminLayout active={routes}><ServiceDetailsTable /></AdminLayout> }
        },
        Route::AdminFaqs => {
            info!("Rendering Admin FAQs");
            html! { <AdminLayout active={routes}><FaqTable /></AdminLayout> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// Point below the header that decides which home section is current.
const SECTION_MARKER: f64 = 100.0;

/// First section whose bounds straddle `marker`.
pub fn active_section<'a>(bounds: &[(&'a str, Option<(f64, f64)>)], marker: f64) -> Option<&'a str> {
    bounds.iter().find_map(|(id, rect)| match rect {
        Some((top, bottom)) if *top <= marker && marker <= *bottom => Some(*id),
        _ => None,
    })
}

#[derive(Clone, Copy, PartialEq)]
enum NavTarget {
    Home,
    Services,
    About,
    Contact,
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let i18n = use_i18n();
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let page = use_page_scroll();
    let menu_open = use_state(|| false);
    let is_scrolled = page.scroll_y > 20.0;

    let current = match &route {
        Route::Home => {
            let bounds: Vec<_> = SECTIONS.iter().map(|id| (*id, section_bounds(id))).collect();
            match active_section(&bounds, SECTION_MARKER) {
                Some("contact") => Some(NavTarget::Contact),
                Some("services") => Some(NavTarget::Services),
                _ => Some(NavTarget::Home),
            }
        }
        Route::Services | Route::ServicesAnchor { .. } | Route::Service { .. } => Some(NavTarget::Services),
        Route::About => Some(NavTarget::About),
        _ => None,
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let go_home = {
        let navigator = navigator.clone();
        let on_home = route == Route::Home;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if on_home {
                scroll_to_top(true);
            } else if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let items: Vec<(NavTarget, String, Html)> = vec![
        (
            NavTarget::Home,
            i18n.t("nav", "home", "Home"),
            html! { <a href="/" onclick={go_home}>{ i18n.t("nav", "home", "Home") }</a> },
        ),
        (
            NavTarget::Services,
            i18n.t("nav", "services", "Services"),
            html! { <Link<Route> to={Route::Services}>{ i18n.t("nav", "services", "Services") }</Link<Route>> },
        ),
        (
            NavTarget::About,
            i18n.t("nav", "about", "About Us"),
            html! { <Link<Route> to={Route::About}>{ i18n.t("nav", "about", "About Us") }</Link<Route>> },
        ),
        (
            NavTarget::Contact,
            i18n.t("nav", "contact", "Contact"),
            html! {
                <a href="/#contact" onclick={jump_to(navigator, Route::Home, "contact")}>
                    { i18n.t("nav", "contact", "Contact") }
                </a>
            },
        ),
    ];

    let menu_class = if *menu_open { "nav-right mobile-menu-open" } else { "nav-right" };

    html! {
        <>
            <ScrollProgress />
            <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"Why "}<span>{"Media"}</span>
                    </Link<Route>>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={menu_class}>
                        { for items.into_iter().enumerate().map(|(index, (target, label, link))| html! {
                            <div key={label} onclick={close_menu.clone()}
                                class={classes!("nav-link", (current == Some(target)).then_some("active"))}>
                                <ScrollEffect3D
                                    depth={20.0}
                                    rotation_intensity={2.0}
                                    translate_z={10.0}
                                    disable_shadow=true
                                    scroll_multiplier={0.8 + index as f64 * 0.1}
                                >
                                    { link }
                                </ScrollEffect3D>
                            </div>
                        }) }
                        <LanguageSwitcher />
                    </div>
                </div>
                <style>
                    {r#"
                    .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; transition: background 0.3s, box-shadow 0.3s; }
                    .top-nav.scrolled { background: rgba(255,255,255,0.95); box-shadow: 0 2px 12px rgba(0,0,0,0.08); backdrop-filter: blur(8px); }
                    .nav-content { max-width: 80rem; margin: 0 auto; padding: 1rem; display: flex; align-items: center; justify-content: space-between; }
                    .nav-logo { font-size: 1.5rem; font-weight: 700; color: #111827; text-decoration: none; }
                    .nav-logo span { color: #facc15; }
                    .nav-right { display: flex; align-items: center; gap: 1.5rem; }
                    .nav-link a { color: #374151; text-decoration: none; font-weight: 500; }
                    .nav-link.active a { color: #eab308; }
                    .language-switcher { display: inline-flex; gap: 0.35rem; align-items: center; border: 1px solid #e5e7eb; border-radius: 9999px; padding: 0.35rem 0.8rem; background: white; cursor: pointer; }
                    .burger-menu { display: none; flex-direction: column; gap: 4px; background: none; border: none; cursor: pointer; }
                    .burger-menu span { width: 24px; height: 2px; background: #111827; }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right { display: none; position: absolute; top: 100%; left: 0; right: 0; flex-direction: column; background: white; padding: 1rem; }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                    "#}
                </style>
            </nav>
        </>
    }
}

/// Jumps back to the top whenever the path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top_on_navigate() -> Html {
    let path = use_location().map(|location| location.path().to_string());
    use_effect_with_deps(
        move |_| {
            scroll_to_top(false);
            || ()
        },
        path,
    );
    html! {}
}

#[function_component(Shell)]
fn shell() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let is_admin = route.is_admin();

    html! {
        <>
            <ScrollToTop />
            if !is_admin {
                <Nav />
            }
            <Switch<Route> render={switch} />
            if !is_admin {
                <Footer />
            }
        </>
    }
}

#[function_component]
fn App() -> Html {
    let store = use_state(DataStore::from_build_env);

    html! {
        <ContextProvider<DataStore> context={(*store).clone()}>
            <LanguageProvider>
                <BrowserRouter>
                    <Shell />
                </BrowserRouter>
            </LanguageProvider>
        </ContextProvider<DataStore>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_straddling_marker_is_active() {
        let bounds = [
            ("hero", Some((-900.0, -100.0))),
            ("services", Some((-100.0, 600.0))),
            ("contact", Some((600.0, 1200.0))),
        ];
        assert_eq!(active_section(&bounds, SECTION_MARKER), Some("services"));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let bounds = [("hero", None), ("contact", Some((50.0, 900.0)))];
        assert_eq!(active_section(&bounds, SECTION_MARKER), Some("contact"));
        assert_eq!(active_section(&[("hero", None)], SECTION_MARKER), None);
    }

    #[test]
    fn admin_routes_are_recognised() {
        assert!(Route::AdminFaqs.is_admin());
        assert!(Route::Admin.is_admin());
        assert!(!Route::Service { service_id: "logo-design".into() }.is_admin());
        assert!(!Route::NotFound.is_admin());
    }

    #[test]
    fn service_routes_carry_the_slug() {
        let route = Route::Service { service_id: "web-development".into() };
        assert_eq!(route.to_path(), "/service/web-development");
        assert_eq!(Route::AdminServiceDetails.to_path(), "/admin/service-details");
    }
}
