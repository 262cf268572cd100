use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::ScrollReveal;
use crate::components::scroll_effect::ScrollEffect3D;
use crate::components::status::{ErrorPanel, Spinner};
use crate::i18n::{use_i18n, Language};
use crate::motion::parallax::Direction;
use crate::sections::catalogue;
use crate::sections::services::{icon_for, services_query};
use crate::store::fetch::{use_table, FetchState};
use crate::store::models::{slugify, Service};
use crate::store::Table;
use crate::viewport::window::scroll_to_section;
use crate::Route;

/// Full service list with every service's tools, used when the store has
/// nothing to show.
pub fn overview_rows(rows: &[Service]) -> Vec<Service> {
    if rows.is_empty() {
        catalogue::services()
    } else {
        rows.to_vec()
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesOverviewProps {
    /// Section to scroll to after render, from `/services/:service_id`.
    #[prop_or_default]
    pub anchor: Option<String>,
}

#[function_component(ServicesOverview)]
pub fn services_overview(props: &ServicesOverviewProps) -> Html {
    let i18n = use_i18n();
    let services = use_table::<Service>(Table::Services, services_query(), true);
    let active = use_state(|| props.anchor.clone());

    let loaded = matches!(services.state, FetchState::Loaded(_));
    {
        let active = active.clone();
        use_effect_with_deps(
            move |(anchor, loaded): &(Option<String>, bool)| {
                let mut pending = None;
                if let (Some(anchor), true) = (anchor.clone(), *loaded) {
                    active.set(Some(anchor.clone()));
                    // Let the section list render before measuring it.
                    pending = Some(Timeout::new(50, move || {
                        scroll_to_section(&anchor);
                    }));
                }
                move || drop(pending)
            },
            (props.anchor.clone(), loaded),
        );
    }

    let select = |id: String| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            scroll_to_section(&id);
            active.set(Some(id.clone()));
        })
    };

    let body = match &services.state {
        FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={services.reload.clone()} />
        },
        FetchState::Loaded(rows) => {
            let rows = overview_rows(rows);
            html! {
                <div class="overview-layout">
                    <aside class="overview-nav">
                        { for rows.iter().map(|service| {
                            let id = slugify(&service.name);
                            let is_active = active.as_deref() == Some(id.as_str());
                            html! {
                                <button
                                    key={id.clone()}
                                    class={classes!("overview-nav-item", is_active.then_some("active"))}
                                    onclick={select(id.clone())}
                                >
                                    { i18n.localized(&service.name, service.name_ar.as_deref()) }
                                </button>
                            }
                        }) }
                    </aside>
                    <div class="overview-list">
                        { for rows.iter().enumerate().map(|(index, service)| {
                            let id = slugify(&service.name);
                            let skills = match i18n.language {
                                Language::Ar => service
                                    .technical_skills_tools_ar
                                    .clone()
                                    .filter(|s| !s.is_empty())
                                    .or_else(|| service.technical_skills_tools.clone()),
                                Language::En => service.technical_skills_tools.clone(),
                            }
                            .unwrap_or_default();
                            let direction = if index % 2 == 0 { Direction::Left } else { Direction::Right };
                            html! {
                                <section id={id.clone()} key={id.clone()} class="overview-item">
                                    <ScrollReveal {direction}>
                                        <ScrollEffect3D depth={40.0} rotation_intensity={2.0}>
                                            <div class="overview-card">
                                                <div class="overview-icon">{ icon_for(&id) }</div>
                                                <h2>{ i18n.localized(&service.name, service.name_ar.as_deref()) }</h2>
                                                <p>{ i18n.localized(&service.description, service.description_ar.as_deref()) }</p>
                                                if !skills.is_empty() {
                                                    <>
                                                        <h3>{ i18n.t("services", "skills", "Tools & Skills") }</h3>
                                                        <ul class="overview-skills">
                                                            { for skills.iter().map(|skill| html! { <li>{ skill }</li> }) }
                                                        </ul>
                                                    </>
                                                }
                                                <Link<Route> to={Route::Service { service_id: id.clone() }} classes="service-card-link">
                                                    { i18n.t("services", "learn_more", "Learn More") }
                                                </Link<Route>>
                                            </div>
                                        </ScrollEffect3D>
                                    </ScrollReveal>
                                </section>
                            }
                        }) }
                    </div>
                </div>
            }
        }
    };

    html! {
        <main class="services-overview">
            <div class="section-heading">
                <h1>
                    <span class="heading-dark">{ i18n.t("services", "title.our", "Our ") }</span>
                    <span class="heading-accent">{ i18n.t("services", "title.services", "Services") }</span>
                </h1>
                <p>{ i18n.t("services", "subtitle", "We offer a wide range of digital services to help your business grow and succeed in the digital landscape.") }</p>
            </div>
            { body }
            <section id="careers" class="overview-careers">
                <h2>{ i18n.t("services", "careers.title", "Join Our Team") }</h2>
                <p>{ i18n.t("services", "careers.body", "We are always looking for designers, developers and storytellers.") }</p>
            </section>
            <style>
                {r#"
                .services-overview { max-width: 80rem; margin: 0 auto; padding: 6rem 1rem 4rem; }
                .overview-layout { display: grid; gap: 2rem; grid-template-columns: 14rem 1fr; }
                .overview-nav { position: sticky; top: 6rem; align-self: start; display: flex; flex-direction: column; gap: 0.5rem; }
                .overview-nav-item { text-align: start; padding: 0.6rem 1rem; border: none; border-radius: 0.5rem; background: #f3f4f6; cursor: pointer; }
                .overview-nav-item.active { background: #facc15; color: white; }
                .overview-item { scroll-margin-top: 6rem; margin-bottom: 3rem; }
                .overview-card { background: white; padding: 2rem; border-radius: 1rem; }
                .overview-icon { font-size: 3rem; }
                .overview-skills { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; padding: 0; }
                .overview-skills li { background: #fef9c3; padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.85rem; }
                .overview-careers { margin-top: 4rem; text-align: center; padding: 3rem 1rem; background: #f9fafb; border-radius: 1rem; scroll-margin-top: 6rem; }
                @media (max-width: 768px) { .overview-layout { grid-template-columns: 1fr; } .overview-nav { position: static; } }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_lists_every_builtin_service() {
        let rows = overview_rows(&[]);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|s| s.technical_skills_tools.is_some()));
    }
}
