use yew::prelude::*;
use yew_router::prelude::*;

use super::catalogue;
use crate::components::reveal::ScrollTrigger;
use crate::components::scroll_effect::ScrollEffect3D;
use crate::components::status::{ErrorPanel, Spinner};
use crate::i18n::use_i18n;
use crate::motion::reveal::TriggerAnimation;
use crate::store::fetch::{use_table, FetchState};
use crate::store::models::{slugify, Service};
use crate::store::{Query, Table};
use crate::Route;

/// Stored services, or the built-in featured ones when the table is empty.
pub fn cards_for(rows: &[Service]) -> Vec<Service> {
    if rows.is_empty() {
        catalogue::featured_services()
    } else {
        rows.to_vec()
    }
}

pub fn services_query() -> Query {
    Query::select("*").order("name", true)
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let i18n = use_i18n();
    let service = &props.service;
    let slug = slugify(&service.name);

    html! {
        <ScrollTrigger animation={TriggerAnimation::Scale} delay={0.1 * (props.index as f64 + 1.0)}>
            <ScrollEffect3D
                depth={60.0}
                rotation_intensity={4.0}
                scroll_multiplier={1.0 + props.index as f64 * 0.1}
                class="service-card-effect"
            >
                <div class="service-card">
                    <div class="service-card-icon">{ icon_for(&slug) }</div>
                    <h3>{ i18n.localized(&service.name, service.name_ar.as_deref()) }</h3>
                    <p>{ i18n.localized(&service.description, service.description_ar.as_deref()) }</p>
                    <div class="service-card-footer">
                        <Link<Route> to={Route::Service { service_id: slug.clone() }} classes="service-card-link">
                            { i18n.t("services", "learn_more", "Learn More") }
                        </Link<Route>>
                    </div>
                </div>
            </ScrollEffect3D>
        </ScrollTrigger>
    }
}

/// Glyph standing in for each service's illustration.
pub fn icon_for(slug: &str) -> &'static str {
    match slug {
        "graphic-design" => "🎨",
        "logo-design" => "✒️",
        "web-development" => "💻",
        "content-creation" => "📝",
        "social-media-management" => "📱",
        _ => "✨",
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let i18n = use_i18n();
    let services = use_table::<Service>(Table::Services, services_query(), true);

    let body = match &services.state {
        FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={services.reload.clone()} />
        },
        FetchState::Loaded(rows) => html! {
            <div class="services-grid">
                { for cards_for(rows).into_iter().enumerate().map(|(index, service)| {
                    let key = service.id.clone();
                    html! { <ServiceCard key={key} {service} {index} /> }
                }) }
            </div>
        },
    };

    html! {
        <div class="services-section">
            <ScrollTrigger animation={TriggerAnimation::Slide}>
                <div class="section-heading">
                    <h2>
                        <span class="heading-dark">{ i18n.t("services", "title.our", "Our ") }</span>
                        <span class="heading-accent">{ i18n.t("services", "title.services", "Services") }</span>
                    </h2>
                    <p>{ i18n.t("services", "subtitle", "We offer a wide range of digital services to help your business grow and succeed in the digital landscape.") }</p>
                </div>
            </ScrollTrigger>
            { body }
            <style>
                {r#"
                .services-section { max-width: 80rem; margin: 0 auto; padding: 5rem 1rem; }
                .services-grid {
                    display: grid; gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
                }
                .service-card {
                    background: white; min-height: 25rem; padding: 1.5rem; border-radius: 1rem;
                    display: flex; flex-direction: column; text-align: center;
                }
                .service-card-icon { font-size: 3.5rem; margin: 1rem auto; }
                .service-card h3 { font-size: 1.25rem; font-weight: 700; min-height: 3rem; }
                .service-card-footer { margin-top: auto; }
                .service-card-link {
                    display: inline-block; padding: 0.5rem 1.25rem; border-radius: 0.5rem;
                    color: white; text-decoration: none;
                    background: linear-gradient(to right, #facc15, #eab308);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_shows_builtin_cards() {
        let cards = cards_for(&[]);
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().any(|s| s.name == "Web Development"));
    }

    #[test]
    fn builtin_cards_have_distinct_keys() {
        let cards = cards_for(&[]);
        let mut ids: Vec<_> = cards.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cards.len());
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn stored_rows_replace_builtin_cards() {
        let stored = vec![Service {
            id: "s1".into(),
            name: "Motion Design".into(),
            description: "Animated".into(),
            ..Service::default()
        }];
        assert_eq!(cards_for(&stored), stored);
    }

    #[test]
    fn unknown_services_get_generic_icon() {
        assert_eq!(icon_for("motion-design"), "✨");
    }
}
