use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::footer::jump_to;
use crate::components::reveal::{ScrollReveal, ScrollTrigger};
use crate::components::scroll_effect::ScrollEffect3D;
use crate::components::status::{EmptyState, ErrorPanel, Spinner};
use crate::components::tilt::TiltCard;
use crate::i18n::use_i18n;
use crate::motion::parallax::Direction;
use crate::motion::reveal::TriggerAnimation;
use crate::sections::catalogue;
use crate::sections::services::icon_for;
use crate::store::fetch::{use_table, FetchState};
use crate::store::models::{slugify, Faq, ServiceDetail};
use crate::store::{Query, Table};
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    Stored(ServiceDetail),
    Builtin(ServiceDetail),
    Missing,
}

/// Finds the page for `slug` among stored detail rows, matching either the
/// detail's own name or its parent service's name, then among the built-in
/// pages.
pub fn resolve(rows: &[ServiceDetail], slug: &str) -> Resolved {
    let stored = rows.iter().find(|row| {
        slugify(&row.name) == slug
            || row
                .service
                .as_ref()
                .map(|s| slugify(&s.name) == slug)
                .unwrap_or(false)
    });
    match stored {
        Some(row) => Resolved::Stored(row.clone()),
        None => catalogue::detail(slug).map_or(Resolved::Missing, Resolved::Builtin),
    }
}

#[derive(Properties, PartialEq)]
struct ServiceFaqsProps {
    service_id: String,
}

#[function_component(ServiceFaqs)]
fn service_faqs(props: &ServiceFaqsProps) -> Html {
    let i18n = use_i18n();
    let query = Query::select("*")
        .eq("service_id", &props.service_id)
        .order("created_at", false);
    let faqs = use_table::<Faq>(Table::Faqs, query, true);

    let body = match &faqs.state {
        FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={faqs.reload.clone()} />
        },
        FetchState::Loaded(rows) if rows.is_empty() => html! { <EmptyState /> },
        FetchState::Loaded(rows) => html! {
            { for rows.iter().map(|faq| html! {
                <FaqItem key={faq.id.clone()} question={i18n.localized(&faq.question, faq.question_ar.as_deref()).to_string()}>
                    <p>{ i18n.localized(&faq.answer, faq.answer_ar.as_deref()) }</p>
                </FaqItem>
            }) }
        },
    };

    html! {
        <section class="service-block">
            <h2>{ i18n.t("service", "faq", "Frequently Asked Questions") }</h2>
            { body }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceBodyProps {
    detail: ServiceDetail,
    stored: bool,
}

#[function_component(ServiceBody)]
fn service_body(props: &ServiceBodyProps) -> Html {
    let i18n = use_i18n();
    let navigator = use_navigator();
    let detail = &props.detail;
    let slug = slugify(&detail.name);
    let process = detail.process.clone().unwrap_or_default();
    let benefits = detail.benefits.clone().unwrap_or_default();
    let portfolio = detail.graphic_design_portfolio.clone().unwrap_or_default();

    html! {
        <>
            <header class="service-hero">
                <ScrollEffect3D depth={80.0} rotation_intensity={4.0}>
                    <div class="service-hero-icon">{ icon_for(&slug) }</div>
                </ScrollEffect3D>
                <div>
                    <h1>{ &detail.name }</h1>
                    <p class="service-lead">{ &detail.description }</p>
                    if let Some(details) = &detail.details {
                        <p>{ details }</p>
                    }
                </div>
            </header>

            if let Some(long) = &detail.long_description {
                <ScrollReveal>
                    <section class="service-block">
                        <h2>{ i18n.t("service", "overview", "Overview") }</h2>
                        <p>{ long }</p>
                    </section>
                </ScrollReveal>
            }

            if !process.is_empty() {
                <section class="service-block">
                    <h2>{ i18n.t("service", "process", "Our Process") }</h2>
                    <ol class="service-process">
                        { for process.iter().enumerate().map(|(index, step)| html! {
                            <li key={index}>
                                <ScrollReveal direction={Direction::Left} delay={0.1 * index as f64}>
                                    <TiltCard class="process-step">
                                        <span class="process-index">{ (index + 1).to_string() }</span>
                                        <h3>{ &step.title }</h3>
                                        <p>{ &step.description }</p>
                                    </TiltCard>
                                </ScrollReveal>
                            </li>
                        }) }
                    </ol>
                </section>
            }

            if !benefits.is_empty() {
                <section class="service-block">
                    <h2>{ i18n.t("service", "benefits", "Benefits") }</h2>
                    <ul class="service-benefits">
                        { for benefits.iter().map(|b| html! { <li>{ b }</li> }) }
                    </ul>
                </section>
            }

            if !portfolio.is_empty() {
                <section class="service-block">
                    <h2>{ i18n.t("service", "portfolio", "Portfolio") }</h2>
                    <div class="service-portfolio">
                        { for portfolio.iter().enumerate().map(|(index, url)| html! {
                            <ScrollTrigger key={url.clone()} animation={TriggerAnimation::Scale} delay={0.05 * index as f64}>
                                <img src={url.clone()} alt={format!("{} {}", detail.name, index + 1)} loading="lazy" />
                            </ScrollTrigger>
                        }) }
                    </div>
                </section>
            }

            if props.stored {
                <ServiceFaqs service_id={detail.service_id.clone()} />
            }

            if let Some(cta) = &detail.cta {
                <section class="service-cta">
                    <h2>{ &cta.title }</h2>
                    <p>{ &cta.description }</p>
                    <a href="/#contact" class="service-card-link" onclick={jump_to(navigator.clone(), Route::Home, "contact")}>
                        { i18n.t("service", "cta.button", "Contact Us") }
                    </a>
                </section>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub slug: String,
}

#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    let i18n = use_i18n();
    let details = use_table::<ServiceDetail>(
        Table::ServiceDetails,
        Query::select("*,Services(name)"),
        true,
    );

    let body = match &details.state {
        FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(message) => html! {
            <ErrorPanel message={message.clone()} on_retry={details.reload.clone()} />
        },
        FetchState::Loaded(rows) => match resolve(rows, &props.slug) {
            Resolved::Stored(detail) => html! { <ServiceBody {detail} stored=true /> },
            Resolved::Builtin(detail) => html! { <ServiceBody {detail} stored=false /> },
            Resolved::Missing => html! {
                <div class="service-missing">
                    <h1>{ i18n.t("service", "not_found.title", "Service Not Found") }</h1>
                    <p>{ i18n.t("service", "not_found.body", "The service you are looking for does not exist.") }</p>
                </div>
            },
        },
    };

    html! {
        <main class="service-page">
            <Link<Route> to={Route::Services} classes="service-back">
                { format!("← {}", i18n.t("service", "back", "Back to Services")) }
            </Link<Route>>
            { body }
            <style>
                {r#"
                .service-page { max-width: 64rem; margin: 0 auto; padding: 6rem 1rem 4rem; }
                .service-back { color: #6b7280; text-decoration: none; }
                .service-hero { display: grid; grid-template-columns: 10rem 1fr; gap: 2rem; align-items: center; margin: 2rem 0 3rem; }
                .service-hero-icon { font-size: 6rem; text-align: center; }
                .service-hero h1 { font-size: 2.5rem; font-weight: 700; }
                .service-lead { font-size: 1.2rem; color: #4b5563; }
                .service-block { margin-bottom: 3rem; }
                .service-block h2 { font-size: 1.75rem; font-weight: 700; margin-bottom: 1rem; }
                .service-process { list-style: none; padding: 0; display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(13rem, 1fr)); }
                .process-step { background: white; padding: 1.25rem; border-radius: 1rem; box-shadow: 0 4px 16px rgba(0,0,0,0.06); }
                .process-index { display: inline-flex; width: 2rem; height: 2rem; border-radius: 50%; background: #facc15; color: white; align-items: center; justify-content: center; }
                .service-benefits li { margin-bottom: 0.5rem; }
                .service-portfolio { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); }
                .service-portfolio img { width: 100%; border-radius: 0.75rem; object-fit: cover; aspect-ratio: 4 / 3; }
                .service-cta { text-align: center; background: #fef9c3; padding: 3rem 1rem; border-radius: 1rem; }
                .service-missing { text-align: center; padding: 4rem 0; }
                @media (max-width: 640px) { .service-hero { grid-template-columns: 1fr; } }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::ServiceName;

    fn row(name: &str, parent: Option<&str>) -> ServiceDetail {
        ServiceDetail {
            id: format!("id-{}", name),
            name: name.to_string(),
            description: "d".into(),
            service_id: "s1".into(),
            service: parent.map(|p| ServiceName { name: p.to_string() }),
            ..ServiceDetail::default()
        }
    }

    #[test]
    fn stored_row_matches_by_own_name() {
        let rows = vec![row("Brand Identity", None)];
        assert!(matches!(resolve(&rows, "brand-identity"), Resolved::Stored(d) if d.name == "Brand Identity"));
    }

    #[test]
    fn stored_row_matches_by_parent_name() {
        let rows = vec![row("Websites that sell", Some("Web Development"))];
        assert!(matches!(resolve(&rows, "web-development"), Resolved::Stored(_)));
    }

    #[test]
    fn builtin_page_when_store_has_no_match() {
        assert!(matches!(resolve(&[], "logo-design"), Resolved::Builtin(_)));
        let rows = vec![row("Brand Identity", None)];
        assert!(matches!(resolve(&rows, "content-creation"), Resolved::Builtin(_)));
    }

    #[test]
    fn unknown_slug_is_missing() {
        assert_eq!(resolve(&[], "quantum-consulting"), Resolved::Missing);
    }
}
