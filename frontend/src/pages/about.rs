use yew::prelude::*;

use crate::components::footer::jump_to;
use crate::components::parallax::ParallaxScroll;
use crate::components::reveal::{ScrollReveal, ScrollTrigger};
use crate::components::tilt::{Perspective, TiltCard};
use crate::i18n::use_i18n;
use crate::motion::parallax::Direction;
use crate::motion::reveal::TriggerAnimation;
use crate::Route;
use yew_router::prelude::use_navigator;

const VALUES: [(&str, &str); 4] = [
    (
        "Commitment to 'Why'",
        "We are dedicated to uncovering and honoring the core purpose behind every brand, so each project is rooted in meaning, not just aesthetics.",
    ),
    (
        "Continuous Innovation",
        "Creativity knows no limits. Through smart experimentation we keep finding better ways to solve problems and bring fresh ideas to life.",
    ),
    (
        "Authenticity First",
        "Our designs reflect the true essence of our clients, creating genuine connections with their audience.",
    ),
    (
        "Unbounded Growth",
        "Strategic guidance and ongoing support help every brand unlock new levels of growth.",
    ),
];

const TEAM: [(&str, &str, &str); 4] = [
    ("Alex Johnson", "Founder & CEO", "With over 15 years of experience in digital innovation, Alex leads our team with vision and expertise."),
    ("Samantha Lee", "Creative Director", "Samantha brings creative excellence to every project, ensuring stunning visual designs that captivate audiences."),
    ("Marcus Chen", "Lead Developer", "Marcus combines technical brilliance with problem-solving skills to build robust, scalable solutions."),
    ("Olivia Rodriguez", "Client Success Manager", "Olivia ensures our clients receive exceptional service and support throughout their journey with us."),
];

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    let i18n = use_i18n();
    let navigator = use_navigator();

    html! {
        <main class="about">
            <ParallaxScroll speed={0.2} direction={Direction::Down}>
                <div class="section-heading about-intro">
                    <h1>
                        <span class="heading-dark">{ i18n.t("about", "title.about", "About ") }</span>
                        <span class="heading-accent">{ i18n.t("about", "title.us", "Us") }</span>
                    </h1>
                    <p>{ i18n.t("about", "intro", "Why Media is a creative studio building brands, websites and content for ambitious businesses.") }</p>
                </div>
            </ParallaxScroll>

            <div class="about-pillars">
                <ScrollReveal direction={Direction::Left}>
                    <Perspective rotate_y={-4.0}>
                        <div class="about-pillar">
                            <h2>{ i18n.t("about", "mission.title", "Our Mission") }</h2>
                            <p>{ i18n.t("about", "mission.body", "Turn ideas into digital products people remember.") }</p>
                        </div>
                    </Perspective>
                </ScrollReveal>
                <ScrollReveal direction={Direction::Right}>
                    <Perspective rotate_y={4.0}>
                        <div class="about-pillar">
                            <h2>{ i18n.t("about", "vision.title", "Our Vision") }</h2>
                            <p>{ i18n.t("about", "vision.body", "Be the region's first call for design and technology.") }</p>
                        </div>
                    </Perspective>
                </ScrollReveal>
            </div>

            <div class="about-values">
                { for VALUES.iter().enumerate().map(|(index, (title, body))| html! {
                    <ScrollTrigger key={*title} animation={TriggerAnimation::Rotate} delay={0.1 * index as f64}>
                        <div class="about-value">
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </div>
                    </ScrollTrigger>
                }) }
            </div>

            <section id="team" class="about-team">
                <h2>{ i18n.t("about", "team.title", "Our Team") }</h2>
                <div class="about-team-grid">
                    { for TEAM.iter().map(|(name, role, bio)| html! {
                        <TiltCard key={*name} class="about-member">
                            <h3>{ *name }</h3>
                            <p class="about-role">{ *role }</p>
                            <p>{ *bio }</p>
                        </TiltCard>
                    }) }
                </div>
            </section>

            <div class="about-cta">
                <a href="/#contact" class="service-card-link" onclick={jump_to(navigator, Route::Home, "contact")}>
                    { i18n.t("service", "cta.button", "Contact Us") }
                </a>
            </div>
            <style>
                {r#"
                .about { max-width: 72rem; margin: 0 auto; padding: 6rem 1rem 4rem; }
                .about-intro h1 { font-size: 3rem; font-weight: 700; }
                .about-pillars { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); margin: 3rem 0; }
                .about-pillar { background: #fef9c3; padding: 2rem; border-radius: 1rem; }
                .about-values { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr)); }
                .about-value { background: white; padding: 1.5rem; border-radius: 1rem; box-shadow: 0 4px 16px rgba(0,0,0,0.06); height: 100%; }
                .about-team { margin-top: 5rem; text-align: center; scroll-margin-top: 6rem; }
                .about-team-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); margin-top: 2rem; }
                .about-member { background: white; padding: 1.5rem; border-radius: 1rem; box-shadow: 0 4px 16px rgba(0,0,0,0.06); }
                .about-role { color: #eab308; font-weight: 500; }
                .about-cta { text-align: center; margin-top: 4rem; }
                "#}
            </style>
        </main>
    }
}
