use yew::prelude::*;

use crate::sections::contact::ContactSection;
use crate::sections::hero::HeroSection;
use crate::sections::services::ServicesSection;
use crate::sections::testimonials::TestimonialsSection;

/// Section ids on the home page, top to bottom. The header highlights
/// whichever one sits under it.
pub const SECTIONS: [&str; 4] = ["hero", "services", "testimonials", "contact"];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <section id="hero" class="home-hero">
                <HeroSection />
            </section>
            <section id="services" class="home-band">
                <ServicesSection />
            </section>
            <section id="testimonials">
                <TestimonialsSection />
            </section>
            <section id="contact" class="home-band">
                <ContactSection />
            </section>
            <style>
                {r#"
                .home { min-height: 100vh; background: white; overflow-x: hidden; }
                .home-hero { min-height: 100vh; display: flex; align-items: center; }
                .home-band { background: #f9fafb; position: relative; }
                .section-heading { text-align: center; margin-bottom: 4rem; }
                .section-heading h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
                .section-heading p { color: #4b5563; max-width: 42rem; margin: 0 auto; }
                .heading-dark { color: black; }
                .heading-accent { color: #facc15; }
                "#}
            </style>
        </main>
    }
}
