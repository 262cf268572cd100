use yew::prelude::*;

use crate::components::reveal::{ScrollReveal, ScrollTrigger};
use crate::components::tilt::TiltCard;
use crate::i18n::use_i18n;
use crate::motion::parallax::Direction;
use crate::motion::reveal::TriggerAnimation;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    emoji: &'static str,
    review: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Marketing Director",
        company: "TechGrowth Inc",
        emoji: "👩‍💼",
        review: "Maidua transformed our online presence with their exceptional web development services. The team was professional, responsive, and delivered beyond our expectations.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "CEO",
        company: "Innovate Solutions",
        emoji: "👨‍💻",
        review: "Working with Maidua was a game-changer for our startup. Their creative designs and technical expertise helped us stand out in a competitive market.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Product Manager",
        company: "Digital Ventures",
        emoji: "👩‍🎨",
        review: "The attention to detail was impressive! Maidua's team took the time to understand our brand and delivered a website that perfectly captures our vision and values.",
    },
    Testimonial {
        name: "David Thompson",
        role: "Creative Director",
        company: "Artisan Media",
        emoji: "🎬",
        review: "As a design professional myself, I have high standards. Maidua exceeded them all with their innovative approach to our content creation needs. Highly recommended!",
    },
];

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let i18n = use_i18n();

    html! {
        <div class="testimonials">
            <ScrollTrigger animation={TriggerAnimation::Fade} threshold={0.1} duration={0.6}>
                <div class="section-heading">
                    <h2>
                        <span class="heading-dark">{ i18n.t("testimonials", "title.what", "What Our ") }</span>
                        <span class="heading-accent">{ i18n.t("testimonials", "title.clients", "Clients") }</span>
                        <span class="heading-dark">{ i18n.t("testimonials", "title.say", " Say") }</span>
                    </h2>
                    <p>{ i18n.t("testimonials", "subtitle", "Don't just take our word for it. Here's what our clients have to say about our services.") }</p>
                </div>
            </ScrollTrigger>
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(index, t)| html! {
                    <ScrollReveal key={t.name} direction={Direction::Right} distance={50.0} delay={0.2 * index as f64}>
                        <TiltCard class="testimonial-card">
                            <div class="testimonial-emoji">{ t.emoji }</div>
                            <h3>{ t.name }</h3>
                            <p class="testimonial-role">{ format!("{}, {}", t.role, t.company) }</p>
                            <p class="testimonial-review">{ t.review }</p>
                        </TiltCard>
                    </ScrollReveal>
                }) }
            </div>
            <style>
                {r#"
                .testimonials { max-width: 72rem; margin: 0 auto; padding: 5rem 1rem; }
                .testimonials-grid {
                    display: grid; gap: 1.5rem;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                }
                .testimonial-card {
                    background: white; border-radius: 1.5rem; padding: 1rem; height: 100%;
                    text-align: center; box-shadow: 0 4px 20px rgba(0,0,0,0.06); cursor: pointer;
                }
                .testimonial-emoji { font-size: 2.5rem; }
                .testimonial-role { font-size: 0.85rem; color: #6b7280; min-height: 2.5rem; }
                .testimonial-review { font-size: 0.9rem; line-height: 1.6; }
                "#}
            </style>
        </div>
    }
}
