use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::parallax::ParallaxScroll;
use crate::components::scroll_effect::ScrollEffect3D;
use crate::i18n::use_i18n;
use crate::viewport::window::scroll_to_section;

const TYPE_DELAY_MILLIS: u32 = 100;

/// First `count` characters of `text`.
pub fn typed_prefix(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Next typewriter count, or `None` once the whole headline is shown.
pub fn next_typed(count: usize, headline: &str) -> Option<usize> {
    (count < headline.chars().count()).then(|| count + 1)
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let i18n = use_i18n();
    let headline = i18n.t(
        "hero",
        "headline",
        "Where Ideas Meet Innovation – Your Digital Solutions Start Here!",
    );
    let typed = use_state(|| 0usize);

    // Restart the typewriter when the language changes.
    {
        let typed = typed.clone();
        use_effect_with_deps(
            move |_| {
                typed.set(0);
                || ()
            },
            headline.clone(),
        );
    }

    {
        let deps = (*typed, headline.clone());
        let typed = typed.clone();
        use_effect_with_deps(
            move |(count, headline): &(usize, String)| {
                let timeout = next_typed(*count, headline)
                    .map(|next| Timeout::new(TYPE_DELAY_MILLIS, move || typed.set(next)));
                move || drop(timeout)
            },
            deps,
        );
    }

    let explore = Callback::from(|_: MouseEvent| {
        scroll_to_section("services");
    });

    html! {
        <div class="hero">
            <ParallaxScroll speed={0.3}>
                <ScrollEffect3D depth={50.0} rotation_intensity={3.0} disable_shadow=true>
                    <h1 class="hero-headline">
                        { typed_prefix(&headline, *typed) }
                        <span class="hero-caret">{"|"}</span>
                    </h1>
                </ScrollEffect3D>
            </ParallaxScroll>
            <button class="hero-explore" onclick={explore}>
                { i18n.t("hero", "explore", "Explore Services") }
            </button>
            <style>
                {r#"
                .hero {
                    min-height: 90vh; display: flex; flex-direction: column;
                    align-items: center; justify-content: center; padding: 0 1rem;
                }
                .hero-headline {
                    font-size: clamp(1.8rem, 4vw, 3rem); font-weight: 700;
                    text-align: center; max-width: 56rem; color: #111827; margin-bottom: 1.5rem;
                }
                .hero-caret { animation: blink 1s step-end infinite; }
                @keyframes blink { 50% { opacity: 0; } }
                .hero-explore {
                    height: 3.5rem; padding: 0 2rem; font-size: 1.1rem; font-weight: 600;
                    border: none; border-radius: 9999px; color: white; cursor: pointer;
                    background: linear-gradient(to right, #facc15, #eab308);
                    box-shadow: 0 10px 15px rgba(0,0,0,0.1);
                    transition: transform 0.2s ease;
                }
                .hero-explore:hover { transform: scale(1.05); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_counts_characters_not_bytes() {
        assert_eq!(typed_prefix("حيث تلتقي", 3), "حيث");
        assert_eq!(typed_prefix("Ideas – here", 7), "Ideas –");
        assert_eq!(typed_prefix("abc", 10), "abc");
        assert_eq!(typed_prefix("abc", 0), "");
    }

    #[test]
    fn typing_advances_until_headline_is_complete() {
        assert_eq!(next_typed(0, "حيث"), Some(1));
        assert_eq!(next_typed(2, "حيث"), Some(3));
        assert_eq!(next_typed(3, "حيث"), None);
        assert_eq!(next_typed(0, ""), None);
    }
}
