use yew::prelude::*;

use crate::hooks::{use_in_view, VISIBILITY_THRESHOLD};
use crate::motion::parallax::Direction;
use crate::motion::reveal::{RevealStyle, TriggerAnimation};

fn transition(duration: f64, delay: f64) -> String {
    format!(
        "transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s;",
        d = duration,
        delay = delay
    )
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(50.0)]
    pub distance: f64,
    #[prop_or(0.5)]
    pub duration: f64,
    #[prop_or(0.0)]
    pub delay: f64,
}

/// Slides children in from `direction` whenever they enter the viewport and
/// back out when they leave.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), VISIBILITY_THRESHOLD, false);
    let style = if in_view {
        RevealStyle::VISIBLE
    } else {
        RevealStyle::hidden_from(props.direction, props.distance)
    };

    html! {
        <div
            ref={node}
            class={classes!("scroll-reveal", props.class.clone())}
            style={format!("{} {}", style.to_css(), transition(props.duration, props.delay))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollTriggerProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub animation: TriggerAnimation,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(0.2)]
    pub threshold: f64,
    #[prop_or(0.5)]
    pub duration: f64,
    #[prop_or(0.0)]
    pub delay: f64,
}

#[function_component(ScrollTrigger)]
pub fn scroll_trigger(props: &ScrollTriggerProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), props.threshold, props.once);
    let style = if in_view {
        props.animation.visible()
    } else {
        props.animation.hidden()
    };

    html! {
        <div
            ref={node}
            class={classes!("scroll-trigger", props.class.clone())}
            style={format!("{} {}", style.to_css(), transition(props.duration, props.delay))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_applies_delay_to_both_properties() {
        assert_eq!(
            transition(0.6, 0.2),
            "transition: opacity 0.6s ease-out 0.2s, transform 0.6s ease-out 0.2s;"
        );
    }
}
