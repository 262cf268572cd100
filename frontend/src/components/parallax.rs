use yew::prelude::*;

use crate::hooks::{use_scroll_sample, use_spring_value};
use crate::motion::parallax::{parallax_offset, parallax_progress, Direction};
use crate::motion::spring::SpringConfig;

#[derive(Properties, PartialEq)]
pub struct ParallaxScrollProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.5)]
    pub speed: f64,
    #[prop_or_default]
    pub direction: Direction,
}

/// Drifts its children along `direction` while the section scrolls past.
#[function_component(ParallaxScroll)]
pub fn parallax_scroll(props: &ParallaxScrollProps) -> Html {
    let node = use_node_ref();
    let sample = use_scroll_sample(node.clone());
    let progress = use_spring_value(parallax_progress(&sample), SpringConfig::default());
    let (x, y) = parallax_offset(props.direction, props.speed, progress);

    html! {
        <div ref={node} class={classes!("parallax-scroll", props.class.clone())} style="position: relative; overflow: hidden;">
            <div style={format!("transform: translate3d({}px, {}px, 0); will-change: transform;", x, y)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
