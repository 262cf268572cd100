use yew::prelude::*;

use crate::hooks::{use_page_scroll, use_spring_value};
use crate::motion::page::{page_progress, percentage};
use crate::motion::spring::SpringConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarPosition {
    #[default]
    Top,
    Bottom,
}

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    #[prop_or(4.0)]
    pub height: f64,
    #[prop_or(AttrValue::Static("#FFCC00"))]
    pub color: AttrValue,
    #[prop_or_default]
    pub position: BarPosition,
    #[prop_or(false)]
    pub show_percentage: bool,
}

/// Fixed bar showing how far the page has been scrolled.
#[function_component(ScrollProgress)]
pub fn scroll_progress(props: &ScrollProgressProps) -> Html {
    let page = use_page_scroll();
    let target = page_progress(page.scroll_y, page.document_height, page.viewport_height);
    let progress = use_spring_value(target, SpringConfig::default());

    let edge = match props.position {
        BarPosition::Top => "top: 0;",
        BarPosition::Bottom => "bottom: 0;",
    };
    let bar_style = format!(
        "position: fixed; left: 0; right: 0; {} height: {}px; background: {}; transform-origin: 0% 50%; transform: scaleX({}); z-index: 60;",
        edge,
        props.height,
        props.color,
        progress.clamp(0.0, 1.0)
    );

    html! {
        <>
            <div class="scroll-progress" style={bar_style} />
            if props.show_percentage {
                <div
                    class="scroll-progress-label"
                    style={format!("position: fixed; right: 1rem; {} z-index: 60; font-size: 0.75rem; margin: 0.5rem 0;", edge)}
                >
                    { format!("{}%", percentage(target)) }
                </div>
            }
        </>
    }
}
