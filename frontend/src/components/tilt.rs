use web_sys::Element;
use yew::prelude::*;

use crate::hooks::use_spring_transform;
use crate::motion::spring::SpringConfig;
use crate::motion::tilt::tilt_for_pointer;
use crate::motion::transform::Transform;

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(1000.0)]
    pub perspective: f64,
}

/// Card that leans towards the pointer and settles back when it leaves.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_state(|| (0.0_f64, 0.0_f64));

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            tilt.set(tilt_for_pointer(
                e.client_x() as f64 - rect.left(),
                e.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            ));
        })
    };
    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set((0.0, 0.0)))
    };

    let (rotate_x, rotate_y) = *tilt;
    let transform = use_spring_transform(
        Transform {
            rotate_x,
            rotate_y,
            ..Transform::RESTING
        },
        SpringConfig::default(),
    );

    html! {
        <div class="tilt-card-frame" style={format!("perspective: {}px;", props.perspective)}>
            <div
                ref={node}
                class={classes!("tilt-card", props.class.clone())}
                style={format!("transform-style: preserve-3d; transform: {};", transform.to_css())}
                {onmousemove}
                {onmouseleave}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PerspectiveProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.0)]
    pub rotate_x: f64,
    #[prop_or(0.0)]
    pub rotate_y: f64,
    #[prop_or(1000.0)]
    pub perspective: f64,
}

/// Fixed rotation, eased in with the shared spring.
#[function_component(Perspective)]
pub fn perspective(props: &PerspectiveProps) -> Html {
    let transform = use_spring_transform(
        Transform {
            rotate_x: props.rotate_x,
            rotate_y: props.rotate_y,
            ..Transform::RESTING
        },
        SpringConfig::default(),
    );

    html! {
        <div class={classes!("perspective", props.class.clone())} style={format!("perspective: {}px;", props.perspective)}>
            <div style={format!("transform-style: preserve-3d; transform: {};", transform.to_css())}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
