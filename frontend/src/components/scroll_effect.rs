use yew::prelude::*;

use crate::hooks::{use_scroll_sample, use_spring_transform};
use crate::motion::shadow::ShadowStyle;
use crate::motion::spring::SpringConfig;
use crate::motion::transform::{CustomTransform, ScrollEffect, TransformMode, TransformParameters};

#[derive(Properties, PartialEq)]
pub struct ScrollEffect3DProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(100.0)]
    pub depth: f64,
    #[prop_or(5.0)]
    pub rotation_intensity: f64,
    #[prop_or(0.0)]
    pub scroll_offset: f64,
    #[prop_or(1.0)]
    pub scroll_multiplier: f64,
    #[prop_or(0.0)]
    pub translate_x: f64,
    #[prop_or(0.0)]
    pub translate_y: f64,
    #[prop_or(0.0)]
    pub translate_z: f64,
    #[prop_or(0.0)]
    pub rotate_z: f64,
    #[prop_or(1500.0)]
    pub perspective: f64,
    #[prop_or(AttrValue::Static("center"))]
    pub transform_origin: AttrValue,
    #[prop_or(false)]
    pub disable_shadow: bool,
    /// Replaces the built-in curve when set.
    #[prop_or_default]
    pub custom: Option<CustomTransform>,
}

impl ScrollEffect3DProps {
    fn effect(&self) -> ScrollEffect {
        let mode = match &self.custom {
            Some(custom) => TransformMode::Custom(custom.clone()),
            None => TransformMode::Default(TransformParameters {
                depth: self.depth,
                rotation_intensity: self.rotation_intensity,
                translate_x: self.translate_x,
                translate_y: self.translate_y,
                translate_z: self.translate_z,
                rotate_z: self.rotate_z,
            }),
        };
        let shadow = if self.disable_shadow {
            ShadowStyle::Disabled
        } else {
            ShadowStyle::Cast {
                rotation_intensity: self.rotation_intensity,
            }
        };
        ScrollEffect {
            scroll_offset: self.scroll_offset,
            scroll_multiplier: self.scroll_multiplier,
            mode,
            shadow,
        }
    }
}

/// Tilts, pushes and scales its children in 3D as they travel through the
/// viewport.
#[function_component(ScrollEffect3D)]
pub fn scroll_effect_3d(props: &ScrollEffect3DProps) -> Html {
    let node = use_node_ref();
    let sample = use_scroll_sample(node.clone());
    let effect = props.effect();
    let target = effect.frame(&sample).transform;
    let transform = use_spring_transform(target, SpringConfig::default());
    // Shadow follows the smoothed tilt, not the raw one.
    let shadow = effect.shadow.cast(transform.rotate_y);

    let outer_style = format!(
        "position: relative; perspective: {}px; transform-style: preserve-3d; transform-origin: {};",
        props.perspective, props.transform_origin
    );
    let inner_style = format!(
        "position: relative; width: 100%; height: 100%; transform-style: preserve-3d; will-change: transform; transform: {};",
        transform.to_css()
    );

    html! {
        <div ref={node} class={classes!("scroll-effect-3d", props.class.clone())} style={outer_style}>
            <div class="scroll-effect-3d-layer" style={inner_style}>
                {
                    if effect.shadow != ShadowStyle::Disabled {
                        html! {
                            <div
                                class="scroll-effect-3d-shadow"
                                style={format!(
                                    "position: absolute; inset: 0; z-index: -1; border-radius: inherit; pointer-events: none; box-shadow: {};",
                                    shadow
                                )}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                { for props.children.iter() }
            </div>
        </div>
    }
}
