use std::fmt;
use std::rc::Rc;

use super::progress::{scaled_progress, ScrollSample, VisibilityWindow};
use super::shadow::{ShadowDescriptor, ShadowStyle};

/// Rotation (degrees), translation (px) and scale applied to decorative
/// content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
    pub z: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Transform {
    pub const RESTING: Transform = Transform {
        rotate_x: 0.0,
        rotate_y: 0.0,
        rotate_z: 0.0,
        z: 0.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, {}px) rotateX({}deg) rotateY({}deg) rotateZ({}deg) scale({})",
            self.x, self.y, self.z, self.rotate_x, self.rotate_y, self.rotate_z, self.scale
        )
    }

    pub fn is_finite(&self) -> bool {
        [
            self.rotate_x,
            self.rotate_y,
            self.rotate_z,
            self.z,
            self.x,
            self.y,
            self.scale,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Inputs of the built-in scroll curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformParameters {
    pub depth: f64,
    pub rotation_intensity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub translate_z: f64,
    pub rotate_z: f64,
}

impl Default for TransformParameters {
    fn default() -> Self {
        Self {
            depth: 100.0,
            rotation_intensity: 5.0,
            translate_x: 0.0,
            translate_y: 0.0,
            translate_z: 0.0,
            rotate_z: 0.0,
        }
    }
}

impl TransformParameters {
    pub fn apply(&self, progress: f64) -> Transform {
        let swing = 1.0 - 2.0 * progress;
        Transform {
            rotate_x: self.rotation_intensity * 1.2 * swing,
            rotate_y: (-self.rotation_intensity / 1.5) * swing,
            rotate_z: self.rotate_z * swing,
            z: self.depth * (progress - 0.5) * 2.0 + self.translate_z,
            x: self.translate_x * swing,
            y: self.translate_y * swing,
            scale: 0.95 + 0.05 * (1.0 - (2.0 * progress - 1.0).abs()),
        }
    }
}

/// A bespoke progress → transform curve. Compared by identity so it can sit
/// in component properties.
#[derive(Clone)]
pub struct CustomTransform(Rc<dyn Fn(f64) -> Transform>);

impl CustomTransform {
    pub fn new(f: impl Fn(f64) -> Transform + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn apply(&self, progress: f64) -> Transform {
        (self.0)(progress)
    }
}

impl PartialEq for CustomTransform {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomTransform(..)")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TransformMode {
    Default(TransformParameters),
    Custom(CustomTransform),
}

impl TransformMode {
    pub fn apply(&self, progress: f64) -> Transform {
        match self {
            TransformMode::Default(params) => params.apply(progress),
            TransformMode::Custom(custom) => custom.apply(progress),
        }
    }
}

/// Everything a scroll-driven 3D wrapper needs to turn a [`ScrollSample`]
/// into a rendered frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollEffect {
    pub scroll_offset: f64,
    /// Values above 1 overshoot the curve; see [`scaled_progress`].
    pub scroll_multiplier: f64,
    pub mode: TransformMode,
    pub shadow: ShadowStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub progress: f64,
    pub transform: Transform,
    pub shadow: ShadowDescriptor,
}

impl ScrollEffect {
    pub fn progress(&self, sample: &ScrollSample) -> f64 {
        scaled_progress(sample, self.scroll_offset, self.scroll_multiplier)
    }

    /// Frame for `sample`. An unmeasured element (collapsed window) renders
    /// at rest with a flat shadow.
    pub fn frame(&self, sample: &ScrollSample) -> Frame {
        let progress = self.progress(sample);
        let transform = if VisibilityWindow::for_sample(sample, self.scroll_offset).is_degenerate() {
            Transform::RESTING
        } else {
            self.mode.apply(progress)
        };
        let shadow = self.shadow.cast(transform.rotate_y);
        Frame {
            progress,
            transform,
            shadow,
        }
    }
}

impl Default for ScrollEffect {
    fn default() -> Self {
        let params = TransformParameters::default();
        Self {
            scroll_offset: 0.0,
            scroll_multiplier: 1.0,
            shadow: ShadowStyle::Cast {
                rotation_intensity: params.rotation_intensity,
            },
            mode: TransformMode::Default(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn sample(scroll_y: f64) -> ScrollSample {
        ScrollSample {
            element_top: 1000.0,
            viewport_height: 800.0,
            scroll_y,
        }
    }

    #[test]
    fn scale_peaks_at_midpoint() {
        let params = TransformParameters::default();
        assert_eq!(params.apply(0.5).scale, 1.0);
        assert!(close(params.apply(0.0).scale, 0.95));
        assert!(close(params.apply(1.0).scale, 0.95));
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            let s = params.apply(p).scale;
            assert!(s <= 1.0 && s >= 0.95 - EPS, "scale {s} out of range at {p}");
        }
    }

    #[test]
    fn midpoint_is_neutral_for_any_parameters() {
        for (intensity, tx, ty, rz) in [(5.0, 0.0, 0.0, 0.0), (12.0, -40.0, 30.0, 8.0), (-3.0, 7.0, -2.5, -90.0)] {
            let params = TransformParameters {
                rotation_intensity: intensity,
                translate_x: tx,
                translate_y: ty,
                rotate_z: rz,
                ..TransformParameters::default()
            };
            let t = params.apply(0.5);
            assert_eq!(t.rotate_x, 0.0);
            assert_eq!(t.rotate_y, 0.0);
            assert_eq!(t.rotate_z, 0.0);
            assert_eq!(t.x, 0.0);
            assert_eq!(t.y, 0.0);
        }
    }

    #[test]
    fn depth_moves_through_translate_z() {
        let params = TransformParameters {
            depth: 100.0,
            translate_z: 10.0,
            ..TransformParameters::default()
        };
        assert_eq!(params.apply(0.0).z, -90.0);
        assert_eq!(params.apply(0.5).z, 10.0);
        assert_eq!(params.apply(1.0).z, 110.0);
    }

    #[test]
    fn element_centered_in_window_rests() {
        let effect = ScrollEffect::default();
        let frame = effect.frame(&sample(1000.0));
        assert_eq!(frame.progress, 0.5);
        assert_eq!(frame.transform.scale, 1.0);
        assert_eq!(frame.transform.rotate_x, 0.0);
        assert_eq!(frame.transform.rotate_y, 0.0);
        assert_eq!(frame.transform.rotate_z, 0.0);
        assert_eq!(frame.transform.x, 0.0);
        assert_eq!(frame.transform.y, 0.0);
    }

    #[test]
    fn window_start_is_fully_tilted() {
        let effect = ScrollEffect::default();
        let frame = effect.frame(&sample(-200.0));
        assert_eq!(frame.progress, 0.0);
        assert!(close(frame.transform.scale, 0.95));
        assert!(close(frame.transform.rotate_x, 5.0 * 1.2));
        assert!(close(frame.transform.rotate_y, -5.0 / 1.5));
    }

    #[test]
    fn overshoot_runs_past_the_resting_pose() {
        let effect = ScrollEffect {
            scroll_multiplier: 2.0,
            ..ScrollEffect::default()
        };
        let frame = effect.frame(&sample(2200.0));
        assert_eq!(frame.progress, 2.0);
        // swing = 1 - 2*2 = -3
        assert!(close(frame.transform.rotate_x, 5.0 * 1.2 * -3.0));
        assert!(close(frame.transform.scale, 0.95 + 0.05 * (1.0 - 3.0)));
        assert_eq!(frame.transform.z, 300.0);
    }

    #[test]
    fn custom_mode_receives_scaled_progress() {
        let effect = ScrollEffect {
            scroll_multiplier: 0.5,
            mode: TransformMode::Custom(CustomTransform::new(|p| Transform {
                rotate_z: p * 360.0,
                ..Transform::RESTING
            })),
            ..ScrollEffect::default()
        };
        let frame = effect.frame(&sample(2200.0));
        assert_eq!(frame.progress, 0.5);
        assert_eq!(frame.transform.rotate_z, 180.0);
        assert_eq!(frame.transform.rotate_x, 0.0);
    }

    #[test]
    fn unmeasured_viewport_stays_finite() {
        let effect = ScrollEffect::default();
        let frame = effect.frame(&ScrollSample {
            element_top: 400.0,
            viewport_height: 0.0,
            scroll_y: 400.0,
        });
        assert_eq!(frame.progress, 0.0);
        assert!(frame.transform.is_finite());
        assert_eq!(frame.transform, Transform::RESTING);
    }

    #[test]
    fn unmeasured_element_renders_at_rest() {
        let frame = ScrollEffect::default().frame(&ScrollSample::default());
        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.transform, Transform::RESTING);
        assert_eq!(frame.shadow, ScrollEffect::default().shadow.cast(0.0));

        let custom = ScrollEffect {
            mode: TransformMode::Custom(CustomTransform::new(|_| Transform {
                rotate_x: 45.0,
                ..Transform::RESTING
            })),
            ..ScrollEffect::default()
        };
        assert_eq!(custom.frame(&ScrollSample::default()).transform, Transform::RESTING);
    }

    #[test]
    fn css_lists_every_component() {
        let css = Transform::RESTING.to_css();
        assert_eq!(
            css,
            "translate3d(0px, 0px, 0px) rotateX(0deg) rotateY(0deg) rotateZ(0deg) scale(1)"
        );
    }

    #[test]
    fn custom_transforms_compare_by_identity() {
        let a = CustomTransform::new(|_| Transform::RESTING);
        let b = CustomTransform::new(|_| Transform::RESTING);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
