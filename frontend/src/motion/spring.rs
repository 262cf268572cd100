use super::transform::Transform;

const SETTLE_DISTANCE: f64 = 1e-3;
const SETTLE_VELOCITY: f64 = 1e-3;

/// Physical description of a critically damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Natural angular frequency, ω = sqrt(k / m).
    pub fn omega(&self) -> f64 {
        if self.mass <= 0.0 || self.stiffness <= 0.0 {
            return 0.0;
        }
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            mass: 1.2,
        }
    }
}

/// One critically damped axis, integrated with the closed-form solution
/// `x(t) = target + (c1 + c2 t) e^(-ωt)` so large frame gaps stay stable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub position: f64,
    pub velocity: f64,
    pub target: f64,
    omega: f64,
}

impl Spring {
    pub fn at(position: f64, config: SpringConfig) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            omega: config.omega(),
        }
    }

    pub fn is_settled(&self) -> bool {
        if !self.target.is_finite() {
            return self.velocity == 0.0;
        }
        (self.position - self.target).abs() < SETTLE_DISTANCE && self.velocity.abs() < SETTLE_VELOCITY
    }

    /// Advance by `dt` seconds. Returns true once settled.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.omega == 0.0 || !self.target.is_finite() {
            self.snap();
            return true;
        }
        let w = self.omega;
        let c1 = self.position - self.target;
        let c2 = self.velocity + w * c1;
        let decay = (-w * dt).exp();
        self.position = self.target + (c1 + c2 * dt) * decay;
        self.velocity = (c2 - w * (c1 + c2 * dt)) * decay;
        if self.is_settled() {
            self.snap();
            return true;
        }
        false
    }

    /// Step one frame and return the new position, or `None` once at rest.
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        if self.is_settled() {
            return None;
        }
        self.step(dt);
        Some(self.position)
    }

    fn snap(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }
}

/// A spring per transform component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringTransform {
    axes: [Spring; 7],
}

impl SpringTransform {
    pub fn at_rest(transform: Transform, config: SpringConfig) -> Self {
        let values = components(&transform);
        Self {
            axes: values.map(|v| Spring::at(v, config)),
        }
    }

    pub fn retarget(&mut self, target: Transform) {
        for (axis, value) in self.axes.iter_mut().zip(components(&target)) {
            axis.target = value;
        }
    }

    pub fn step(&mut self, dt: f64) -> bool {
        let mut settled = true;
        for axis in self.axes.iter_mut() {
            settled &= axis.step(dt);
        }
        settled
    }

    pub fn is_settled(&self) -> bool {
        self.axes.iter().all(Spring::is_settled)
    }

    /// Step one frame and return the new pose, or `None` once every axis is
    /// at rest.
    pub fn advance(&mut self, dt: f64) -> Option<Transform> {
        if self.is_settled() {
            return None;
        }
        self.step(dt);
        Some(self.current())
    }

    pub fn current(&self) -> Transform {
        let [rotate_x, rotate_y, rotate_z, z, x, y, scale] = self.axes.map(|a| a.position);
        Transform {
            rotate_x,
            rotate_y,
            rotate_z,
            z,
            x,
            y,
            scale,
        }
    }
}

fn components(t: &Transform) -> [f64; 7] {
    [t.rotate_x, t.rotate_y, t.rotate_z, t.z, t.x, t.y, t.scale]
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn default_spring_matches_wrapper_tuning() {
        let omega = SpringConfig::default().omega();
        assert!((omega - (100.0f64 / 1.2).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn critically_damped_spring_never_overshoots() {
        let mut spring = Spring::at(0.0, SpringConfig::default());
        spring.target = 10.0;
        let mut last = spring.position;
        for _ in 0..600 {
            let done = spring.step(FRAME);
            assert!(spring.position <= 10.0 + 1e-9);
            assert!(spring.position >= last - 1e-9);
            last = spring.position;
            if done {
                break;
            }
        }
        assert!(spring.is_settled());
        assert_eq!(spring.position, 10.0);
    }

    #[test]
    fn large_frame_gap_lands_on_target() {
        let mut spring = Spring::at(-20.0, SpringConfig::default());
        spring.target = 5.0;
        assert!(spring.step(30.0));
        assert_eq!(spring.position, 5.0);
    }

    #[test]
    fn degenerate_config_snaps() {
        let mut spring = Spring::at(3.0, SpringConfig { stiffness: 0.0, mass: 1.0 });
        spring.target = 8.0;
        assert!(spring.step(FRAME));
        assert_eq!(spring.position, 8.0);
    }

    #[test]
    fn transform_springs_converge_per_axis() {
        let mut springs = SpringTransform::at_rest(Transform::RESTING, SpringConfig::default());
        assert!(springs.is_settled());
        let target = Transform {
            rotate_x: 6.0,
            rotate_y: -3.0,
            rotate_z: 0.0,
            z: -100.0,
            x: 12.0,
            y: -4.0,
            scale: 0.95,
        };
        springs.retarget(target);
        assert!(!springs.is_settled());
        let mid = {
            springs.step(FRAME);
            springs.current()
        };
        assert!(mid.rotate_x > 0.0 && mid.rotate_x < 6.0);
        assert_eq!(mid.rotate_z, 0.0);

        for _ in 0..1000 {
            if springs.step(FRAME) {
                break;
            }
        }
        assert_eq!(springs.current(), target);
    }

    #[test]
    fn advance_stops_once_at_rest() {
        let mut springs = SpringTransform::at_rest(Transform::RESTING, SpringConfig::default());
        assert_eq!(springs.advance(FRAME), None);

        springs.retarget(Transform {
            rotate_x: 6.0,
            ..Transform::RESTING
        });
        let mut frames = 0;
        let mut last = None;
        while let Some(pose) = springs.advance(FRAME) {
            last = Some(pose);
            frames += 1;
            assert!(frames < 1000);
        }
        assert!(frames > 1);
        assert_eq!(last.map(|t| t.rotate_x), Some(6.0));
        assert_eq!(springs.advance(FRAME), None);

        let mut spring = Spring::at(0.0, SpringConfig::default());
        assert_eq!(spring.advance(FRAME), None);
        spring.target = 1.0;
        assert!(spring.advance(FRAME).is_some());

        spring.target = f64::NAN;
        spring.advance(FRAME);
        assert_eq!(spring.advance(FRAME), None);
    }
}
