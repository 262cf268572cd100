use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShadowStyle {
    Disabled,
    Cast { rotation_intensity: f64 },
}

impl ShadowStyle {
    /// Shadow following the sideways tilt of the element.
    pub fn cast(&self, rotate_y: f64) -> ShadowDescriptor {
        let rotation_intensity = match *self {
            ShadowStyle::Disabled => return ShadowDescriptor::None,
            ShadowStyle::Cast { rotation_intensity } => rotation_intensity,
        };
        let tilt = rotate_y.abs();
        if rotate_y < 0.0 {
            ShadowDescriptor::Drop {
                offset_x: -rotate_y,
                offset_y: rotation_intensity,
                blur: tilt * 3.0,
                alpha: 0.1,
            }
        } else if rotate_y > 0.0 {
            ShadowDescriptor::Drop {
                offset_x: rotate_y,
                offset_y: rotation_intensity,
                blur: tilt * 3.0,
                alpha: 0.1,
            }
        } else {
            ShadowDescriptor::Drop {
                offset_x: 0.0,
                offset_y: rotation_intensity.abs(),
                blur: rotation_intensity.abs() * 2.0,
                alpha: 0.07,
            }
        }
    }
}

/// A single box-shadow layer. Displays as a CSS `box-shadow` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShadowDescriptor {
    None,
    Drop {
        offset_x: f64,
        offset_y: f64,
        blur: f64,
        alpha: f64,
    },
}

impl fmt::Display for ShadowDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadowDescriptor::None => f.write_str("none"),
            ShadowDescriptor::Drop {
                offset_x,
                offset_y,
                blur,
                alpha,
            } => write!(f, "{offset_x}px {offset_y}px {blur}px rgba(0,0,0,{alpha})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_is_always_none() {
        for rotate_y in [-12.0, -0.5, 0.0, 3.0, 40.0] {
            assert_eq!(ShadowStyle::Disabled.cast(rotate_y).to_string(), "none");
        }
    }

    #[test]
    fn negative_tilt_mirrors_offset() {
        let shadow = ShadowStyle::Cast {
            rotation_intensity: 5.0,
        }
        .cast(-2.0);
        assert_eq!(shadow.to_string(), "2px 5px 6px rgba(0,0,0,0.1)");
    }

    #[test]
    fn positive_tilt_keeps_offset() {
        let shadow = ShadowStyle::Cast {
            rotation_intensity: 4.0,
        }
        .cast(1.5);
        assert_eq!(shadow.to_string(), "1.5px 4px 4.5px rgba(0,0,0,0.1)");
    }

    #[test]
    fn flat_element_casts_soft_downward_shadow() {
        let shadow = ShadowStyle::Cast {
            rotation_intensity: -5.0,
        }
        .cast(0.0);
        assert_eq!(shadow.to_string(), "0px 5px 10px rgba(0,0,0,0.07)");

        // -0.0 is flat too.
        let shadow = ShadowStyle::Cast {
            rotation_intensity: 5.0,
        }
        .cast(-0.0);
        assert_eq!(shadow.to_string(), "0px 5px 10px rgba(0,0,0,0.07)");
    }
}
