/// How far above and below the element (in viewport heights) the animation
/// window reaches.
const WINDOW_REACH: f64 = 1.5;

/// Scroll state captured while the owning element is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub element_top: f64,
    pub viewport_height: f64,
    pub scroll_y: f64,
}

/// The `[start, end]` range of scroll positions over which an element is
/// animated, with `mid` marking the scroll position where it sits at rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityWindow {
    pub start: f64,
    pub mid: f64,
    pub end: f64,
}

impl VisibilityWindow {
    pub fn around(element_top: f64, viewport_height: f64, scroll_offset: f64) -> Self {
        let reach = viewport_height * WINDOW_REACH;
        Self {
            start: element_top - reach + scroll_offset,
            mid: element_top + scroll_offset,
            end: element_top + reach + scroll_offset,
        }
    }

    pub fn for_sample(sample: &ScrollSample, scroll_offset: f64) -> Self {
        Self::around(sample.element_top, sample.viewport_height, scroll_offset)
    }

    /// An unmeasured viewport collapses the window to a single point.
    pub fn is_degenerate(&self) -> bool {
        !(self.start < self.mid && self.mid < self.end)
    }

    /// Maps `scroll_y` into `[0, 1]` with two linear segments so that `mid`
    /// always lands on exactly 0.5.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.is_degenerate() || scroll_y.is_nan() {
            return 0.0;
        }
        if scroll_y <= self.start {
            0.0
        } else if scroll_y >= self.end {
            1.0
        } else if scroll_y <= self.mid {
            self.rising(scroll_y)
        } else {
            self.falling(scroll_y)
        }
    }

    fn rising(&self, scroll_y: f64) -> f64 {
        0.5 * (scroll_y - self.start) / (self.mid - self.start)
    }

    fn falling(&self, scroll_y: f64) -> f64 {
        0.5 + 0.5 * (scroll_y - self.mid) / (self.end - self.mid)
    }
}

/// Window progress scaled by `scroll_multiplier`.
///
/// Not clamped: with a multiplier above 1, progress passes 1 once the
/// element is more than halfway through its window and the default curve
/// overshoots its resting pose.
pub fn scaled_progress(sample: &ScrollSample, scroll_offset: f64, scroll_multiplier: f64) -> f64 {
    VisibilityWindow::for_sample(sample, scroll_offset).progress(sample.scroll_y) * scroll_multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> VisibilityWindow {
        VisibilityWindow::around(1000.0, 800.0, 0.0)
    }

    #[test]
    fn window_boundaries_follow_viewport_height() {
        let w = window();
        assert_eq!(w.start, -200.0);
        assert_eq!(w.mid, 1000.0);
        assert_eq!(w.end, 2200.0);

        let shifted = VisibilityWindow::around(1000.0, 800.0, 150.0);
        assert_eq!(shifted.start, -50.0);
        assert_eq!(shifted.mid, 1150.0);
        assert_eq!(shifted.end, 2350.0);
    }

    #[test]
    fn both_segments_meet_at_mid() {
        let w = window();
        assert_eq!(w.rising(w.mid), 0.5);
        assert_eq!(w.falling(w.mid), 0.5);
        assert_eq!(w.progress(w.mid), 0.5);
    }

    #[test]
    fn clamps_outside_window() {
        let w = window();
        assert_eq!(w.progress(w.start), 0.0);
        assert_eq!(w.progress(-10_000.0), 0.0);
        assert_eq!(w.progress(w.end), 1.0);
        assert_eq!(w.progress(50_000.0), 1.0);
    }

    #[test]
    fn progress_never_decreases_with_scroll() {
        let w = window();
        let mut last = w.progress(-1000.0);
        let mut y = -1000.0;
        while y < 3500.0 {
            y += 7.5;
            let p = w.progress(y);
            assert!(p >= last, "progress dropped at scroll_y={y}: {p} < {last}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn segments_are_linear() {
        let w = window();
        // Halfway through the rising segment.
        assert_eq!(w.progress(400.0), 0.25);
        // Halfway through the falling segment.
        assert_eq!(w.progress(1600.0), 0.75);
    }

    #[test]
    fn zero_height_viewport_rests_at_zero() {
        let w = VisibilityWindow::around(1000.0, 0.0, 0.0);
        assert!(w.is_degenerate());
        for y in [-100.0, 999.0, 1000.0, 1001.0, 5000.0] {
            assert_eq!(w.progress(y), 0.0);
        }
    }

    #[test]
    fn nan_scroll_rests_at_zero() {
        assert_eq!(window().progress(f64::NAN), 0.0);
    }

    #[test]
    fn multiplier_overshoot_is_preserved() {
        let at_end = ScrollSample {
            element_top: 1000.0,
            viewport_height: 800.0,
            scroll_y: 2200.0,
        };
        assert_eq!(scaled_progress(&at_end, 0.0, 2.0), 2.0);

        let at_mid = ScrollSample {
            scroll_y: 1000.0,
            ..at_end
        };
        assert_eq!(scaled_progress(&at_mid, 0.0, 2.0), 1.0);
        assert_eq!(scaled_progress(&at_mid, 0.0, 0.5), 0.25);
    }
}
