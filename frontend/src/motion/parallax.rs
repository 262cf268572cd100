use super::progress::ScrollSample;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Up
    }
}

/// Progress through a window spanning one viewport height either side of
/// the element, clamped to `[0, 1]`.
pub fn parallax_progress(sample: &ScrollSample) -> f64 {
    let start = sample.element_top - sample.viewport_height;
    let end = sample.element_top + sample.viewport_height;
    if !(end > start) || sample.scroll_y.is_nan() {
        return 0.0;
    }
    ((sample.scroll_y - start) / (end - start)).clamp(0.0, 1.0)
}

/// Translation `(x, y)` in px for the given drift direction.
pub fn parallax_offset(direction: Direction, speed: f64, progress: f64) -> (f64, f64) {
    let travel = 100.0 * speed * progress;
    match direction {
        Direction::Up => (0.0, -travel),
        Direction::Down => (0.0, travel),
        Direction::Left => (-travel, 0.0),
        Direction::Right => (travel, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scroll_y: f64) -> ScrollSample {
        ScrollSample {
            element_top: 1000.0,
            viewport_height: 500.0,
            scroll_y,
        }
    }

    #[test]
    fn progress_is_linear_and_clamped() {
        assert_eq!(parallax_progress(&sample(0.0)), 0.0);
        assert_eq!(parallax_progress(&sample(500.0)), 0.0);
        assert_eq!(parallax_progress(&sample(1000.0)), 0.5);
        assert_eq!(parallax_progress(&sample(1250.0)), 0.75);
        assert_eq!(parallax_progress(&sample(4000.0)), 1.0);
    }

    #[test]
    fn zero_height_viewport_does_not_move() {
        let s = ScrollSample {
            element_top: 300.0,
            viewport_height: 0.0,
            scroll_y: 300.0,
        };
        assert_eq!(parallax_progress(&s), 0.0);
    }

    #[test]
    fn offset_follows_direction() {
        assert_eq!(parallax_offset(Direction::Up, 0.5, 1.0), (0.0, -50.0));
        assert_eq!(parallax_offset(Direction::Down, 0.5, 1.0), (0.0, 50.0));
        assert_eq!(parallax_offset(Direction::Left, 0.2, 0.5), (-10.0, 0.0));
        assert_eq!(parallax_offset(Direction::Right, 0.2, 0.5), (10.0, 0.0));
    }
}
