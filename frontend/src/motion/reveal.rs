use super::parallax::Direction;

/// Offset a revealed element starts from before sliding into place.
pub fn entry_offset(direction: Direction, distance: f64) -> (f64, f64) {
    match direction {
        Direction::Up => (0.0, distance),
        Direction::Down => (0.0, -distance),
        Direction::Left => (distance, 0.0),
        Direction::Right => (-distance, 0.0),
    }
}

/// Style snapshot for appear-on-scroll animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl RevealStyle {
    pub const VISIBLE: RevealStyle = RevealStyle {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn hidden_from(direction: Direction, distance: f64) -> Self {
        let (x, y) = entry_offset(direction, distance);
        Self {
            opacity: 0.0,
            x,
            y,
            ..Self::VISIBLE
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerAnimation {
    Fade,
    Slide,
    Scale,
    Rotate,
}

impl Default for TriggerAnimation {
    fn default() -> Self {
        TriggerAnimation::Fade
    }
}

impl TriggerAnimation {
    pub fn hidden(&self) -> RevealStyle {
        let base = RevealStyle {
            opacity: 0.0,
            ..RevealStyle::VISIBLE
        };
        match self {
            TriggerAnimation::Fade => base,
            TriggerAnimation::Slide => RevealStyle { x: -100.0, ..base },
            TriggerAnimation::Scale => RevealStyle { scale: 0.8, ..base },
            TriggerAnimation::Rotate => RevealStyle {
                rotate: -15.0,
                ..base
            },
        }
    }

    pub fn visible(&self) -> RevealStyle {
        RevealStyle::VISIBLE
    }
}

/// Latches the first time an element becomes visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnceLatch {
    triggered: bool,
}

impl OnceLatch {
    pub fn observe(&mut self, in_view: bool) -> bool {
        self.triggered |= in_view;
        self.triggered
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_offset_starts_opposite_to_travel() {
        assert_eq!(entry_offset(Direction::Up, 50.0), (0.0, 50.0));
        assert_eq!(entry_offset(Direction::Down, 50.0), (0.0, -50.0));
        assert_eq!(entry_offset(Direction::Left, 30.0), (30.0, 0.0));
        assert_eq!(entry_offset(Direction::Right, 30.0), (-30.0, 0.0));
    }

    #[test]
    fn hidden_reveal_is_transparent_and_displaced() {
        let hidden = RevealStyle::hidden_from(Direction::Up, 50.0);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.y, 50.0);
        assert_eq!(hidden.scale, 1.0);
    }

    #[test]
    fn trigger_variants_hide_differently_and_show_the_same() {
        assert_eq!(TriggerAnimation::Slide.hidden().x, -100.0);
        assert_eq!(TriggerAnimation::Scale.hidden().scale, 0.8);
        assert_eq!(TriggerAnimation::Rotate.hidden().rotate, -15.0);
        for animation in [
            TriggerAnimation::Fade,
            TriggerAnimation::Slide,
            TriggerAnimation::Scale,
            TriggerAnimation::Rotate,
        ] {
            assert_eq!(animation.hidden().opacity, 0.0);
            assert_eq!(animation.visible(), RevealStyle::VISIBLE);
        }
    }

    #[test]
    fn latch_stays_triggered_after_leaving_view() {
        let mut latch = OnceLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.triggered());
    }

    #[test]
    fn reveal_css() {
        assert_eq!(
            RevealStyle::VISIBLE.to_css(),
            "opacity: 1; transform: translate(0px, 0px) scale(1) rotate(0deg);"
        );
    }
}
