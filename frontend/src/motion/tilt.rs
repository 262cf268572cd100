const MAX_TILT_DEG: f64 = 10.0;

/// Rotation `(rotate_x, rotate_y)` for a pointer at `(x, y)` inside a card of
/// the given size, both relative to the card's top-left corner. The card
/// leans away from the pointer.
pub fn tilt_for_pointer(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    if !(center_x > 0.0 && center_y > 0.0) {
        return (0.0, 0.0);
    }
    let rotate_x = ((y - center_y) / center_y) * MAX_TILT_DEG;
    let rotate_y = ((center_x - x) / center_x) * MAX_TILT_DEG;
    (rotate_x, rotate_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_flat() {
        assert_eq!(tilt_for_pointer(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn corners_hit_max_tilt() {
        assert_eq!(tilt_for_pointer(0.0, 0.0, 200.0, 100.0), (-10.0, 10.0));
        assert_eq!(tilt_for_pointer(200.0, 100.0, 200.0, 100.0), (10.0, -10.0));
    }

    #[test]
    fn collapsed_card_does_not_tilt() {
        assert_eq!(tilt_for_pointer(5.0, 5.0, 0.0, 0.0), (0.0, 0.0));
    }
}
