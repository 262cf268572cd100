/// Fraction of the document scrolled, clamped to `[0, 1]`. Pages shorter
/// than the viewport report 0.
pub fn page_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) || scroll_y.is_nan() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn percentage(progress: f64) -> u32 {
    (progress.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_over_scrollable_height() {
        assert_eq!(page_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(page_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(page_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(page_progress(2600.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_page_has_no_progress() {
        assert_eq!(page_progress(0.0, 600.0, 900.0), 0.0);
        assert_eq!(page_progress(10.0, 900.0, 900.0), 0.0);
    }

    #[test]
    fn percentage_rounds() {
        assert_eq!(percentage(0.0), 0);
        assert_eq!(percentage(0.334), 33);
        assert_eq!(percentage(0.335), 34);
        assert_eq!(percentage(1.0), 100);
    }
}
