use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::{ViewportEvent, ViewportReader};
use crate::listeners::Subscription;
use crate::motion::progress::ScrollSample;

/// Measurements for one decorative element. Scroll updates only land while
/// the element is in view; otherwise the last position is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportTracker {
    sample: ScrollSample,
    in_view: bool,
}

impl ViewportTracker {
    pub fn sample(&self) -> ScrollSample {
        self.sample
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// A missing element keeps the previous top.
    pub fn measure(&mut self, element_top: Option<f64>, viewport_height: f64) -> bool {
        let before = self.sample;
        if let Some(top) = element_top {
            self.sample.element_top = top;
        }
        self.sample.viewport_height = viewport_height;
        before != self.sample
    }

    /// Becoming visible samples the current position straight away.
    pub fn set_in_view(&mut self, in_view: bool, scroll_y: f64) -> bool {
        self.in_view = in_view;
        in_view && self.on_scroll(scroll_y)
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if !self.in_view || self.sample.scroll_y == scroll_y {
            return false;
        }
        self.sample.scroll_y = scroll_y;
        true
    }
}

/// A [`ViewportTracker`] wired to a [`ViewportReader`]. Holds the reader
/// subscription for as long as it lives.
pub struct TrackerBinding {
    tracker: Rc<RefCell<ViewportTracker>>,
    reader: Rc<dyn ViewportReader>,
    on_sample: Rc<dyn Fn(ScrollSample)>,
    _subscription: Subscription,
}

impl TrackerBinding {
    pub fn attach(
        reader: Rc<dyn ViewportReader>,
        measure_top: impl Fn() -> Option<f64> + 'static,
        on_sample: impl Fn(ScrollSample) + 'static,
    ) -> Self {
        let tracker = Rc::new(RefCell::new(ViewportTracker::default()));
        let on_sample: Rc<dyn Fn(ScrollSample)> = Rc::new(on_sample);

        tracker
            .borrow_mut()
            .measure(measure_top(), reader.viewport_height());
        on_sample(tracker.borrow().sample());

        let subscription = {
            let tracker = tracker.clone();
            let reader_for_events = reader.clone();
            let on_sample = on_sample.clone();
            reader.subscribe(Box::new(move |event| {
                let changed = {
                    let mut tracker = tracker.borrow_mut();
                    match event {
                        ViewportEvent::Resize => {
                            tracker.measure(measure_top(), reader_for_events.viewport_height())
                        }
                        ViewportEvent::Scroll => tracker.on_scroll(reader_for_events.scroll_y()),
                    }
                };
                if changed {
                    let sample = tracker.borrow().sample();
                    on_sample(sample);
                }
            }))
        };

        Self {
            tracker,
            reader,
            on_sample,
            _subscription: subscription,
        }
    }

    pub fn set_in_view(&self, in_view: bool) {
        let changed = self
            .tracker
            .borrow_mut()
            .set_in_view(in_view, self.reader.scroll_y());
        debug!("tracked element in view: {}", in_view);
        if changed {
            let sample = self.tracker.borrow().sample();
            (self.on_sample)(sample);
        }
    }

    pub fn sample(&self) -> ScrollSample {
        self.tracker.borrow().sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::fake::FakeViewport;
    use std::cell::Cell;

    fn bind(fake: &FakeViewport, top: f64) -> (TrackerBinding, Rc<Cell<usize>>) {
        let updates = Rc::new(Cell::new(0));
        let binding = {
            let updates = updates.clone();
            TrackerBinding::attach(
                Rc::new(fake.clone()),
                move || Some(top),
                move |_| updates.set(updates.get() + 1),
            )
        };
        (binding, updates)
    }

    #[test]
    fn measures_on_attach() {
        let fake = FakeViewport::new(800.0);
        let (binding, updates) = bind(&fake, 1000.0);
        let sample = binding.sample();
        assert_eq!(sample.element_top, 1000.0);
        assert_eq!(sample.viewport_height, 800.0);
        assert_eq!(updates.get(), 1);
    }

    #[test]
    fn ignores_scroll_while_out_of_view() {
        let fake = FakeViewport::new(800.0);
        let (binding, updates) = bind(&fake, 1000.0);
        fake.scroll_to(300.0);
        assert_eq!(binding.sample().scroll_y, 0.0);
        assert_eq!(updates.get(), 1);

        binding.set_in_view(true);
        assert_eq!(binding.sample().scroll_y, 300.0);
        fake.scroll_to(450.0);
        assert_eq!(binding.sample().scroll_y, 450.0);

        binding.set_in_view(false);
        fake.scroll_to(2000.0);
        assert_eq!(binding.sample().scroll_y, 450.0);
        assert_eq!(updates.get(), 3);
    }

    #[test]
    fn remeasures_on_resize_even_when_hidden() {
        let fake = FakeViewport::new(800.0);
        let (binding, _) = bind(&fake, 1000.0);
        fake.resize(600.0);
        assert_eq!(binding.sample().viewport_height, 600.0);
    }

    #[test]
    fn missing_element_keeps_resting_sample() {
        let fake = FakeViewport::new(800.0);
        let binding = TrackerBinding::attach(Rc::new(fake.clone()), || None, |_| {});
        binding.set_in_view(true);
        fake.scroll_to(120.0);
        let sample = binding.sample();
        assert_eq!(sample.element_top, 0.0);
        assert_eq!(sample.scroll_y, 120.0);
    }

    #[test]
    fn dropping_mid_scroll_leaves_no_listeners() {
        let fake = FakeViewport::new(800.0);
        let (first, _) = bind(&fake, 100.0);
        let (second, _) = bind(&fake, 2000.0);
        assert_eq!(fake.hub.listener_count(), 2);

        first.set_in_view(true);
        second.set_in_view(true);
        fake.scroll_to(10.0);
        fake.scroll_to(20.0);

        drop(first);
        assert_eq!(fake.hub.listener_count(), 1);
        fake.scroll_to(30.0);
        drop(second);
        assert_eq!(fake.hub.listener_count(), 0);
        fake.scroll_to(40.0);
    }

    #[test]
    fn tracker_reports_only_real_changes() {
        let mut tracker = ViewportTracker::default();
        assert!(tracker.measure(Some(10.0), 500.0));
        assert!(!tracker.measure(Some(10.0), 500.0));
        assert!(!tracker.on_scroll(5.0));
        assert!(tracker.set_in_view(true, 5.0));
        assert!(!tracker.on_scroll(5.0));
        assert!(tracker.in_view());
    }
}
