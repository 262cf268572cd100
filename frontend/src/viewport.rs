//! Viewport reads and change notifications, behind a trait so trackers can
//! be driven by a scripted viewport in tests.

pub mod tracker;
pub mod window;

use crate::listeners::{ListenerSet, Subscription};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportEvent {
    Scroll,
    Resize,
}

pub trait ViewportReader {
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Total scrollable height of the document.
    fn document_height(&self) -> f64;
    fn subscribe(&self, on_change: Box<dyn Fn(ViewportEvent)>) -> Subscription;
}

/// One listener set shared by every tracker on the page; the real window
/// attaches exactly one `scroll` and one `resize` handler that feed it.
#[derive(Clone, Default)]
pub struct ScrollHub {
    listeners: ListenerSet<ViewportEvent>,
}

impl ScrollHub {
    pub fn register(&self, on_change: Box<dyn Fn(ViewportEvent)>) -> Subscription {
        self.listeners.register(move |event| on_change(*event))
    }

    pub fn dispatch(&self, event: ViewportEvent) {
        self.listeners.emit(&event);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Scripted viewport for tests.
    #[derive(Clone, Default)]
    pub struct FakeViewport {
        pub hub: ScrollHub,
        scroll_y: Rc<Cell<f64>>,
        height: Rc<Cell<f64>>,
        document_height: Rc<Cell<f64>>,
    }

    impl FakeViewport {
        pub fn new(height: f64) -> Self {
            let fake = Self::default();
            fake.height.set(height);
            fake.document_height.set(height * 5.0);
            fake
        }

        pub fn scroll_to(&self, y: f64) {
            self.scroll_y.set(y);
            self.hub.dispatch(ViewportEvent::Scroll);
        }

        pub fn resize(&self, height: f64) {
            self.height.set(height);
            self.hub.dispatch(ViewportEvent::Resize);
        }
    }

    impl ViewportReader for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn viewport_height(&self) -> f64 {
            self.height.get()
        }

        fn document_height(&self) -> f64 {
            self.document_height.get()
        }

        fn subscribe(&self, on_change: Box<dyn Fn(ViewportEvent)>) -> Subscription {
            self.hub.register(on_change)
        }
    }
}
