use std::cell::RefCell;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, window, AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};

use super::{ScrollHub, ViewportEvent, ViewportReader};
use crate::listeners::Subscription;

struct InstalledHub {
    hub: ScrollHub,
    _scroll: Option<Closure<dyn Fn()>>,
    _resize: Option<Closure<dyn Fn()>>,
}

thread_local! {
    static WINDOW_HUB: RefCell<Option<InstalledHub>> = RefCell::new(None);
}

/// The browser window. Every instance shares one hub whose `scroll` and
/// `resize` listeners are attached on first use and live as long as the app.
#[derive(Clone)]
pub struct WindowViewport {
    hub: ScrollHub,
}

impl WindowViewport {
    pub fn shared() -> Self {
        let hub = WINDOW_HUB.with(|slot| {
            let mut slot = slot.borrow_mut();
            if let Some(installed) = slot.as_ref() {
                return installed.hub.clone();
            }
            let installed = install();
            let hub = installed.hub.clone();
            *slot = Some(installed);
            hub
        });
        Self { hub }
    }
}

fn install() -> InstalledHub {
    let hub = ScrollHub::default();
    let Some(window) = window() else {
        warn!("no window available, viewport events disabled");
        return InstalledHub {
            hub,
            _scroll: None,
            _resize: None,
        };
    };

    let scroll = {
        let hub = hub.clone();
        Closure::<dyn Fn()>::new(move || hub.dispatch(ViewportEvent::Scroll))
    };
    let resize = {
        let hub = hub.clone();
        Closure::<dyn Fn()>::new(move || hub.dispatch(ViewportEvent::Resize))
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        scroll.as_ref().unchecked_ref(),
        &options,
    ) {
        warn!("failed to attach scroll listener: {:?}", e);
    }
    if let Err(e) =
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
    {
        warn!("failed to attach resize listener: {:?}", e);
    }
    info!("viewport hub installed");

    InstalledHub {
        hub,
        _scroll: Some(scroll),
        _resize: Some(resize),
    }
}

/// Smooth-scrolls the element with `id` into view. Returns false when no
/// such element is on the page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top(smooth: bool) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        if smooth {
            options.set_behavior(ScrollBehavior::Smooth);
        }
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Distance from the viewport top to the element's top and bottom edges.
pub fn section_bounds(id: &str) -> Option<(f64, f64)> {
    let rect = window()?
        .document()?
        .get_element_by_id(id)?
        .get_bounding_client_rect();
    Some((rect.top(), rect.bottom()))
}

impl ViewportReader for WindowViewport {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|e| e.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    fn subscribe(&self, on_change: Box<dyn Fn(ViewportEvent)>) -> Subscription {
        self.hub.register(on_change)
    }
}

/// Watches one element's intersection with the viewport. Disconnects the
/// observer when dropped.
pub struct IntersectionGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl IntersectionGuard {
    /// Returns `None` when the browser refuses to build the observer; callers
    /// then simply never see the element as visible.
    pub fn observe(
        element: &Element,
        threshold: f64,
        on_change: impl Fn(bool) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            if let Some(entry) = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .last()
            {
                on_change(entry.is_intersecting());
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => observer,
                Err(e) => {
                    warn!("intersection observer unavailable: {:?}", e);
                    return None;
                }
            };
        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
