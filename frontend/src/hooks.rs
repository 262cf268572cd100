use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::motion::progress::ScrollSample;
use crate::motion::spring::{Spring, SpringConfig, SpringTransform};
use crate::motion::transform::Transform;
use crate::viewport::tracker::TrackerBinding;
use crate::viewport::window::{IntersectionGuard, WindowViewport};
use crate::viewport::ViewportReader;

/// Share of an element that must be visible before it counts as in view.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

const FRAME_MILLIS: u32 = 16;
const FRAME_SECONDS: f64 = FRAME_MILLIS as f64 / 1000.0;

/// Calls `tick` once per frame until it returns false or the returned flag
/// is raised.
fn run_frames(mut tick: impl FnMut() -> bool + 'static) -> Rc<Cell<bool>> {
    let cancelled = Rc::new(Cell::new(false));
    let stop = cancelled.clone();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(FRAME_MILLIS).await;
            if stop.get() || !tick() {
                break;
            }
        }
    });
    cancelled
}

/// Scroll sample for the element behind `node`, updated only while the
/// element is on screen. Stays at the resting sample if the node never
/// mounts.
#[hook]
pub fn use_scroll_sample(node: NodeRef) -> ScrollSample {
    let sample = use_state(ScrollSample::default);
    {
        let sample = sample.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut guards: Option<(Rc<TrackerBinding>, Option<IntersectionGuard>)> = None;
                if let Some(element) = node.cast::<HtmlElement>() {
                    let measured = element.clone();
                    let binding = Rc::new(TrackerBinding::attach(
                        Rc::new(WindowViewport::shared()),
                        move || Some(measured.offset_top() as f64),
                        move |s| sample.set(s),
                    ));
                    let observer = {
                        let binding = binding.clone();
                        IntersectionGuard::observe(&element, VISIBILITY_THRESHOLD, move |visible| {
                            binding.set_in_view(visible)
                        })
                    };
                    guards = Some((binding, observer));
                }
                move || drop(guards)
            },
            node,
        );
    }
    *sample
}

/// Whether the element behind `node` is intersecting the viewport. With
/// `once`, the flag latches on first sight.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64, once: bool) -> bool {
    let in_view = use_state(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, threshold, once): &(NodeRef, f64, bool)| {
                let once = *once;
                let guard = node.cast::<Element>().and_then(|element| {
                    IntersectionGuard::observe(&element, *threshold, move |visible| {
                        if once && !visible {
                            return;
                        }
                        in_view.set(visible);
                    })
                });
                move || drop(guard)
            },
            (node, threshold, once),
        );
    }
    *in_view
}

/// Eases towards `target` with a critically damped spring.
#[hook]
pub fn use_spring_transform(target: Transform, config: SpringConfig) -> Transform {
    let springs = use_mut_ref(|| SpringTransform::at_rest(target, config));
    let current = use_state(|| target);
    {
        let springs = springs.clone();
        let current = current.clone();
        use_effect_with_deps(
            move |target: &Transform| {
                springs.borrow_mut().retarget(*target);
                let cancelled = run_frames(move || {
                    let next = springs.borrow_mut().advance(FRAME_SECONDS);
                    next.map(|pose| current.set(pose)).is_some()
                });
                move || cancelled.set(true)
            },
            target,
        );
    }
    *current
}

/// Single-axis version of [`use_spring_transform`].
#[hook]
pub fn use_spring_value(target: f64, config: SpringConfig) -> f64 {
    let spring = use_mut_ref(|| Spring::at(target, config));
    let current = use_state(|| target);
    {
        let spring = spring.clone();
        let current = current.clone();
        use_effect_with_deps(
            move |target: &f64| {
                spring.borrow_mut().target = *target;
                let cancelled = run_frames(move || {
                    let next = spring.borrow_mut().advance(FRAME_SECONDS);
                    next.map(|value| current.set(value)).is_some()
                });
                move || cancelled.set(true)
            },
            target,
        );
    }
    *current
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageScroll {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Window scroll metrics, refreshed on every scroll or resize.
#[hook]
pub fn use_page_scroll() -> PageScroll {
    let page = use_state(PageScroll::default);
    {
        let page = page.clone();
        use_effect_with_deps(
            move |_| {
                let viewport = Rc::new(WindowViewport::shared());
                let read = {
                    let viewport = viewport.clone();
                    move || PageScroll {
                        scroll_y: viewport.scroll_y(),
                        viewport_height: viewport.viewport_height(),
                        document_height: viewport.document_height(),
                    }
                };
                page.set(read());
                let subscription = viewport.subscribe(Box::new(move |_| page.set(read())));
                move || drop(subscription)
            },
            (),
        );
    }
    *page
}
