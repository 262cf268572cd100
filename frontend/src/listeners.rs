use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<E> = Rc<dyn Fn(&E)>;

struct Registry<E> {
    next_id: u64,
    listeners: Vec<(u64, Listener<E>)>,
}

/// Single-threaded fan-out of events to registered callbacks. Registration
/// hands back a [`Subscription`]; dropping it unregisters the callback.
pub struct ListenerSet<E> {
    inner: Rc<RefCell<Registry<E>>>,
}

impl<E> Clone for ListenerSet<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E> Default for ListenerSet<E> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }
}

impl<E: 'static> ListenerSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut registry = self.inner.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Rc::new(listener)));
            id
        };
        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    /// Delivers `event` to every listener registered at the time of the
    /// call. Listeners may register or drop subscriptions while running.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Listener<E>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Releases its registration when dropped.
#[must_use = "dropping a Subscription unregisters it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn emits_to_every_live_listener() {
        let set = ListenerSet::<u32>::new();
        let total = Rc::new(Cell::new(0));
        let a = {
            let total = total.clone();
            set.register(move |v| total.set(total.get() + v))
        };
        let b = {
            let total = total.clone();
            set.register(move |v| total.set(total.get() + v * 10))
        };
        set.emit(&2);
        assert_eq!(total.get(), 22);

        drop(a);
        set.emit(&1);
        assert_eq!(total.get(), 32);
        assert_eq!(set.len(), 1);

        drop(b);
        assert!(set.is_empty());
    }

    #[test]
    fn subscription_outliving_set_is_harmless() {
        let set = ListenerSet::<()>::new();
        let sub = set.register(|_| {});
        drop(set);
        drop(sub);
    }

    #[test]
    fn listener_may_unsubscribe_during_emit() {
        let set = ListenerSet::<()>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));
        let sub = {
            let slot = slot.clone();
            let calls = calls.clone();
            set.register(move |_| {
                calls.set(calls.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(sub);
        set.emit(&());
        set.emit(&());
        assert_eq!(calls.get(), 1);
        assert!(set.is_empty());
    }
}
