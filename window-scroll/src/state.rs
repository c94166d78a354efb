use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::ScrollPosition;

type Subscriber = Rc<dyn Fn(ScrollPosition)>;

struct Inner {
    position: Cell<ScrollPosition>,
    version: Cell<u64>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Subscriber)>>,
}

/// A single-threaded observable cell holding the latest [`ScrollPosition`].
///
/// Cloning yields another handle to the same cell.
///
/// - The position is stored as one value, so a reader sees either the old or the new snapshot.
/// - `version` increments exactly once per change; setting an equal value is a no-op.
/// - Subscribers run in registration order, after the new value is visible through `get`.
#[derive(Clone)]
pub struct ScrollState {
    inner: Rc<Inner>,
}

impl ScrollState {
    pub fn new(initial: ScrollPosition) -> Self {
        Self {
            inner: Rc::new(Inner {
                position: Cell::new(initial),
                version: Cell::new(0),
                next_id: Cell::new(0),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> ScrollPosition {
        self.inner.position.get()
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Replaces the held position.
    ///
    /// Returns `true` when the value changed (and subscribers were notified).
    pub fn set(&self, next: ScrollPosition) -> bool {
        if self.inner.position.get() == next {
            return false;
        }
        self.inner.position.set(next);
        self.inner
            .version
            .set(self.inner.version.get().wrapping_add(1));

        // Snapshot so subscribers may (un)subscribe while being notified.
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, f)| Rc::clone(f))
            .collect();
        for f in subscribers {
            f(next);
        }
        true
    }

    /// Registers `f` to run after every change.
    ///
    /// The callback stays registered until the returned guard is dropped.
    pub fn subscribe(&self, f: impl Fn(ScrollPosition) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner.subscribers.borrow_mut().push((id, Rc::new(f)));
        Subscription {
            state: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Returns `true` if both handles refer to the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ScrollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollState")
            .field("position", &self.get())
            .field("version", &self.version())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// RAII guard returned by [`ScrollState::subscribe`]. Dropping it removes the callback.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    state: Weak<Inner>,
    id: u64,
}

impl Subscription {
    /// Removes the callback now. Equivalent to dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.state.upgrade() {
            inner
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
