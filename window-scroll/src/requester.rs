use alloc::rc::Rc;
use core::fmt;

use crate::surface::{read_x, read_y};
use crate::{ScrollBehavior, ScrollRequest, ScrollSurface, ScrollToOptions};

struct Requester<S> {
    surface: Option<Rc<S>>,
    behavior: ScrollBehavior,
    legacy_fallback: bool,
}

/// The `scroll_to` half of a [`crate::WindowScroll`] binding.
///
/// Cheap to clone. Equality is identity: two handles compare equal only when they come from the
/// same binding and were created with the same behavior, which makes a `ScrollTo` safe to use as
/// a memoization key or to pass down to children without spurious changes.
pub struct ScrollTo<S> {
    inner: Rc<Requester<S>>,
}

impl<S: ScrollSurface> ScrollTo<S> {
    pub(crate) fn new(
        surface: Option<Rc<S>>,
        behavior: ScrollBehavior,
        legacy_fallback: bool,
    ) -> Self {
        Self {
            inner: Rc::new(Requester {
                surface,
                behavior,
                legacy_fallback,
            }),
        }
    }

    /// Asks the window to scroll to `target`.
    ///
    /// Omitted axes are filled from the window's offsets at call time, so they stay where they
    /// are. Without a surface this does nothing.
    pub fn scroll_to(&self, target: impl Into<ScrollToOptions>) {
        let Some(surface) = self.inner.surface.as_deref() else {
            wtrace!("scroll_to without surface: ignored");
            return;
        };
        let request = self.resolve(surface, target.into());
        wtrace!(
            left = request.left,
            top = request.top,
            behavior = ?request.behavior,
            "scroll_to"
        );
        surface.scroll_to(request);
    }

    pub fn scroll_to_top(&self) {
        self.scroll_to(ScrollToOptions::xy(0.0, 0.0));
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.inner.behavior
    }

    pub fn has_surface(&self) -> bool {
        self.inner.surface.is_some()
    }

    fn resolve(&self, surface: &S, target: ScrollToOptions) -> ScrollRequest {
        let legacy = self.inner.legacy_fallback;
        ScrollRequest {
            left: target.x.unwrap_or_else(|| read_x(surface, legacy)),
            top: target.y.unwrap_or_else(|| read_y(surface, legacy)),
            behavior: self.inner.behavior,
        }
    }
}

impl<S> Clone for ScrollTo<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> PartialEq for ScrollTo<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S> Eq for ScrollTo<S> {}

impl<S> fmt::Debug for ScrollTo<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollTo")
            .field("behavior", &self.inner.behavior)
            .field("has_surface", &self.inner.surface.is_some())
            .finish()
    }
}
