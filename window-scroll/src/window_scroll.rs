use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use crate::surface::read_position;
use crate::{
    ListenerId, ScrollPosition, ScrollState, ScrollSurface, ScrollTo, Subscription,
    WindowScrollOptions,
};

/// A reactive binding between a window's scroll offsets and UI-visible state.
///
/// On creation the binding reads the surface's offsets and registers a scroll listener that
/// replaces the held [`ScrollPosition`] on every notification. The listener is removed exactly
/// once, by [`WindowScroll::dispose`] or on drop.
///
/// Passing `None` as the surface models a non-browser context: the position stays at the
/// origin and `scroll_to` does nothing.
pub struct WindowScroll<S: ScrollSurface + 'static> {
    surface: Option<Rc<S>>,
    options: WindowScrollOptions,
    state: ScrollState,
    scroll_to: ScrollTo<S>,
    listener: Option<ListenerId>,
}

impl<S: ScrollSurface + 'static> WindowScroll<S> {
    pub fn new(surface: Option<S>) -> Self {
        Self::with_options(surface, WindowScrollOptions::default())
    }

    pub fn with_options(surface: Option<S>, options: WindowScrollOptions) -> Self {
        Self::from_shared(surface.map(Rc::new), options)
    }

    /// Creates a binding over a surface the caller keeps a handle to.
    pub fn from_shared(surface: Option<Rc<S>>, options: WindowScrollOptions) -> Self {
        let initial = surface
            .as_deref()
            .map(|s| read_position(s, options.legacy_fallback))
            .unwrap_or_default();
        wdebug!(
            has_surface = surface.is_some(),
            x = initial.x,
            y = initial.y,
            "WindowScroll::new"
        );
        let scroll_to = ScrollTo::new(surface.clone(), options.behavior, options.legacy_fallback);
        let mut this = Self {
            surface,
            options,
            state: ScrollState::new(initial),
            scroll_to,
            listener: None,
        };
        if this.options.subscribe {
            this.subscribe();
        }
        this
    }

    fn subscribe(&mut self) {
        let Some(surface) = &self.surface else {
            return;
        };
        if self.listener.is_some() {
            return;
        }

        // Weak: the surface owns the listener, which must not keep the surface alive.
        let weak = Rc::downgrade(surface);
        let state = self.state.clone();
        let legacy_fallback = self.options.legacy_fallback;
        let listener = Box::new(move || {
            let Some(surface) = weak.upgrade() else {
                return;
            };
            let next = read_position(&*surface, legacy_fallback);
            wtrace!(x = next.x, y = next.y, "scroll notification");
            state.set(next);
        });

        self.listener = surface.add_scroll_listener(listener);
        if self.listener.is_none() {
            wwarn!("surface refused scroll listener; position will only change on refresh()");
        }
        wdebug!(listener = ?self.listener, "WindowScroll::subscribe");
    }

    /// Removes the scroll listener. Idempotent; also runs on drop.
    pub fn dispose(&mut self) {
        let Some(id) = self.listener.take() else {
            return;
        };
        let Some(surface) = &self.surface else {
            return;
        };
        let removed = surface.remove_scroll_listener(id);
        if !removed {
            wwarn!(?id, "surface did not know scroll listener");
        }
        wdebug!(?id, "WindowScroll::dispose");
    }

    /// The latest known position.
    pub fn position(&self) -> ScrollPosition {
        self.state.get()
    }

    /// The current snapshot together with the `scroll_to` handle.
    pub fn pair(&self) -> (ScrollPosition, ScrollTo<S>) {
        (self.position(), self.scroll_to())
    }

    pub fn scroll_to(&self) -> ScrollTo<S> {
        self.scroll_to.clone()
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Shorthand for `self.state().subscribe(f)`.
    pub fn on_change(&self, f: impl Fn(ScrollPosition) + 'static) -> Subscription {
        self.state.subscribe(f)
    }

    /// Re-reads the surface offsets into the state.
    ///
    /// Returns `true` when the position changed. Without a surface this does nothing.
    pub fn refresh(&self) -> bool {
        let Some(surface) = self.surface.as_deref() else {
            return false;
        };
        self.state
            .set(read_position(surface, self.options.legacy_fallback))
    }

    pub fn is_subscribed(&self) -> bool {
        self.listener.is_some()
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&Rc<S>> {
        self.surface.as_ref()
    }

    pub fn options(&self) -> &WindowScrollOptions {
        &self.options
    }

    /// Applies new options.
    ///
    /// The `scroll_to` handle is only replaced when `behavior` or `legacy_fallback` change, and
    /// the scroll listener is only re-registered when `legacy_fallback` or `subscribe` change.
    pub fn set_options(&mut self, options: WindowScrollOptions) {
        let prev = core::mem::replace(&mut self.options, options);
        wtrace!(
            behavior = ?options.behavior,
            legacy_fallback = options.legacy_fallback,
            subscribe = options.subscribe,
            "WindowScroll::set_options"
        );

        if prev.behavior != options.behavior || prev.legacy_fallback != options.legacy_fallback {
            self.scroll_to = ScrollTo::new(
                self.surface.clone(),
                options.behavior,
                options.legacy_fallback,
            );
        }

        if prev.legacy_fallback != options.legacy_fallback || !options.subscribe {
            self.dispose();
        }
        let was_subscribed = self.is_subscribed();
        if options.subscribe {
            self.subscribe();
        }
        // A fresh listener only sees future notifications; catch up on anything missed.
        let newly_subscribed = !was_subscribed && self.is_subscribed();
        if newly_subscribed || prev.legacy_fallback != options.legacy_fallback {
            self.refresh();
        }
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowScrollOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }
}

impl<S: ScrollSurface + 'static> Drop for WindowScroll<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<S: ScrollSurface + 'static> fmt::Debug for WindowScroll<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowScroll")
            .field("position", &self.position())
            .field("options", &self.options)
            .field("has_surface", &self.surface.is_some())
            .field("listener", &self.listener)
            .finish()
    }
}
