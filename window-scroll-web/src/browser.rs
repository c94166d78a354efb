use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;

use gloo_events::EventListener;
use web_sys::Window;
use window_scroll::{ListenerId, ScrollBehavior, ScrollListener, ScrollRequest, ScrollSurface};

/// A [`ScrollSurface`] backed by a browser `Window`.
///
/// Scroll listeners are registered as passive `"scroll"` event listeners and are removed from
/// the DOM as soon as [`ScrollSurface::remove_scroll_listener`] drops their handle.
pub struct BrowserWindow {
    window: Window,
    listeners: RefCell<HashMap<ListenerId, EventListener>>,
    next_id: Cell<u64>,
}

impl BrowserWindow {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    /// The global `window`, if the code runs on a browser main thread.
    ///
    /// Returns `None` on non-wasm targets and inside web workers.
    pub fn current() -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window().map(Self::new)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

fn read(value: Result<f64, wasm_bindgen::JsValue>, _property: &'static str) -> Option<f64> {
    match value {
        Ok(v) => Some(v),
        Err(_e) => {
            wwarn!(property = _property, error = ?_e, "failed to read scroll offset");
            None
        }
    }
}

impl ScrollSurface for BrowserWindow {
    fn scroll_x(&self) -> Option<f64> {
        read(self.window.scroll_x(), "scrollX")
    }

    fn scroll_y(&self) -> Option<f64> {
        read(self.window.scroll_y(), "scrollY")
    }

    fn page_x_offset(&self) -> Option<f64> {
        read(self.window.page_x_offset(), "pageXOffset")
    }

    fn page_y_offset(&self) -> Option<f64> {
        read(self.window.page_y_offset(), "pageYOffset")
    }

    fn add_scroll_listener(&self, mut listener: ScrollListener) -> Option<ListenerId> {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        let handle = EventListener::new(&self.window, "scroll", move |_| listener());
        self.listeners.borrow_mut().insert(id, handle);
        wdebug!(?id, "add scroll listener");
        Some(id)
    }

    fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        // Dropping the handle detaches it from the window.
        let removed = self.listeners.borrow_mut().remove(&id).is_some();
        wdebug!(?id, removed, "remove scroll listener");
        removed
    }

    fn scroll_to(&self, request: ScrollRequest) {
        let options = web_sys::ScrollToOptions::new();
        options.set_left(request.left);
        options.set_top(request.top);
        options.set_behavior(web_behavior(request.behavior));
        wtrace!(left = request.left, top = request.top, "window.scrollTo");
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub(crate) fn web_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
    }
}

impl fmt::Debug for BrowserWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserWindow")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
