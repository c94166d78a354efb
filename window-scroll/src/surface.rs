use alloc::boxed::Box;

use crate::{ListenerId, ScrollPosition, ScrollRequest};

/// A callback a surface invokes each time the window scrolls.
pub type ScrollListener = Box<dyn FnMut()>;

/// The platform seam: a window that can report and change its scroll offsets.
///
/// Implementations exist for real browser windows (`window-scroll-web`) and for headless
/// adapters or tests. All methods take `&self`; surfaces are shared behind an `Rc` and live on a
/// single UI thread.
///
/// Offset getters return `None` when the platform cannot provide the value. The binding treats
/// `None`, `0` and `NaN` alike and falls through to the next source in the chain
/// `scroll_* -> page_*_offset -> 0`.
pub trait ScrollSurface {
    /// Current horizontal offset (`scrollX`).
    fn scroll_x(&self) -> Option<f64>;

    /// Current vertical offset (`scrollY`).
    fn scroll_y(&self) -> Option<f64>;

    /// Legacy alias of [`ScrollSurface::scroll_x`] (`pageXOffset`).
    fn page_x_offset(&self) -> Option<f64> {
        None
    }

    /// Legacy alias of [`ScrollSurface::scroll_y`] (`pageYOffset`).
    fn page_y_offset(&self) -> Option<f64> {
        None
    }

    /// Registers `listener` for scroll notifications.
    ///
    /// Returns `None` when the platform refused the registration; the binding then behaves as if
    /// it were unsubscribed.
    fn add_scroll_listener(&self, listener: ScrollListener) -> Option<ListenerId>;

    /// Removes a listener previously returned by [`ScrollSurface::add_scroll_listener`].
    ///
    /// Returns `false` if `id` was not registered.
    fn remove_scroll_listener(&self, id: ListenerId) -> bool;

    /// Asks the platform to move the viewport. Must not block.
    fn scroll_to(&self, request: ScrollRequest);
}

fn present(v: Option<f64>) -> Option<f64> {
    v.filter(|v| *v != 0.0 && !v.is_nan())
}

fn resolve_offset(primary: Option<f64>, legacy: impl FnOnce() -> Option<f64>) -> f64 {
    present(primary)
        .or_else(|| present(legacy()))
        .unwrap_or(0.0)
}

/// Reads the horizontal offset through the fallback chain.
///
/// With `legacy_fallback = false` the chain is `scroll_x -> 0`.
pub fn read_x<S: ScrollSurface + ?Sized>(surface: &S, legacy_fallback: bool) -> f64 {
    resolve_offset(surface.scroll_x(), || {
        legacy_fallback.then(|| surface.page_x_offset()).flatten()
    })
}

/// Reads the vertical offset through the fallback chain.
pub fn read_y<S: ScrollSurface + ?Sized>(surface: &S, legacy_fallback: bool) -> f64 {
    resolve_offset(surface.scroll_y(), || {
        legacy_fallback.then(|| surface.page_y_offset()).flatten()
    })
}

pub fn read_position<S: ScrollSurface + ?Sized>(
    surface: &S,
    legacy_fallback: bool,
) -> ScrollPosition {
    ScrollPosition {
        x: read_x(surface, legacy_fallback),
        y: read_y(surface, legacy_fallback),
    }
}
