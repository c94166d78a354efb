use window_scroll::{ScrollTo, WindowScroll, WindowScrollOptions};

use crate::BrowserWindow;

/// The `scroll_to` handle of a browser binding.
pub type BrowserScrollTo = ScrollTo<BrowserWindow>;

/// Binds to the global browser window with default options (smooth scrolling).
///
/// Outside a browser the binding reports `(0, 0)` and ignores scroll requests. Keep the returned
/// value alive for as long as the position is needed; dropping it removes the scroll listener.
pub fn use_window_scroll() -> WindowScroll<BrowserWindow> {
    use_window_scroll_with(WindowScrollOptions::default())
}

pub fn use_window_scroll_with(options: WindowScrollOptions) -> WindowScroll<BrowserWindow> {
    WindowScroll::with_options(BrowserWindow::current(), options)
}
