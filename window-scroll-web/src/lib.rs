//! Browser surface for the `window-scroll` crate.
//!
//! [`BrowserWindow`] implements `window_scroll::ScrollSurface` on top of `web_sys::Window`:
//!
//! - offsets come from `scrollX`/`scrollY`, falling back to `pageXOffset`/`pageYOffset`
//! - notifications come from a passive `"scroll"` event listener
//! - requests go to `window.scrollTo({ left, top, behavior })`
//!
//! [`use_window_scroll`] is the usual entry point. It detects whether a browser window exists
//! and degrades to an inert binding when it does not.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod browser;
mod hook;


pub use browser::BrowserWindow;
pub use hook::{BrowserScrollTo, use_window_scroll, use_window_scroll_with};
pub use window_scroll::{
    ScrollBehavior, ScrollPosition, ScrollToOptions, WindowScroll, WindowScrollOptions,
};
