//! A framework-neutral reactive binding for a window's scroll position.
//!
//! For the browser surface built on `web-sys`, see the `window-scroll-web` crate.
//!
//! The binding does three things:
//! - reads the window's current scroll offsets when it is created
//! - re-reads them on every scroll notification and publishes the new [`ScrollPosition`]
//! - exposes a [`ScrollTo`] handle that asks the window to scroll (smoothly, by default)
//!
//! It is UI-agnostic. The platform is reached through the [`ScrollSurface`] trait, and a missing
//! surface (server rendering, tests, workers) is a normal input: the position stays at the
//! origin and scroll requests are ignored.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod requester;
mod state;
mod surface;
mod types;
mod window_scroll;


pub use options::WindowScrollOptions;
pub use requester::ScrollTo;
pub use state::{ScrollState, Subscription};
pub use surface::{ScrollListener, ScrollSurface, read_position, read_x, read_y};
pub use types::{ListenerId, ScrollBehavior, ScrollPosition, ScrollRequest, ScrollToOptions};
pub use window_scroll::WindowScroll;
