/// A snapshot of the window's scroll offsets, in device-independent pixels.
///
/// Snapshots are replaced wholesale; a reader never sees `x` from one notification paired with
/// `y` from another.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A partial scroll target. Omitted axes keep the window's current offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ScrollToOptions {
    /// Targets neither axis (scrolls to where the window already is).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    pub fn y(y: f64) -> Self {
        Self {
            x: None,
            y: Some(y),
        }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }
}

impl From<ScrollPosition> for ScrollToOptions {
    fn from(p: ScrollPosition) -> Self {
        Self::xy(p.x, p.y)
    }
}

/// How the platform should move the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Animated by the platform.
    #[default]
    Smooth,
    /// An immediate jump.
    Instant,
    /// Whatever the platform (or page CSS) picks.
    Auto,
}

/// A fully resolved request handed to [`crate::ScrollSurface::scroll_to`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub left: f64,
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Opaque handle for a scroll listener registered on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);
