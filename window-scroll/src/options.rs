use crate::ScrollBehavior;

/// Configuration for [`crate::WindowScroll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowScrollOptions {
    /// Behavior forwarded with every `scroll_to` request. Defaults to `Smooth`.
    pub behavior: ScrollBehavior,

    /// Whether reads fall back to the legacy `page*Offset` properties when the primary
    /// `scroll*` value is missing or zero.
    ///
    /// Disable this when targeting surfaces that only expose the primary properties.
    pub legacy_fallback: bool,

    /// Whether the binding registers for scroll notifications.
    ///
    /// When disabled, the held position only changes through `WindowScroll::refresh`.
    pub subscribe: bool,
}

impl Default for WindowScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            legacy_fallback: true,
            subscribe: true,
        }
    }
}

impl WindowScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_legacy_fallback(mut self, legacy_fallback: bool) -> Self {
        self.legacy_fallback = legacy_fallback;
        self
    }

    pub fn with_subscribe(mut self, subscribe: bool) -> Self {
        self.subscribe = subscribe;
        self
    }
}
