// SPDX-License-Identifier: MPL-2.0
//! The request vocabulary of the toast command API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Visual kind of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Neutral background.
    #[default]
    Default,
    /// Alert-colored background.
    Error,
}

/// Window edge a toast anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPosition {
    Top,
    #[default]
    Bottom,
}

/// Callback fired when the toast body is pressed.
///
/// Pressing does not dismiss the toast; the auto-hide timer keeps
/// running.
#[derive(Clone)]
pub struct PressHandler(Arc<dyn Fn() + Send + Sync>);

impl PressHandler {
    pub fn new(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn invoke(&self) {
        (self.0)();
    }
}

impl fmt::Debug for PressHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PressHandler")
    }
}

/// A single notification request.
///
/// Unset fields fall back to the receiving host's mount defaults when
/// the request is delivered. Requests are consumed on delivery; a
/// request superseded by a later one is simply dropped.
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    kind: Option<ToastKind>,
    primary_text: String,
    secondary_text: Option<String>,
    auto_hide: Option<bool>,
    visible_duration: Option<Duration>,
    position: Option<ToastPosition>,
    on_press: Option<PressHandler>,
    delay: Option<Duration>,
    primary_max_lines: Option<usize>,
    secondary_max_lines: Option<usize>,
}

impl ToastRequest {
    pub fn new(primary_text: impl Into<String>) -> Self {
        Self {
            primary_text: primary_text.into(),
            ..Self::default()
        }
    }

    /// Shorthand for an alert-styled request.
    pub fn error(primary_text: impl Into<String>) -> Self {
        Self::new(primary_text).with_kind(ToastKind::Error)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn with_secondary_text(mut self, text: impl Into<String>) -> Self {
        self.secondary_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = Some(auto_hide);
        self
    }

    #[must_use]
    pub fn with_visible_duration(mut self, duration: Duration) -> Self {
        self.visible_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_on_press(mut self, handler: PressHandler) -> Self {
        self.on_press = Some(handler);
        self
    }

    /// Defers delivery by `delay`. The request is routed to whichever
    /// host is current once the delay elapses, not at call time.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    #[must_use]
    pub fn with_primary_max_lines(mut self, lines: usize) -> Self {
        self.primary_max_lines = Some(lines);
        self
    }

    #[must_use]
    pub fn with_secondary_max_lines(mut self, lines: usize) -> Self {
        self.secondary_max_lines = Some(lines);
        self
    }

    #[must_use]
    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    #[must_use]
    pub fn primary_text(&self) -> &str {
        &self.primary_text
    }

    #[must_use]
    pub fn kind(&self) -> Option<ToastKind> {
        self.kind
    }

    #[must_use]
    pub fn secondary_text(&self) -> Option<&str> {
        self.secondary_text.as_deref()
    }

    #[must_use]
    pub fn auto_hide(&self) -> Option<bool> {
        self.auto_hide
    }

    #[must_use]
    pub fn visible_duration(&self) -> Option<Duration> {
        self.visible_duration
    }

    #[must_use]
    pub fn position(&self) -> Option<ToastPosition> {
        self.position
    }

    #[must_use]
    pub fn on_press(&self) -> Option<&PressHandler> {
        self.on_press.as_ref()
    }

    pub(super) fn into_parts(self) -> RequestParts {
        RequestParts {
            kind: self.kind,
            primary_text: self.primary_text,
            secondary_text: self.secondary_text,
            auto_hide: self.auto_hide,
            visible_duration: self.visible_duration,
            position: self.position,
            on_press: self.on_press,
            primary_max_lines: self.primary_max_lines,
            secondary_max_lines: self.secondary_max_lines,
        }
    }
}

/// Deconstructed request fields, consumed when resolving against host
/// defaults.
pub(super) struct RequestParts {
    pub kind: Option<ToastKind>,
    pub primary_text: String,
    pub secondary_text: Option<String>,
    pub auto_hide: Option<bool>,
    pub visible_duration: Option<Duration>,
    pub position: Option<ToastPosition>,
    pub on_press: Option<PressHandler>,
    pub primary_max_lines: Option<usize>,
    pub secondary_max_lines: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn builder_sets_fields() {
        let request = ToastRequest::new("title")
            .with_secondary_text("subtitle")
            .with_auto_hide(false)
            .with_position(ToastPosition::Top)
            .with_delay(Duration::from_millis(250));

        assert_eq!(request.primary_text(), "title");
        assert_eq!(request.delay(), Some(Duration::from_millis(250)));
        let parts = request.into_parts();
        assert_eq!(parts.secondary_text.as_deref(), Some("subtitle"));
        assert_eq!(parts.auto_hide, Some(false));
        assert_eq!(parts.position, Some(ToastPosition::Top));
    }

    #[test]
    fn error_constructor_sets_kind() {
        let parts = ToastRequest::error("boom").into_parts();
        assert_eq!(parts.kind, Some(ToastKind::Error));
    }

    #[test]
    fn unset_fields_stay_unset() {
        let parts = ToastRequest::new("plain").into_parts();
        assert!(parts.kind.is_none());
        assert!(parts.auto_hide.is_none());
        assert!(parts.visible_duration.is_none());
        assert!(parts.position.is_none());
        assert!(parts.on_press.is_none());
    }

    #[test]
    fn press_handler_invokes_closure() {
        let count = Arc::new(AtomicUsize::new(0));
        let captured = Arc::clone(&count);
        let handler = PressHandler::new(move || {
            captured.fetch_add(1, Ordering::Relaxed);
        });

        handler.invoke();
        handler.invoke();
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }
}
