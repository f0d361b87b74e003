// SPDX-License-Identifier: MPL-2.0
//! Per-surface toast host: a single-slot state machine.
//!
//! A host owns at most one visible toast and walks it through
//! `Hidden -> Entering -> Visible -> Exiting -> Hidden`. Transitions are
//! driven by discrete events (`show`, `hide`, `press`) and by `tick`
//! with an explicit `Instant`, so the machine is testable without a
//! running event loop. Rendering is a separate, pure projection of this
//! state (see [`super::widget`]).

use super::request::{PressHandler, RequestParts, ToastKind, ToastPosition, ToastRequest};
use std::time::{Duration, Instant};

/// Duration of the entrance and exit slide/fade animation.
pub const ENTER_EXIT_ANIMATION: Duration = Duration::from_millis(220);

const DEFAULT_PRIMARY_MAX_LINES: usize = 1;
const DEFAULT_SECONDARY_MAX_LINES: usize = 2;

/// Mount-time defaults applied to requests that leave a field unset.
#[derive(Debug, Clone)]
pub struct HostDefaults {
    pub kind: ToastKind,
    pub position: ToastPosition,
    pub visible_duration: Duration,
    /// Space kept between a bottom-anchored toast and the window edge.
    pub keyboard_offset: f32,
}

impl Default for HostDefaults {
    fn default() -> Self {
        Self {
            kind: ToastKind::Default,
            position: ToastPosition::Bottom,
            visible_duration: Duration::from_millis(crate::config::DEFAULT_VISIBILITY_TIME_MS),
            keyboard_offset: crate::config::DEFAULT_KEYBOARD_OFFSET,
        }
    }
}

/// Animation phase of a host's single toast slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Entering,
    Visible,
    Exiting,
}

/// The request a host is currently displaying, resolved against the
/// host's mount defaults at delivery time.
#[derive(Debug, Clone)]
pub struct ActiveToast {
    kind: ToastKind,
    primary_text: String,
    secondary_text: Option<String>,
    auto_hide: bool,
    visible_duration: Duration,
    position: ToastPosition,
    on_press: Option<PressHandler>,
    primary_max_lines: usize,
    secondary_max_lines: usize,
}

impl ActiveToast {
    fn resolve(request: ToastRequest, defaults: &HostDefaults) -> Self {
        let parts: RequestParts = request.into_parts();
        Self {
            kind: parts.kind.unwrap_or(defaults.kind),
            primary_text: parts.primary_text,
            secondary_text: parts.secondary_text,
            auto_hide: parts.auto_hide.unwrap_or(true),
            visible_duration: parts.visible_duration.unwrap_or(defaults.visible_duration),
            position: parts.position.unwrap_or(defaults.position),
            on_press: parts.on_press,
            primary_max_lines: parts.primary_max_lines.unwrap_or(DEFAULT_PRIMARY_MAX_LINES),
            secondary_max_lines: parts
                .secondary_max_lines
                .unwrap_or(DEFAULT_SECONDARY_MAX_LINES),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn primary_text(&self) -> &str {
        &self.primary_text
    }

    #[must_use]
    pub fn secondary_text(&self) -> Option<&str> {
        self.secondary_text.as_deref()
    }

    #[must_use]
    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    #[must_use]
    pub fn visible_duration(&self) -> Duration {
        self.visible_duration
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position
    }

    #[must_use]
    pub fn on_press(&self) -> Option<&PressHandler> {
        self.on_press.as_ref()
    }

    #[must_use]
    pub fn primary_max_lines(&self) -> usize {
        self.primary_max_lines
    }

    #[must_use]
    pub fn secondary_max_lines(&self) -> usize {
        self.secondary_max_lines
    }
}

/// Single-slot toast host.
#[derive(Debug, Default)]
pub struct Host {
    active: Option<ActiveToast>,
    phase: Phase,
    phase_started: Option<Instant>,
    auto_hide_deadline: Option<Instant>,
}

impl Host {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot with `request` and restarts the machine from
    /// `Entering`. Any outstanding auto-hide timer is cancelled; it
    /// restarts once the new toast reaches `Visible`.
    pub fn show(&mut self, request: ToastRequest, defaults: &HostDefaults, now: Instant) {
        self.active = Some(ActiveToast::resolve(request, defaults));
        self.phase = Phase::Entering;
        self.phase_started = Some(now);
        self.auto_hide_deadline = None;
    }

    /// Starts the exit transition. No-op unless a toast is entering or
    /// visible.
    pub fn hide(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Entering | Phase::Visible) {
            self.phase = Phase::Exiting;
            self.phase_started = Some(now);
            self.auto_hide_deadline = None;
        }
    }

    /// Invokes the active toast's press action. Pressing never dismisses
    /// the toast and never cancels the auto-hide timer.
    pub fn press(&self) {
        if let Some(handler) = self.active.as_ref().and_then(ActiveToast::on_press) {
            handler.invoke();
        }
    }

    /// Advances time-driven transitions: animation completion and
    /// auto-hide expiry.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Entering => {
                if self.phase_elapsed(now) >= ENTER_EXIT_ANIMATION {
                    self.phase = Phase::Visible;
                    self.phase_started = Some(now);
                    if let Some(toast) = &self.active {
                        if toast.auto_hide() {
                            self.auto_hide_deadline = Some(now + toast.visible_duration());
                        }
                    }
                }
            }
            Phase::Visible => {
                if let Some(deadline) = self.auto_hide_deadline {
                    if now >= deadline {
                        self.phase = Phase::Exiting;
                        self.phase_started = Some(now);
                        self.auto_hide_deadline = None;
                    }
                }
            }
            Phase::Exiting => {
                if self.phase_elapsed(now) >= ENTER_EXIT_ANIMATION {
                    self.phase = Phase::Hidden;
                    self.phase_started = None;
                    self.active = None;
                }
            }
            Phase::Hidden => {}
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveToast> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Hidden)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Exiting)
    }

    /// Animation progress at `now`: 0.0 fully off-screen, 1.0 fully
    /// settled. Exiting runs the same ramp in reverse.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Visible => 1.0,
            Phase::Entering => self.phase_fraction(now),
            Phase::Exiting => 1.0 - self.phase_fraction(now),
        }
    }

    fn phase_elapsed(&self, now: Instant) -> Duration {
        self.phase_started
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or(Duration::ZERO)
    }

    fn phase_fraction(&self, now: Instant) -> f32 {
        (self.phase_elapsed(now).as_secs_f32() / ENTER_EXIT_ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn shown_host(now: Instant) -> Host {
        let mut host = Host::new();
        host.show(ToastRequest::new("hello"), &HostDefaults::default(), now);
        host
    }

    #[test]
    fn new_host_is_hidden() {
        let host = Host::new();
        assert_eq!(host.phase(), Phase::Hidden);
        assert!(host.active().is_none());
    }

    #[test]
    fn show_enters_synchronously() {
        let now = Instant::now();
        let host = shown_host(now);
        assert_eq!(host.phase(), Phase::Entering);
        assert_eq!(host.active().unwrap().primary_text(), "hello");
    }

    #[test]
    fn entering_becomes_visible_after_animation() {
        let now = Instant::now();
        let mut host = shown_host(now);

        host.tick(now + ENTER_EXIT_ANIMATION - Duration::from_millis(1));
        assert_eq!(host.phase(), Phase::Entering);

        host.tick(now + ENTER_EXIT_ANIMATION);
        assert_eq!(host.phase(), Phase::Visible);
    }

    #[test]
    fn auto_hide_fires_after_visible_duration() {
        let now = Instant::now();
        let mut host = shown_host(now);
        let visible_at = now + ENTER_EXIT_ANIMATION;
        host.tick(visible_at);
        assert_eq!(host.phase(), Phase::Visible);

        let duration = host.active().unwrap().visible_duration();
        host.tick(visible_at + duration - Duration::from_millis(1));
        assert_eq!(host.phase(), Phase::Visible);

        host.tick(visible_at + duration);
        assert_eq!(host.phase(), Phase::Exiting);

        host.tick(visible_at + duration + ENTER_EXIT_ANIMATION);
        assert_eq!(host.phase(), Phase::Hidden);
        assert!(host.active().is_none());
    }

    #[test]
    fn auto_hide_disabled_keeps_toast_visible() {
        let now = Instant::now();
        let mut host = Host::new();
        host.show(
            ToastRequest::new("sticky").with_auto_hide(false),
            &HostDefaults::default(),
            now,
        );

        let visible_at = now + ENTER_EXIT_ANIMATION;
        host.tick(visible_at);
        host.tick(visible_at + Duration::from_secs(60));
        assert_eq!(host.phase(), Phase::Visible);
    }

    #[test]
    fn hide_while_hidden_is_noop() {
        let mut host = Host::new();
        host.hide(Instant::now());
        assert_eq!(host.phase(), Phase::Hidden);
    }

    #[test]
    fn hide_while_exiting_is_noop() {
        let now = Instant::now();
        let mut host = shown_host(now);
        host.tick(now + ENTER_EXIT_ANIMATION);
        host.hide(now + ENTER_EXIT_ANIMATION);
        assert_eq!(host.phase(), Phase::Exiting);
        let started = host.phase_started;
        host.hide(now + ENTER_EXIT_ANIMATION + Duration::from_millis(50));
        assert_eq!(host.phase_started, started);
    }

    #[test]
    fn show_replaces_visible_content_and_restarts() {
        let now = Instant::now();
        let mut host = shown_host(now);
        host.tick(now + ENTER_EXIT_ANIMATION);
        assert_eq!(host.phase(), Phase::Visible);

        let later = now + Duration::from_millis(500);
        host.show(ToastRequest::new("second"), &HostDefaults::default(), later);
        assert_eq!(host.phase(), Phase::Entering);
        assert_eq!(host.active().unwrap().primary_text(), "second");

        // The replaced toast's timer must not fire against the new one.
        host.tick(later + ENTER_EXIT_ANIMATION);
        assert_eq!(host.phase(), Phase::Visible);
    }

    #[test]
    fn press_invokes_handler_without_dismissing() {
        let now = Instant::now();
        let count = Arc::new(AtomicUsize::new(0));
        let captured = Arc::clone(&count);

        let mut host = Host::new();
        host.show(
            ToastRequest::new("pressable").with_on_press(PressHandler::new(move || {
                captured.fetch_add(1, Ordering::Relaxed);
            })),
            &HostDefaults::default(),
            now,
        );
        host.tick(now + ENTER_EXIT_ANIMATION);

        host.press();
        assert_eq!(count.load(Ordering::Relaxed), 1);
        assert_eq!(host.phase(), Phase::Visible);
    }

    #[test]
    fn press_without_handler_is_noop() {
        let host = shown_host(Instant::now());
        host.press();
    }

    #[test]
    fn progress_ramps_during_entrance() {
        let now = Instant::now();
        let mut host = shown_host(now);
        assert_eq!(host.progress_at(now), 0.0);

        let halfway = now + ENTER_EXIT_ANIMATION / 2;
        let progress = host.progress_at(halfway);
        assert!(progress > 0.4 && progress < 0.6, "got {progress}");

        host.tick(now + ENTER_EXIT_ANIMATION);
        assert_eq!(host.progress_at(now + ENTER_EXIT_ANIMATION), 1.0);
    }

    #[test]
    fn defaults_fill_unset_fields() {
        let defaults = HostDefaults {
            kind: ToastKind::Error,
            position: ToastPosition::Top,
            visible_duration: Duration::from_millis(1234),
            keyboard_offset: 0.0,
        };
        let mut host = Host::new();
        host.show(ToastRequest::new("styled"), &defaults, Instant::now());

        let active = host.active().unwrap();
        assert_eq!(active.kind(), ToastKind::Error);
        assert_eq!(active.position(), ToastPosition::Top);
        assert_eq!(active.visible_duration(), Duration::from_millis(1234));
        assert!(active.auto_hide());
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let mut host = Host::new();
        host.show(
            ToastRequest::new("custom")
                .with_kind(ToastKind::Error)
                .with_position(ToastPosition::Top)
                .with_visible_duration(Duration::from_secs(9)),
            &HostDefaults::default(),
            Instant::now(),
        );

        let active = host.active().unwrap();
        assert_eq!(active.kind(), ToastKind::Error);
        assert_eq!(active.position(), ToastPosition::Top);
        assert_eq!(active.visible_duration(), Duration::from_secs(9));
    }
}
