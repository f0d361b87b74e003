// SPDX-License-Identifier: MPL-2.0
//! Modal presentation surface.
//!
//! A sheet is shown and hidden by a boolean its owner keeps; this module
//! only tracks the swipe gesture. Dismissal is reported as an [`Action`]
//! and the owner is responsible for flipping its flag and unmounting the
//! sheet's toast host in the same update.
//!
//! Swipe-to-dismiss follows the gesture instead of playing a canned
//! transition: the drag drives a continuous progress value
//! (0 = open, 1 = dismissed) computed from raw pointer deltas, and
//! release snaps to the nearest end.

use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing};
use crate::ui::styles;
use iced::widget::{mouse_area, text, Container};
use iced::{alignment, Color, Element, Length, Point};

/// Drag distance (logical px) mapping to full dismissal progress.
const DISMISS_DISTANCE: f32 = sizing::SHEET_HEIGHT;

/// Progress beyond which a released drag dismisses instead of snapping
/// back open.
const SNAP_THRESHOLD: f32 = 0.5;

/// Events flowing into the sheet from widgets and raw pointer routing.
#[derive(Debug, Clone)]
pub enum Event {
    /// Pointer pressed on the sheet panel (drag start candidate).
    GrabPressed,
    /// Raw pointer movement while the sheet is visible.
    PointerMoved(Point),
    /// Pointer released anywhere while the sheet is visible.
    GrabReleased,
    /// The backdrop outside the sheet was pressed.
    BackdropPressed,
}

/// Outcome of handling an [`Event`], surfaced to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// The sheet finished its dismiss path.
    Dismiss,
}

/// Visual and behavioral props, owned by the caller.
#[derive(Debug, Clone)]
pub struct Props {
    pub style: SheetStyle,
    /// Uniform content padding inside the panel.
    pub default_padding: bool,
    pub border_radius: f32,
    pub background_color: Color,
    pub backdrop_color: Color,
    /// Enabled exactly when the owner handles [`Action::Dismiss`].
    pub swipe_to_dismiss: bool,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            style: SheetStyle::Bottom,
            default_padding: true,
            border_radius: radius::SHEET,
            background_color: palette::WHITE,
            backdrop_color: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            swipe_to_dismiss: true,
        }
    }
}

/// Placement of the modal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetStyle {
    /// Sheet anchored to the bottom of the viewport.
    #[default]
    Bottom,
    /// Centered card, for dialogs that should float.
    CenteredCard,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    grab_y: f32,
}

/// Gesture state of the sheet. Visibility itself lives with the owner.
#[derive(Debug, Default)]
pub struct State {
    cursor_y: f32,
    drag: Option<Drag>,
    progress: f32,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continuous dismissal progress: 0 = fully open, 1 = dismissed.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn update(&mut self, event: Event, swipe_enabled: bool) -> Action {
        match event {
            Event::GrabPressed => {
                if swipe_enabled {
                    self.drag = Some(Drag {
                        grab_y: self.cursor_y,
                    });
                }
                Action::None
            }
            Event::PointerMoved(position) => {
                self.cursor_y = position.y;
                if let Some(drag) = self.drag {
                    // Only downward movement counts toward dismissal.
                    self.progress = ((position.y - drag.grab_y) / DISMISS_DISTANCE).clamp(0.0, 1.0);
                }
                Action::None
            }
            Event::GrabReleased => {
                if self.drag.take().is_some() {
                    if self.progress > SNAP_THRESHOLD {
                        self.reset();
                        return Action::Dismiss;
                    }
                    self.progress = 0.0;
                }
                Action::None
            }
            Event::BackdropPressed => {
                self.reset();
                Action::Dismiss
            }
        }
    }

    fn reset(&mut self) {
        self.drag = None;
        self.progress = 0.0;
    }
}

/// Renders the dimming layer behind the sheet. Pressing it dismisses.
pub fn backdrop<'a, M: Clone + 'a>(props: &Props, on_event: impl Fn(Event) -> M) -> Element<'a, M> {
    let surface = Container::new(text(""))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop(props.backdrop_color));

    mouse_area(surface)
        .on_press(on_event(Event::BackdropPressed))
        .into()
}

/// Renders the modal chrome around `content` (already mapped into the
/// caller's message type).
///
/// While a drag is in flight the panel is pushed off the bottom edge by
/// the gesture's progress, clipping what has left the viewport.
pub fn view<'a, M: Clone + 'a>(
    state: &State,
    props: &Props,
    content: Element<'a, M>,
    on_event: impl Fn(Event) -> M,
) -> Element<'a, M> {
    let padding = if props.default_padding {
        spacing::MD
    } else {
        0.0
    };
    let body = Container::new(content).padding(padding).width(Length::Fill);

    match props.style {
        SheetStyle::Bottom => {
            let panel = Container::new(body)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::SHEET_HEIGHT))
                .style(styles::container::sheet(
                    props.border_radius,
                    props.background_color,
                ));

            let panel: Element<'a, M> = if props.swipe_to_dismiss {
                mouse_area(panel)
                    .on_press(on_event(Event::GrabPressed))
                    .into()
            } else {
                panel.into()
            };

            let offset = state.progress() * sizing::SHEET_HEIGHT;
            let visible_height = (sizing::SHEET_HEIGHT - offset).max(0.0);
            let clipped = Container::new(panel)
                .width(Length::Fill)
                .height(Length::Fixed(visible_height))
                .align_y(alignment::Vertical::Top)
                .clip(true);

            Container::new(clipped)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Bottom)
                .into()
        }
        SheetStyle::CenteredCard => {
            let panel = Container::new(body)
                .width(Length::Fixed(sizing::CARD_WIDTH))
                .style(styles::container::card(
                    props.border_radius,
                    props.background_color,
                ));

            Container::new(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(y: f32) -> Event {
        Event::PointerMoved(Point::new(0.0, y))
    }

    #[test]
    fn new_state_is_open() {
        let state = State::new();
        assert_eq!(state.progress(), 0.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_tracks_pointer_deltas() {
        let mut state = State::new();
        state.update(moved(100.0), true);
        state.update(Event::GrabPressed, true);
        assert!(state.is_dragging());

        state.update(moved(100.0 + DISMISS_DISTANCE / 2.0), true);
        assert!((state.progress() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn upward_movement_does_not_dismiss() {
        let mut state = State::new();
        state.update(moved(200.0), true);
        state.update(Event::GrabPressed, true);
        state.update(moved(50.0), true);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn release_below_threshold_snaps_back_open() {
        let mut state = State::new();
        state.update(moved(100.0), true);
        state.update(Event::GrabPressed, true);
        state.update(moved(100.0 + DISMISS_DISTANCE * 0.3), true);

        let action = state.update(Event::GrabReleased, true);
        assert_eq!(action, Action::None);
        assert_eq!(state.progress(), 0.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn release_past_threshold_dismisses() {
        let mut state = State::new();
        state.update(moved(100.0), true);
        state.update(Event::GrabPressed, true);
        state.update(moved(100.0 + DISMISS_DISTANCE * 0.8), true);

        let action = state.update(Event::GrabReleased, true);
        assert_eq!(action, Action::Dismiss);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn grab_ignored_when_swipe_disabled() {
        let mut state = State::new();
        state.update(moved(100.0), false);
        state.update(Event::GrabPressed, false);
        assert!(!state.is_dragging());

        state.update(moved(300.0), false);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn backdrop_press_dismisses() {
        let mut state = State::new();
        assert_eq!(state.update(Event::BackdropPressed, true), Action::Dismiss);
    }

    #[test]
    fn release_without_drag_is_noop() {
        let mut state = State::new();
        assert_eq!(state.update(Event::GrabReleased, true), Action::None);
    }

    #[test]
    fn bottom_sheet_view_builds() {
        let state = State::new();
        let props = Props::default();
        let _element = view(&state, &props, text("content").into(), |event| event);
        let _backdrop = backdrop(&props, |event| event);
    }

    #[test]
    fn centered_card_view_builds() {
        let state = State::new();
        let props = Props {
            style: SheetStyle::CenteredCard,
            swipe_to_dismiss: false,
            ..Props::default()
        };
        let _element = view(&state, &props, text("content").into(), |event| event);
    }
}
