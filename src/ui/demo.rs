// SPDX-License-Identifier: MPL-2.0
//! Demo screens exercising the toast command API.
//!
//! The main screen mirrors the classic toast playground: two toggles
//! (auto-hide, top position) applied to every request, and a list of
//! buttons covering the request vocabulary. The modal screen is a
//! second, modally-presented surface with its own toast host.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, toggler, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::ui::toast::{PressHandler, ToastKind, ToastPosition, ToastRequest};

/// Delay used by the "toast over a modal" buttons, long enough for the
/// modal to finish mounting before delivery.
pub const MODAL_TOAST_DELAY: Duration = Duration::from_millis(1000);

/// Messages for the demo screens.
#[derive(Debug, Clone)]
pub enum Message {
    AutoHideToggled(bool),
    TopPositionToggled(bool),
    ShowOneLine,
    ShowDelayed,
    ShowWithSubtitle,
    ShowWithPressAction,
    ShowError,
    Hide,
    OpenBottomSheet,
    CloseBottomSheet,
    OpenModalScreen,
    CloseModalScreen,
}

/// Toggle state and the press-action counter shown on screen.
#[derive(Debug)]
pub struct State {
    auto_hide: bool,
    top_position: bool,
    press_count: Arc<AtomicUsize>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            auto_hide: false,
            top_position: false,
            press_count: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_auto_hide(&mut self, auto_hide: bool) {
        self.auto_hide = auto_hide;
    }

    pub fn set_top_position(&mut self, top: bool) {
        self.top_position = top;
    }

    #[must_use]
    pub fn press_count(&self) -> usize {
        self.press_count.load(Ordering::Relaxed)
    }

    /// Translates a demo message into the toast request it fires, if
    /// any. Navigation side effects (opening the sheet or the modal
    /// screen) are handled by the application update.
    pub fn request_for(&self, message: &Message) -> Option<ToastRequest> {
        match message {
            Message::ShowOneLine => Some(self.base_request("This toast has one line.")),
            Message::ShowDelayed => Some(
                self.base_request("This toast waited 1 second to show.")
                    .with_delay(Duration::from_millis(1000)),
            ),
            Message::ShowWithSubtitle => Some(
                self.base_request("Toasts can have both a title and subtitle. This is the title.")
                    .with_secondary_text(
                        "This is the subtitle. Something like \"Tap to go to your profile\" \
                         could indicate what tapping on the toast would do.",
                    ),
            ),
            Message::ShowWithPressAction => Some(
                self.base_request("This toast has an on press action.")
                    .with_secondary_text("Tap to bump the counter below.")
                    .with_on_press(self.counting_handler()),
            ),
            Message::ShowError => Some(
                self.base_request("Something had an error. \u{1F631}")
                    .with_kind(ToastKind::Error)
                    .with_secondary_text("Tap to retry.")
                    .with_on_press(self.counting_handler()),
            ),
            Message::OpenBottomSheet => Some(
                self.base_request("I show over a modally-presented sheet.")
                    .with_delay(MODAL_TOAST_DELAY),
            ),
            Message::OpenModalScreen => Some(
                self.base_request("I show over a second modally-presented screen.")
                    .with_delay(MODAL_TOAST_DELAY),
            ),
            _ => None,
        }
    }

    /// Applies the common toggle props to a fresh request.
    fn base_request(&self, primary_text: impl Into<String>) -> ToastRequest {
        let position = if self.top_position {
            ToastPosition::Top
        } else {
            ToastPosition::Bottom
        };
        ToastRequest::new(primary_text)
            .with_auto_hide(self.auto_hide)
            .with_position(position)
    }

    /// Press handler that bumps the on-screen counter.
    fn counting_handler(&self) -> PressHandler {
        let count = Arc::clone(&self.press_count);
        PressHandler::new(move || {
            count.fetch_add(1, Ordering::Relaxed);
        })
    }
}

/// Context required to render the demo screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;

    let auto_hide_toggle = toggle_row(
        ctx.i18n.tr("demo-auto-hide-toggle"),
        state.auto_hide,
        Message::AutoHideToggled,
    );
    let position_toggle = toggle_row(
        ctx.i18n.tr("demo-top-position-toggle"),
        state.top_position,
        Message::TopPositionToggled,
    );

    let buttons = Column::new()
        .spacing(spacing::XS)
        .push(demo_button(ctx.i18n.tr("demo-show-one-line"), Message::ShowOneLine))
        .push(demo_button(ctx.i18n.tr("demo-show-delayed"), Message::ShowDelayed))
        .push(demo_button(
            ctx.i18n.tr("demo-show-subtitle"),
            Message::ShowWithSubtitle,
        ))
        .push(demo_button(
            ctx.i18n.tr("demo-show-on-press"),
            Message::ShowWithPressAction,
        ))
        .push(demo_button(ctx.i18n.tr("demo-show-error"), Message::ShowError))
        .push(demo_button(ctx.i18n.tr("demo-hide"), Message::Hide))
        .push(demo_button(
            ctx.i18n.tr("demo-show-over-sheet"),
            Message::OpenBottomSheet,
        ))
        .push(demo_button(
            ctx.i18n.tr("demo-show-over-modal-screen"),
            Message::OpenModalScreen,
        ));

    let press_counter = Text::new(ctx.i18n.tr_with_args(
        "demo-press-count",
        &[("count", &state.press_count().to_string())],
    ))
    .size(typography::CAPTION);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(auto_hide_toggle)
        .push(position_toggle)
        .push(buttons)
        .push(press_counter);

    scrollable(content).into()
}

/// Content rendered inside the bottom sheet.
pub fn view_sheet_content(i18n: &I18n) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(demo_button(
            i18n.tr("sheet-close"),
            Message::CloseBottomSheet,
        ))
        .push(Text::new(i18n.tr("sheet-message")).size(typography::BODY))
        .into()
}

/// The second, modally-presented screen with its own toast host.
pub fn view_modal_screen(i18n: &I18n) -> Element<'_, Message> {
    let close = button(Text::new("\u{2715}").size(sizing::ICON_SM))
        .padding(spacing::XXS)
        .style(styles::button::plain)
        .on_press(Message::CloseModalScreen);

    let header = Container::new(close)
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Right);

    let title = Container::new(Text::new(i18n.tr("modal-title")).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Column::new()
        .push(header)
        .push(title)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toggle_row(label: String, checked: bool, on_toggle: fn(bool) -> Message) -> Element<'static, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center)
        .push(Text::new(label).size(typography::BODY).width(Length::Fill))
        .push(toggler(checked).on_toggle(on_toggle).size(20.0))
        .into()
}

fn demo_button(label: String, message: Message) -> Element<'static, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::primary)
        .on_press(message)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_apply_to_requests() {
        let mut state = State::new();
        state.set_auto_hide(true);
        state.set_top_position(true);

        let request = state.request_for(&Message::ShowOneLine).unwrap();
        assert_eq!(request.auto_hide(), Some(true));
        assert_eq!(request.position(), Some(ToastPosition::Top));
    }

    #[test]
    fn error_button_builds_error_request() {
        let state = State::new();
        let request = state.request_for(&Message::ShowError).unwrap();
        assert_eq!(request.kind(), Some(ToastKind::Error));
        assert!(request.on_press().is_some());
        assert!(request.secondary_text().is_some());
    }

    #[test]
    fn modal_buttons_request_delayed_toasts() {
        let state = State::new();
        for message in [Message::OpenBottomSheet, Message::OpenModalScreen] {
            let request = state.request_for(&message).unwrap();
            assert_eq!(request.delay(), Some(MODAL_TOAST_DELAY));
        }
    }

    #[test]
    fn toggle_and_close_messages_fire_no_request() {
        let state = State::new();
        for message in [
            Message::AutoHideToggled(true),
            Message::TopPositionToggled(true),
            Message::Hide,
            Message::CloseBottomSheet,
            Message::CloseModalScreen,
        ] {
            assert!(state.request_for(&message).is_none());
        }
    }

    #[test]
    fn press_handler_bumps_counter() {
        let state = State::new();
        let request = state.request_for(&Message::ShowWithPressAction).unwrap();
        request.on_press().unwrap().invoke();
        assert_eq!(state.press_count(), 1);
    }
}
