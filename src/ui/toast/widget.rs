// SPDX-License-Identifier: MPL-2.0
//! Toast rendering: a pure projection of host state.
//!
//! The card is a row of `[texts][close]` on a kind-colored background.
//! Entrance and exit are rendered from the host's animation progress as
//! a short slide from the anchored edge combined with a fade.

use super::host::{ActiveToast, Host};
use super::request::{ToastKind, ToastPosition};
use super::router::SurfaceId;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme};
use std::time::Instant;

/// Distance (logical px) a toast travels while entering or exiting.
const SLIDE_DISTANCE: f32 = 24.0;

/// Character budget per rendered line at body size inside the card.
const CHARS_PER_LINE: usize = 38;

/// Messages emitted by rendered toasts.
#[derive(Debug, Clone)]
pub enum Event {
    /// The toast body was pressed.
    Pressed(SurfaceId),
    /// The close affordance was pressed.
    CloseRequested(SurfaceId),
}

pub struct Toast;

impl Toast {
    /// Renders the toast layer for one surface, anchored to the edge the
    /// active request asked for. Returns `None` while the host is
    /// hidden.
    pub fn view_layer(
        host: &Host,
        surface: SurfaceId,
        keyboard_offset: f32,
    ) -> Option<Element<'_, Event>> {
        Self::view_layer_at(host, surface, keyboard_offset, Instant::now())
    }

    /// Same as [`Self::view_layer`] with an explicit clock, so animation
    /// framing is testable.
    pub fn view_layer_at(
        host: &Host,
        surface: SurfaceId,
        keyboard_offset: f32,
        now: Instant,
    ) -> Option<Element<'_, Event>> {
        let active = host.active()?;
        let progress = host.progress_at(now);
        let card = Self::view(active, surface, progress);

        let slide = (1.0 - progress) * SLIDE_DISTANCE;
        let layer = match active.position() {
            ToastPosition::Top => Container::new(card)
                .align_y(alignment::Vertical::Top)
                .padding(Padding {
                    top: (spacing::MD - slide).max(0.0),
                    right: spacing::SM,
                    bottom: 0.0,
                    left: spacing::SM,
                }),
            ToastPosition::Bottom => Container::new(card)
                .align_y(alignment::Vertical::Bottom)
                .padding(Padding {
                    top: 0.0,
                    right: spacing::SM,
                    bottom: (spacing::MD + keyboard_offset - slide).max(0.0),
                    left: spacing::SM,
                }),
        };

        Some(
            layer
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .into(),
        )
    }

    /// Renders a single toast card at the given animation progress.
    pub fn view<'a>(active: &'a ActiveToast, surface: SurfaceId, progress: f32) -> Element<'a, Event> {
        let accent = kind_color(active.kind());

        let primary = Text::new(clamp_lines(
            active.primary_text(),
            active.primary_max_lines(),
            CHARS_PER_LINE,
        ))
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(faded(palette::WHITE, progress)),
        });

        let mut texts = Column::new().spacing(spacing::XXS).push(primary);
        if let Some(secondary) = active.secondary_text() {
            texts = texts.push(
                Text::new(clamp_lines(
                    secondary,
                    active.secondary_max_lines(),
                    CHARS_PER_LINE,
                ))
                .size(typography::BODY_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(
                        Color {
                            a: opacity::TEXT_SECONDARY,
                            ..palette::WHITE
                        },
                        progress,
                    )),
                }),
            );
        }

        let close_glyph = Container::new(Text::new("\u{2715}").size(sizing::ICON_SM).style(
            move |_theme: &Theme| text::Style {
                color: Some(faded(palette::WHITE, progress)),
            },
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        let dismiss_button = button(close_glyph)
            .width(Length::Fixed(sizing::TOAST_CLOSE_BUTTON))
            .height(Length::Fixed(sizing::TOAST_CLOSE_BUTTON))
            .padding(0.0)
            .on_press(Event::CloseRequested(surface))
            .style(close_button_style(progress));

        let content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(texts).width(Length::Fill))
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(Padding {
                top: spacing::SM,
                right: spacing::XXS,
                bottom: spacing::SM,
                left: spacing::MD,
            })
            .style(move |_theme: &Theme| card_style(accent, progress));

        mouse_area(card).on_press(Event::Pressed(surface)).into()
    }
}

fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Default => palette::NEUTRAL_600,
        ToastKind::Error => palette::ERROR_500,
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn card_style(accent: Color, progress: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(accent, progress))),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::TOAST.into(),
        },
        shadow: Shadow {
            color: faded(shadow::MD.color, opacity::OVERLAY_MEDIUM * progress),
            ..shadow::MD
        },
        text_color: Some(faded(palette::WHITE, progress)),
        ..container::Style::default()
    }
}

fn close_button_style(progress: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE * progress,
                ..palette::WHITE
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color: faded(palette::WHITE, progress),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Clamps `text` to at most `max_lines` rendered lines given a
/// character budget per line, appending an ellipsis when truncated.
fn clamp_lines(text: &str, max_lines: usize, chars_per_line: usize) -> String {
    let budget = max_lines.max(1) * chars_per_line;
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let clipped: String = text.chars().take(budget.saturating_sub(1)).collect();
    format!("{}…", clipped.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::{HostDefaults, ToastRequest};
    use std::time::Instant;

    const SURFACE: SurfaceId = SurfaceId::new("test");

    #[test]
    fn clamp_lines_keeps_short_text() {
        assert_eq!(clamp_lines("short", 1, 38), "short");
    }

    #[test]
    fn clamp_lines_truncates_with_ellipsis() {
        let long = "x".repeat(100);
        let clamped = clamp_lines(&long, 2, 38);
        assert!(clamped.ends_with('…'));
        assert_eq!(clamped.chars().count(), 2 * 38);
    }

    #[test]
    fn clamp_lines_treats_zero_as_one_line() {
        let long = "y".repeat(100);
        let clamped = clamp_lines(&long, 0, 38);
        assert_eq!(clamped.chars().count(), 38);
    }

    #[test]
    fn hidden_host_renders_no_layer() {
        let host = Host::new();
        assert!(Toast::view_layer_at(&host, SURFACE, 12.0, Instant::now()).is_none());
    }

    #[test]
    fn shown_host_renders_a_layer() {
        let now = Instant::now();
        let mut host = Host::new();
        host.show(ToastRequest::new("hello"), &HostDefaults::default(), now);
        assert!(Toast::view_layer_at(&host, SURFACE, 12.0, now).is_some());
    }

    #[test]
    fn kind_colors_are_distinct() {
        assert_ne!(kind_color(ToastKind::Default), kind_color(ToastKind::Error));
    }
}
