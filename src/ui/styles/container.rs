// SPDX-License-Identifier: MPL-2.0
//! Container styles for the modal surfaces.

use crate::ui::design_tokens::shadow;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel of the bottom sheet: rounded top corners only, so the sheet
/// reads as anchored to the window edge.
pub fn sheet(corner_radius: f32, background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius {
                top_left: corner_radius,
                top_right: corner_radius,
                bottom_left: 0.0,
                bottom_right: 0.0,
            },
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Centered card variant of the modal surface: all corners rounded.
pub fn card(corner_radius: f32, background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: corner_radius.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}
