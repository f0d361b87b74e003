// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal backdrop.

use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dimming layer drawn between the base screen and a modal surface.
pub fn backdrop(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}
