// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::sheet;
use crate::ui::toast::Hub;
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription.
///
/// Animation frames need a fast cadence; parked deliveries and auto-hide
/// timers only need a coarse one. With no toast activity at all there is
/// no subscription.
pub fn create_tick_subscription(hub: &Hub) -> Subscription<Message> {
    if hub.is_animating() {
        time::every(Duration::from_millis(16)).map(Message::Tick)
    } else if hub.has_activity() {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Routes raw pointer events to the sheet while it is visible, so an
/// in-flight drag keeps tracking after the cursor leaves the panel and a
/// release anywhere ends it.
pub fn create_event_subscription(sheet_visible: bool) -> Subscription<Message> {
    if !sheet_visible {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::Sheet(sheet::Event::PointerMoved(position)))
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::Sheet(sheet::Event::GrabReleased))
        }
        _ => None,
    })
}
