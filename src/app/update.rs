// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::{Message, Screen, MODAL_SURFACE, SHEET_SURFACE};
use crate::ui::toast::Hub;
use crate::ui::{demo, sheet, toast};
use iced::Task;
use std::time::Instant;

/// Mutable slices of `App` state the handlers operate on.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub demo: &'a mut demo::State,
    pub sheet: &'a mut sheet::State,
    pub sheet_visible: &'a mut bool,
    pub sheet_props: &'a sheet::Props,
    pub hub: &'a mut Hub,
}

pub fn handle_demo_message(ctx: &mut UpdateContext<'_>, message: demo::Message) -> Task<Message> {
    let now = Instant::now();

    match &message {
        demo::Message::AutoHideToggled(auto_hide) => ctx.demo.set_auto_hide(*auto_hide),
        demo::Message::TopPositionToggled(top) => ctx.demo.set_top_position(*top),
        demo::Message::Hide => ctx.hub.hide(now),
        demo::Message::OpenBottomSheet => {
            *ctx.sheet_visible = true;
            ctx.hub.mount(SHEET_SURFACE);
        }
        demo::Message::CloseBottomSheet => close_sheet(ctx),
        demo::Message::OpenModalScreen => {
            *ctx.screen = Screen::Modal;
            ctx.hub.mount(MODAL_SURFACE);
        }
        demo::Message::CloseModalScreen => {
            ctx.hub.unmount(MODAL_SURFACE);
            *ctx.screen = Screen::Demo;
        }
        _ => {}
    }

    if let Some(request) = ctx.demo.request_for(&message) {
        ctx.hub.show(request, now);
    }

    Task::none()
}

pub fn handle_sheet_event(ctx: &mut UpdateContext<'_>, event: sheet::Event) -> Task<Message> {
    let action = ctx.sheet.update(event, ctx.sheet_props.swipe_to_dismiss);
    if action == sheet::Action::Dismiss {
        close_sheet(ctx);
    }
    Task::none()
}

pub fn handle_toast_event(ctx: &mut UpdateContext<'_>, event: toast::Event) -> Task<Message> {
    let now = Instant::now();
    match event {
        toast::Event::Pressed(surface) => ctx.hub.press(surface),
        toast::Event::CloseRequested(surface) => ctx.hub.dismiss(surface, now),
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.hub.tick(now);
    Task::none()
}

/// The host must unregister in the same update that hides the sheet, so
/// a pending delayed show can no longer target the dropped host.
fn close_sheet(ctx: &mut UpdateContext<'_>) {
    ctx.hub.unmount(SHEET_SURFACE);
    *ctx.sheet_visible = false;
}
