// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack: the active screen at the bottom, then (when
//! the sheet is open) the backdrop and the sheet panel, and on top of
//! each surface its own toast layer. A surface's toasts always render
//! above that surface but below any surface mounted after it.

use super::{Message, Screen, MAIN_SURFACE, MODAL_SURFACE, SHEET_SURFACE};
use crate::i18n::fluent::I18n;
use crate::ui::toast::{Hub, SurfaceId, Toast};
use crate::ui::{demo, sheet};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub demo: &'a demo::State,
    pub sheet: &'a sheet::State,
    pub sheet_visible: bool,
    pub sheet_props: &'a sheet::Props,
    pub hub: &'a Hub,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new();

    match ctx.screen {
        Screen::Demo => {
            stack = stack.push(
                demo::view(demo::ViewContext {
                    i18n: ctx.i18n,
                    state: ctx.demo,
                })
                .map(Message::Demo),
            );

            if let Some(layer) = toast_layer(ctx.hub, MAIN_SURFACE) {
                stack = stack.push(layer);
            }

            if ctx.sheet_visible {
                stack = stack.push(sheet::backdrop(ctx.sheet_props, Message::Sheet));
                stack = stack.push(sheet::view(
                    ctx.sheet,
                    ctx.sheet_props,
                    demo::view_sheet_content(ctx.i18n).map(Message::Demo),
                    Message::Sheet,
                ));
                if let Some(layer) = toast_layer(ctx.hub, SHEET_SURFACE) {
                    stack = stack.push(layer);
                }
            }
        }
        Screen::Modal => {
            stack = stack.push(demo::view_modal_screen(ctx.i18n).map(Message::Demo));

            if let Some(layer) = toast_layer(ctx.hub, MODAL_SURFACE) {
                stack = stack.push(layer);
            }
        }
    }

    stack.width(Length::Fill).height(Length::Fill).into()
}

fn toast_layer(hub: &Hub, surface: SurfaceId) -> Option<Element<'_, Message>> {
    let host = hub.host(surface)?;
    Toast::view_layer(host, surface, hub.defaults().keyboard_offset)
        .map(|layer| layer.map(Message::Toast))
}
