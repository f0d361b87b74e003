// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the demo screens,
//! the modal surfaces, and the toast hub.
//!
//! The `App` struct wires together localization, the demo screen state,
//! the bottom sheet, and the toast hub, and keeps the surface
//! mount/unmount policy close to the main update loop so overlay
//! lifecycle is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::toast::{HostDefaults, Hub, SurfaceId, ToastRequest};
use crate::ui::{demo, sheet};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// The always-mounted application surface.
pub const MAIN_SURFACE: SurfaceId = SurfaceId::new("main");
/// The bottom sheet's surface while it is open.
pub const SHEET_SURFACE: SurfaceId = SurfaceId::new("bottom-sheet");
/// The modally-presented screen's surface while it is open.
pub const MODAL_SURFACE: SurfaceId = SurfaceId::new("modal-screen");

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 380;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

/// Root Iced application state bridging UI components, localization, and
/// the toast hub.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    demo: demo::State,
    sheet: sheet::State,
    sheet_visible: bool,
    sheet_props: sheet::Props,
    hub: Hub,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("sheet_visible", &self.sheet_visible)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let mut hub = Hub::new(HostDefaults::default());
        hub.mount(MAIN_SURFACE);

        Self {
            i18n: I18n::default(),
            screen: Screen::Demo,
            demo: demo::State::new(),
            sheet: sheet::State::new(),
            sheet_visible: false,
            sheet_props: sheet::Props::default(),
            hub,
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut hub = Hub::new(host_defaults_from(&config));
        hub.mount(MAIN_SURFACE);

        let mut app = App {
            i18n,
            hub,
            ..Self::default()
        };

        // Surface config problems the same way the demo surfaces
        // everything else: as a toast.
        if let Some(key) = config_warning {
            let text = app.i18n.tr(&key);
            app.hub
                .show(ToastRequest::error(text).with_auto_hide(false), Instant::now());
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(&self.hub),
            subscription::create_event_subscription(self.sheet_visible),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            demo: &mut self.demo,
            sheet: &mut self.sheet,
            sheet_visible: &mut self.sheet_visible,
            sheet_props: &self.sheet_props,
            hub: &mut self.hub,
        };

        match message {
            Message::Demo(demo_message) => update::handle_demo_message(&mut ctx, demo_message),
            Message::Sheet(sheet_event) => update::handle_sheet_event(&mut ctx, sheet_event),
            Message::Toast(toast_event) => update::handle_toast_event(&mut ctx, toast_event),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            demo: &self.demo,
            sheet: &self.sheet,
            sheet_visible: self.sheet_visible,
            sheet_props: &self.sheet_props,
            hub: &self.hub,
        })
    }
}

fn host_defaults_from(config: &Config) -> HostDefaults {
    let mut defaults = HostDefaults::default();
    if let Some(ms) = config.toast.visibility_time_ms {
        defaults.visible_duration = Duration::from_millis(ms);
    }
    if let Some(position) = config.toast.position {
        defaults.position = position;
    }
    if let Some(kind) = config.toast.default_kind {
        defaults.kind = kind;
    }
    if let Some(offset) = config.toast.keyboard_offset {
        defaults.keyboard_offset = offset;
    }
    defaults
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::{Phase, ToastKind, ToastPosition};

    fn update(app: &mut App, message: Message) {
        let _ = app.update(message);
    }

    #[test]
    fn default_app_mounts_main_surface() {
        let app = App::default();
        assert_eq!(app.hub.current_surface(), Some(MAIN_SURFACE));
    }

    #[test]
    fn view_renders_without_panicking() {
        let app = App::default();
        let _element = app.view();
    }

    #[test]
    fn opening_sheet_mounts_its_surface() {
        let mut app = App::default();
        update(&mut app, Message::Demo(demo::Message::OpenBottomSheet));

        assert!(app.sheet_visible);
        assert_eq!(app.hub.current_surface(), Some(SHEET_SURFACE));
        // The "over a modal" toast is parked until its delay elapses.
        assert_eq!(app.hub.pending_count(), 1);
    }

    #[test]
    fn closing_sheet_restores_main_surface() {
        let mut app = App::default();
        update(&mut app, Message::Demo(demo::Message::OpenBottomSheet));
        update(&mut app, Message::Demo(demo::Message::CloseBottomSheet));

        assert!(!app.sheet_visible);
        assert_eq!(app.hub.current_surface(), Some(MAIN_SURFACE));
        assert!(app.hub.host(SHEET_SURFACE).is_none());
    }

    #[test]
    fn sheet_dismiss_action_unmounts_synchronously() {
        let mut app = App::default();
        update(&mut app, Message::Demo(demo::Message::OpenBottomSheet));
        update(&mut app, Message::Sheet(sheet::Event::BackdropPressed));

        assert!(!app.sheet_visible);
        assert!(app.hub.host(SHEET_SURFACE).is_none());
    }

    #[test]
    fn modal_screen_round_trip() {
        let mut app = App::default();
        update(&mut app, Message::Demo(demo::Message::OpenModalScreen));
        assert_eq!(app.screen, Screen::Modal);
        assert_eq!(app.hub.current_surface(), Some(MODAL_SURFACE));

        update(&mut app, Message::Demo(demo::Message::CloseModalScreen));
        assert_eq!(app.screen, Screen::Demo);
        assert_eq!(app.hub.current_surface(), Some(MAIN_SURFACE));
    }

    #[test]
    fn show_button_reaches_main_host() {
        let mut app = App::default();
        update(&mut app, Message::Demo(demo::Message::ShowOneLine));

        let host = app.hub.host(MAIN_SURFACE).unwrap();
        assert_eq!(host.phase(), Phase::Entering);
        assert_eq!(
            host.active().unwrap().primary_text(),
            "This toast has one line."
        );
    }

    #[test]
    fn tick_advances_hub_timers() {
        let mut app = App::default();
        update(&mut app, Message::Demo(demo::Message::ShowOneLine));

        let later = Instant::now() + crate::ui::toast::ENTER_EXIT_ANIMATION * 2;
        update(&mut app, Message::Tick(later));

        let host = app.hub.host(MAIN_SURFACE).unwrap();
        assert_eq!(host.phase(), Phase::Visible);
    }

    #[test]
    fn host_defaults_respect_config() {
        let config = Config {
            language: None,
            toast: crate::config::ToastConfig {
                visibility_time_ms: Some(1000),
                position: Some(ToastPosition::Top),
                default_kind: Some(ToastKind::Error),
                keyboard_offset: Some(0.0),
            },
        };
        let defaults = host_defaults_from(&config);
        assert_eq!(defaults.visible_duration, Duration::from_millis(1000));
        assert_eq!(defaults.position, ToastPosition::Top);
        assert_eq!(defaults.kind, ToastKind::Error);
        assert_eq!(defaults.keyboard_offset, 0.0);
    }
}
