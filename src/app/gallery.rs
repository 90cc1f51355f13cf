// SPDX-License-Identifier: MPL-2.0
//! Shell for the gallery binary: wires the gallery screen to configuration,
//! localization, theming, and toast notifications.

use super::{seed_config_if_missing, window_settings, Flags};
use crate::config;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use iced::widget::Stack;
use iced::{event, keyboard, time, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

/// Root state of the gallery application.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Cards per grid row, clamped by the config layer.
    grid_columns: u16,
    gallery: gallery::State,
    notifications: notifications::Manager,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant),
}

/// Entry point used by the gallery binary to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn bound while only
    // consuming the flags once (iced 0.14 requires Fn, not FnOnce).
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
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            grid_columns: config::DEFAULT_GRID_COLUMNS,
            gallery: gallery::State::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from config and kicks off decoding of
    /// the embedded photos.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            grid_columns: config.effective_grid_columns(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        seed_config_if_missing(&config, &mut app.notifications);

        (app, gallery::decode_all().map(Message::Gallery))
    }

    fn title(&self) -> String {
        self.i18n.tr("gallery-window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = event::listen_with(route_event);

        // Toast auto-dismiss only needs the clock while toasts are visible.
        let tick_sub = if self.notifications.has_notifications() {
            time::every(Duration::from_millis(100)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                match gallery::update(&mut self.gallery, gallery_message) {
                    gallery::Event::None => {}
                    gallery::Event::DecodeFailed(error) => {
                        eprintln!("Failed to decode an embedded photo: {error}");
                        self.notifications
                            .push(notifications::Notification::error(error.i18n_key()));
                    }
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let screen = gallery::view(gallery::ViewContext {
            i18n: &self.i18n,
            state: &self.gallery,
            grid_columns: self.grid_columns,
        })
        .map(Message::Gallery);

        let toasts =
            Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(screen)
            .push(toasts)
            .into()
    }
}

/// Routes native keyboard events into gallery messages.
///
/// Escape closes the lightbox and ←/→ re-target it; the component ignores
/// navigation while idle, so the mapping is unconditional here.
fn route_event(
    event: event::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match status {
        event::Status::Captured => None,
        event::Status::Ignored => match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Gallery(gallery::Message::ClosePressed)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Gallery(gallery::Message::ViewPrevious)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Gallery(gallery::Message::ViewNext)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::Lightbox;
    use iced::window;

    fn key_pressed(named: keyboard::key::Named, code: keyboard::key::Code) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn title_resolves_a_localized_key() {
        let app = App::default();
        assert!(!app.title().is_empty());
        assert!(!app.title().starts_with("MISSING"));
    }

    #[test]
    fn escape_key_routes_to_close() {
        let message = route_event(
            key_pressed(keyboard::key::Named::Escape, keyboard::key::Code::Escape),
            event::Status::Ignored,
            window::Id::unique(),
        );

        assert!(matches!(
            message,
            Some(Message::Gallery(gallery::Message::ClosePressed))
        ));
    }

    #[test]
    fn captured_keys_are_not_routed() {
        let message = route_event(
            key_pressed(keyboard::key::Named::Escape, keyboard::key::Code::Escape),
            event::Status::Captured,
            window::Id::unique(),
        );

        assert!(message.is_none());
    }

    #[test]
    fn arrow_keys_navigate_an_open_lightbox() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::CardPressed(0)));
        let _ = app.update(Message::Gallery(gallery::Message::ViewNext));

        assert_eq!(app.gallery.lightbox(), Lightbox::Viewing { index: 1 });

        let _ = app.update(Message::Gallery(gallery::Message::ClosePressed));
        assert_eq!(app.gallery.lightbox(), Lightbox::Idle);
    }

    #[test]
    fn decode_failure_surfaces_an_error_toast() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::PhotoDecoded {
            index: 0,
            result: Err(Error::Asset("truncated png".into())),
        }));

        assert!(app.notifications.has_notifications());
        let toast = app.notifications.visible().next().expect("one toast");
        assert_eq!(toast.message_key(), "error-asset");
    }

    #[test]
    fn toast_dismiss_message_removes_the_toast() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::PhotoDecoded {
            index: 0,
            result: Err(Error::Asset("truncated png".into())),
        }));
        let id = app.notifications.visible().next().expect("one toast").id();

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));

        assert!(!app.notifications.has_notifications());
    }
}
