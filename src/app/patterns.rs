// SPDX-License-Identifier: MPL-2.0
//! Shell for the pattern viewer binary.
//!
//! Same wiring as the gallery shell with one difference: the pattern viewer
//! has no startup task, its catalog is plain static text.

use super::{seed_config_if_missing, window_settings, Flags};
use crate::i18n::fluent::I18n;
use crate::patterns;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use iced::widget::Stack;
use iced::{event, keyboard, time, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

/// Root state of the pattern viewer application.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    patterns: patterns::State,
    notifications: notifications::Manager,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Patterns(patterns::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant),
}

/// Entry point used by the pattern viewer binary to launch the Iced
/// application loop.
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
            patterns: patterns::State::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = crate::config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        seed_config_if_missing(&config, &mut app.notifications);

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("patterns-window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = event::listen_with(route_event);

        let tick_sub = if self.notifications.has_notifications() {
            time::every(Duration::from_millis(100)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Patterns(patterns_message) => {
                patterns::update(&mut self.patterns, patterns_message);
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
        let screen = patterns::view(patterns::ViewContext {
            i18n: &self.i18n,
            state: &self.patterns,
        })
        .map(Message::Patterns);

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

/// Routes native keyboard events into pattern viewer messages: ↑/↓ move the
/// selection.
fn route_event(
    event: event::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match status {
        event::Status::Captured => None,
        event::Status::Ignored => match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowUp),
                ..
            }) => Some(Message::Patterns(patterns::Message::SelectPrevious)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowDown),
                ..
            }) => Some(Message::Patterns(patterns::Message::SelectNext)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn arrow_down_routes_to_select_next() {
        let message = route_event(
            key_pressed(
                keyboard::key::Named::ArrowDown,
                keyboard::key::Code::ArrowDown,
            ),
            event::Status::Ignored,
            window::Id::unique(),
        );

        assert!(matches!(
            message,
            Some(Message::Patterns(patterns::Message::SelectNext))
        ));
    }

    #[test]
    fn selection_messages_drive_the_component() {
        let mut app = App::default();
        assert_eq!(app.patterns.selected_id(), 1);

        let _ = app.update(Message::Patterns(patterns::Message::PatternSelected(5)));
        assert_eq!(app.patterns.selected_id(), 5);

        let _ = app.update(Message::Patterns(patterns::Message::CodeToggled));
        assert!(app.patterns.code_expanded());

        let _ = app.update(Message::Patterns(patterns::Message::PatternSelected(2)));
        assert!(!app.patterns.code_expanded());
        assert_eq!(app.patterns.selected_id(), 2);
    }
}
