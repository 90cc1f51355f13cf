// SPDX-License-Identifier: MPL-2.0
//! Application shells for the two binaries.
//!
//! Each shell owns its screen's component state plus the shared plumbing
//! (localization, theming, notifications) and drives it through the
//! `iced::application` builder. Policy decisions such as window sizing and
//! first-run config seeding live here, close to the update loops.

pub mod gallery;
pub mod patterns;

use crate::config::{self, Config};
use crate::ui::notifications;
use iced::window;

/// Runtime flags parsed from the command line by each binary.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `VITRINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Builds the window settings shared by both applications.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Writes the default settings file when none exists yet, so the config
/// directory always holds an editable template after first launch.
///
/// A failed write is not fatal: it surfaces as a warning toast.
fn seed_config_if_missing(config: &Config, notifications: &mut notifications::Manager) {
    let missing = config::config_file_path().is_some_and(|path| !path.exists());

    if missing {
        if let Err(error) = config::save(config) {
            eprintln!("Failed to seed default settings: {error}");
            notifications.push(notifications::Notification::warning(
                "notification-config-save-error",
            ));
        }
    }
}
