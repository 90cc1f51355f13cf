// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for PNG icons.
//!
//! PNG format ensures consistent cross-platform rendering (no SVG interpretation
//! differences on Windows). Icons are embedded at compile time via `include_bytes!`
//! and handles are cached using `OnceLock` for optimal performance.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::image::{Handle, Image};
use iced::Length;
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Image<Handle> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_bytes(DATA));
            Image::new(handle.clone())
        }
    };
}

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    warning,
    "warning.png",
    "Warning icon: triangle with exclamation mark."
);
define_icon!(info, "info.png", "Info icon: letter 'i' in circle.");
define_icon!(cross, "cross.png", "Cross icon: X mark shape.");

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Image<Handle>, size: f32) -> Image<Handle> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        // These calls verify that all include_bytes! paths are valid
        let _ = warning();
        let _ = info();
        let _ = cross();
    }

    #[test]
    fn sized_helper_works() {
        let icon = sized(info(), 32.0);
        // Just verify it compiles and returns an Image
        let _ = icon;
    }
}
