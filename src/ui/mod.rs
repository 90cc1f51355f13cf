// SPDX-License-Identifier: MPL-2.0
//! Shared user interface infrastructure.
//!
//! Everything here follows the Elm-style "state down, messages up" pattern
//! used by the screen modules ([`crate::gallery`], [`crate::patterns`]).
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded PNG icon loading (visual primitives)
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
