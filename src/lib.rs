// SPDX-License-Identifier: MPL-2.0
//! `vitrine` is a pair of small presentational desktop apps built with the
//! Iced GUI framework: a keepsake photo gallery and a design-pattern
//! reference viewer.
//!
//! Both binaries share this library: fixed in-memory catalogs, explicit
//! interaction state machines, internationalization with Fluent, and user
//! preference management.

#![doc(html_root_url = "https://docs.rs/vitrine/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod patterns;
pub mod ui;
