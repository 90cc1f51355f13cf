// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application chrome.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//! Catalog content (pattern write-ups, photo captions baked into assets) is fixed
//! copy and stays untranslated; only the chrome around it goes through Fluent.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Loading of embedded `.ftl` translation files
//! - Runtime language switching
//! - Fallback to default locale when translations are missing

pub mod fluent;
