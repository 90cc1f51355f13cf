// SPDX-License-Identifier: MPL-2.0
//! Design-pattern reference viewer: a fixed catalog shown as a sidebar list
//! with a detail pane and a collapsible code-sample section.

pub mod catalog;
pub mod component;
pub mod view;

pub use catalog::{PatternRecord, CATALOG};
pub use component::{update, Message, State};
pub use view::{view, ViewContext};
