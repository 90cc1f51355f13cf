// SPDX-License-Identifier: MPL-2.0
//! Photo gallery screen: a fixed grid of cards with hover feedback and a
//! lightbox for enlarging a single photo.

pub mod catalog;
pub mod component;
pub mod view;

pub use catalog::{MediaItem, PhotoData, CATALOG};
pub use component::{decode_all, update, Event, Lightbox, Message, State};
pub use view::{view, ViewContext};
