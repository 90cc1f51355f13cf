// SPDX-License-Identifier: MPL-2.0
//! Fixed photo catalog embedded into the binary.
//!
//! The gallery ships its media at compile time: [`CATALOG`] lists every photo
//! in display order together with the decorative glyph shown on its card
//! badge. Pixel decoding is deferred to [`decode_photo`] so the UI thread
//! never blocks on PNG work.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use rust_embed::RustEmbed;

/// Embedded photo files compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/photos/"]
struct PhotoAsset;

/// A single gallery entry: an embedded asset plus its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    /// One-based position shown in captions.
    pub ordinal: u32,
    /// Decorative emoji rendered on the card badge.
    pub glyph: &'static str,
    /// File name of the embedded photo under `assets/photos/`.
    pub asset: &'static str,
}

/// Every photo in the gallery, in display order.
///
/// Ordinals are dense and one-based; the catalog never changes at runtime.
pub const CATALOG: [MediaItem; 6] = [
    MediaItem {
        ordinal: 1,
        glyph: "🎂",
        asset: "photo-01.png",
    },
    MediaItem {
        ordinal: 2,
        glyph: "🎈",
        asset: "photo-02.png",
    },
    MediaItem {
        ordinal: 3,
        glyph: "🎉",
        asset: "photo-03.png",
    },
    MediaItem {
        ordinal: 4,
        glyph: "👶",
        asset: "photo-04.png",
    },
    MediaItem {
        ordinal: 5,
        glyph: "💕",
        asset: "photo-05.png",
    },
    MediaItem {
        ordinal: 6,
        glyph: "🌟",
        asset: "photo-06.png",
    },
];

/// A decoded photo ready for the image widget.
#[derive(Debug, Clone)]
pub struct PhotoData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Decode the catalog photo at `index` into widget-ready pixels.
///
/// # Errors
///
/// Returns [`Error::Asset`] when the index has no catalog entry, the embedded
/// file is missing, or the PNG fails to decode.
pub fn decode_photo(index: usize) -> Result<PhotoData> {
    let item = CATALOG
        .get(index)
        .ok_or_else(|| Error::Asset(format!("no catalog entry at index {index}")))?;

    let file = PhotoAsset::get(item.asset)
        .ok_or_else(|| Error::Asset(format!("missing embedded photo {}", item.asset)))?;

    let img = image_rs::load_from_memory(&file.data)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(PhotoData {
        handle: image::Handle::from_rgba(width, height, pixels),
        width,
        height,
    })
}
