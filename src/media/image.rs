// SPDX-License-Identifier: MPL-2.0
//! Decoding of downloaded image bytes into Iced image handles.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Decodes encoded bytes (JPEG, PNG, WebP) into RGBA pixels.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the format is unknown or the data is invalid,
/// or if the image has zero width or height.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }

    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}
