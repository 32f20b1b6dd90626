// SPDX-License-Identifier: MPL-2.0
//! Image references and image bytes for the carousel cards.
//!
//! [`provider`] hands out references, [`loader`] turns a reference into a
//! decoded [`ImageData`].

pub mod image;
pub mod loader;
pub mod provider;

pub use image::{decode_image, ImageData};
pub use loader::ImageLoader;
pub use provider::{ImageProvider, PicsumProvider, SequenceProvider};
