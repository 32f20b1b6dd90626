// SPDX-License-Identifier: MPL-2.0
//! `iced_slider` is a swipeable image carousel built with the Iced GUI framework.
//!
//! Ten cards show remote placeholder images with a title and a favorite
//! toggle; cards away from the focal page shrink and fade with the scroll
//! offset.

#![doc(html_root_url = "https://docs.rs/iced_slider/0.1.0")]

pub mod app;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
