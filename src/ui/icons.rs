// SPDX-License-Identifier: MPL-2.0
//! Heart icons for the favorite toggle.
//!
//! Icons are small inline SVGs. Handles are created once on first access and
//! cached in a `OnceLock`; the glyph color is applied through the SVG style so
//! the same handle serves both themes.

use iced::widget::svg::{self, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

const HEART_FILLED_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="black" d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z"/></svg>"#;

const HEART_OUTLINE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="black" d="M16.5 3c-1.74 0-3.41.81-4.5 2.09C10.91 3.81 9.24 3 7.5 3 4.42 3 2 5.42 2 8.5c0 3.78 3.4 6.86 8.55 11.54L12 21.35l1.45-1.32C18.6 15.36 22 12.28 22 8.5 22 5.42 19.58 3 16.5 3zm-4.4 15.55l-.1.1-.1-.1C7.14 14.24 4 11.39 4 8.5 4 6.5 5.5 5 7.5 5c1.54 0 3.04.99 3.57 2.36h1.87C13.46 5.99 14.96 5 16.5 5c2 0 3.5 1.5 3.5 3.5 0 2.89-3.14 5.74-7.9 10.05z"/></svg>"#;

fn cached(cell: &'static OnceLock<svg::Handle>, source: &'static str) -> svg::Handle {
    cell.get_or_init(|| svg::Handle::from_memory(source.as_bytes()))
        .clone()
}

fn tinted<'a>(handle: svg::Handle, size: f32, color: Color) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Filled heart: the card is a favorite.
pub fn heart_filled<'a>(size: f32, color: Color) -> Svg<'a> {
    static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
    tinted(cached(&HANDLE, HEART_FILLED_SVG), size, color)
}

/// Outlined heart: the card is not a favorite.
pub fn heart_outline<'a>(size: f32, color: Color) -> Svg<'a> {
    static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
    tinted(cached(&HANDLE, HEART_OUTLINE_SVG), size, color)
}

/// Picks the heart glyph for a favorite flag.
pub fn heart<'a>(is_favorite: bool, size: f32, color: Color) -> Svg<'a> {
    if is_favorite {
        heart_filled(size, color)
    } else {
        heart_outline(size, color)
    }
}
