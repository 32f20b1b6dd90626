// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The UI follows the Elm-style "state down, messages up" pattern: the
//! [`carousel`] component owns its state and emits messages the application
//! routes back into it.
//!
//! - [`carousel`] - Pager, cards and page indicator
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icons

pub mod carousel;
pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
