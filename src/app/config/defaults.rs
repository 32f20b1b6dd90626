// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Carousel**: page count, snapping, requested image size
//! - **Network**: image request timeout

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Number of pages in the carousel. Not configurable.
pub const PAGE_COUNT: usize = 10;

/// Idle time after the last scroll event before the pager snaps to a page.
pub const DEFAULT_SNAP_DELAY_MS: u64 = 150;

/// Minimum snap delay.
pub const MIN_SNAP_DELAY_MS: u64 = 50;

/// Maximum snap delay.
pub const MAX_SNAP_DELAY_MS: u64 = 2000;

/// Default width of the requested placeholder image, in pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 600;

/// Default height of the requested placeholder image, in pixels.
pub const DEFAULT_IMAGE_HEIGHT: u32 = 500;

/// Smallest image dimension we ask the image service for.
pub const MIN_IMAGE_DIMENSION: u32 = 100;

/// Largest image dimension we ask the image service for.
pub const MAX_IMAGE_DIMENSION: u32 = 2000;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default timeout for a single image request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(PAGE_COUNT > 1);
    assert!(MIN_SNAP_DELAY_MS <= DEFAULT_SNAP_DELAY_MS);
    assert!(DEFAULT_SNAP_DELAY_MS <= MAX_SNAP_DELAY_MS);
    assert!(MIN_IMAGE_DIMENSION <= DEFAULT_IMAGE_WIDTH);
    assert!(DEFAULT_IMAGE_WIDTH <= MAX_IMAGE_DIMENSION);
    assert!(MIN_IMAGE_DIMENSION <= DEFAULT_IMAGE_HEIGHT);
    assert!(DEFAULT_IMAGE_HEIGHT <= MAX_IMAGE_DIMENSION);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
};
