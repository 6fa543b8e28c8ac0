// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: The zoom factor table and its bounds
//! - **Viewer**: Preview panel geometry and pointer thresholds
//! - **Export**: Download naming and networking

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Zoom factors available to the viewer, ascending, with exactly one 1.0 entry.
///
/// The step right above natural size is the 1.2 multiplier of the classic
/// preview widget; the bounds match a 10%–800% zoom range.
pub const DEFAULT_SCALE_LEVELS: &[f32] = &[
    0.1, 0.25, 0.5, 0.75, 1.0, 1.2, 1.5, 2.0, 3.0, 4.0, 6.0, 8.0,
];

/// The natural-size factor every table must contain.
pub const NATURAL_SCALE: f32 = 1.0;

/// Minimum number of levels a scale table may have.
pub const MIN_SCALE_LEVELS: usize = 2;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Default preview panel width in logical pixels.
pub const DEFAULT_VIEWER_WIDTH: f32 = 400.0;

/// Default preview panel height in logical pixels.
pub const DEFAULT_VIEWER_HEIGHT: f32 = 600.0;

/// Height of the action bar below the image area.
pub const ACTION_BAR_HEIGHT: f32 = 50.0;

/// Height of the status line shown under the image when there is a message.
pub const STATUS_LINE_HEIGHT: f32 = 20.0;

/// Spinner animation frame interval while an image loads (milliseconds).
pub const SPINNER_TICK_MS: u64 = 16;

/// Two left presses closer than this are a double-click (milliseconds).
pub const DOUBLE_CLICK_THRESHOLD_MS: u64 = 350;

/// Pixel delta reported by touchpads that corresponds to one wheel line.
pub const PIXELS_PER_WHEEL_LINE: f32 = 120.0;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Filename used when a location has no usable path segment.
pub const DEFAULT_EXPORT_FILENAME: &str = "image";

/// Maximum number of HTTP redirects followed by downloads.
pub const MAX_HTTP_REDIRECTS: usize = 10;

/// User agent sent with remote requests.
pub const HTTP_USER_AGENT: &str = concat!("ImagePreview/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SCALE_LEVELS.len() >= MIN_SCALE_LEVELS);

    // Levels must be positive and strictly ascending
    let mut i = 0;
    while i < DEFAULT_SCALE_LEVELS.len() {
        assert!(DEFAULT_SCALE_LEVELS[i] > 0.0);
        if i > 0 {
            assert!(DEFAULT_SCALE_LEVELS[i] > DEFAULT_SCALE_LEVELS[i - 1]);
        }
        i += 1;
    }

    // Exactly one natural-size entry
    let mut natural = 0;
    let mut j = 0;
    while j < DEFAULT_SCALE_LEVELS.len() {
        if (DEFAULT_SCALE_LEVELS[j] * 100.0) as i32 == (NATURAL_SCALE * 100.0) as i32 {
            natural += 1;
        }
        j += 1;
    }
    assert!(natural == 1);

    assert!(DEFAULT_VIEWER_WIDTH > 0.0);
    assert!(DEFAULT_VIEWER_HEIGHT > ACTION_BAR_HEIGHT);
    assert!(PIXELS_PER_WHEEL_LINE > 0.0);
    assert!(MAX_HTTP_REDIRECTS > 0);
};
