// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain data and pure helpers behind the viewer. Nothing in here touches the
//! rendering surface, so every piece is testable without a window.

pub mod drag;
pub mod geometry;
pub mod rotation;
pub mod scale_table;
pub mod viewport;

// Re-export commonly used types for convenience
pub use drag::DragAnchor;
pub use geometry::Transform;
pub use rotation::Rotation;
pub use scale_table::ScaleTable;
pub use viewport::ViewportState;
