// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`state`] - Viewport state, scale table, rotation, drag and geometry helpers
//! - [`viewer`] - Transform controller, input mapping, canvas and action bar

pub mod state;
pub mod viewer;
