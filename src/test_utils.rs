// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Float assertions come from `approx`: scale factors and pan offsets are
//! products of `f32` math and rarely compare exactly.

pub use approx::assert_abs_diff_eq;
