// SPDX-License-Identifier: MPL-2.0
//! `image_preview` is a small image preview panel built with the Iced GUI framework.
//!
//! It steps through a list of image locations and lets the user zoom through a
//! fixed table of scale factors, rotate in quarter turns, drag an overflowing
//! image around and download the current image.
//!
//! The transform logic lives in [`ui::viewer::controller`] and is independent
//! of the window; [`app`] hosts it in an Iced application.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
