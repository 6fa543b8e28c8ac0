// SPDX-License-Identifier: MPL-2.0
//! Image sources and export.

pub mod export;
pub mod source;

pub use export::{DownloadExporter, ExportRequest, ResourceExporter};
pub use source::{ImageLocation, LoadedImage};
