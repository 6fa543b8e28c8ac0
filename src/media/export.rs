// SPDX-License-Identifier: MPL-2.0
//! Persisting the current image.
//!
//! The viewer only builds an [`ExportRequest`]; a [`ResourceExporter`] does
//! the actual work. [`DownloadExporter`] streams remote images into a
//! directory and copies local ones, never overwriting an existing file.

use super::source::{http_client, ImageLocation};
use crate::config::DEFAULT_EXPORT_FILENAME;
use crate::error::ExportError;
use std::ffi::OsStr;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What to export and under which name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub location: String,
    pub suggested_filename: String,
}

impl ExportRequest {
    /// Request for `location`, named after its last path segment.
    #[must_use]
    pub fn for_location(location: &str) -> Self {
        Self {
            location: location.to_string(),
            suggested_filename: suggested_filename(location),
        }
    }
}

/// Persists an image somewhere and reports where it ended up.
///
/// Failures are returned to the caller as is; implementations do not retry.
pub trait ResourceExporter {
    fn export(
        &self,
        request: ExportRequest,
    ) -> impl Future<Output = Result<PathBuf, ExportError>> + Send;
}

/// Last non-empty path segment of `location`, ignoring scheme, authority,
/// query and fragment.
///
/// # Example
///
/// ```
/// use image_preview::media::export::suggested_filename;
///
/// assert_eq!(suggested_filename("https://cdn.example.com/a/b.jpg?w=200#top"), "b.jpg");
/// assert_eq!(suggested_filename("https://cdn.example.com/"), "image");
/// ```
#[must_use]
pub fn suggested_filename(location: &str) -> String {
    let location = location.split_once('#').map_or(location, |(head, _)| head);
    let location = location.split_once('?').map_or(location, |(head, _)| head);

    let path = match location.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |slash| &rest[slash..]),
        None => location,
    };

    path.rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .map_or_else(|| DEFAULT_EXPORT_FILENAME.to_string(), str::to_string)
}

/// First path in `dir` named `filename` that does not exist yet, adding
/// ` (n)` before the extension when needed.
#[must_use]
pub fn unique_destination(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(filename);
    let stem = name.file_stem().and_then(OsStr::to_str).unwrap_or(filename);
    let extension = name.extension().and_then(OsStr::to_str);

    (1..=u32::MAX)
        .map(|n| match extension {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Writes the image at `location` to `destination`.
pub async fn save_to(location: &str, destination: &Path) -> Result<PathBuf, ExportError> {
    if location.trim().is_empty() {
        return Err(ExportError::InvalidLocation(location.to_string()));
    }

    match ImageLocation::parse(location) {
        ImageLocation::Remote(url) => download(&url, destination).await?,
        ImageLocation::Local(source) => {
            if !source.is_file() {
                return Err(ExportError::InvalidLocation(location.to_string()));
            }
            std::fs::copy(&source, destination)?;
        }
    }

    tracing::info!(location, destination = %destination.display(), "image exported");
    Ok(destination.to_path_buf())
}

async fn download(url: &str, destination: &Path) -> Result<(), ExportError> {
    use futures_util::StreamExt;

    let network = |err: reqwest::Error| ExportError::Network(err.to_string());

    let response = http_client()
        .map_err(network)?
        .get(url)
        .send()
        .await
        .map_err(network)?;

    if !response.status().is_success() {
        return Err(ExportError::HttpStatus(response.status().as_u16()));
    }

    let mut file = std::fs::File::create(destination)?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let written = chunk
            .map_err(network)
            .and_then(|chunk| file.write_all(&chunk).map_err(ExportError::from));
        if let Err(err) = written {
            // Drop the partial file
            let _ = std::fs::remove_file(destination);
            return Err(err);
        }
    }

    Ok(())
}

/// Saves images into a fixed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadExporter {
    target_dir: PathBuf,
}

impl DownloadExporter {
    #[must_use]
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    #[must_use]
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }
}

impl ResourceExporter for DownloadExporter {
    fn export(
        &self,
        request: ExportRequest,
    ) -> impl Future<Output = Result<PathBuf, ExportError>> + Send {
        let target_dir = self.target_dir.clone();
        async move {
            std::fs::create_dir_all(&target_dir)?;
            let destination = unique_destination(&target_dir, &request.suggested_filename);
            save_to(&request.location, &destination).await
        }
    }
}
