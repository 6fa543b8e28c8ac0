// SPDX-License-Identifier: MPL-2.0
//! Image locations and loading.
//!
//! A location is either an `http(s)` URL or a filesystem path (plain or
//! `file://`). Loading fetches the encoded bytes and reads the natural size
//! without decoding the full image.

use crate::config::{HTTP_USER_AGENT, MAX_HTTP_REDIRECTS};
use crate::error::{Error, Result};
use image_rs::ImageReader;
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    Remote(String),
    Local(PathBuf),
}

impl ImageLocation {
    /// Classifies a location string. Anything that is not `http(s)` is a path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return ImageLocation::Remote(location.to_string());
        }
        match location.strip_prefix("file://") {
            Some(path) => ImageLocation::Local(PathBuf::from(path)),
            None => ImageLocation::Local(PathBuf::from(location)),
        }
    }
}

impl fmt::Display for ImageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLocation::Remote(url) => f.write_str(url),
            ImageLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Encoded image bytes with their natural size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// HTTP client shared by image loading and downloads.
pub(crate) fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_HTTP_REDIRECTS))
        .user_agent(HTTP_USER_AGENT)
        .build()
}

/// Fetches and sizes the image at `location`.
pub async fn load(location: ImageLocation) -> Result<LoadedImage> {
    let bytes = match &location {
        ImageLocation::Remote(url) => fetch(url).await?,
        ImageLocation::Local(path) => std::fs::read(path)
            .map_err(|err| Error::ImageLoad(format!("{}: {err}", path.display())))?,
    };

    let (width, height) = dimensions(&bytes)?;
    tracing::debug!(%location, width, height, size = bytes.len(), "image loaded");

    Ok(LoadedImage {
        bytes,
        width,
        height,
    })
}

async fn fetch(url: &str) -> Result<Vec<u8>> {
    let to_error = |err: reqwest::Error| Error::ImageLoad(format!("{url}: {err}"));

    let response = http_client()
        .map_err(to_error)?
        .get(url)
        .send()
        .await
        .map_err(to_error)?;

    if !response.status().is_success() {
        return Err(Error::ImageLoad(format!(
            "{url}: HTTP status {}",
            response.status()
        )));
    }

    let body = response.bytes().await.map_err(to_error)?;
    Ok(body.to_vec())
}

/// Reads the natural size from the image header.
pub fn dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|err| Error::ImageLoad(err.to_string()))?
        .into_dimensions()
        .map_err(|err| Error::ImageLoad(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, RgbaImage};
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        RgbaImage::new(width, height)
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn parse_classifies_locations() {
        assert_eq!(
            ImageLocation::parse("https://example.com/a.png"),
            ImageLocation::Remote("https://example.com/a.png".into())
        );
        assert_eq!(
            ImageLocation::parse("HTTP://example.com/a.png"),
            ImageLocation::Remote("HTTP://example.com/a.png".into())
        );
        assert_eq!(
            ImageLocation::parse("file:///tmp/a.png"),
            ImageLocation::Local(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            ImageLocation::parse("pictures/a.png"),
            ImageLocation::Local(PathBuf::from("pictures/a.png"))
        );
    }

    #[test]
    fn dimensions_reads_header() {
        assert_eq!(dimensions(&png_bytes(7, 3)).unwrap(), (7, 3));
    }

    #[test]
    fn dimensions_rejects_garbage() {
        assert!(matches!(
            dimensions(b"definitely not an image"),
            Err(Error::ImageLoad(_))
        ));
    }

    #[tokio::test]
    async fn load_reads_local_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("pixel.png");
        std::fs::write(&path, png_bytes(2, 5)).expect("write png");

        let loaded = load(ImageLocation::Local(path)).await.expect("load");

        assert_eq!((loaded.width, loaded.height), (2, 5));
        assert!(!loaded.bytes.is_empty());
    }

    #[tokio::test]
    async fn load_missing_file_errors() {
        let dir = tempdir().expect("temp dir");
        let result = load(ImageLocation::Local(dir.path().join("absent.png"))).await;
        assert!(matches!(result, Err(Error::ImageLoad(_))));
    }
}
