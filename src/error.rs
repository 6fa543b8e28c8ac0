// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    ScaleTable(ScaleTableError),
    Export(ExportError),
    ImageLoad(String),
    EmptyImageList,
    Window(String),
}

/// Reasons a zoom-factor table can be rejected or misused.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleTableError {
    /// Fewer than two levels were supplied.
    TooFewLevels(usize),

    /// A level is zero, negative, or not finite.
    NonPositive { index: usize },

    /// A level is not strictly greater than its predecessor.
    NotIncreasing { index: usize },

    /// No level equals 1.0, or more than one does.
    MissingNaturalSize,

    /// Lookup outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

/// Failures surfaced by a resource exporter.
/// These are reported to the user as-is; the core never retries.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Reading the source or writing the destination failed.
    Io(String),

    /// The HTTP request could not be completed.
    Network(String),

    /// The server answered with a non-success status.
    HttpStatus(u16),

    /// The location could not be interpreted as a path or URL.
    InvalidLocation(String),
}

impl fmt::Display for ScaleTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleTableError::TooFewLevels(len) => {
                write!(f, "scale table needs at least 2 levels, got {}", len)
            }
            ScaleTableError::NonPositive { index } => {
                write!(f, "scale level at index {} is not a positive number", index)
            }
            ScaleTableError::NotIncreasing { index } => {
                write!(f, "scale level at index {} is not strictly increasing", index)
            }
            ScaleTableError::MissingNaturalSize => {
                write!(f, "scale table must contain exactly one 1.0 entry")
            }
            ScaleTableError::IndexOutOfRange { index, len } => {
                write!(f, "scale index {} out of range (len {})", index, len)
            }
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(msg) => write!(f, "I/O error: {}", msg),
            ExportError::Network(msg) => write!(f, "Network error: {}", msg),
            ExportError::HttpStatus(code) => write!(f, "HTTP status: {}", code),
            ExportError::InvalidLocation(location) => {
                write!(f, "Invalid location: {}", location)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::ScaleTable(e) => write!(f, "Scale Table Error: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
            Error::ImageLoad(e) => write!(f, "Image Load Error: {}", e),
            Error::EmptyImageList => write!(f, "Image list is empty"),
            Error::Window(e) => write!(f, "Window Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ScaleTableError> for Error {
    fn from(err: ScaleTableError) -> Self {
        Error::ScaleTable(err)
    }
}

impl From<ExportError> for Error {
    fn from(err: ExportError) -> Self {
        Error::Export(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Window(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn scale_table_error_wraps_into_error() {
        let err: Error = ScaleTableError::IndexOutOfRange { index: 12, len: 12 }.into();
        assert_eq!(
            format!("{}", err),
            "Scale Table Error: scale index 12 out of range (len 12)"
        );
    }

    #[test]
    fn export_error_from_io_keeps_message() {
        let err: ExportError = std::io::Error::other("read-only").into();
        assert!(matches!(err, ExportError::Io(ref msg) if msg.contains("read-only")));
    }

    #[test]
    fn http_status_display() {
        let err = Error::Export(ExportError::HttpStatus(404));
        assert_eq!(format!("{}", err), "Export Error: HTTP status: 404");
    }

    #[test]
    fn empty_list_display() {
        assert_eq!(format!("{}", Error::EmptyImageList), "Image list is empty");
    }
}
