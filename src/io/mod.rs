//! Artifact output. Formats live behind cargo feature flags.

#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "svg-io")]
pub use svg::SvgSurface;

/// Generic I/O errors.
///
/// Output formats are behind cargo feature-flags; when a feature is
/// disabled the corresponding variants are never constructed.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIo(error) => write!(f, "std::io::Error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
