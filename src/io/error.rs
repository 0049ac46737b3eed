//! Error types and context management for noise rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all rendering operations
#[derive(Debug)]
pub enum NoiseError {
    /// A configuration value is outside its valid domain
    InvalidConfig {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A palette entry is not a 6 hex-digit color
    InvalidColor {
        /// Position of the entry within its palette, when known
        index: Option<usize>,
        /// The offending entry as supplied
        entry: String,
        /// Description of what is wrong with the entry
        reason: String,
    },

    /// Palette edit addressed a position it cannot apply to
    ///
    /// Raised for indices past the end of the palette and for removals
    /// that would leave the palette without any color.
    InvalidIndex {
        /// Name of the edit operation
        operation: &'static str,
        /// The requested index
        index: usize,
        /// Palette length at the time of the edit
        len: usize,
    },

    /// Quantization was asked to map onto a palette without colors
    EmptyPalette,

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid config '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidColor {
                index: Some(index),
                entry,
                reason,
            } => {
                write!(f, "Invalid color '{entry}' at palette entry {index}: {reason}")
            }
            Self::InvalidColor {
                index: None,
                entry,
                reason,
            } => {
                write!(f, "Invalid color '{entry}': {reason}")
            }
            Self::InvalidIndex {
                operation,
                index,
                len,
            } => {
                write!(
                    f,
                    "Palette {operation} cannot apply to index {index} (palette length {len})"
                )
            }
            Self::EmptyPalette => write!(f, "Palette must contain at least one color"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for NoiseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rendering results
pub type Result<T> = std::result::Result<T, NoiseError>;

/// Enriches color errors with the palette position they came from
pub trait WithContext<T> {
    /// Attach the palette entry index to an `InvalidColor` error
    ///
    /// # Errors
    ///
    /// Propagates the original error, annotated when it is an `InvalidColor`
    fn with_entry_index(self, index: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<NoiseError>,
{
    fn with_entry_index(self, index: usize) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            if let NoiseError::InvalidColor { index: slot, .. } = &mut error {
                *slot = Some(index);
            }
            error
        })
    }
}

impl From<std::io::Error> for NoiseError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_config(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> NoiseError {
    NoiseError::InvalidConfig {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid color error for an entry without a known position
pub fn invalid_color(entry: &str, reason: &impl ToString) -> NoiseError {
    NoiseError::InvalidColor {
        index: None,
        entry: entry.to_string(),
        reason: reason.to_string(),
    }
}
