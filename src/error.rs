//! Error types for conversion operations

use std::fmt;
use thiserror::Error;

/// Errors that can abort a markdown to HTML conversion
///
/// No current code path produces these: extension failures are downgraded
/// to [`ExtensionWarning`]s and unresolved links are left untouched. The
/// type is kept in the signature of [`Converter::convert`] so that fatal
/// failure modes can be added without breaking callers.
///
/// [`Converter::convert`]: crate::converter::Converter::convert
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised by a single extension converter stage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionError {
    /// An embedded file has an extension with no known media type
    #[error("unsupported media type {extension:?} for {path:?}")]
    UnsupportedMediaType {
        /// Route value of the offending file
        path: String,
        /// File extension that could not be mapped
        extension: String,
    },
    /// A file listing points at a folder that holds none of the item's files
    #[error("no files found below folder {folder:?}")]
    EmptyFolder {
        /// The folder target as written in the markdown
        folder: String,
    },
    /// Catch-all for third-party extensions
    #[error("{0}")]
    Failed(String),
}

impl ExtensionError {
    /// Create a generic failure from any message
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

/// A non-fatal extension failure recorded during conversion
///
/// The stage that produced it contributed nothing to the output; the
/// content it received was passed on unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionWarning {
    /// Name of the extension that failed
    pub extension: String,
    /// The failure itself
    pub error: ExtensionError,
}

impl fmt::Display for ExtensionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error while converting {} extensions: {}",
            self.extension, self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_display() {
        let err = ConversionError::InvalidInput("empty item".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty item");

        let err = ConversionError::Internal("boom".to_string());
        assert_eq!(err.to_string(), "Internal error: boom");
    }

    #[test]
    fn test_extension_error_display() {
        let err = ExtensionError::UnsupportedMediaType {
            path: "songs/track.xyz".to_string(),
            extension: "xyz".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported media type \"xyz\" for \"songs/track.xyz\""
        );

        let err = ExtensionError::EmptyFolder {
            folder: "attachments".to_string(),
        };
        assert_eq!(err.to_string(), "no files found below folder \"attachments\"");

        assert_eq!(ExtensionError::failed("bad input").to_string(), "bad input");
    }

    #[test]
    fn test_warning_display_names_extension() {
        let warning = ExtensionWarning {
            extension: "audio".to_string(),
            error: ExtensionError::failed("no decoder"),
        };
        assert_eq!(
            warning.to_string(),
            "error while converting audio extensions: no decoder"
        );
    }
}
