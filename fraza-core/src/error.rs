//! Layered error types for the segmentation core.

use crate::detector::DetectorError;
use std::path::PathBuf;
use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// The abbreviation source could not be read at startup
    #[error("failed to load abbreviation list from {}", path.display())]
    AbbreviationSource {
        /// Path of the abbreviation source that failed to load
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Invalid segmenter configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The boundary detector signalled a failure
    #[error("boundary detection failed: {0}")]
    Detector(#[from] DetectorError),

    /// The boundary detector violated the span contract
    #[error("detector returned invalid spans: {reason}")]
    InvalidSpans {
        /// Which part of the ordering/non-overlap contract was violated
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviation_source_error_names_the_path() {
        let error = CoreError::AbbreviationSource {
            path: PathBuf::from("/etc/fraza/abbr.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.to_string().contains("/etc/fraza/abbr.txt"));
    }

    #[test]
    fn detector_error_converts_into_core_error() {
        let error: CoreError = DetectorError::Unavailable("model not loaded".into()).into();
        assert!(matches!(error, CoreError::Detector(_)));
        assert!(error.to_string().contains("model not loaded"));
    }

    #[test]
    fn invalid_spans_error_carries_reason() {
        let error = CoreError::InvalidSpans {
            reason: "spans overlap at 12".into(),
        };
        assert!(error.to_string().contains("spans overlap at 12"));
    }
}
