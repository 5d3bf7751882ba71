//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input files matched the given patterns
    NoInput(String),
    /// Invalid file pattern
    InvalidPattern(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInput(patterns) => write!(f, "no input files matched: {patterns}"),
            CliError::InvalidPattern(pattern) => write!(f, "invalid file pattern: {pattern}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_display() {
        let error = CliError::NoInput("*.txt".to_string());
        assert_eq!(error.to_string(), "no input files matched: *.txt");
    }

    #[test]
    fn invalid_pattern_display() {
        let error = CliError::InvalidPattern("[broken".to_string());
        assert_eq!(error.to_string(), "invalid file pattern: [broken");
    }

    #[test]
    fn converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::NoInput("data/*.txt".into()).into());
        assert!(failure
            .unwrap_err()
            .to_string()
            .contains("no input files matched"));
    }
}
