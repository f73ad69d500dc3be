//! Error types for lattice construction, configuration and board files.

use thiserror::Error;

/// Main error type for life-lattice operations.
#[derive(Error, Debug)]
pub enum LatticeError {
    /// Dimension or probability outside the accepted range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// TOML configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed board file
    #[error("Board parse error at line {line}: {reason}")]
    ParseBoard { line: usize, reason: String },

    /// An incremental step is already running
    #[error("A step is already in progress")]
    StepInProgress,
}

/// Result type alias for life-lattice operations.
pub type Result<T> = std::result::Result<T, LatticeError>;

impl LatticeError {
    /// Creates a new invalid configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates a new board parse error.
    #[must_use]
    pub fn parse_board<S: Into<String>>(line: usize, reason: S) -> Self {
        Self::ParseBoard {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LatticeError::invalid_config("dimension must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: dimension must be at least 1"
        );

        let err = LatticeError::parse_board(3, "expected 4 fields");
        assert_eq!(
            err.to_string(),
            "Board parse error at line 3: expected 4 fields"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LatticeError = io.into();
        assert!(matches!(err, LatticeError::Io(_)));
    }
}
