//! Error types for engine and I/O operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine operations
#[derive(Debug)]
pub enum TransformError {
    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

    /// A bitmap pair cannot seed a run
    ///
    /// Raised at seeding for a dimension mismatch between the source and
    /// target, a zero-size bitmap, or a zero particle cap. The run is
    /// aborted and the controller returns to idle.
    MalformedBitmap {
        /// Description of what is wrong with the pair
        reason: String,
    },

    /// A control input was rejected by the run state machine
    ///
    /// The in-flight run is unaffected; callers may silently ignore this.
    InvalidStateTransition {
        /// State the controller was in
        state: &'static str,
        /// The rejected request
        request: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
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
            Self::MalformedBitmap { reason } => {
                write!(f, "Malformed bitmap pair: {reason}")
            }
            Self::InvalidStateTransition { state, request } => {
                write!(f, "Request '{request}' rejected in state '{state}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, TransformError>;

impl From<image::ImageError> for TransformError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TransformError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TransformError {
    TransformError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_file_system_error_chains_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TransformError::FileSystem {
            path: PathBuf::from("frames/out.gif"),
            operation: "create file",
            source: io_error,
        };

        let message = error.to_string();
        assert!(message.contains("create file"));
        assert!(message.contains("frames/out.gif"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_state_transition_message_names_state_and_request() {
        let error = TransformError::InvalidStateTransition {
            state: "running",
            request: "set strategy",
        };
        assert_eq!(
            error.to_string(),
            "Request 'set strategy' rejected in state 'running'"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("fps", &0, &"must be positive");
        assert!(error.to_string().contains("'fps' = '0'"));
    }
}
