use std::fmt;

/// Result type for freeform network operations
pub type Result<T> = std::result::Result<T, FreeformError>;

/// Main error type for the freeform library
#[derive(Debug, Clone)]
pub enum FreeformError {
    /// A layered source network has too few layers to convert
    InsufficientLayers {
        required: usize,
        actual: usize,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for FreeformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreeformError::InsufficientLayers { required, actual } => {
                write!(f, "Insufficient layers: need at least {}, got {}", required, actual)
            }
            FreeformError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            FreeformError::IoError(msg) => write!(f, "IO error: {}", msg),
            FreeformError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FreeformError {}

// Conversion from std::io::Error
impl From<std::io::Error> for FreeformError {
    fn from(err: std::io::Error) -> Self {
        FreeformError::IoError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for FreeformError {
    fn from(err: bincode::Error) -> Self {
        FreeformError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl FreeformError {
    pub fn insufficient_layers(required: usize, actual: usize) -> Self {
        FreeformError::InsufficientLayers { required, actual }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        FreeformError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
