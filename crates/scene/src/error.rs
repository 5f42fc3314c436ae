use std::fmt;

/// Error type for document model operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A constructor argument violated a field invariant.
    InvalidArgument(String),
    /// A group was handed a member outside the kinds it accepts.
    InvalidShape(String),
    /// An element was accessed as a kind it is not.
    TypeMismatch(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::InvalidShape(msg) => write!(f, "Invalid shape: {}", msg),
            Self::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
        }
    }
}

impl std::error::Error for SceneError {}
