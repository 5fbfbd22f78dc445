//! Menu error type.

/// Error returned when building, searching or rendering a menu fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// An option value has the wrong shape (e.g. an invalid tag name).
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The list/item graph would stop being a tree (cycle or second owner).
    #[error("Structural error: {0}")]
    Structural(String),
    /// A required argument is missing or refers to nothing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
