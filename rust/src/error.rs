//! Error handling and result types for ScapegoatTree operations.
//!
//! One crate-wide error enum with context helper constructors, plus result
//! type aliases for the different operation families.

/// Error type for scapegoat tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ScapegoatTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Balance factor outside the supported [0.5, 1.0] interval.
    InvalidAlpha(String),
    /// Key construction failed during insertion.
    KeyConstruction(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Arena operation failed.
    ArenaError(String),
    /// Tree corruption detected.
    CorruptedTree(String),
}

impl ScapegoatTreeError {
    /// Create an InvalidAlpha error with context
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidAlpha(format!(
            "Alpha {} is invalid (must be in [0.5, 1.0])",
            alpha
        ))
    }

    /// Create a KeyConstruction error with context
    pub fn key_construction(details: &str) -> Self {
        Self::KeyConstruction(format!("Key construction failed: {}", details))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is an alpha validation error
    pub fn is_alpha_error(&self) -> bool {
        matches!(self, Self::InvalidAlpha(_))
    }

    /// Check if this error is an arena error
    pub fn is_arena_error(&self) -> bool {
        matches!(self, Self::ArenaError(_))
    }
}

impl std::fmt::Display for ScapegoatTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScapegoatTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            ScapegoatTreeError::InvalidAlpha(msg) => write!(f, "Invalid alpha: {}", msg),
            ScapegoatTreeError::KeyConstruction(msg) => write!(f, "Key construction error: {}", msg),
            ScapegoatTreeError::DataIntegrityError(msg) => {
                write!(f, "Data integrity error: {}", msg)
            }
            ScapegoatTreeError::ArenaError(msg) => write!(f, "Arena error: {}", msg),
            ScapegoatTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for ScapegoatTreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, ScapegoatTreeError>;

/// Public result type for tree operations that may fail
pub type SgResult<T> = Result<T, ScapegoatTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, ScapegoatTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, ScapegoatTreeError>;

/// Result type for tree construction and validation
pub type InitResult<T> = Result<T, ScapegoatTreeError>;

/// Result extension trait for attaching operation context
pub trait SgResultExt<T> {
    /// Convert to a SgResult with additional context
    fn with_context(self, context: &str) -> SgResult<T>;
}

impl<T> SgResultExt<T> for Result<T, ScapegoatTreeError> {
    fn with_context(self, context: &str) -> SgResult<T> {
        self.map_err(|e| match e {
            ScapegoatTreeError::KeyNotFound => ScapegoatTreeError::KeyNotFound,
            ScapegoatTreeError::InvalidAlpha(msg) => {
                ScapegoatTreeError::InvalidAlpha(format!("{}: {}", context, msg))
            }
            ScapegoatTreeError::KeyConstruction(msg) => {
                ScapegoatTreeError::KeyConstruction(format!("{}: {}", context, msg))
            }
            ScapegoatTreeError::DataIntegrityError(msg) => {
                ScapegoatTreeError::data_integrity(context, &msg)
            }
            ScapegoatTreeError::ArenaError(msg) => ScapegoatTreeError::arena_error(context, &msg),
            ScapegoatTreeError::CorruptedTree(msg) => {
                ScapegoatTreeError::corrupted_tree(context, &msg)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScapegoatTreeError::invalid_alpha(0.4);
        assert!(err.to_string().contains("0.4"));
        assert!(err.is_alpha_error());

        let err = ScapegoatTreeError::arena_error("Release", "slot already free");
        assert!(err.is_arena_error());
        assert!(err.to_string().contains("Release failed"));
    }

    #[test]
    fn test_with_context() {
        let result: SgResult<()> =
            Err(ScapegoatTreeError::data_integrity("size counter", "off by one"));
        let err = result.with_context("insert").unwrap_err();
        assert!(err.to_string().contains("insert"));
    }
}
