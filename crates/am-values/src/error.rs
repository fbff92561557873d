//! Error types for the configuration-value model.
//!
//! Contract violations (such as a missing inheritance flag) surface as
//! errors; diagnostics from layer normalization are non-fatal and are
//! reported through [`crate::values::Diagnostic`] instead.

use thiserror::Error;

/// Result type alias using the configuration-value error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by configuration-value operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The document root is not a JSON object.
    #[error("expected a JSON object at the document root, found {0}")]
    NotAnObject(&'static str),

    /// The inheritance map lacks an entry for a key present in the value
    /// tree. This is a programming-contract violation on the caller's side.
    #[error("no inheritance entry for key: {0}")]
    MissingInheritance(String),

    /// The target of a keyed insertion is absent or not a JSON object.
    #[error("property is absent or not an object: {0}")]
    NotAnObjectProperty(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_inheritance_names_the_key() {
        let error = Error::MissingInheritance("sunIdleTimeout".to_string());
        assert_eq!(
            error.to_string(),
            "no inheritance entry for key: sunIdleTimeout"
        );
    }
}
