//! Error types for the analytics engine.
//!
//! The engine never logs and swallows: every failure is surfaced to the
//! immediate caller as an [`EngineError`]. There is no retry machinery because
//! the engine itself performs no I/O; transient failures can only originate in
//! the provider collaborators, which propagate here unchanged.

/// Result type used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine and provider operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Input data failed validation before computation.
    ///
    /// `field` names the offending attribute so the caller can point at the
    /// exact piece of upstream data that is malformed.
    #[error("validation error: field `{field}`: {message}")]
    Validation { field: String, message: String },

    /// A collaborator (analytics or catalogue backend) failed to supply data.
    #[error("provider error: {message}")]
    Provider { message: String },

    /// A requested entity (book, site, attachment set) does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl EngineError {
    /// Create a validation error naming the offending field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EngineError;

    #[test]
    fn test_validation_error_names_field() {
        let err = EngineError::validation("nb_visits", "expected a non-negative integer");
        let msg = err.to_string();
        assert!(msg.contains("nb_visits"));
        assert!(msg.contains("non-negative integer"));
    }

    #[test]
    fn test_provider_error_display() {
        let err = EngineError::provider("analytics backend returned 502");
        assert!(err.to_string().starts_with("provider error"));
    }
}
