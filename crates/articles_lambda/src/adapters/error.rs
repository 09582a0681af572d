use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Transient backend failure; the same call may succeed later.
    #[error("store unavailable during {operation}: {message}")]
    Unavailable { operation: String, message: String },
    /// Malformed key or attributes; retrying the same call will not help.
    #[error("store rejected {operation}: {message}")]
    Validation { operation: String, message: String },
}

impl StoreError {
    pub fn unavailable(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn validation(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unavailable_is_retryable() {
        assert!(StoreError::unavailable("put", "timeout").is_retryable());
        assert!(!StoreError::validation("put", "bad key").is_retryable());
    }

    #[test]
    fn display_names_operation() {
        let error = StoreError::unavailable("put_object", "connection reset");
        assert_eq!(
            error.to_string(),
            "store unavailable during put_object: connection reset"
        );
    }
}
