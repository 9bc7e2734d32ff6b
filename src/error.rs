/*
 * Error types for the platform front ends. The demos have no user-visible
 * error surface, so these only cover the few places where a native call can
 * genuinely fail (class registration, window creation, menu construction)
 * and where propagating with `?` beats panicking.
 */
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// One-time setup failed (window class registration, event loop start).
    InitializationFailed(String),
    /// A native call failed after setup completed.
    OperationFailed(String),
    /// A handle was unexpectedly invalid for the requested operation.
    InvalidHandle(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::InitializationFailed(msg) => {
                write!(f, "platform initialization failed: {msg}")
            }
            PlatformError::OperationFailed(msg) => write!(f, "platform operation failed: {msg}"),
            PlatformError::InvalidHandle(msg) => write!(f, "invalid platform handle: {msg}"),
        }
    }
}

impl std::error::Error for PlatformError {}

pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context_message() {
        let err = PlatformError::InitializationFailed("RegisterClassExW failed".to_string());
        assert_eq!(
            err.to_string(),
            "platform initialization failed: RegisterClassExW failed"
        );
    }
}
