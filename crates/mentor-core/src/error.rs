//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Shown when a blank snippet is submitted.
pub const VALIDATION_MESSAGE: &str = "Please enter some code to explain.";

/// Shown when the backend call fails or returns no text.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to get explanation from the AI service. Ensure your API key is valid and has been restricted to this website's domain.";

/// Shown when the backend text cannot be parsed into a `CodeExplanation`.
pub const FORMAT_FAILURE_MESSAGE: &str = "The AI returned an invalid format. Please try again.";

/// Fallback when a failure carries no message of its own.
pub const UNKNOWN_FAILURE_MESSAGE: &str =
    "An unknown error occurred. Check the log file for details.";

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Request Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    #[error("Explanation request failed: {0}")]
    Explain(#[from] ExplainError),

    // ─────────────────────────────────────────────────────────────
    // Startup/Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No API credential found. Set one of: {}", .vars.join(", "))]
    MissingCredential { vars: Vec<String> },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn missing_credential<S: AsRef<str>>(vars: &[S]) -> Self {
        Self::MissingCredential {
            vars: vars.iter().map(|v| v.as_ref().to_string()).collect(),
        }
    }

    /// Check if this error should prevent the application from starting
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::MissingCredential { .. } | Error::ConfigInvalid { .. } | Error::TerminalInit(_)
        )
    }
}

/// Failure of a single explanation request.
///
/// `Display` is exactly the message shown to the user; the underlying cause
/// is kept for logging only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExplainError {
    /// The backend call failed or produced no text.
    #[error("{}", TRANSPORT_FAILURE_MESSAGE)]
    Transport { cause: String },

    /// The backend produced text that is not a valid explanation.
    #[error("{}", FORMAT_FAILURE_MESSAGE)]
    Format { cause: String },

    /// Any other failure, carrying its own user-facing message.
    #[error("{message}")]
    Other { message: String },
}

impl ExplainError {
    pub fn transport(cause: impl Into<String>) -> Self {
        Self::Transport {
            cause: cause.into(),
        }
    }

    pub fn format(cause: impl Into<String>) -> Self {
        Self::Format {
            cause: cause.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// The raw cause, for logs. `Other` has none beyond its message.
    pub fn cause(&self) -> &str {
        match self {
            ExplainError::Transport { cause } | ExplainError::Format { cause } => cause,
            ExplainError::Other { message } => message,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::config("bad value");
        assert_eq!(err.to_string(), "Configuration error: bad value");

        let err = Error::Validation;
        assert_eq!(err.to_string(), VALIDATION_MESSAGE);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_missing_credential_names_variables() {
        let err = Error::missing_credential(&["API_KEY", "GEMINI_API_KEY"]);
        let text = err.to_string();
        assert!(text.contains("API_KEY"));
        assert!(text.contains("GEMINI_API_KEY"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_request_errors_are_not_fatal() {
        assert!(!Error::Validation.is_fatal());
        assert!(!Error::from(ExplainError::transport("timeout")).is_fatal());
    }

    #[test]
    fn test_explain_error_display_hides_cause() {
        let err = ExplainError::transport("connection refused (os error 111)");
        assert_eq!(err.to_string(), TRANSPORT_FAILURE_MESSAGE);
        assert_eq!(err.cause(), "connection refused (os error 111)");

        let err = ExplainError::format("expected value at line 1 column 1");
        assert_eq!(err.to_string(), FORMAT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_explain_error_other_uses_own_message() {
        let err = ExplainError::other("API Error");
        assert_eq!(err.to_string(), "API Error");
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::config("test");
        let _ = Error::config_invalid("test");
    }
}
