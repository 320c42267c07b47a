//! Error types for API access and configuration.
//!
//! All errors implement `std::error::Error` and carry enough context to build
//! a user-facing message. The normalizer never produces errors: malformed
//! payloads degrade to defaulted entities instead.
//!
//! ## Error Categories
//!
//! - **Transport Errors**: connectivity loss, DNS, TLS, aborted requests
//! - **HTTP Errors**: the API answered with a non-success status
//! - **Decode Errors**: the body was not valid JSON
//! - **Configuration Errors**: invalid or unreadable configuration
//!
//! ## User Messages
//!
//! ```rust
//! use paddock::PaddockError;
//!
//! let error = PaddockError::http(404, "https://f1api.dev/api/teams/nope");
//! assert_eq!(error.user_message("load team"), "Resource not found while trying to load team.");
//! assert!(!error.is_retryable());
//! ```

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for paddock operations.
pub type Result<T, E = PaddockError> = std::result::Result<T, E>;

/// Main error type for paddock operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PaddockError {
    #[error("Request to {url} failed: {reason}")]
    Transport {
        url: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("API returned status {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Invalid JSON payload from {url}: {details}")]
    Decode { url: String, details: String },

    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },

    #[error("Configuration error: {reason}")]
    Config { reason: String },

    #[error("Configuration file error: {path}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },
}

impl PaddockError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            PaddockError::Transport { .. } => true,
            PaddockError::Timeout { .. } => true,
            PaddockError::Http { status, .. } => matches!(status, 429 | 500..=599),
            PaddockError::Decode { .. } => false,
            PaddockError::Config { .. } => false,
            PaddockError::ConfigFile { .. } => false,
            PaddockError::Parse { .. } => false,
        }
    }

    /// HTTP status code, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            PaddockError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to the user while performing `operation`.
    pub fn user_message(&self, operation: &str) -> String {
        match self.status() {
            None => format!(
                "Connection error while trying to {operation}. Check your internet connection."
            ),
            Some(400) => format!("Bad request while trying to {operation}. Check the parameters."),
            Some(401) => format!("Not authorized to {operation}."),
            Some(403) => format!("Access denied while trying to {operation}."),
            Some(404) => format!("Resource not found while trying to {operation}."),
            Some(429) => "Too many requests. Try again later.".to_string(),
            Some(500) => format!("Internal server error while trying to {operation}."),
            Some(503) => format!("Service temporarily unavailable while trying to {operation}."),
            Some(_) => format!("Unexpected error while trying to {operation}. Try again later."),
        }
    }

    /// Helper constructor for HTTP status errors.
    pub fn http(status: u16, url: impl Into<String>) -> Self {
        PaddockError::Http { status, url: url.into() }
    }

    /// Helper constructor for transport errors.
    pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        PaddockError::Transport { url: url.into(), reason: reason.into(), source: None }
    }

    /// Helper constructor for transport errors with source.
    pub fn transport_with_source(
        url: impl Into<String>,
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        PaddockError::Transport { url: url.into(), reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for configuration errors.
    pub fn config(reason: impl Into<String>) -> Self {
        PaddockError::Config { reason: reason.into() }
    }
}

impl From<reqwest::Error> for PaddockError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_else(|| "<unknown>".to_string());
        if let Some(status) = err.status() {
            return PaddockError::Http { status: status.as_u16(), url };
        }
        if err.is_decode() {
            return PaddockError::Decode { url, details: err.to_string() };
        }
        let reason = err.to_string();
        PaddockError::Transport { url, reason, source: Some(Box::new(err)) }
    }
}

impl From<serde_yaml_ng::Error> for PaddockError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        PaddockError::Parse { context: "YAML configuration".to_string(), details: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
          #[test]
          fn user_messages_never_empty_and_mention_operation(
            status in 100u16..600u16,
            operation in "[a-z ]{1,30}"
          ) {
            let error = PaddockError::http(status, "https://example.test");
            let message = error.user_message(&operation);
            prop_assert!(!message.is_empty());
            if status != 429 {
              prop_assert!(message.contains(&operation));
            }
          }

          #[test]
          fn display_contains_context(
            status in 100u16..600u16,
            url in "https://[a-z]{1,12}\\.test/[a-z]{0,8}",
            reason in ".*"
          ) {
            let http = PaddockError::http(status, url.clone());
            let transport = PaddockError::transport(url.clone(), reason.clone());

            prop_assert!(http.to_string().contains(&status.to_string()));
            prop_assert!(http.to_string().contains(&url));
            prop_assert!(transport.to_string().contains(&reason));
          }
        }
    }

    #[test]
    fn status_specific_messages() {
        let op = "search drivers";
        assert_eq!(
            PaddockError::http(400, "u").user_message(op),
            "Bad request while trying to search drivers. Check the parameters."
        );
        assert_eq!(
            PaddockError::http(429, "u").user_message(op),
            "Too many requests. Try again later."
        );
        assert_eq!(
            PaddockError::http(503, "u").user_message(op),
            "Service temporarily unavailable while trying to search drivers."
        );
        assert_eq!(
            PaddockError::http(418, "u").user_message(op),
            "Unexpected error while trying to search drivers. Try again later."
        );
        assert!(PaddockError::transport("u", "refused").user_message(op).starts_with("Connection"));
    }

    #[test]
    fn retry_classification() {
        assert!(PaddockError::transport("u", "reset").is_retryable());
        assert!(PaddockError::http(503, "u").is_retryable());
        assert!(PaddockError::http(429, "u").is_retryable());
        assert!(!PaddockError::http(404, "u").is_retryable());
        assert!(!PaddockError::config("bad").is_retryable());
        assert!(PaddockError::Timeout { duration: Duration::from_secs(1) }.is_retryable());
    }

    #[test]
    fn error_traits_validation() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<PaddockError>();

        let error = PaddockError::config("test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn transport_source_is_preserved() {
        let io = std::io::Error::other("socket closed");
        let error = PaddockError::transport_with_source("u", "io", Box::new(io));
        let source = std::error::Error::source(&error).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("socket closed"));
    }
}
