//! Error types for the Teamfinder client.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the entire Teamfinder client.
///
/// The variants follow the failure classes the client has to tell apart:
/// a missing credential, a rejected token, a transient transport or server
/// failure, and locally rejected input.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum TeamfinderError {
    /// No launch source yielded a credential blob when one was required.
    #[error("No chat-platform credential available for authentication")]
    CredentialUnavailable,

    /// The backend rejected the bearer token (401 or 403).
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Any other non-success HTTP status.
    #[error("HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Transport failure: connect, timeout, broken body.
    #[error("Network error: {0}")]
    Network(String),

    /// User input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TeamfinderError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an error from a non-success HTTP status.
    ///
    /// 401 and 403 become `Unauthorized`, everything else becomes `Http`.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Unauthorized { status, message },
            _ => Self::Http { status, message },
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if the backend rejected the current bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Check if this failure says nothing about the validity of the token.
    ///
    /// Network failures and 5xx responses are transient: the stored token
    /// may still be valid once the backend is reachable again.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a NotFound error, either local or a 404 from the backend.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Http { status: 404, .. }
        )
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown to the user when this error ends the auth bootstrap.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::CredentialUnavailable => {
                "Cannot authenticate: open the app from the chat client."
            }
            Self::Unauthorized { .. } => "Authorization failed. Reload the app.",
            Self::Validation(_) => "Some fields are invalid.",
            e if e.is_transient() => "Service unavailable, try again later.",
            _ => "Authorization error. Reload the app.",
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TeamfinderError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TeamfinderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TeamfinderError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for TeamfinderError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid URL: {}", err))
    }
}

impl From<anyhow::Error> for TeamfinderError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, TeamfinderError>`.
pub type Result<T> = std::result::Result<T, TeamfinderError>;
