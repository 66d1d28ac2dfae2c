//! Error types for taskdeck.

use uuid::Uuid;

/// Top-level error type for the shell core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Ingress validation errors.
///
/// Raised at the boundary where auth/session/quota shapes are deserialized
/// from an external source. In-process construction does not go through
/// these checks; wire data always does.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Malformed {shape} payload: {source}")]
    Malformed {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("User {id} has an empty email")]
    EmptyEmail { id: String },

    #[error("Session {id} expires at {expires_at}, not after created_at {created_at}")]
    SessionNotAfterCreation {
        id: String,
        created_at: chrono::DateTime<chrono::Utc>,
        expires_at: chrono::DateTime<chrono::Utc>,
    },

    #[error("Token expiry must be positive, got {expires_in_secs}")]
    NonPositiveTokenExpiry { expires_in_secs: i64 },

    #[error("Key prefix is {len} chars, exceeds maximum {max}")]
    KeyPrefixTooLong { len: usize, max: usize },

    #[error("Quota remaining {remaining} inconsistent with used {used} / limit {limit}")]
    QuotaMismatch { used: u64, limit: u64, remaining: u64 },
}

/// Store-related errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Entity already exists: {entity} with id {id}")]
    Duplicate { entity: &'static str, id: Uuid },
}

/// Result type alias for the shell core.
pub type Result<T> = std::result::Result<T, Error>;
