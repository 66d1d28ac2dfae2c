//! Ingress validation for auth/session/quota shapes.
//!
//! Everything arriving from outside the process goes through these parsers:
//! deserialize, then check the shape's invariants. Out-of-enumeration values
//! for `tier` and `provider` are rejected here as malformed, which is the
//! strict boundary the rest of the shell relies on.

use serde_json::Value;

use crate::error::ValidationError;

use super::model::{ApiKeyConfig, AuthTokens, QuotaStatus, Session, User, KEY_PREFIX_MAX};

fn deserialize<T: serde::de::DeserializeOwned>(
    shape: &'static str,
    value: Value,
) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(|source| ValidationError::Malformed { shape, source })
}

/// Parse and validate a [`User`].
pub fn parse_user(value: Value) -> Result<User, ValidationError> {
    let user: User = deserialize("User", value)?;
    if user.email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail {
            id: user.id.to_string(),
        });
    }
    Ok(user)
}

/// Parse and validate a [`Session`]. Rejects `expires_at <= created_at`,
/// equality included.
pub fn parse_session(value: Value) -> Result<Session, ValidationError> {
    let session: Session = deserialize("Session", value)?;
    if session.expires_at <= session.created_at {
        return Err(ValidationError::SessionNotAfterCreation {
            id: session.id.to_string(),
            created_at: session.created_at,
            expires_at: session.expires_at,
        });
    }
    Ok(session)
}

/// Parse and validate an [`AuthTokens`] pair.
pub fn parse_auth_tokens(value: Value) -> Result<AuthTokens, ValidationError> {
    let tokens: AuthTokens = deserialize("AuthTokens", value)?;
    if tokens.expires_in_secs <= 0 {
        return Err(ValidationError::NonPositiveTokenExpiry {
            expires_in_secs: tokens.expires_in_secs,
        });
    }
    Ok(tokens)
}

/// Parse and validate an [`ApiKeyConfig`]. The key prefix, when present, may
/// not exceed [`KEY_PREFIX_MAX`] characters — anything longer suggests a
/// full secret leaked into the display shape.
pub fn parse_api_key_config(value: Value) -> Result<ApiKeyConfig, ValidationError> {
    let config: ApiKeyConfig = deserialize("ApiKeyConfig", value)?;
    if let Some(ref prefix) = config.key_prefix {
        let len = prefix.chars().count();
        if len > KEY_PREFIX_MAX {
            return Err(ValidationError::KeyPrefixTooLong {
                len,
                max: KEY_PREFIX_MAX,
            });
        }
    }
    Ok(config)
}

/// Parse and validate a [`QuotaStatus`]. `remaining` must equal
/// `max(0, calls_limit - calls_used)`.
pub fn parse_quota_status(value: Value) -> Result<QuotaStatus, ValidationError> {
    let quota: QuotaStatus = deserialize("QuotaStatus", value)?;
    let expected = quota.calls_limit.saturating_sub(quota.calls_used);
    if quota.remaining != expected {
        return Err(ValidationError::QuotaMismatch {
            used: quota.calls_used,
            limit: quota.calls_limit,
            remaining: quota.remaining,
        });
    }
    Ok(quota)
}
