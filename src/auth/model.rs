//! Auth, session, credential, and quota data models.
//!
//! These are transport/display shapes. Invariants are enforced where the
//! values cross into the process (see [`super::ingress`]), not on every
//! construction.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account level gating feature access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Free,
    Pro,
    Enterprise,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        };
        write!(f, "{s}")
    }
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique ID.
    pub id: Uuid,
    /// Unique, required email.
    pub email: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Optional avatar reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Account level.
    pub tier: Tier,
    /// When the account was created. Immutable once set.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with sensible defaults.
    pub fn new(email: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            display_name: None,
            avatar_url: None,
            tier,
            created_at: Utc::now(),
        }
    }

    /// Builder: set display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// A time-bounded authentication grant tied to a user.
///
/// Created at login, read on every authenticated action, destroyed on
/// logout or expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique ID.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Optional device identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Optional human-readable device name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session expires. Must be strictly after `created_at`.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for a user, valid for `lifetime`.
    pub fn new(user_id: Uuid, lifetime: chrono::Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            device_id: None,
            device_name: None,
            created_at: now,
            expires_at: now + lifetime,
        }
    }

    /// Builder: attach a device.
    pub fn with_device(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.device_id = Some(id.into());
        self.device_name = Some(name.into());
        self
    }

    /// Whether the session has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Opaque token pair issued at login.
///
/// Both tokens are secrets: Debug output is redacted and the struct is
/// deliberately not `Serialize` — these values never reach a log line or a
/// plaintext store.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthTokens {
    pub access_token: SecretString,
    pub refresh_token: SecretString,
    /// Access token lifetime in seconds. Must be positive.
    pub expires_in_secs: i64,
}

/// Credential provider for stored API keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Anthropic,
    AwsBedrock,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Anthropic => "anthropic",
            Self::AwsBedrock => "aws_bedrock",
        };
        write!(f, "{s}")
    }
}

/// Maximum key-prefix length exposed for display.
pub const KEY_PREFIX_MAX: usize = 12;

/// A stored provider credential, as shown in settings.
///
/// Carries at most a short prefix of the underlying secret; the full key
/// never reaches this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyConfig {
    /// Unique ID.
    pub id: Uuid,
    /// Which provider the key belongs to.
    pub provider: Provider,
    /// Optional user-facing label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Masked key prefix for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_prefix: Option<String>,
    /// Whether this key is the one in use.
    pub active: bool,
    /// Last time the key was used, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
    /// When the key was stored.
    pub created_at: DateTime<Utc>,
}

impl ApiKeyConfig {
    /// Create a config for a provider. The prefix is derived from the full
    /// secret here, at the one place that sees it; only the prefix is kept.
    pub fn new(provider: Provider, secret: &SecretString) -> Self {
        Self {
            id: Uuid::new_v4(),
            provider,
            label: None,
            key_prefix: Some(masked_prefix(secret)),
            active: false,
            last_used_at: None,
            created_at: Utc::now(),
        }
    }

    /// Builder: set label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder: mark active.
    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }
}

/// Derive a display prefix from a full secret without exposing it.
///
/// At most [`KEY_PREFIX_MAX`] characters, ellipsized when the secret is
/// longer.
pub fn masked_prefix(secret: &SecretString) -> String {
    use secrecy::ExposeSecret;

    let full = secret.expose_secret();
    if full.chars().count() <= KEY_PREFIX_MAX {
        return full.to_string();
    }
    let prefix: String = full.chars().take(KEY_PREFIX_MAX - 1).collect();
    format!("{prefix}…")
}

/// Bounded count of permitted API calls within a reset period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaStatus {
    pub calls_used: u64,
    pub calls_limit: u64,
    /// Derived: `max(0, calls_limit - calls_used)`.
    pub remaining: u64,
    /// When the counter resets, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resets_at: Option<DateTime<Utc>>,
}

impl QuotaStatus {
    /// Build a consistent status; `remaining` is clamped at zero when usage
    /// exceeds the limit.
    pub fn new(calls_used: u64, calls_limit: u64) -> Self {
        Self {
            calls_used,
            calls_limit,
            remaining: calls_limit.saturating_sub(calls_used),
            resets_at: None,
        }
    }

    /// Builder: set reset time.
    pub fn with_reset(mut self, resets_at: DateTime<Utc>) -> Self {
        self.resets_at = Some(resets_at);
        self
    }

    /// Whether the quota is exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
