//! Authentication, session, credential, and quota shapes.

pub mod ingress;
pub mod model;

pub use ingress::{
    parse_api_key_config, parse_auth_tokens, parse_quota_status, parse_session, parse_user,
};
pub use model::{ApiKeyConfig, AuthTokens, Provider, QuotaStatus, Session, Tier, User};
