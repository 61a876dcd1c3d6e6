//! Identity Extractor
//!
//! Resolves the owner of a request from the `x-user-id` header, falling back
//! to the configured anonymous user when the header is absent.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::AppError;
use crate::core::ServerState;
use crate::security_log;

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Longest accepted user id, in bytes
pub const MAX_USER_ID_LEN: usize = 128;

/// Owner of the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentOwner {
    pub user_id: String,
    /// Resolved through the anonymous fallback
    pub anonymous: bool,
}

impl CurrentOwner {
    /// Validate a header value as a user id
    ///
    /// The id becomes a path segment, so `/` is rejected along with
    /// control characters.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let user_id = raw.trim();
        if user_id.is_empty() {
            return Err(AppError::invalid_identity("User id is empty"));
        }
        if user_id.len() > MAX_USER_ID_LEN {
            return Err(AppError::invalid_identity(format!(
                "User id exceeds {} bytes",
                MAX_USER_ID_LEN
            )));
        }
        if user_id.chars().any(|c| c.is_control() || c == '/') {
            return Err(AppError::invalid_identity(
                "User id contains invalid characters",
            ));
        }
        Ok(Self {
            user_id: user_id.to_string(),
            anonymous: false,
        })
    }

    pub fn anonymous(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            anonymous: true,
        }
    }
}

impl FromRequestParts<ServerState> for CurrentOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(owner) = parts.extensions.get::<CurrentOwner>() {
            return Ok(owner.clone());
        }

        let owner = match parts.headers.get(USER_ID_HEADER) {
            Some(value) => {
                let parsed = value
                    .to_str()
                    .map_err(|_| AppError::invalid_identity("User id is not valid text"))
                    .and_then(CurrentOwner::parse);
                match parsed {
                    Ok(owner) => owner,
                    Err(e) => {
                        security_log!(
                            "WARN",
                            "identity_rejected",
                            reason = e.message.clone(),
                            uri = format!("{:?}", parts.uri)
                        );
                        return Err(e);
                    }
                }
            }
            None => match state.config.anonymous_user.as_deref() {
                Some(anonymous) => CurrentOwner::anonymous(anonymous),
                None => {
                    security_log!("WARN", "identity_missing", uri = format!("{:?}", parts.uri));
                    return Err(AppError::not_authenticated());
                }
            },
        };

        parts.extensions.insert(owner.clone());
        Ok(owner)
    }
}
