use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A verified identity as produced by the external authentication service.
///
/// Beyond the `id` used for session linking, the record is opaque: whatever
/// the provider returned is carried through to the client untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

impl AuthenticatedUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            claims: Map::new(),
        }
    }
}

/// Successful outcome of callback verification.
///
/// Providers that hand out an access token surface it here so the session can
/// hold it for the `includeToken` redirect path.
#[derive(Debug, Clone)]
pub struct VerifiedCallback {
    pub user: AuthenticatedUser,
    pub access_token: Option<String>,
}

/// An error raised by the external authentication service.
///
/// The status code and message are the service's own and are sent to the
/// client verbatim; nothing here is retried or rewritten.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ProviderError {
    pub status: u16,
    pub message: String,
}

impl ProviderError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }
}
