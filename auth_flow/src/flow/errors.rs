use http::StatusCode;
use thiserror::Error;

use crate::provider::ProviderError;
use crate::session::SessionError;

/// Errors that can occur while coordinating one authentication attempt.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The external provider rejected the callback.
    #[error("Verification failed: {0}")]
    VerificationFailed(ProviderError),

    /// Verification succeeded but writing the session failed.
    #[error("Session establishment failed: {0}")]
    SessionEstablishmentFailed(SessionError),

    /// Verification completed without an error but returned no user record.
    #[error("No user returned by provider")]
    NoUser,

    /// A provider error outside the verification path (initiate, disconnect).
    #[error("Provider error: {0}")]
    Provider(ProviderError),

    /// The request requires an authenticated session and none was present.
    #[error("Unauthorized access")]
    Unauthorized,

    /// Error from session operations outside establishment (logout, disconnect).
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl FlowError {
    /// HTTP status to surface to the client.
    ///
    /// Provider-originated errors keep the provider's own status code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::VerificationFailed(e) | Self::Provider(e) => {
                StatusCode::from_u16(e.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::NoUser | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::SessionEstablishmentFailed(_) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The provider's error object, when this error carries one.
    ///
    /// Used to reproduce the external error body verbatim in the response.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::VerificationFailed(e) | Self::Provider(e) => Some(e),
            _ => None,
        }
    }

    /// Log the error and return self, allowing method chaining.
    pub fn log(self) -> Self {
        match &self {
            Self::VerificationFailed(e) => tracing::warn!("Verification failed: {}", e),
            Self::SessionEstablishmentFailed(e) => {
                tracing::warn!("Session establishment failed: {}", e)
            }
            Self::NoUser => tracing::warn!("No user returned by provider"),
            Self::Provider(e) => tracing::warn!("Provider error: {}", e),
            Self::Unauthorized => tracing::warn!("Unauthorized access"),
            Self::Session(e) => tracing::error!("Session error: {}", e),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<FlowError>();
    }

    #[test]
    fn test_provider_errors_keep_their_status() {
        let err = FlowError::VerificationFailed(ProviderError::new(403, "rejected"));
        assert_eq!(err.status(), StatusCode::FORBIDDEN);

        let err = FlowError::Provider(ProviderError::not_found("no such provider"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_provider_status_falls_back_to_500() {
        let err = FlowError::VerificationFailed(ProviderError::new(99, "bogus status"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(FlowError::NoUser.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(FlowError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            FlowError::SessionEstablishmentFailed(SessionError::Storage("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            FlowError::Session(SessionError::Storage("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_provider_error_accessor() {
        let err = FlowError::VerificationFailed(ProviderError::new(401, "bad"));
        assert_eq!(err.provider_error().unwrap().status, 401);

        assert!(FlowError::NoUser.provider_error().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = FlowError::VerificationFailed(ProviderError::new(401, "bad credentials"));
        assert_eq!(err.to_string(), "Verification failed: bad credentials");

        assert_eq!(FlowError::NoUser.to_string(), "No user returned by provider");
    }

    #[test]
    fn test_log_returns_self() {
        let err = FlowError::NoUser.log();
        assert!(matches!(err, FlowError::NoUser));
    }
}
