use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::provider::AuthenticatedUser;
use crate::session::config::AUTH_SESSION_COOKIE_MAX_AGE;

/// Opaque credentials handed over by the provider during verification.
///
/// Only the access token is consumed here, by the post-login redirect builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: Option<String>,
}

/// One browser session as held by the externally owned session store.
///
/// The flow layer only ever touches three things: the `authenticated` flag,
/// the identity-linking record, and `tokens.access_token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    #[serde(default)]
    pub tokens: SessionTokens,
    pub identity: Option<AuthenticatedUser>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// A fresh, established session for `user`, valid for the configured TTL.
    pub fn established(user: AuthenticatedUser, access_token: Option<String>) -> Self {
        Self {
            authenticated: true,
            tokens: SessionTokens { access_token },
            identity: Some(user),
            expires_at: Utc::now() + Duration::seconds(*AUTH_SESSION_COOKIE_MAX_AGE as i64),
        }
    }

    /// Clear the authentication flag and the identity-linking record.
    ///
    /// Tokens and expiry are left alone; the session itself survives logout.
    pub fn clear_authentication(&mut self) {
        self.authenticated = false;
        self.identity = None;
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_user() -> AuthenticatedUser {
        serde_json::from_value(json!({"id": "user123", "name": "Test User"})).unwrap()
    }

    #[test]
    fn test_established_session() {
        let session = Session::established(test_user(), Some("tok".to_string()));

        assert!(session.authenticated);
        assert_eq!(session.tokens.access_token.as_deref(), Some("tok"));
        assert_eq!(session.identity.as_ref().unwrap().id, "user123");
        assert!(!session.is_expired());
    }

    #[test]
    fn test_clear_authentication_keeps_tokens() {
        let mut session = Session::established(test_user(), Some("tok".to_string()));
        session.clear_authentication();

        assert!(!session.authenticated);
        assert!(session.identity.is_none());
        assert_eq!(session.tokens.access_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_expired_session() {
        let mut session = Session::established(test_user(), None);
        session.expires_at = Utc::now() - Duration::seconds(1);
        assert!(session.is_expired());
    }

    #[test]
    fn test_session_json_round_trip() {
        let session = Session::established(test_user(), None);
        let encoded = serde_json::to_string(&session).unwrap();
        let decoded: Session = serde_json::from_str(&encoded).unwrap();

        assert!(decoded.authenticated);
        assert_eq!(decoded.identity.unwrap().id, "user123");
        assert!(decoded.tokens.access_token.is_none());
    }
}
