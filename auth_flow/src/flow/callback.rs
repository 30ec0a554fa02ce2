//! Coordination of one authentication attempt.
//!
//! Each routine here sequences calls into the injected [`AuthService`] and
//! [`SessionStore`]; none of them keeps state between requests.

use std::collections::HashMap;

use crate::provider::{AuthService, AuthenticatedUser, ProviderRegistry};
use crate::session::{Session, SessionError, SessionStore};
use crate::utils::gen_random_string;

use super::errors::FlowError;
use super::redirect::build_callback_url;

/// Everything a callback route extracted from the inbound request.
#[derive(Debug, Clone, Default)]
pub struct CallbackRequest {
    pub provider: String,
    /// Action segment of an action-qualified callback route, passed through
    /// to the auth service untouched.
    pub action: Option<String>,
    /// Explicit `next` destination from the query string.
    pub next: Option<String>,
    /// Whether the client asked for the access token in the redirect.
    pub include_token: bool,
    /// Raw callback parameters for the auth service (code, state, credentials).
    pub params: HashMap<String, String>,
}

/// How the callback response should be emitted.
#[derive(Debug, Clone)]
pub enum CallbackOutcome {
    /// 302 to `location`, session cookie set to `session_id`.
    Redirect {
        location: String,
        session_id: String,
        user: AuthenticatedUser,
    },
    /// 200 with the user as a JSON body, session cookie set to `session_id`.
    User {
        session_id: String,
        user: AuthenticatedUser,
    },
}

/// Handle a provider callback: verify, establish a session, pick the response.
///
/// The session record is only written after verification succeeds, so a failed
/// attempt can never leave a session marked authenticated. The session id is
/// rotated on every successful login.
pub async fn handle_callback_core(
    service: &dyn AuthService,
    sessions: &dyn SessionStore,
    providers: &ProviderRegistry,
    request: CallbackRequest,
) -> Result<CallbackOutcome, FlowError> {
    let verified = service
        .verify_callback(&request.provider, request.action.as_deref(), &request.params)
        .await
        .map_err(|e| FlowError::VerificationFailed(e).log())?
        .ok_or_else(|| FlowError::NoUser.log())?;

    let user = verified.user;
    let access_token = verified.access_token;

    let session_id = gen_random_string(32)
        .map_err(|e| FlowError::SessionEstablishmentFailed(SessionError::Utils(e)).log())?;
    let session = Session::established(user.clone(), access_token.clone());
    sessions
        .put(&session_id, session)
        .await
        .map_err(|e| FlowError::SessionEstablishmentFailed(e).log())?;

    tracing::info!(
        user_id = %user.id,
        provider = %request.provider,
        "user authenticated successfully"
    );

    let next = request
        .next
        .or_else(|| providers.next_url(&request.provider).map(str::to_string));

    match next {
        Some(next) => {
            let location =
                build_callback_url(&next, request.include_token, access_token.as_deref());
            Ok(CallbackOutcome::Redirect {
                location,
                session_id,
                user,
            })
        }
        None => Ok(CallbackOutcome::User { session_id, user }),
    }
}

/// Terminate a login session.
///
/// Clears the authentication flag and the identity-linking record but keeps
/// the session itself. A missing or unknown session id is a no-op.
pub async fn logout_core(
    sessions: &dyn SessionStore,
    session_id: Option<&str>,
) -> Result<(), FlowError> {
    let Some(session_id) = session_id else {
        return Ok(());
    };
    if let Some(mut session) = sessions.load(session_id).await? {
        session.clear_authentication();
        sessions.put(session_id, session).await?;
        tracing::debug!("Cleared authentication from session");
    }
    Ok(())
}

/// Begin the handshake with a provider; pure delegation.
pub async fn initiate_provider_core(
    service: &dyn AuthService,
    provider: &str,
) -> Result<String, FlowError> {
    service
        .initiate_provider_endpoint(provider)
        .await
        .map_err(|e| FlowError::Provider(e).log())
}

/// Unlink a provider from the currently authenticated user.
pub async fn disconnect_core(
    service: &dyn AuthService,
    sessions: &dyn SessionStore,
    session_id: Option<&str>,
    provider: &str,
) -> Result<AuthenticatedUser, FlowError> {
    let session_id = session_id.ok_or_else(|| FlowError::Unauthorized.log())?;
    let mut session = sessions
        .load(session_id)
        .await?
        .ok_or_else(|| FlowError::Unauthorized.log())?;
    if !session.authenticated {
        return Err(FlowError::Unauthorized.log());
    }
    let user = session
        .identity
        .clone()
        .ok_or_else(|| FlowError::Unauthorized.log())?;

    let updated = service
        .disconnect_provider(provider, &user)
        .await
        .map_err(|e| FlowError::Provider(e).log())?;

    session.identity = Some(updated.clone());
    sessions.put(session_id, session).await?;

    tracing::info!(user_id = %updated.id, provider, "disconnected provider from user");
    Ok(updated)
}
