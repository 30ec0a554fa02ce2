//! Shared test doubles for the coordination tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::provider::{AuthService, AuthenticatedUser, ProviderError, VerifiedCallback};

/// Programmable [`AuthService`] whose every call resolves to one outcome.
pub(crate) struct StubAuthService {
    outcome: StubOutcome,
    last_action: Mutex<Option<String>>,
}

enum StubOutcome {
    Verify {
        user_id: String,
        access_token: Option<String>,
    },
    Nobody,
    Fail(ProviderError),
}

impl StubAuthService {
    pub(crate) fn verifying(user_id: &str, access_token: Option<&str>) -> Self {
        Self {
            outcome: StubOutcome::Verify {
                user_id: user_id.to_string(),
                access_token: access_token.map(str::to_string),
            },
            last_action: Mutex::new(None),
        }
    }

    pub(crate) fn verifying_nobody() -> Self {
        Self {
            outcome: StubOutcome::Nobody,
            last_action: Mutex::new(None),
        }
    }

    pub(crate) fn failing(err: ProviderError) -> Self {
        Self {
            outcome: StubOutcome::Fail(err),
            last_action: Mutex::new(None),
        }
    }

    /// The `action` argument of the most recent `verify_callback` call.
    pub(crate) fn last_action(&self) -> Option<String> {
        self.last_action.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthService for StubAuthService {
    async fn initiate_provider_endpoint(&self, provider: &str) -> Result<String, ProviderError> {
        match &self.outcome {
            StubOutcome::Fail(err) => Err(err.clone()),
            _ => Ok(format!(
                "https://provider.example/authorize?provider={provider}"
            )),
        }
    }

    async fn verify_callback(
        &self,
        _provider: &str,
        action: Option<&str>,
        _params: &HashMap<String, String>,
    ) -> Result<Option<VerifiedCallback>, ProviderError> {
        *self.last_action.lock().unwrap() = action.map(str::to_string);
        match &self.outcome {
            StubOutcome::Verify {
                user_id,
                access_token,
            } => Ok(Some(VerifiedCallback {
                user: AuthenticatedUser::new(user_id.clone()),
                access_token: access_token.clone(),
            })),
            StubOutcome::Nobody => Ok(None),
            StubOutcome::Fail(err) => Err(err.clone()),
        }
    }

    async fn disconnect_provider(
        &self,
        provider: &str,
        user: &AuthenticatedUser,
    ) -> Result<AuthenticatedUser, ProviderError> {
        match &self.outcome {
            StubOutcome::Fail(err) => Err(err.clone()),
            _ => {
                let mut updated = user.clone();
                updated
                    .claims
                    .insert("disconnected".to_string(), provider.into());
                Ok(updated)
            }
        }
    }
}
