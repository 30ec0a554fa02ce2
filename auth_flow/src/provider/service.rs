use async_trait::async_trait;
use std::collections::HashMap;

use super::types::{AuthenticatedUser, ProviderError, VerifiedCallback};

/// The narrow interface onto the external authentication service.
///
/// Everything interesting about multi-provider negotiation lives behind this
/// trait: strategy selection, credential verification, identity unlinking.
/// The flow layer only sequences these calls and manages the session around
/// them.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Begin the handshake with a provider.
    ///
    /// Returns the URL the client should be redirected to (the provider's
    /// authorization endpoint, or a local login form for a local strategy).
    async fn initiate_provider_endpoint(&self, provider: &str) -> Result<String, ProviderError>;

    /// Verify an inbound callback from `provider`.
    ///
    /// `action` carries the action-qualified route segment, if any; `params`
    /// the raw callback parameters (authorization code, state, or local
    /// credentials). `Ok(None)` means verification completed without an error
    /// but produced no user record.
    async fn verify_callback(
        &self,
        provider: &str,
        action: Option<&str>,
        params: &HashMap<String, String>,
    ) -> Result<Option<VerifiedCallback>, ProviderError>;

    /// Unlink `provider` from `user`, returning the updated user record.
    async fn disconnect_provider(
        &self,
        provider: &str,
        user: &AuthenticatedUser,
    ) -> Result<AuthenticatedUser, ProviderError>;
}
