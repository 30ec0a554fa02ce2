use std::sync::Arc;

use auth_flow::{AuthService, ProviderRegistry, SessionStore};

/// Shared state for the authentication routes.
///
/// Both collaborators are injected rather than reached for ambiently, so an
/// application can swap the auth service or the session backend without
/// touching the handlers.
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<dyn AuthService>,
    pub sessions: Arc<dyn SessionStore>,
    pub providers: ProviderRegistry,
}

impl AuthState {
    pub fn new(
        service: Arc<dyn AuthService>,
        sessions: Arc<dyn SessionStore>,
        providers: ProviderRegistry,
    ) -> Self {
        Self {
            service,
            sessions,
            providers,
        }
    }
}
