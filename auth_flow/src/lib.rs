//! auth-flow - Post-authentication flow coordination
//!
//! This crate coordinates what happens around an external authentication
//! service: establishing a session once a provider callback verifies, building
//! the post-login redirect URL, logging out, and disconnecting a provider from
//! the current user. Provider negotiation and credential verification stay
//! behind the [`AuthService`] trait; session persistence stays behind the
//! [`SessionStore`] trait.

mod config;
mod flow;
mod provider;
mod session;
#[cfg(test)]
mod test_utils;
mod utils;

pub use config::AUTH_ROUTE_PREFIX;

pub use flow::{
    CallbackOutcome, CallbackRequest, FlowError, RedirectRequest, build_callback_url,
    disconnect_core, handle_callback_core, initiate_provider_core, logout_core,
};

pub use provider::{
    AuthService, AuthenticatedUser, ProviderError, ProviderRegistry, ProviderSettings,
    VerifiedCallback,
};

pub use session::{
    AUTH_SESSION_COOKIE_MAX_AGE, AUTH_SESSION_COOKIE_NAME, MemorySessionStore, Session,
    SessionError, SessionStore, SessionTokens,
};

pub use utils::{UtilError, gen_random_string, header_set_cookie};
