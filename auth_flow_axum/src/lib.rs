//! auth-flow-axum - Axum integration for the auth-flow coordination library
//!
//! Mounts the authentication flow endpoints (`/logout`, `/{provider}`,
//! `/{provider}/callback`, `/{provider}/disconnect`) as an axum [`Router`]
//! over an injected [`AuthService`] and [`SessionStore`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use auth_flow_axum::{AuthState, MemorySessionStore, ProviderRegistry, auth_flow_router};
//! # use auth_flow_axum::AuthService;
//! # fn make_service() -> Arc<dyn AuthService> { unimplemented!() }
//!
//! let state = AuthState::new(
//!     make_service(),
//!     Arc::new(MemorySessionStore::new()),
//!     ProviderRegistry::new(),
//! );
//! let app: axum::Router = axum::Router::new()
//!     .nest(auth_flow_axum::AUTH_ROUTE_PREFIX.as_str(), auth_flow_router(state));
//! ```
//!
//! [`Router`]: axum::Router

mod auth;
mod config;
mod error;
mod router;
mod state;
#[cfg(test)]
mod test_utils;

pub use config::AUTH_LOGOUT_REDIRECT_DEFAULT;
pub use error::IntoResponseError;
pub use router::{auth_flow_router, auth_flow_router_no_trace};
pub use state::AuthState;

// Re-export what applications need to wire the router, from the auth_flow crate
pub use auth_flow::{
    AUTH_ROUTE_PREFIX, AuthService, AuthenticatedUser, MemorySessionStore, ProviderError,
    ProviderRegistry, ProviderSettings, SessionStore, VerifiedCallback,
};
