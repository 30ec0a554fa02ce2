//! Central configuration for the auth_flow crate

use std::sync::LazyLock;

/// Route prefix for all auth_flow endpoints
///
/// This is the prefix under which the authentication endpoints are mounted.
/// Default: "/auth"
pub static AUTH_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("AUTH_ROUTE_PREFIX").unwrap_or_else(|_| "/auth".to_string()));
