//! Central configuration for the auth_flow_axum crate

use std::sync::LazyLock;

/// Where browser clients land after logout when no `next` param is given.
/// Default: "/"
pub static AUTH_LOGOUT_REDIRECT_DEFAULT: LazyLock<String> = LazyLock::new(|| {
    std::env::var("AUTH_LOGOUT_REDIRECT_DEFAULT").unwrap_or_else(|_| "/".to_string())
});
