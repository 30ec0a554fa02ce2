use std::sync::LazyLock;

/// Name of the session cookie issued after a successful callback.
/// Default: "auth_flow_session"
pub static AUTH_SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("AUTH_SESSION_COOKIE_NAME").unwrap_or_else(|_| "auth_flow_session".to_string())
});

/// Session cookie and store TTL in seconds.
/// Default: 600
pub static AUTH_SESSION_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("AUTH_SESSION_COOKIE_MAX_AGE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(600)
});
