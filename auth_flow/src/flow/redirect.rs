//! Post-authentication redirect URL construction.

/// Ephemeral input to the redirect builder, assembled per request from the
/// `next` destination, the `includeToken` flag, and the session's token.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectRequest {
    pub base_url: String,
    pub include_token: bool,
    pub access_token: Option<String>,
}

impl RedirectRequest {
    /// Resolve the final redirect target. See [`build_callback_url`].
    pub fn resolve(&self) -> String {
        build_callback_url(&self.base_url, self.include_token, self.access_token.as_deref())
    }
}

/// Compute the URL to send a user to after successful authentication.
///
/// When `include_token` is set and the session holds a non-empty access
/// token, the token is appended as a literal `?access_token=...` suffix.
/// No URL-encoding is applied and no query-string merging happens: a
/// `base_url` that already carries a `?` ends up with two of them. That is
/// the historical behavior and callers depend on the output being literal.
pub fn build_callback_url(
    base_url: &str,
    include_token: bool,
    access_token: Option<&str>,
) -> String {
    match access_token {
        Some(token) if include_token && !token.is_empty() => {
            format!("{base_url}?access_token={token}")
        }
        _ => base_url.to_string(),
    }
}
