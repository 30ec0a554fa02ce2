use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;

use auth_flow_axum::{
    AUTH_ROUTE_PREFIX, AuthService, AuthenticatedUser, ProviderError, VerifiedCallback,
};

const DEMO_CODE: &str = "demo-code";

/// Self-contained stand-in for a real authentication service.
///
/// The single `demo` provider approves immediately: `initiate` points back at
/// our own callback with a fixed authorization code, and `verify` accepts
/// exactly that code.
pub(crate) struct DemoAuthService;

impl DemoAuthService {
    pub(crate) fn new() -> Self {
        Self
    }

    fn check_provider(provider: &str) -> Result<(), ProviderError> {
        if provider == "demo" {
            Ok(())
        } else {
            Err(ProviderError::not_found(format!(
                "Unknown provider: {provider}"
            )))
        }
    }
}

#[async_trait]
impl AuthService for DemoAuthService {
    async fn initiate_provider_endpoint(&self, provider: &str) -> Result<String, ProviderError> {
        Self::check_provider(provider)?;
        Ok(format!(
            "{}/demo/callback?code={DEMO_CODE}",
            AUTH_ROUTE_PREFIX.as_str()
        ))
    }

    async fn verify_callback(
        &self,
        provider: &str,
        _action: Option<&str>,
        params: &HashMap<String, String>,
    ) -> Result<Option<VerifiedCallback>, ProviderError> {
        Self::check_provider(provider)?;
        match params.get("code").map(String::as_str) {
            Some(DEMO_CODE) => {
                let mut user = AuthenticatedUser::new("demo-user");
                user.claims
                    .insert("name".to_string(), json!("Demo User"));
                user.claims
                    .insert("email".to_string(), json!("demo@example.com"));
                Ok(Some(VerifiedCallback {
                    user,
                    access_token: Some("demo-access-token".to_string()),
                }))
            }
            _ => Err(ProviderError::unauthorized("Invalid authorization code")),
        }
    }

    async fn disconnect_provider(
        &self,
        provider: &str,
        user: &AuthenticatedUser,
    ) -> Result<AuthenticatedUser, ProviderError> {
        Self::check_provider(provider)?;
        let mut updated = user.clone();
        updated
            .claims
            .insert("disconnected".to_string(), json!(provider));
        Ok(updated)
    }
}
