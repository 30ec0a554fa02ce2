//! Shared fixtures for handler tests.

use async_trait::async_trait;
use axum::{Router, body::Body, response::Response};
use http::{
    Request,
    header::{ACCEPT, CONTENT_TYPE, SET_COOKIE},
};
use std::collections::HashMap;
use std::sync::Arc;

use auth_flow::{
    AuthService, AuthenticatedUser, MemorySessionStore, ProviderError, ProviderRegistry,
    VerifiedCallback,
};

use crate::router::auth_flow_router_no_trace;
use crate::state::AuthState;

/// Programmable [`AuthService`] with a single fixed outcome.
pub(crate) struct StubService {
    outcome: Result<(String, Option<String>), ProviderError>,
}

impl StubService {
    pub(crate) fn ok(user_id: &str) -> Self {
        Self {
            outcome: Ok((user_id.to_string(), None)),
        }
    }

    pub(crate) fn ok_with_token(user_id: &str, token: &str) -> Self {
        Self {
            outcome: Ok((user_id.to_string(), Some(token.to_string()))),
        }
    }

    pub(crate) fn failing(status: u16, message: &str) -> Self {
        Self {
            outcome: Err(ProviderError::new(status, message)),
        }
    }
}

#[async_trait]
impl AuthService for StubService {
    async fn initiate_provider_endpoint(&self, provider: &str) -> Result<String, ProviderError> {
        self.outcome.as_ref().map_err(Clone::clone)?;
        Ok(format!(
            "https://provider.example/authorize?provider={provider}"
        ))
    }

    async fn verify_callback(
        &self,
        _provider: &str,
        _action: Option<&str>,
        _params: &HashMap<String, String>,
    ) -> Result<Option<VerifiedCallback>, ProviderError> {
        let (user_id, access_token) = self.outcome.as_ref().map_err(Clone::clone)?;
        Ok(Some(VerifiedCallback {
            user: AuthenticatedUser::new(user_id.clone()),
            access_token: access_token.clone(),
        }))
    }

    async fn disconnect_provider(
        &self,
        _provider: &str,
        user: &AuthenticatedUser,
    ) -> Result<AuthenticatedUser, ProviderError> {
        self.outcome.as_ref().map_err(Clone::clone)?;
        Ok(user.clone())
    }
}

pub(crate) fn test_router(service: StubService, providers: ProviderRegistry) -> Router {
    let state = AuthState::new(
        Arc::new(service),
        Arc::new(MemorySessionStore::new()),
        providers,
    );
    auth_flow_router_no_trace(state)
}

pub(crate) fn request(
    method: &str,
    uri: &str,
    accept: Option<&str>,
    form_body: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(accept) = accept {
        builder = builder.header(ACCEPT, accept);
    }
    if method == "POST" {
        // Form extraction requires the content type even for an empty body
        builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    let body = form_body
        .map(|b| Body::from(b.to_string()))
        .unwrap_or_else(Body::empty);
    builder.body(body).unwrap()
}

pub(crate) async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` pair from the response's Set-Cookie header.
pub(crate) fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}
