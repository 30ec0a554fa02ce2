//! Router for the authentication flow endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::state::AuthState;

/// Create the router for the authentication flow endpoints
///
/// Mounted under a prefix of the application's choosing (conventionally
/// [`AUTH_ROUTE_PREFIX`](auth_flow::AUTH_ROUTE_PREFIX)), the endpoints are:
/// - `GET/POST {prefix}/logout`
/// - `GET {prefix}/{provider}`
/// - `GET/POST {prefix}/{provider}/callback`
/// - `GET/POST {prefix}/{provider}/{action}/callback`
/// - `POST {prefix}/{provider}/disconnect`
pub fn auth_flow_router(state: AuthState) -> Router {
    Router::new()
        .merge(super::auth::router())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(true),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}

/// Same as [`auth_flow_router`] but without HTTP tracing middleware.
///
/// Use this to add your own tracing middleware, or when request tracing is
/// unwanted.
pub fn auth_flow_router_no_trace(state: AuthState) -> Router {
    Router::new().merge(super::auth::router()).with_state(state)
}
