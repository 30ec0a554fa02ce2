use std::sync::Arc;

use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_flow_axum::{
    AUTH_ROUTE_PREFIX, AuthState, MemorySessionStore, ProviderRegistry, auth_flow_router,
};

mod handlers;
mod service;

use crate::handlers::index;
use crate::service::DemoAuthService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AuthState::new(
        Arc::new(DemoAuthService::new()),
        Arc::new(MemorySessionStore::new()),
        ProviderRegistry::from_env()?,
    );

    let app = Router::new()
        .route("/", get(index))
        .nest(AUTH_ROUTE_PREFIX.as_str(), auth_flow_router(state));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
    tracing::info!("demo-auth listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
