use axum::{
    Json, Router,
    extract::{Form, Path, Query, State},
    http::{HeaderMap, StatusCode, header::ACCEPT, header::LOCATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::{TypedHeader, headers};
use std::collections::HashMap;

use auth_flow::{
    AUTH_SESSION_COOKIE_MAX_AGE, AUTH_SESSION_COOKIE_NAME, AuthenticatedUser, CallbackOutcome,
    CallbackRequest, disconnect_core, handle_callback_core, header_set_cookie,
    initiate_provider_core, logout_core,
};

use super::config::AUTH_LOGOUT_REDIRECT_DEFAULT;
use super::error::IntoResponseError;
use super::state::AuthState;

pub(super) fn router() -> Router<AuthState> {
    Router::new()
        .route("/logout", get(logout).post(logout))
        .route("/{provider}", get(provider))
        .route(
            "/{provider}/callback",
            get(get_callback).post(post_callback),
        )
        .route(
            "/{provider}/{action}/callback",
            get(get_action_callback).post(post_action_callback),
        )
        .route("/{provider}/disconnect", post(disconnect))
}

fn session_id_from(cookies: &Option<TypedHeader<headers::Cookie>>) -> Option<String> {
    cookies.as_ref().and_then(|TypedHeader(cookies)| {
        cookies
            .get(AUTH_SESSION_COOKIE_NAME.as_str())
            .map(str::to_string)
    })
}

/// Browser clients negotiate HTML; everything else gets a bare acknowledgment.
fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Query-param truthiness for the `includeToken` flag.
fn include_token_flag(params: &HashMap<String, String>) -> bool {
    params
        .get("includeToken")
        .is_some_and(|v| !matches!(v.as_str(), "" | "0" | "false"))
}

/// 302 with a `Location` header, carrying any prepared headers along.
fn found(location: &str, headers: HeaderMap) -> Result<Response, (StatusCode, String)> {
    let location = location
        .parse()
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Invalid redirect URL".to_string()))?;
    let mut response = (StatusCode::FOUND, headers, ()).into_response();
    response.headers_mut().insert(LOCATION, location);
    Ok(response)
}

fn set_session_cookie(
    headers: &mut HeaderMap,
    session_id: &str,
) -> Result<(), (StatusCode, String)> {
    header_set_cookie(
        headers,
        AUTH_SESSION_COOKIE_NAME.as_str(),
        session_id,
        *AUTH_SESSION_COOKIE_MAX_AGE as i64,
    )
    .map(|_| ())
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// Terminate the login session and send the user on their way.
async fn logout(
    State(state): State<AuthState>,
    cookies: Option<TypedHeader<headers::Cookie>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let session_id = session_id_from(&cookies);
    logout_core(state.sessions.as_ref(), session_id.as_deref())
        .await
        .into_response_error()?;

    if wants_html(&headers) {
        let next = params
            .get("next")
            .cloned()
            .unwrap_or_else(|| AUTH_LOGOUT_REDIRECT_DEFAULT.clone());
        found(&next, HeaderMap::new())
    } else {
        Ok(StatusCode::OK.into_response())
    }
}

/// Hand the client to the provider's authentication endpoint.
async fn provider(
    State(state): State<AuthState>,
    Path(provider): Path<String>,
) -> Result<Response, (StatusCode, String)> {
    let url = initiate_provider_core(state.service.as_ref(), &provider)
        .await
        .into_response_error()?;
    found(&url, HeaderMap::new())
}

async fn get_callback(
    State(state): State<AuthState>,
    Path(provider): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, (StatusCode, String)> {
    run_callback(state, provider, None, params).await
}

async fn post_callback(
    State(state): State<AuthState>,
    Path(provider): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, (StatusCode, String)> {
    let mut params = params;
    params.extend(form);
    run_callback(state, provider, None, params).await
}

async fn get_action_callback(
    State(state): State<AuthState>,
    Path((provider, action)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, (StatusCode, String)> {
    run_callback(state, provider, Some(action), params).await
}

async fn post_action_callback(
    State(state): State<AuthState>,
    Path((provider, action)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, (StatusCode, String)> {
    let mut params = params;
    params.extend(form);
    run_callback(state, provider, Some(action), params).await
}

async fn run_callback(
    state: AuthState,
    provider: String,
    action: Option<String>,
    mut params: HashMap<String, String>,
) -> Result<Response, (StatusCode, String)> {
    let next = params.remove("next");
    let include_token = include_token_flag(&params);

    let request = CallbackRequest {
        provider,
        action,
        next,
        include_token,
        params,
    };
    let outcome = handle_callback_core(
        state.service.as_ref(),
        state.sessions.as_ref(),
        &state.providers,
        request,
    )
    .await
    .into_response_error()?;

    let mut headers = HeaderMap::new();
    match outcome {
        CallbackOutcome::Redirect {
            location,
            session_id,
            ..
        } => {
            set_session_cookie(&mut headers, &session_id)?;
            found(&location, headers)
        }
        CallbackOutcome::User { session_id, user } => {
            set_session_cookie(&mut headers, &session_id)?;
            Ok((StatusCode::OK, headers, Json(user)).into_response())
        }
    }
}

/// Unlink a provider identity from the current user.
async fn disconnect(
    State(state): State<AuthState>,
    Path(provider): Path<String>,
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Result<Json<AuthenticatedUser>, (StatusCode, String)> {
    let session_id = session_id_from(&cookies);
    let user = disconnect_core(
        state.service.as_ref(),
        state.sessions.as_ref(),
        session_id.as_deref(),
        &provider,
    )
    .await
    .into_response_error()?;
    Ok(Json(user))
}
