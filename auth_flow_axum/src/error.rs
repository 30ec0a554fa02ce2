use http::StatusCode;

use auth_flow::FlowError;

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Provider-originated errors keep the external service's status code and are
/// serialized verbatim as the body; everything else surfaces its display form.
impl<T> IntoResponseError<T> for Result<T, FlowError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let body = match e.provider_error() {
                Some(provider_err) => serde_json::to_string(provider_err)
                    .unwrap_or_else(|_| provider_err.to_string()),
                None => e.to_string(),
            };
            (e.status(), body)
        })
    }
}
