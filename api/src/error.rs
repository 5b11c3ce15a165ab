use thiserror::Error;

/// Failures surfaced by the HTTP client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Body(String),
    /// Called from a build without a browser runtime.
    #[error("not available on this target")]
    Unsupported,
}

/// Map a non-success response to [`ApiError`], preferring the backend's
/// `{"error": "..."}` body over the bare status line.
#[cfg(target_arch = "wasm32")]
pub(crate) async fn error_from(response: gloo_net::http::Response) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    ApiError::Status { status, message }
}
