//! Session endpoints.
//!
//! The backend keeps the session itself in an HTTP-only cookie; these calls
//! only move the JSON [`SessionRecord`] describing who is signed in.

use store::SessionRecord;

use crate::ApiError;

/// Ask the backend who is signed in. `None` means nobody.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_session() -> Result<Option<SessionRecord>, ApiError> {
    use gloo_net::http::Request;

    let response = Request::get(&format!("{}/session", crate::get_api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(crate::error::error_from(response).await);
    }

    response
        .json::<Option<SessionRecord>>()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_session() -> Result<Option<SessionRecord>, ApiError> {
    Ok(None)
}

/// Exchange credentials for a session.
#[cfg(target_arch = "wasm32")]
pub async fn sign_in(email: &str, password: &str) -> Result<SessionRecord, ApiError> {
    use gloo_net::http::Request;

    #[derive(serde::Serialize)]
    struct SignInRequest {
        email: String,
        password: String,
    }

    let response = Request::post(&format!("{}/session", crate::get_api_base()))
        .json(&SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::Body(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(crate::error::error_from(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sign_in(_email: &str, _password: &str) -> Result<SessionRecord, ApiError> {
    Err(ApiError::Unsupported)
}

/// Create an account. The backend signs the new account in as a side effect,
/// so the returned record can seed the session directly.
#[cfg(target_arch = "wasm32")]
pub async fn register(email: &str, password: &str, name: &str) -> Result<SessionRecord, ApiError> {
    use gloo_net::http::Request;

    #[derive(serde::Serialize)]
    struct RegisterRequest {
        email: String,
        password: String,
        name: String,
    }

    let response = Request::post(&format!("{}/users", crate::get_api_base()))
        .json(&RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        })
        .map_err(|e| ApiError::Body(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(crate::error::error_from(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn register(
    _email: &str,
    _password: &str,
    _name: &str,
) -> Result<SessionRecord, ApiError> {
    Err(ApiError::Unsupported)
}

/// End the session.
#[cfg(target_arch = "wasm32")]
pub async fn sign_out() -> Result<(), ApiError> {
    use gloo_net::http::Request;

    let response = Request::delete(&format!("{}/session", crate::get_api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(crate::error::error_from(response).await);
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sign_out() -> Result<(), ApiError> {
    Ok(())
}
