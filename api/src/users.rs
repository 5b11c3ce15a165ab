//! User profile endpoints.

use serde::Serialize;
use store::ThemeName;

use crate::ApiError;

/// Wire body for a theme update.
#[derive(Debug, Serialize)]
pub struct ThemeUpdate {
    pub theme: ThemeName,
}

/// Path of a user's profile document.
pub fn user_document_path(base: &str, uid: &str) -> String {
    format!("{base}/users/{uid}")
}

/// Store the preferred color scheme under `users/{uid}`.
#[cfg(target_arch = "wasm32")]
pub async fn save_theme(uid: &str, theme: ThemeName) -> Result<(), ApiError> {
    use gloo_net::http::Request;

    let url = user_document_path(&crate::get_api_base(), uid);
    let response = Request::patch(&url)
        .json(&ThemeUpdate { theme })
        .map_err(|e| ApiError::Body(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(crate::error::error_from(response).await);
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_theme(_uid: &str, _theme: ThemeName) -> Result<(), ApiError> {
    Err(ApiError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_document_path() {
        assert_eq!(
            user_document_path("http://localhost:8080/api/v1", "u_9f2c"),
            "http://localhost:8080/api/v1/users/u_9f2c"
        );
    }

    #[test]
    fn test_theme_update_wire_shape() {
        let body = serde_json::to_string(&ThemeUpdate {
            theme: ThemeName::Dark,
        })
        .unwrap();
        assert_eq!(body, r#"{"theme":"DARK"}"#);
    }
}
