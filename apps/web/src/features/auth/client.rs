//! Client wrappers for the auth API endpoints. These helpers centralize
//! session-aware requests, keeping auth flows consistent and credentials out
//! of route code.

use crate::{
    app_lib::{
        AppError, get_optional_json_with_credentials, post_empty_with_credentials,
        post_json_with_credentials_response,
    },
    features::auth::types::{LoginRequest, UserSession},
};

/// Submits credentials and allows the server to set the session cookie.
/// The request must include credentials so the `HttpOnly` cookie is set.
pub async fn login(request: &LoginRequest) -> Result<UserSession, AppError> {
    post_json_with_credentials_response("/v1/auth/login", request).await
}

/// Clears the server-side session and its cookie.
pub async fn logout() -> Result<(), AppError> {
    post_empty_with_credentials("/v1/auth/logout").await
}

/// Fetches the current session using cookie-based auth.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    get_optional_json_with_credentials("/v1/auth/session").await
}
