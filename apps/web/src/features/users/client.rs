//! Client helpers for user-management API endpoints. These functions keep
//! endpoint paths centralized and assume the backend enforces authorization.

use crate::{
    app_lib::{AppError, get_json_with_credentials, post_json_with_credentials_response},
    features::users::types::{InviteUserRequest, UserDetail, UserStats, UserSummary},
};

/// Fetches the user list from the API.
pub async fn list_users() -> Result<Vec<UserSummary>, AppError> {
    get_json_with_credentials("/v1/users").await
}

/// Fetches user details by id after basic input validation.
pub async fn get_user(id: &str) -> Result<UserDetail, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    get_json_with_credentials(&format!("/v1/users/{trimmed}")).await
}

/// Fetches aggregate platform stats for the admin overview.
pub async fn user_stats() -> Result<UserStats, AppError> {
    get_json_with_credentials("/v1/users/stats").await
}

/// Invites a new user and returns the created record.
pub async fn invite_user(request: &InviteUserRequest) -> Result<UserSummary, AppError> {
    post_json_with_credentials_response("/v1/users/invitations", request).await
}
