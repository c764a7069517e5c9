use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub role: String,
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserDetail {
    pub id: String,
    pub email: String,
    pub role: String,
    pub display_name: Option<String>,
    pub created_at: String,
    pub last_seen_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserStats {
    pub total: i64,
    pub admins: i64,
    pub pending_invites: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InviteUserRequest {
    pub email: String,
    pub role: String,
}
