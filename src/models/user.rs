use serde::{Deserialize, Serialize};

/// One stored account. The `password` field holds the hex SHA-256
/// digest, never the raw password; the field name is kept for
/// compatibility with the existing database.json layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: String,
}

/// The full persisted document: `{"users": [...]}`.
/// Usernames are unique across the array, enforced at registration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserFile {
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub username: String,
}
