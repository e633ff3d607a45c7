use serde::{Deserialize, Serialize};
use store::Profile;

use crate::client::ApiClient;
use crate::error::ApiError;

/// `POST /api/auth/login` response: a bearer token plus the signed-in
/// user's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Profile,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// `GET`/`PUT /api/auth/me` responses wrap the profile in `{ user }`.
#[derive(Debug, Clone, Deserialize)]
struct MeResponse {
    user: Profile,
}

/// Self-service profile update; an absent password keeps the current one.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ApiClient {
    /// Exchange credentials for a session. Any rejection reads as bad
    /// credentials to the caller; the server does not distinguish.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let result: Result<LoginResponse, ApiError> = self
            .post_json("/api/auth/login", &LoginRequest { email, password })
            .await;
        result.map_err(|err| match err {
            ApiError::Network(message) => ApiError::Network(message),
            other => ApiError::Auth {
                status: other.status().unwrap_or(401),
                message: "Invalid credentials".to_string(),
            },
        })
    }

    /// Fetch the profile the current token belongs to.
    pub async fn me(&self) -> Result<Profile, ApiError> {
        let res: MeResponse = self.get_json("/api/auth/me").await?;
        Ok(res.user)
    }

    /// Update the signed-in user's own profile, returning the fresh copy.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        let res: MeResponse = self.put_json("/api/auth/me", update).await?;
        Ok(res.user)
    }
}
