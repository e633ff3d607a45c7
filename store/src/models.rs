//! Session and profile models shared by every frontend crate.

use serde::{Deserialize, Serialize};

/// Role attached to every authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Committee,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Committee => "committee",
        }
    }
}

/// Profile of the signed-in user, as returned by the auth endpoints.
///
/// Owned by the session: only `update_profile` replaces it, and the server's
/// returned payload always wins — `role` and `id` are never rewritten locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

/// Client-side authentication state.
///
/// `initializing` stays true until the persisted token has been validated
/// (or its absence confirmed); `loading` covers an in-flight login request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<Profile>,
    pub initializing: bool,
    pub loading: bool,
}

impl Session {
    /// Fresh startup state: empty, hydration pending.
    pub fn new() -> Self {
        Self {
            initializing: true,
            ..Self::default()
        }
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}
