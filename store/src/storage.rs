//! Durable key-value storage for the session pair.

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "discipline_token";

/// Key under which the signed-in profile is persisted, as JSON.
pub const USER_KEY: &str = "discipline_user";

/// A durable string store for the session pair.
///
/// Implementations swallow their own errors: a broken or unavailable backend
/// degrades to "no persisted session" rather than failing the caller.
#[allow(async_fn_in_trait)]
pub trait SessionStorage {
    async fn get(&self, key: &str) -> Option<String>;

    async fn set(&self, key: &str, value: &str);

    async fn remove(&self, key: &str);
}
