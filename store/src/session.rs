//! Session state plus its durable backing store.

use crate::models::{Profile, Session};
use crate::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

/// The current session and the storage it is mirrored into.
///
/// Every mutation re-persists under the pair invariant: a truthy token writes
/// both keys (the user key once a profile is known); a cleared token removes
/// both. There is never a persisted profile without a token.
#[derive(Clone, Debug)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read any persisted pair into state. Called once before hydration; a
    /// profile that fails to decode is dropped and re-fetched instead.
    pub async fn load(&mut self) {
        if let Some(token) = self.storage.get(TOKEN_KEY).await {
            if token.is_empty() {
                return;
            }
            self.session.token = token;
            self.session.user = match self.storage.get(USER_KEY).await {
                Some(raw) => serde_json::from_str(&raw).ok(),
                None => None,
            };
        }
    }

    /// Store a successful login result.
    pub async fn set_authenticated(&mut self, token: String, user: Profile) {
        self.session.token = token;
        self.session.user = Some(user);
        self.persist().await;
    }

    /// Replace the profile with the server's returned payload.
    pub async fn set_user(&mut self, user: Profile) {
        self.session.user = Some(user);
        self.persist().await;
    }

    /// Drop token and profile, in state and in storage.
    pub async fn clear(&mut self) {
        self.session.token.clear();
        self.session.user = None;
        self.persist().await;
    }

    pub fn finish_initializing(&mut self) {
        self.session.initializing = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.session.loading = loading;
    }

    async fn persist(&self) {
        if self.session.token.is_empty() {
            self.storage.remove(TOKEN_KEY).await;
            self.storage.remove(USER_KEY).await;
        } else {
            self.storage.set(TOKEN_KEY, &self.session.token).await;
            if let Some(user) = &self.session.user {
                match serde_json::to_string(user) {
                    Ok(raw) => self.storage.set(USER_KEY, &raw).await,
                    Err(err) => tracing::error!("failed to serialize profile: {err}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::models::Role;

    fn profile(role: Role) -> Profile {
        Profile {
            id: "u1".into(),
            full_name: "Kofi Asante".into(),
            email: "kofi@school.test".into(),
            role,
        }
    }

    #[tokio::test]
    async fn test_login_persists_both_keys() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::new(storage.clone());

        assert!(storage.is_empty());

        session
            .set_authenticated("tok".into(), profile(Role::Admin))
            .await;

        assert!(storage.contains(TOKEN_KEY));
        assert!(storage.contains(USER_KEY));
        assert_eq!(storage.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::new(storage.clone());

        session
            .set_authenticated("tok".into(), profile(Role::Committee))
            .await;
        session.clear().await;

        assert!(!storage.contains(TOKEN_KEY));
        assert!(!storage.contains(USER_KEY));
        assert!(session.session().token.is_empty());
        assert!(session.session().user.is_none());
    }

    #[tokio::test]
    async fn test_load_restores_persisted_pair() {
        let storage = MemoryStorage::new();
        let mut first = SessionStore::new(storage.clone());
        first
            .set_authenticated("tok".into(), profile(Role::Admin))
            .await;

        let mut second = SessionStore::new(storage);
        second.load().await;

        assert_eq!(second.session().token, "tok");
        assert_eq!(second.session().user, Some(profile(Role::Admin)));
        // Hydration has not run yet for the fresh store
        assert!(second.session().initializing);
    }

    #[tokio::test]
    async fn test_load_with_corrupt_profile_keeps_token() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok").await;
        storage.set(USER_KEY, "{not json").await;

        let mut session = SessionStore::new(storage);
        session.load().await;

        assert_eq!(session.session().token, "tok");
        assert!(session.session().user.is_none());
    }

    #[tokio::test]
    async fn test_set_user_replaces_profile_verbatim() {
        let storage = MemoryStorage::new();
        let mut session = SessionStore::new(storage.clone());
        session
            .set_authenticated("tok".into(), profile(Role::Committee))
            .await;

        let mut renamed = profile(Role::Committee);
        renamed.full_name = "Kofi A. Asante".into();
        session.set_user(renamed.clone()).await;

        assert_eq!(session.session().user, Some(renamed.clone()));
        // The persisted copy tracks the state
        let raw = storage.get(USER_KEY).await.unwrap();
        let stored: Profile = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, renamed);
    }
}
