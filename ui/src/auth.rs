//! Session context and hooks.
//!
//! [`SessionProvider`] owns the [`store::SessionStore`] behind a signal and
//! runs startup hydration: persisted credentials are loaded, then validated
//! against `GET /api/auth/me`. Only a confirmed 401/403 clears the session;
//! a transport failure keeps the persisted credentials and a background loop
//! retries validation every 30 seconds until the server answers.

use api::endpoints::ProfileUpdate;
use api::{ApiClient, ApiConfig, ApiError};
use dioxus::prelude::*;
use store::{Profile, Session, SessionStore};

use crate::storage::{make_storage, PlatformStorage};

const HYDRATE_RETRY_SECS: u64 = 30;

/// Handle to the shared session, cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: Signal<SessionStore<PlatformStorage>>,
    config: Signal<ApiConfig>,
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

impl SessionContext {
    /// Snapshot of the current session state.
    pub fn session(&self) -> Session {
        self.store.read().session().clone()
    }

    pub fn user(&self) -> Option<Profile> {
        self.store.read().session().user.clone()
    }

    /// A client carrying the current bearer token (or none, pre-login).
    pub fn client(&self) -> ApiClient {
        let config = self.config.peek().clone();
        let token = self.store.peek().session().token.clone();
        ApiClient::new(&config).with_token(token)
    }

    fn set_store(&self, store: SessionStore<PlatformStorage>) {
        let mut signal = self.store;
        signal.set(store);
    }

    fn set_loading(&self, loading: bool) {
        let mut signal = self.store;
        signal.write().set_loading(loading);
    }

    /// Exchange credentials for a session and persist it.
    pub async fn login(self, email: &str, password: &str) -> Result<(), ApiError> {
        self.set_loading(true);
        let result = self.client().login(email, password).await;
        let mut store = self.store.peek().clone();
        store.set_loading(false);
        match result {
            Ok(res) => {
                store.set_authenticated(res.token, res.user).await;
                self.set_store(store);
                Ok(())
            }
            Err(err) => {
                self.set_store(store);
                Err(err)
            }
        }
    }

    /// Drop the session, state and storage both.
    pub async fn logout(self) {
        let mut store = self.store.peek().clone();
        store.clear().await;
        self.set_store(store);
    }

    /// Update the signed-in user's own profile. The stored profile is
    /// replaced with the server's copy; the role is never changed locally.
    pub async fn update_profile(self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        let user = self.client().update_profile(update).await?;
        let mut store = self.store.peek().clone();
        store.set_user(user.clone()).await;
        self.set_store(store);
        Ok(user)
    }

    /// Load any persisted credentials, then validate them with the server.
    async fn hydrate(self) {
        let mut store = self.store.peek().clone();
        store.load().await;
        if !store.session().has_token() {
            store.finish_initializing();
            self.set_store(store);
            return;
        }
        let token = store.session().token.clone();
        // Surface the loaded credentials while validation is in flight so
        // the outcome can be checked against whatever token is current then.
        self.set_store(store.clone());
        let config = self.config.peek().clone();
        let client = ApiClient::new(&config).with_token(token.clone());
        let outcome = client.me().await;
        if superseded(&self.store.peek().session().token, &token) {
            // a login or logout won the race; the stale outcome must not
            // touch the newer session
            let mut current = self.store.peek().clone();
            current.finish_initializing();
            self.set_store(current);
            return;
        }
        match outcome {
            Ok(user) => {
                store.set_user(user).await;
            }
            Err(err) if err.is_auth_failure() => {
                tracing::info!("stored token rejected, clearing session");
                store.clear().await;
            }
            Err(err) => {
                // server unreachable: keep the persisted session and let the
                // background loop retry validation
                tracing::warn!("session validation unavailable: {err}");
            }
        }
        store.finish_initializing();
        self.set_store(store);
    }

    /// One revalidation pass for the background loop.
    async fn revalidate(self) {
        let snapshot = self.session();
        if snapshot.initializing || !snapshot.has_token() || snapshot.user.is_some() {
            return;
        }
        let outcome = self.client().me().await;
        if superseded(&self.store.peek().session().token, &snapshot.token) {
            return;
        }
        match outcome {
            Ok(user) => {
                let mut store = self.store.peek().clone();
                store.set_user(user).await;
                self.set_store(store);
            }
            Err(err) if err.is_auth_failure() => {
                let mut store = self.store.peek().clone();
                store.clear().await;
                self.set_store(store);
            }
            Err(_) => {}
        }
    }
}

/// True when the token a validation round-trip was issued for is no longer
/// the session's current token: a login or logout finished while the request
/// was in flight, and its result must stand.
fn superseded(current_token: &str, validated_token: &str) -> bool {
    current_token != validated_token
}

/// Provider component owning the session. Wrap the app root with it; every
/// screen reaches the session through [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let store = use_signal(|| SessionStore::new(make_storage()));
    let config = use_signal(ApiConfig::from_env);
    let ctx = use_context_provider(|| SessionContext { store, config });

    // Hydrate once on mount
    let _ = use_resource(move || async move {
        ctx.hydrate().await;
    });

    // Retry validation while a token is waiting on an unreachable server
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(HYDRATE_RETRY_SECS))
                    .await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(HYDRATE_RETRY_SECS)).await;

                ctx.revalidate().await;
            }
        });
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStorage, Role, SessionStorage, TOKEN_KEY, USER_KEY};

    fn profile() -> Profile {
        Profile {
            id: "u1".into(),
            full_name: "Ama Mensah".into(),
            email: "ama@school.test".into(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_same_token_is_not_superseded() {
        assert!(!superseded("old", "old"));
    }

    #[test]
    fn test_fresh_login_supersedes_stale_validation() {
        assert!(superseded("fresh", "old"));
    }

    #[test]
    fn test_logout_supersedes_stale_validation() {
        assert!(superseded("", "old"));
    }

    // A 401 for a token that was replaced mid-flight must leave the newer
    // session alone, in state and in storage.
    #[tokio::test]
    async fn test_stale_rejection_keeps_fresh_login() {
        let storage = MemoryStorage::new();
        let mut previous = SessionStore::new(storage.clone());
        previous.set_authenticated("old".into(), profile()).await;

        // startup hydration picks up the persisted token
        let mut hydrating = SessionStore::new(storage.clone());
        hydrating.load().await;
        let validated = hydrating.session().token.clone();
        assert_eq!(validated, "old");

        // the user logs in again before validation answers
        let mut live = SessionStore::new(storage.clone());
        live.set_authenticated("fresh".into(), profile()).await;

        // the old token's 401 lands now and must be discarded
        if !superseded(&live.session().token, &validated) {
            hydrating.clear().await;
        }

        assert_eq!(live.session().token, "fresh");
        assert_eq!(storage.get(TOKEN_KEY).await.as_deref(), Some("fresh"));
        assert!(storage.contains(USER_KEY));
    }
}
