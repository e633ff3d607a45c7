//! # Filesystem-backed session storage
//!
//! [`FileStorage`] keeps one file per key under a base directory. It is the
//! desktop backend, retaining the session across app restarts.
//!
//! Callers pass a platform-appropriate base directory, e.g.
//! `~/.local/share/discipline-tracker/` on Linux.

use std::path::PathBuf;

use crate::storage::SessionStorage;

/// Filesystem-backed storage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionStorage for FileStorage {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Profile, Role};
    use crate::session::SessionStore;
    use crate::storage::{TOKEN_KEY, USER_KEY};

    fn profile() -> Profile {
        Profile {
            id: "u1".into(),
            full_name: "Ama Mensah".into(),
            email: "ama@school.test".into(),
            role: Role::Committee,
        }
    }

    #[tokio::test]
    async fn test_session_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("discipline_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut session = SessionStore::new(FileStorage::new(dir.clone()));
        session
            .set_authenticated("tok-123".into(), profile())
            .await;

        // Re-open from the same directory
        let mut reopened = SessionStore::new(FileStorage::new(dir.clone()));
        reopened.load().await;
        assert_eq!(reopened.session().token, "tok-123");
        assert_eq!(reopened.session().user, Some(profile()));

        // Clearing removes both files
        reopened.clear().await;
        assert!(!dir.join(TOKEN_KEY).exists());
        assert!(!dir.join(USER_KEY).exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
