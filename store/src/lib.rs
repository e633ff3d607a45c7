pub mod guard;
pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

mod file_storage;
pub use file_storage::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use guard::{decide, AccessDecision};
pub use models::{Profile, Role, Session};
pub use session::SessionStore;
pub use storage::{SessionStorage, TOKEN_KEY, USER_KEY};
