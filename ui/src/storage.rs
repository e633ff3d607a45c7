//! Platform-appropriate session storage.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via
//!   [`store::LocalStorage`]
//! - **Desktop** (native): one file per key under the user data dir via
//!   [`store::FileStorage`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::FileStorage;

pub fn make_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("discipline-tracker");
        store::FileStorage::new(base)
    }
}
