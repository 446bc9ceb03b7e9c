pub mod kv;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use kv::{KeyValueStore, StoreError};
pub use session::{Role, Session, SessionKeys, SessionStorage};

/// The store backing the session on the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = MemoryStore;

/// Create the platform-appropriate store.
///
/// - **Web** (WASM + `web` feature): browser `localStorage`
/// - **Anything else**: an in-memory map that lives as long as its clones
pub fn platform_store() -> PlatformStore {
    PlatformStore::new()
}
