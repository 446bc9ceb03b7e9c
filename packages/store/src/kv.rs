//! # Key/value storage abstraction
//!
//! The client persists exactly one thing across reloads: the session (token and
//! role). Everything that reads or writes it goes through the [`KeyValueStore`]
//! trait, so the same session logic runs against browser `localStorage`
//! ([`crate::LocalStore`]) in the app and against [`crate::MemoryStore`] in tests.
//!
//! Reads never fail: an unavailable or unreadable backend degrades to "no value",
//! which the rest of the client treats as "signed out". Writes report a
//! [`StoreError`] so a session that could not be persisted is never reported as
//! signed in.

use thiserror::Error;

/// Errors raised when writing to a store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The backend is missing (e.g. storage disabled by the browser).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused the write (e.g. quota exceeded).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Synchronous string key/value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}
