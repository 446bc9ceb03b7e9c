//! # Persisted session
//!
//! A signed-in user is represented by a [`Session`]: the bearer token returned by
//! the login endpoint plus the user's [`Role`]. [`SessionStorage`] keeps both in
//! a [`KeyValueStore`] under two keys ([`SessionKeys`]) and treats them as a unit:
//!
//! - [`load`](SessionStorage::load) yields a session only when *both* keys are
//!   present and the role parses;
//! - [`persist`](SessionStorage::persist) writes both or leaves neither behind;
//! - [`clear`](SessionStorage::clear) removes both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kv::{KeyValueStore, StoreError};

/// Role of an employee account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "EMPLOYEE")]
    Employee,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Employee];

    /// Wire representation (`"ADMIN"` / `"EMPLOYEE"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Employee => "EMPLOYEE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known role.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "EMPLOYEE" => Ok(Role::Employee),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Token and role of the signed-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }
}

/// Storage keys for the two halves of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionKeys {
    pub token: String,
    pub role: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            token: "token".to_string(),
            role: "userRole".to_string(),
        }
    }
}

/// Reads and writes the [`Session`] in a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStorage<S> {
    store: S,
    keys: SessionKeys,
}

impl<S: KeyValueStore> SessionStorage<S> {
    pub fn new(store: S, keys: SessionKeys) -> Self {
        Self { store, keys }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(&self.keys.token).filter(|t| !t.is_empty())
    }

    /// The persisted session. `None` unless both token and role are present.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let role = self.store.get(&self.keys.role)?.parse().ok()?;
        Some(Session { token, role })
    }

    /// Persist token and role together.
    pub fn persist(&self, session: &Session) -> Result<(), StoreError> {
        self.store.set(&self.keys.token, &session.token)?;
        if let Err(e) = self.store.set(&self.keys.role, session.role.as_str()) {
            self.store.remove(&self.keys.token);
            return Err(e);
        }
        Ok(())
    }

    /// Remove token and role.
    pub fn clear(&self) {
        self.store.remove(&self.keys.token);
        self.store.remove(&self.keys.role);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn storage() -> SessionStorage<MemoryStore> {
        SessionStorage::new(MemoryStore::new(), SessionKeys::default())
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("EMPLOYEE".parse::<Role>(), Ok(Role::Employee));
        assert_eq!(
            "admin".parse::<Role>().unwrap_err().to_string(),
            "unknown role: admin"
        );
        assert_eq!(Role::Employee.to_string(), "EMPLOYEE");
    }

    #[test]
    fn test_persist_and_load() {
        let storage = storage();
        assert!(storage.load().is_none());

        storage.persist(&Session::new("tok", Role::Admin)).unwrap();
        assert_eq!(storage.load(), Some(Session::new("tok", Role::Admin)));
        assert_eq!(storage.store().get("token").as_deref(), Some("tok"));
        assert_eq!(storage.store().get("userRole").as_deref(), Some("ADMIN"));
    }

    #[test]
    fn test_load_requires_both_keys() {
        let storage = storage();
        storage.store().set("token", "tok").unwrap();
        assert!(storage.load().is_none());
        assert_eq!(storage.token().as_deref(), Some("tok"));

        storage.store().set("userRole", "NOBODY").unwrap();
        assert!(storage.load().is_none());

        storage.store().set("userRole", "EMPLOYEE").unwrap();
        assert_eq!(storage.load().map(|s| s.role), Some(Role::Employee));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = storage();
        storage.persist(&Session::new("tok", Role::Employee)).unwrap();
        storage.clear();
        assert!(storage.load().is_none());
        assert!(storage.token().is_none());
        assert!(storage.store().is_empty());
    }

    #[test]
    fn test_custom_keys() {
        let keys = SessionKeys {
            token: "auth.token".into(),
            role: "auth.role".into(),
        };
        let storage = SessionStorage::new(MemoryStore::new(), keys);
        storage.persist(&Session::new("x", Role::Admin)).unwrap();
        assert_eq!(storage.store().get("auth.token").as_deref(), Some("x"));
        assert!(storage.store().get("token").is_none());
    }
}
