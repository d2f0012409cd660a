//! Static in-memory principals.
//!
//! Two users exist for the lifetime of the process:
//! `user` with role USER and `admin` with roles ADMIN and USER.

use std::collections::HashMap;

use bcrypt::BcryptError;
use tracing::warn;

use super::password::{hash_password, verify_password};

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";

#[derive(Debug, Clone)]
pub struct Principal {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<String, Principal>,
}

impl UserStore {
    /// Build the store with the two built-in users, hashing their passwords at `cost`.
    pub fn with_default_users(cost: u32) -> Result<Self, BcryptError> {
        let mut store = Self::default();
        store.insert("user", "password", &[ROLE_USER], cost)?;
        store.insert("admin", "adminpass", &[ROLE_ADMIN, ROLE_USER], cost)?;
        Ok(store)
    }

    fn insert(
        &mut self,
        username: &str,
        password: &str,
        roles: &[&str],
        cost: u32,
    ) -> Result<(), BcryptError> {
        let principal = Principal {
            username: username.to_string(),
            password_hash: hash_password(password, cost)?,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        };
        self.users.insert(principal.username.clone(), principal);
        Ok(())
    }

    /// Check a username/password pair. Blocking: bcrypt is CPU-bound.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&Principal> {
        let principal = self.users.get(username)?;
        match verify_password(password, &principal.password_hash) {
            Ok(true) => Some(principal),
            Ok(false) => None,
            Err(e) => {
                warn!(%username, error = %e, "Stored password hash could not be verified");
                None
            }
        }
    }
}
