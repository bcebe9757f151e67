//! In-memory `UserRepository` used when no database is configured.
//!
//! Keeps records in a mutex-guarded vector with a monotonically increasing
//! id counter, mirroring the relational adapter's observable behaviour
//! (including the duplicate-email rejection) without any I/O. The server
//! falls back to this store when `DATABASE_URL` is absent; tests use it to
//! exercise the HTTP contract.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

/// Volatile user store backing the repository port.
pub struct InMemoryUserRepository {
    state: Mutex<StoreState>,
}

struct StoreState {
    users: Vec<User>,
    next_id: i64,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            state: Mutex::new(StoreState {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl InMemoryUserRepository {
    /// Create an empty store; the first insert receives id 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> T,
    ) -> Result<T, UserPersistenceError> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        Ok(f(&mut state))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        self.with_state(|state| {
            if state.users.iter().any(|u| u.email == new_user.email) {
                return Err(UserPersistenceError::duplicate_email(&new_user.email));
            }
            let user = User {
                id: UserId::new(state.next_id),
                name: new_user.name.clone(),
                email: new_user.email.clone(),
            };
            state.next_id += 1;
            state.users.push(user.clone());
            Ok(user)
        })?
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.with_state(|state| state.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        self.with_state(|state| state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        self.with_state(|state| state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        self.with_state(|state| state.users.retain(|u| u.id != id))
    }
}
