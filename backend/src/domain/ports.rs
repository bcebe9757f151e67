//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Underlying connection failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query {
        /// Underlying query failure description.
        message: String,
    },
    /// The storage layer rejected an insert that would duplicate an email.
    #[error("email already registered: {email}")]
    DuplicateEmail {
        /// The address that collided with an existing record.
        email: String,
    },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a duplicate-email error for the given address.
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }
}

/// Durable storage contract for user records.
///
/// Adapters perform single-row operations only; no transaction spans more
/// than one call. Failures propagate unchanged, there are no retries.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record and return it with the storage-assigned id.
    ///
    /// Fails with [`UserPersistenceError::DuplicateEmail`] when the email
    /// uniqueness invariant rejects the row.
    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch every stored record. Order is storage-defined.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the record holding the given email, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Remove a record by identifier. Callers confirm existence first.
    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = UserPersistenceError::connection("refused");
        assert_eq!(err.to_string(), "user repository connection failed: refused");
    }

    #[test]
    fn duplicate_email_names_the_colliding_address() {
        let err = UserPersistenceError::duplicate_email("ada@example.com");
        assert!(matches!(
            &err,
            UserPersistenceError::DuplicateEmail { email } if email == "ada@example.com"
        ));
        assert_eq!(err.to_string(), "email already registered: ada@example.com");
    }

    #[test]
    fn query_errors_carry_the_message() {
        let err = UserPersistenceError::query("bad statement");
        assert_eq!(err.to_string(), "user repository query failed: bad statement");
    }
}
