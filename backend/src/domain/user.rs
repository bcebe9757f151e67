//! User entity types.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Surrogate key assigned by storage when a record is inserted.
///
/// Carries no business meaning and never changes after creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw storage identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw storage identifier.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored user record.
///
/// Passive data holder: the persistence layer owns the durable
/// representation, handlers only ever hold request-scoped copies.
///
/// ## Invariants
/// - No two stored records share the same `email`; the storage layer
///   enforces this with a unique index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Surrogate key assigned on insert.
    #[schema(example = 1)]
    pub id: UserId,
    /// Required display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Required contact address, unique across all records.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {{ id: {}, name: {:?}, email: {:?} }}",
            self.id, self.name, self.email
        )
    }
}

/// Payload accepted by the create operation.
///
/// The id is absent by construction; storage assigns it on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    /// Display name for the new record.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact address for the new record.
    #[schema(example = "ada@example.com")]
    pub email: String,
}
