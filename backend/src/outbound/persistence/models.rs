//! Diesel row structs internal to the persistence adapter.
//!
//! Rows never leave this module as-is; the repository converts them to
//! domain types at the boundary.

use diesel::prelude::*;

use super::schema::users;

/// Row read back from the `users` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Surrogate key assigned by the database.
    pub id: i64,
    /// Stored display name.
    pub name: String,
    /// Stored contact address.
    pub email: String,
}

/// Row inserted into the `users` table; the id comes from the database.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    /// Display name to store.
    pub name: &'a str,
    /// Contact address to store.
    pub email: &'a str,
}
