//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed database exactly; the expected
//! DDL is documented in the README. Diesel uses them for type-safe SQL
//! generation.

diesel::table! {
    /// Stored user records.
    ///
    /// `email` carries a unique index; inserts violating it surface as a
    /// unique-violation database error.
    users (id) {
        /// Primary key: BIGSERIAL surrogate id.
        id -> Int8,
        /// Required display name.
        name -> Text,
        /// Required contact address, unique across the table.
        email -> Text,
    }
}
