//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A thin adapter: it translates between Diesel rows and domain types and
//! maps database failures onto the port's error enum. No business logic
//! lives here.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain persistence errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to domain persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => UserPersistenceError::query("database error"),
        _ => UserPersistenceError::query("database error"),
    }
}

/// Map insert failures, surfacing the unique index on `email` as the
/// duplicate signal.
fn map_insert_error(error: diesel::result::Error, email: &str) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if matches!(
        &error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    ) {
        return UserPersistenceError::duplicate_email(email);
    }
    map_diesel_error(error)
}

fn row_to_user(row: UserRow) -> User {
    User {
        id: UserId::new(row.id),
        name: row.name,
        email: row.email,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            name: &new_user.name,
            email: &new_user.email,
        };

        let stored: UserRow = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, &new_user.email))?;

        Ok(row_to_user(stored))
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // No ORDER BY: the contract leaves ordering storage-defined.
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_user).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_i64()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_user))
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(users::table.filter(users::id.eq(id.as_i64())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new("database error".to_owned()))
    }

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            UserPersistenceError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(DieselError::NotFound);

        assert!(matches!(repo_err, UserPersistenceError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let repo_err = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection));

        assert!(matches!(
            repo_err,
            UserPersistenceError::Connection { .. }
        ));
    }

    #[rstest]
    fn unique_violation_on_insert_maps_to_duplicate_email() {
        let repo_err = map_insert_error(
            database_error(DatabaseErrorKind::UniqueViolation),
            "ada@example.com",
        );

        assert!(matches!(
            &repo_err,
            UserPersistenceError::DuplicateEmail { email } if email == "ada@example.com"
        ));
    }

    #[rstest]
    fn other_insert_failures_keep_the_generic_mapping() {
        let repo_err = map_insert_error(
            database_error(DatabaseErrorKind::NotNullViolation),
            "ada@example.com",
        );

        assert!(matches!(repo_err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn rows_convert_to_domain_users() {
        let row = UserRow {
            id: 7,
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
        };

        let user = row_to_user(row);

        assert_eq!(user.id, UserId::new(7));
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada@example.com");
    }
}
