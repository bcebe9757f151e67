//! Persistence adapters implementing the domain repository port.
//!
//! The PostgreSQL adapter uses Diesel with async support through
//! `diesel-async` and `bb8` pooling. Row structs and schema definitions are
//! internal; only domain types cross this module's boundary. The in-memory
//! adapter implements the same port for database-less deployments and for
//! tests.

mod diesel_user_repository;
mod in_memory_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
