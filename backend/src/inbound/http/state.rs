//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the domain port and remain testable without I/O. The repository handle
//! is constructed once at process start and passed in explicitly; there is
//! no runtime service lookup.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Durable storage for user records.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state around a user repository handle.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
