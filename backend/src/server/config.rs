//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) database_url: Option<String>,
}

impl ServerConfig {
    /// Construct a configuration binding the given address with no database.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            database_url: None,
        }
    }

    /// Resolve configuration from the environment.
    ///
    /// `BIND_ADDR` defaults to `0.0.0.0:8080`; `DATABASE_URL` is optional
    /// and selects the PostgreSQL store when present.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".into())
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid BIND_ADDR: {err}")))?;

        let mut config = Self::new(bind_addr);
        if let Ok(url) = env::var("DATABASE_URL") {
            config = config.with_database_url(url);
        }
        Ok(config)
    }

    /// Attach a database connection string for the persistence adapter.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_has_no_database() {
        let addr: SocketAddr = "127.0.0.1:9000".parse().expect("valid address");
        let config = ServerConfig::new(addr);

        assert_eq!(config.bind_addr(), addr);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn with_database_url_records_the_connection_string() {
        let addr: SocketAddr = "127.0.0.1:9000".parse().expect("valid address");
        let config = ServerConfig::new(addr).with_database_url("postgres://localhost/roster");

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/roster")
        );
    }
}
