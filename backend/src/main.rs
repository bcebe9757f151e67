//! Service entry point: logging, configuration, and server bootstrap.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::health::HealthState;
use server::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    info!(addr = %config.bind_addr(), "starting user directory service");

    let health_state = web::Data::new(HealthState::new());
    let srv = server::create_server(health_state, config).await?;
    srv.await
}
