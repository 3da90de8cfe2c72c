//! Trivia server entry-point: loads settings, prepares the question store and
//! serves the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use trivia_backend::inbound::http::health::HealthState;
use trivia_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use trivia_backend::settings::TriviaSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        TriviaSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr().wrap_err("invalid bind address")?;
    let mut config = ServerConfig::new(bind_addr).with_quiz_seed(settings.quiz_seed);

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations {
            run_migrations(database_url)
                .await
                .wrap_err("failed to apply migrations")?;
        }
        let pool_config = PoolConfig::new(database_url).with_max_size(settings.max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        info!(max_connections = settings.max_connections(), "database pool ready");
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start server")?;
    server.await.wrap_err("server terminated with an error")
}
