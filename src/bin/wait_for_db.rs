//! Waits until the Cassandra database of the Pokedex test service accepts connections.
//!
//! Useful in scripts to make sure the database container is ready before starting the server
//! or running the integration tests. Reads the same configuration file as the server (see
//! [`config_file_path`]). The wait timeout, in seconds, can be set through the
//! `POKEDEX_DB_TIMEOUT` environment variable.

use std::env;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::info;
use pokedex_cassandra::config::{config_file_path, AppConfig};
use pokedex_cassandra::db::{wait_for_database, DEFAULT_READINESS_TIMEOUT};
use pokedex_cassandra::helpers::env::load_optional_dotenv;
use simple_logger::SimpleLogger;

/// Main program body.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .with_context(|| "failed to initialize logging facility")?;

    info!("Loading environment variables");
    load_optional_dotenv()
        .with_context(|| "failed to load `.env` file containing environment variables")?;

    let config_file = config_file_path(env::args().skip(1));
    let config = AppConfig::load(&config_file)?;
    let timeout = get_timeout()?;

    info!(
        "Waiting up to {}s for database at {}",
        timeout.as_secs(),
        config.db.connection.known_node()
    );
    let start_time = Instant::now();
    wait_for_database(&config.db.connection, timeout).await?;

    info!("Database ready in {:.4?}s.", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Returns how long to wait for the database.
///
/// Defaults to [`DEFAULT_READINESS_TIMEOUT`] unless `POKEDEX_DB_TIMEOUT` is set.
fn get_timeout() -> anyhow::Result<Duration> {
    env::var("POKEDEX_DB_TIMEOUT")
        .map(|secs| secs.parse::<u64>().map(Duration::from_secs))
        .unwrap_or(Ok(DEFAULT_READINESS_TIMEOUT))
        .with_context(|| "failed to parse content of POKEDEX_DB_TIMEOUT environment variable")
}
