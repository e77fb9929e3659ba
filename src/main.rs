//! Pokedex Cassandra test server.
//!
//! This binary loads the configuration, opens the shared database session, registers the service
//! endpoints and starts handling HTTP connections. All the actual implementation is in the
//! [lib crate](pokedex_cassandra).
//!
//! The configuration file path can be passed as the first command-line argument (see
//! [`config_file_path`]). For more information, see `README.md`.

use std::env;

use actix_web::HttpServer;
use anyhow::Context;
use env_logger::Env;
use log::info;
use pokedex_cassandra::api::lifecycle::{ShutdownTrigger, EXIT_DELAY};
use pokedex_cassandra::config::{config_file_path, AppConfig};
use pokedex_cassandra::db::connect;
use pokedex_cassandra::helpers::env::load_optional_dotenv;
use pokedex_cassandra::pokedex_app;
use pokedex_cassandra::service_env::ServiceEnv;
use pokedex_cassandra::services::pokemon;
use rustc_version_runtime::version;

/// Main program body.
///
/// Takes care of setting up the Pokedex app, then serves its endpoints over HTTP until the
/// `exit` endpoint is called (or the process is interrupted).
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_file_loaded = load_optional_dotenv()?;

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if !env_file_loaded {
        info!(".env file not found; skipped");
    }

    let config_file = config_file_path(env::args().skip(1));
    info!("Configuration file: {}", config_file.display());
    let config = AppConfig::load(&config_file)?;

    info!("Opening database session");
    let session = connect(&config.db.connection)
        .await
        .with_context(|| format!("failed to connect to {}", config.db.connection.known_node()))?;
    let service = pokemon::Service::new(session, config.db.statements.clone());
    let shutdown = ShutdownTrigger::new();

    info!("Starting Pokedex HTTP server");
    let app_shutdown = shutdown.clone();
    let server = HttpServer::new(move || pokedex_app!(service, app_shutdown))
        .bind((config.server.host.as_str(), config.server.port))
        .with_context(|| format!("failed to bind to port {}", config.server.port))?
        .run();
    actix_web::rt::spawn(shutdown.stop_server_on_exit(server.handle(), EXIT_DELAY));

    info!(
        "WEB server is up in {}! http://{}:{}/",
        ServiceEnv::current(),
        config.server.host,
        config.server.port
    );
    info!("Rust version used: {}", version());

    server.await?;
    info!("WEB server is DOWN. Good bye!");

    Ok(())
}
