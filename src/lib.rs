//! Pokedex test service backed by Cassandra.
//!
//! This crate implements a small web service that runs pre-configured CQL statements against a
//! Cassandra database and returns the results as JSON. It is used as a target by the integration
//! test harness found in the `tests` directory, which starts the packaged server binary, waits
//! for the database and drives the HTTP endpoints.
//!
//! For more information, see `README.md`.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod helpers;
pub mod models;
pub mod service_env;
pub mod services;

use actix_web::web::ServiceConfig;
use log::trace;

pub use crate::error::Error;
pub use crate::error::Result;
use crate::api::lifecycle::ShutdownTrigger;
use crate::services::pokemon;

/// Creates an [`App`](actix_web::App) with all service endpoints registered.
///
/// This is a macro because the type returned by [`App::wrap`](actix_web::App::wrap) cannot be
/// named easily. It takes a [`pokemon::Service`](crate::services::pokemon::Service) and a
/// [`ShutdownTrigger`](crate::api::lifecycle::ShutdownTrigger).
///
/// # Examples
///
/// ```no_run
/// use actix_web::HttpServer;
/// use pokedex_cassandra::api::lifecycle::ShutdownTrigger;
/// use pokedex_cassandra::pokedex_app;
/// use pokedex_cassandra::services::pokemon;
///
/// # fn example(service: pokemon::Service) -> std::io::Result<()> {
/// let shutdown = ShutdownTrigger::new();
/// let server = HttpServer::new(move || pokedex_app!(service, shutdown))
///     .bind(("127.0.0.1", 8080))?
///     .run();
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! pokedex_app {
    ($service:expr, $shutdown:expr) => {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(
                actix_web::web::QueryConfig::default()
                    .error_handler($crate::api::errors::actix_error_handler),
            )
            .configure($crate::configure_app(&$service, &$shutdown))
    };
}

/// Registers the service endpoints and the API documentation endpoints.
///
/// Called from [`pokedex_app!`]; can also be used directly with [`App::configure`](actix_web::App::configure).
pub fn configure_app<'a>(
    service: &'a pokemon::Service,
    shutdown: &'a ShutdownTrigger,
) -> impl FnOnce(&mut ServiceConfig) + 'a {
    move |config| {
        trace!("Configuring Pokedex app");
        config
            .configure(api::configure(service, shutdown))
            .configure(api::doc::configure);
    }
}
