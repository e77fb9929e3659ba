//! Endpoints used to manage the life cycle of the test service.
//!
//! # Endpoints
//!
//! | HTTP method | Endpoint          | Usage                                                  | See                   |
//! |-------------|-------------------|--------------------------------------------------------|-----------------------|
//! | `GET`       | `/LifeCycle/init` | Creates the database schema and inserts seed pokemons  | [`init`](struct@init) |
//! | `GET`       | `/LifeCycle/exit` | Shuts the server down after a short delay              | [`exit`](struct@exit) |

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{get, HttpResponse};
use log::{info, trace};
use tokio::sync::Notify;

use crate::api::envelope::AppResponse;
use crate::api::HttpResult;
use crate::services::pokemon;

/// Message returned by the [`exit`](struct@exit) endpoint.
pub const EXIT_MESSAGE: &str = "Testing web server shutting down.";

/// Delay between the [`exit`](struct@exit) call and the actual server shutdown.
///
/// Leaves time for the response to reach the caller.
pub const EXIT_DELAY: Duration = Duration::from_secs(3);

/// Signal used by the [`exit`](struct@exit) endpoint to ask for a server shutdown.
///
/// Clones share the same signal. The task running [`stop_server_on_exit`](ShutdownTrigger::stop_server_on_exit)
/// waits for it and stops the server.
#[derive(Debug, Clone, Default)]
pub struct ShutdownTrigger {
    notify: Arc<Notify>,
}

impl ShutdownTrigger {
    /// Creates a new trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a shutdown. Can be called before anyone waits for it.
    pub fn trigger(&self) {
        self.notify.notify_one();
    }

    /// Waits until [`trigger`](ShutdownTrigger::trigger) is called.
    pub async fn triggered(&self) {
        self.notify.notified().await;
    }

    /// Waits for a shutdown request, then gracefully stops the server after `delay`.
    pub async fn stop_server_on_exit(self, server: ServerHandle, delay: Duration) {
        self.triggered().await;

        info!("Exit requested; stopping server in {:?}", delay);
        tokio::time::sleep(delay).await;
        server.stop(true).await;
    }
}

/// Allows registration of the life cycle endpoints.
///
/// Called automatically from [`api::configure`](crate::api::configure).
pub fn configure(shutdown: &ShutdownTrigger) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Registering shutdown trigger app data");
        config.app_data(Data::new(shutdown.clone()));

        trace!("Adding life cycle endpoints");
        config.service(init).service(exit);
    }
}

#[cfg_attr(
    doc,
    doc = r"
        Endpoint initializing the database schema and content.

        Registered as `GET /LifeCycle/init`. Runs the `create-keyspace`, `use-keyspace` and
        `create-table` statements, then inserts the seed pokemons. Returns `null` data.
    "
)]
#[cfg_attr(not(doc), doc = "Initializes the database")]
#[utoipa::path(
    context_path = "/LifeCycle",
    responses((status = OK, description = "Envelope with null data, or exception envelope")),
)]
#[get("/init")]
pub async fn init(service: Data<pokemon::Service>) -> HttpResult {
    info!("Initializing database");
    service
        .get_ref()
        .init_database()
        .await
        .map_err(|err| crate::Error::Init { source: Box::new(err) })?;

    Ok(HttpResponse::Ok().json(AppResponse::ok(())))
}

#[cfg_attr(
    doc,
    doc = r"
        Endpoint terminating the server.

        Registered as `GET /LifeCycle/exit`. Returns [`EXIT_MESSAGE`] as plain text, then the
        server stops after [`EXIT_DELAY`]. The database session is closed when the app is dropped.
    "
)]
#[cfg_attr(not(doc), doc = "Shuts the server down")]
#[utoipa::path(
    context_path = "/LifeCycle",
    responses((status = OK, description = "Plain-text message; server is shutting down")),
)]
#[get("/exit")]
pub async fn exit(shutdown: Data<ShutdownTrigger>) -> HttpResponse {
    shutdown.get_ref().trigger();

    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(EXIT_MESSAGE)
}
