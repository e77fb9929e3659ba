//! Types and functions used to implement the Pokedex test service endpoints.

pub mod cassandra;
pub mod doc;
pub mod envelope;
pub mod errors;
pub mod lifecycle;

use actix_web::web;
use actix_web::web::{Data, ServiceConfig};
use actix_web::HttpResponse;
use log::trace;

use crate::api::lifecycle::ShutdownTrigger;
use crate::services::pokemon;

/// [`Result`](crate::Result) definition used to return [`HttpResponse`]s from endpoints.
///
/// If an [`Error`](crate::Error) is returned, it is converted to an exception envelope by the
/// error handling code (see [`ResponseError`](actix_web::ResponseError) impl in [`errors`]).
pub type HttpResult = crate::Result<HttpResponse>;

/// Registers the `/Cassandra` and `/LifeCycle` services.
///
/// Both share the same [`pokemon::Service`], and thus the same database session.
/// Called automatically from [`configure_app`](crate::configure_app).
pub fn configure<'a>(
    service: &'a pokemon::Service,
    shutdown: &'a ShutdownTrigger,
) -> impl FnOnce(&mut ServiceConfig) + 'a {
    move |config| {
        trace!("Registering Pokemon service app data");
        config.app_data(Data::new(service.clone()));

        trace!("Adding endpoints for /Cassandra and /LifeCycle");
        config
            .service(web::scope("/Cassandra").configure(cassandra::configure))
            .service(web::scope("/LifeCycle").configure(lifecycle::configure(shutdown)));
    }
}
