//! Implementation of the Cassandra service endpoints.
//!
//! # Endpoints
//!
//! | HTTP method | Endpoint            | Query parameters     | Usage                                      | See                       |
//! |-------------|---------------------|----------------------|--------------------------------------------|---------------------------|
//! | `GET`       | `/Cassandra/ping`   |                      | Returns the database release version       | [`ping`](struct@ping)     |
//! | `GET`       | `/Cassandra/select` | `id`                 | Returns one pokemon; fails if missing      | [`select`](struct@select) |
//! | `GET`       | `/Cassandra/verify` | `id`                 | Returns one pokemon, or `null` if missing  | [`verify`](struct@verify) |
//! | `GET`       | `/Cassandra/insert` | `id`, `name`, `type` | Inserts a pokemon                          | [`insert`](struct@insert) |
//! | `GET`       | `/Cassandra/update` | `id`, `name`         | Changes the name of a pokemon              | [`update`](struct@update) |
//! | `GET`       | `/Cassandra/delete` | `id`                 | Deletes a pokemon                          | [`delete`](struct@delete) |
//!
//! Every endpoint returns an [`AppResponse`] envelope.

use actix_web::web::{Data, Query, ServiceConfig};
use actix_web::{get, HttpResponse};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::api::envelope::AppResponse;
use crate::api::HttpResult;
use crate::models::pokemon::Pokemon;
use crate::services::pokemon;
use crate::Error;

/// Allows registration of all Cassandra service endpoints.
///
/// See [module documentation](self) for the entire list of supported endpoints.
/// Called automatically from [`api::configure`](crate::api::configure).
pub fn configure(config: &mut ServiceConfig) {
    trace!("Adding Cassandra service endpoints");
    config
        .service(ping)
        .service(select)
        .service(verify)
        .service(insert)
        .service(update)
        .service(delete);
}

/// Query parameters for endpoints that only need a Pokemon id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdParams {
    /// id of Pokemon in database
    pub id: i32,
}

/// Query parameters for the [`insert`](struct@insert) endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InsertParams {
    /// id of the new Pokemon
    pub id: i32,

    /// Pokemon name
    pub name: String,

    /// Pokemon type
    #[serde(rename = "type")]
    pub pokemon_type: String,
}

/// Query parameters for the [`update`](struct@update) endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateParams {
    /// id of Pokemon to update
    pub id: i32,

    /// New Pokemon name (can also be passed as `value`)
    #[serde(alias = "value")]
    pub name: String,
}

impl From<InsertParams> for Pokemon {
    fn from(value: InsertParams) -> Self {
        Pokemon::new(value.id, value.name, value.pokemon_type)
    }
}

/// Returns a successful envelope containing `data`.
fn ok<T>(data: T) -> HttpResult
where
    T: Serialize,
{
    Ok(HttpResponse::Ok().json(AppResponse::ok(data)))
}

#[cfg_attr(
    doc,
    doc = r"
        Endpoint returning the release version of the Cassandra node.

        Registered as `GET /Cassandra/ping`. Runs the `ping` statement; fails if it returns no row.
    "
)]
#[cfg_attr(not(doc), doc = "Returns the Cassandra release version")]
#[utoipa::path(
    context_path = "/Cassandra",
    responses(
        (status = OK, description = "Envelope containing the release version, or exception envelope"),
    ),
)]
#[get("/ping")]
pub async fn ping(service: Data<pokemon::Service>) -> HttpResult {
    let version = service.get_ref().ping().await?;
    debug!("Cassandra version: {}", version);

    ok(version)
}

#[cfg_attr(
    doc,
    doc = r"
        Endpoint returning one pokemon from the database.

        Registered as `GET /Cassandra/select`. If no pokemon has the given id, an exception envelope
        is returned (see [`verify`](struct@verify) for a variant that accepts missing rows).
    "
)]
#[cfg_attr(not(doc), doc = "Returns information about a Pokemon")]
#[utoipa::path(
    context_path = "/Cassandra",
    params(IdParams),
    responses(
        (status = OK, description = "Envelope containing the Pokemon, or exception envelope"),
    ),
)]
#[get("/select")]
pub async fn select(params: Query<IdParams>, service: Data<pokemon::Service>) -> HttpResult {
    let pokemon = service
        .get_ref()
        .get_pokemon(params.id)
        .await?
        .ok_or(Error::NotFound { id: params.id })?;

    ok(pokemon)
}

#[cfg_attr(
    doc,
    doc = r"
        Endpoint verifying the content of one pokemon row.

        Registered as `GET /Cassandra/verify`. Same as [`select`](struct@select), except that a
        missing row is a valid response, returned as `null` data.
    "
)]
#[cfg_attr(not(doc), doc = "Returns information about a Pokemon, or null")]
#[utoipa::path(
    context_path = "/Cassandra",
    params(IdParams),
    responses(
        (status = OK, description = "Envelope containing the Pokemon or null, or exception envelope"),
    ),
)]
#[get("/verify")]
pub async fn verify(params: Query<IdParams>, service: Data<pokemon::Service>) -> HttpResult {
    ok(service.get_ref().get_pokemon(params.id).await?)
}

#[cfg_attr(not(doc), doc = "Inserts a Pokemon")]
#[cfg_attr(doc, doc = "Endpoint inserting a pokemon. Registered as `GET /Cassandra/insert`.")]
#[utoipa::path(
    context_path = "/Cassandra",
    params(InsertParams),
    responses(
        (status = OK, description = "Envelope with null data, or exception envelope"),
    ),
)]
#[get("/insert")]
pub async fn insert(params: Query<InsertParams>, service: Data<pokemon::Service>) -> HttpResult {
    let pokemon: Pokemon = params.into_inner().into();
    service.get_ref().insert_pokemon(&pokemon).await?;

    ok(())
}

#[cfg_attr(not(doc), doc = "Updates the name of a Pokemon")]
#[cfg_attr(doc, doc = "Endpoint renaming a pokemon. Registered as `GET /Cassandra/update`.")]
#[utoipa::path(
    context_path = "/Cassandra",
    params(UpdateParams),
    responses(
        (status = OK, description = "Envelope with null data, or exception envelope"),
    ),
)]
#[get("/update")]
pub async fn update(params: Query<UpdateParams>, service: Data<pokemon::Service>) -> HttpResult {
    service
        .get_ref()
        .update_pokemon_name(params.id, &params.name)
        .await?;

    ok(())
}

#[cfg_attr(not(doc), doc = "Deletes a Pokemon")]
#[cfg_attr(doc, doc = "Endpoint deleting a pokemon. Registered as `GET /Cassandra/delete`.")]
#[utoipa::path(
    context_path = "/Cassandra",
    params(IdParams),
    responses(
        (status = OK, description = "Envelope with null data, or exception envelope"),
    ),
)]
#[get("/delete")]
pub async fn delete(params: Query<IdParams>, service: Data<pokemon::Service>) -> HttpResult {
    service.get_ref().delete_pokemon(params.id).await?;

    ok(())
}
