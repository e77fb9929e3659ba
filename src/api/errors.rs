//! Types and functions to implement proper error handling in the service endpoints.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{debug, warn};

use crate::api::envelope::AppResponse;
use crate::Error;

impl ResponseError for Error {
    /// Returns the [`StatusCode`] to use for this [`Error`].
    ///
    /// Always [`OK`](StatusCode::OK): failures are reported by the exception [`AppResponse`] in
    /// the body, so test clients only need to look at the envelope's `status`.
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    /// Returns an exception [`AppResponse`] describing this [`Error`].
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Error::Input { .. } | Error::NotFound { .. } => debug!("Request rejected: {}", self),
            _ => warn!("Request failed: {}", self),
        }

        HttpResponse::build(self.status_code()).json(AppResponse::<()>::from(self))
    }
}

/// Generic error handler for `actix_web`'s various configs.
///
/// This handler accepts any type of error that can be turned into our [`Error`] type, then turns
/// that into an [`actix_web::error::Error`]. Because [`ResponseError`] is implemented for our
/// [`Error`] type, errors that occur while extracting request data (like a missing query
/// parameter) produce the same envelope, with the same `200 OK` status, as errors returned
/// by handlers.
///
/// # Examples
///
/// ```no_run
/// use actix_web::web::QueryConfig;
/// use pokedex_cassandra::api::errors::actix_error_handler;
///
/// let query_config = QueryConfig::default().error_handler(actix_error_handler);
/// ```
pub fn actix_error_handler<E, R>(err: E, _req: &R) -> actix_web::error::Error
where
    E: Into<Error>,
{
    Into::<Error>::into(err).into()
}
