//! JSON envelope wrapping every response returned by the service endpoints.
//!
//! | Outcome | JSON                                                  |
//! |---------|-------------------------------------------------------|
//! | Success | `{"status": "OK", "data": ...}`                       |
//! | Failure | `{"status": "exception", "error": "...", "details": ...}` |
//!
//! The `details` field is only present when running in a [`Development`](ServiceEnv::Development)
//! environment.

use serde::{Deserialize, Serialize};

use crate::helpers::error::{chained_error_message, recursive_error_message};
use crate::service_env::ServiceEnv;
use crate::Error;

/// Response envelope returned by the service endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum AppResponse<T> {
    /// Call succeeded.
    #[serde(rename = "OK")]
    Ok {
        /// Result of the call (may be `null`)
        data: T,
    },

    /// Call failed.
    #[serde(rename = "exception")]
    Exception {
        /// Error message, including the messages of all its causes
        error: String,

        /// Complete error description (only when server is running in development)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl<T> AppResponse<T> {
    /// Wraps successful `data`.
    pub fn ok(data: T) -> Self {
        Self::Ok { data }
    }

    /// Returns `true` if this is an [`Ok`](AppResponse::Ok) response.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

impl<T> From<&Error> for AppResponse<T> {
    /// Creates an [`Exception`](AppResponse::Exception) response for an internal [`Error`].
    ///
    /// The `error` field joins the messages of the whole error chain, down to the root cause
    /// (for example, `query error: failed to fetch pokemon with id 1: <driver error>`).
    fn from(value: &Error) -> Self {
        let error = chained_error_message(value);
        let details = if ServiceEnv::current().is_development() {
            Some(recursive_error_message(value))
        } else {
            None
        };

        Self::Exception { error, details }
    }
}
