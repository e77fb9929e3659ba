//! [`Error`] type definition for our app.

use std::time::Duration;

use actix_web::error::QueryPayloadError;
use scylla::errors::{
    ExecutionError, IntoRowsResultError, MaybeFirstRowError, NewSessionError, PrepareError,
};

/// [`Result`](core::result::Result) type for our crate.
///
/// Uses our crate's [`Error`] type automatically.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type used throughout this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error that occurred while loading the app configuration.
    #[error("configuration error: {context}")]
    Config {
        /// Configuration error context (usually the config file path).
        context: String,

        /// Source of the configuration error.
        source: ::config::ConfigError,
    },

    /// Error caused by invalid or missing query parameters.
    #[error("invalid query parameters")]
    Input {
        /// Source of the input error.
        #[from]
        source: QueryPayloadError,
    },

    /// Error that occurred while opening a session to the Cassandra cluster.
    #[error("could not connect to database")]
    Connection {
        /// Source of the connection error.
        #[from]
        source: NewSessionError,
    },

    /// A CQL statement was requested by name but is missing from the configuration.
    #[error("statement `{name}` is not configured")]
    Statement {
        /// Name of the missing statement.
        name: String,
    },

    /// Error that occurred while preparing or executing a CQL statement, or reading its result.
    #[error("query error: {context}")]
    Query {
        /// Query error context.
        ///
        /// Used by the code (via [`QueryContext::with_query_context`]) to provide some context
        /// as to the type of query that caused the error.
        context: String,

        /// Source of the query error.
        source: QueryError,
    },

    /// The version query did not return any row.
    #[error("no Cassandra version was returned")]
    NoVersion,

    /// No Pokemon exists with the requested id.
    #[error("no pokemon found with id {id}")]
    NotFound {
        /// Id that was looked up.
        id: i32,
    },

    /// Error that occurred while creating the database schema or inserting the seed pokemons.
    #[error("could not initialize database")]
    Init {
        /// Source of the initialization error.
        source: Box<Error>,
    },

    /// The database did not accept connections before the readiness timeout elapsed.
    #[error("database is not ready within {} seconds", timeout.as_secs())]
    DatabaseNotReady {
        /// How long we waited for the database.
        timeout: Duration,
    },
}

/// Errors that can occur at the various stages of running a CQL statement.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Statement could not be prepared.
    #[error(transparent)]
    Prepare(#[from] PrepareError),

    /// Statement execution failed.
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Statement result did not contain rows.
    #[error(transparent)]
    Rows(#[from] IntoRowsResultError),

    /// Result row could not be deserialized.
    #[error(transparent)]
    Row(#[from] MaybeFirstRowError),
}

/// Helper trait to provide context for [`Config`](Error::Config) errors.
pub trait ConfigContext {
    /// Type of output returned by [`with_config_context`](ConfigContext::with_config_context).
    type Output;

    /// Provides context about the configuration that failed to load.
    fn with_config_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl ConfigContext for ::config::ConfigError {
    type Output = Error;

    fn with_config_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        Error::Config { context: (context)().into(), source: self }
    }
}

impl<T> ConfigContext for core::result::Result<T, ::config::ConfigError> {
    type Output = Result<T>;

    fn with_config_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.with_config_context(context))
    }
}

/// Helper trait to provide context for [`Query`](Error::Query) errors.
pub trait QueryContext {
    /// Type of output returned by [`with_query_context`](QueryContext::with_query_context).
    type Output;

    /// Provides context about the query performed when the error occurred.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pokedex_cassandra::error::QueryContext;
    /// use scylla::client::session::Session;
    ///
    /// # async fn example(session: &Session, pokemon_id: i32) -> pokedex_cassandra::Result<()> {
    /// let prepared = session
    ///     .prepare("DELETE FROM pokedex.pokemons WHERE id = ?")
    ///     .await
    ///     .with_query_context(|| "failed to prepare delete statement")?;
    /// session
    ///     .execute_unpaged(&prepared, (pokemon_id,))
    ///     .await
    ///     .with_query_context(|| format!("failed to delete pokemon {}", pokemon_id))?;
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn with_query_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<E> QueryContext for E
where
    E: Into<QueryError>,
{
    type Output = Error;

    fn with_query_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        Error::Query { context: (context)().into(), source: self.into() }
    }
}

impl<T, E> QueryContext for core::result::Result<T, E>
where
    E: QueryContext<Output = Error>,
{
    type Output = Result<T>;

    fn with_query_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.with_query_context(context))
    }
}
