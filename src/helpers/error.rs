//! Helpers related to generation of error messages.

/// Generates a recursive error message for an [`Error`].
///
/// Each error in the [`source`] chain is written on its own line, starting with the error
/// itself. Used to fill the `details` of exception envelopes in development.
///
/// [`Error`]: std::error::Error
/// [`source`]: std::error::Error::source
pub fn recursive_error_message<E>(error: &E) -> String
where
    E: std::error::Error,
{
    joined_error_messages(error, "\ncaused by: ")
}

/// Generates a one-line error message for an [`Error`], including all of its [`source`]s.
///
/// Messages are joined with `": "`, so the root cause always ends the message
/// (for example, `could not initialize database: query error: ...: <driver error>`).
///
/// [`Error`]: std::error::Error
/// [`source`]: std::error::Error::source
pub fn chained_error_message<E>(error: &E) -> String
where
    E: std::error::Error,
{
    joined_error_messages(error, ": ")
}

fn joined_error_messages<E>(error: &E, separator: &str) -> String
where
    E: std::error::Error,
{
    std::iter::successors(Some(error as &dyn std::error::Error), |current| current.source())
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
