//! Services implementing the database operations used by the endpoints.

pub mod pokemon;
