//! Module containing various helper functions used throughout the crate's code.

pub mod env;
pub mod error;
