//! Models used to represent entities stored in the Pokedex database.

pub mod pokemon;
