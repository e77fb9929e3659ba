//! Model used to load and save pokemons in the database.

use serde::{Deserialize, Serialize};
use utoipa::{ToResponse, ToSchema};

/// Row type of the `pokemons` table, in column order (`id`, `name`, `type`).
pub type PokemonRow = (i32, String, String);

#[cfg_attr(
    doc,
    doc = r"
        Pokemon entity model.

        Loaded from the `pokemons` table, whose primary key is [`id`](Pokemon::id). Rows are read
        as a [`PokemonRow`] and converted through [`From`].
    "
)]
#[cfg_attr(not(doc), doc = "Information about a Pokemon in the Pokedex")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, ToResponse)]
#[serde(deny_unknown_fields)]
#[response(
    description = "Pokemon information",
    example = json!({
        "id": 1,
        "name": "Bulbasaur",
        "type": "grass"
    }),
)]
pub struct Pokemon {
    /// Unique id of this Pokemon in the database
    pub id: i32,

    /// Pokemon name
    pub name: String,

    /// Pokemon type
    #[serde(rename = "type")]
    #[schema(example = "grass")]
    pub pokemon_type: String,
}

impl Pokemon {
    /// Creates a new [`Pokemon`].
    pub fn new<N, T>(id: i32, name: N, pokemon_type: T) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self { id, name: name.into(), pokemon_type: pokemon_type.into() }
    }

    /// Returns the values to bind to the `insert` statement, in column order.
    pub fn bind_values(&self) -> (i32, &str, &str) {
        (self.id, self.name.as_str(), self.pokemon_type.as_str())
    }
}

impl From<PokemonRow> for Pokemon {
    fn from((id, name, pokemon_type): PokemonRow) -> Self {
        Self { id, name, pokemon_type }
    }
}

/// Returns the pokemons inserted in the database when it is initialized.
///
/// | id  | name         | type    |
/// |-----|--------------|---------|
/// | `1` | `Bulbasaur`  | `grass` |
/// | `2` | `Charmander` | `fire`  |
/// | `3` | `Squirtle`   | `water` |
pub fn seed_pokemons() -> Vec<Pokemon> {
    vec![
        Pokemon::new(1, "Bulbasaur", "grass"),
        Pokemon::new(2, "Charmander", "fire"),
        Pokemon::new(3, "Squirtle", "water"),
    ]
}
