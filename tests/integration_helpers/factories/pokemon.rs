use pokedex_cassandra::models::pokemon::{seed_pokemons, Pokemon};

pub fn build_pikachu() -> Pokemon {
    Pokemon::new(100, "Pikachu", "electric")
}

pub fn seed_pokemon(id: i32) -> Pokemon {
    seed_pokemons()
        .into_iter()
        .find(|pokemon| pokemon.id == id)
        .unwrap_or_else(|| panic!("no seed pokemon with id {}", id))
}
