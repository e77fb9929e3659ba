//! Service used to load and save pokemons. Used by the Pokedex test service endpoints.

use std::sync::Arc;

use log::{debug, trace};
use scylla::statement::prepared::PreparedStatement;

use crate::config::statements::{
    CREATE_KEYSPACE, CREATE_TABLE, DELETE, INSERT, PING, SELECT, UPDATE, USE_KEYSPACE,
};
use crate::config::Statements;
use crate::db::Session;
use crate::error::QueryContext;
use crate::models::pokemon::{seed_pokemons, Pokemon, PokemonRow};

/// Service implementation for [`Pokemon`] entities.
///
/// Each operation runs one of the [`Statements`] configured by name against the shared
/// database [`Session`]. Statements that take parameters are prepared on every call.
#[derive(Clone)]
pub struct Service {
    session: Session,
    statements: Arc<Statements>,
}

impl Service {
    /// Creates a new pokemon service using the provided [`Session`] and [`Statements`].
    pub fn new(session: Session, statements: Statements) -> Self {
        Self { session, statements: Arc::new(statements) }
    }

    /// Returns the release version of the Cassandra node we're connected to.
    pub async fn ping(&self) -> crate::Result<String> {
        let statement = self.statements.get(PING)?;

        let version = self
            .session
            .query_unpaged(statement, ())
            .await
            .with_query_context(|| "failed to query database version")?
            .into_rows_result()
            .with_query_context(|| "database version query returned no rows")?
            .maybe_first_row::<(String,)>()
            .with_query_context(|| "failed to read database version")?;

        version
            .map(|(release_version,)| release_version)
            .ok_or(crate::Error::NoVersion)
    }

    /// Returns the [`Pokemon`] with the given ID from the database, if it exists.
    pub async fn get_pokemon(&self, pokemon_id: i32) -> crate::Result<Option<Pokemon>> {
        let prepared = self.prepare(SELECT).await?;

        let row = self
            .session
            .execute_unpaged(&prepared, (pokemon_id,))
            .await
            .with_query_context(|| format!("failed to fetch pokemon with id {}", pokemon_id))?
            .into_rows_result()
            .with_query_context(|| format!("failed to fetch pokemon with id {}", pokemon_id))?
            .maybe_first_row::<PokemonRow>()
            .with_query_context(|| format!("failed to read pokemon with id {}", pokemon_id))?;

        Ok(row.map(Into::into))
    }

    /// Adds a [`Pokemon`] to the database.
    ///
    /// Cassandra inserts are upserts: if a pokemon with the same ID exists, it is overwritten.
    pub async fn insert_pokemon(&self, pokemon: &Pokemon) -> crate::Result<()> {
        let prepared = self.prepare(INSERT).await?;

        self.session
            .execute_unpaged(&prepared, pokemon.bind_values())
            .await
            .with_query_context(|| format!("failed to insert pokemon {}", pokemon.id))?;

        Ok(())
    }

    /// Changes the name of the pokemon with the given ID.
    pub async fn update_pokemon_name(&self, pokemon_id: i32, name: &str) -> crate::Result<()> {
        let prepared = self.prepare(UPDATE).await?;

        self.session
            .execute_unpaged(&prepared, (name, pokemon_id))
            .await
            .with_query_context(|| format!("failed to update pokemon {}", pokemon_id))?;

        Ok(())
    }

    /// Deletes the pokemon with the given ID from the database.
    ///
    /// Deleting a pokemon that does not exist is not an error.
    pub async fn delete_pokemon(&self, pokemon_id: i32) -> crate::Result<()> {
        let prepared = self.prepare(DELETE).await?;

        self.session
            .execute_unpaged(&prepared, (pokemon_id,))
            .await
            .with_query_context(|| format!("failed to delete pokemon {}", pokemon_id))?;

        Ok(())
    }

    /// Creates the keyspace and `pokemons` table, then inserts the [seed pokemons](seed_pokemons).
    ///
    /// All schema statements are expected to be idempotent (`IF NOT EXISTS`), so this can be
    /// called more than once.
    pub async fn init_database(&self) -> crate::Result<()> {
        for name in [CREATE_KEYSPACE, USE_KEYSPACE, CREATE_TABLE] {
            let statement = self.statements.get(name)?;

            debug!("Running `{}` statement", name);
            self.session
                .query_unpaged(statement, ())
                .await
                .with_query_context(|| format!("failed to run `{}` statement", name))?;
        }

        let prepared = self.prepare(INSERT).await?;
        for pokemon in seed_pokemons() {
            trace!("Inserting seed pokemon {:?}", pokemon);
            self.session
                .execute_unpaged(&prepared, pokemon.bind_values())
                .await
                .with_query_context(|| format!("failed to insert seed pokemon {}", pokemon.id))?;
        }

        Ok(())
    }

    /// Prepares the statement with the given name.
    async fn prepare(&self, name: &str) -> crate::Result<PreparedStatement> {
        let statement = self.statements.get(name)?;

        self.session
            .prepare(statement)
            .await
            .with_query_context(|| format!("failed to prepare `{}` statement", name))
    }
}
