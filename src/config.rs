//! Configuration of the Pokedex test service.
//!
//! Configuration is read from a YAML file through the [`config`] crate. Any value can then be
//! overridden through environment variables prefixed with `POKEDEX__`, using `__` to separate
//! keys; for example, `POKEDEX__SERVER__PORT=9090` overrides `server.port`.
//!
//! # Example file
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 8080
//! db:
//!   connection:
//!     host: 127.0.0.1
//!     port: 9042
//!   statements:
//!     ping: "SELECT release_version FROM system.local"
//! ```

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::ConfigContext;
use crate::Error;

/// Path of the configuration file used when none is specified (see [`config_file_path`]).
pub const DEFAULT_CONFIG_FILE: &str = "resources/test.yaml";

/// Environment variable that can contain the path of the configuration file.
pub const CONFIG_FILE_ENV_VAR: &str = "POKEDEX_CONFIG";

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "POKEDEX";

/// Names of the statements that must be present in the `db.statements` section.
pub mod statements {
    /// Returns the database version.
    pub const PING: &str = "ping";
    /// Selects a pokemon by id.
    pub const SELECT: &str = "select";
    /// Inserts a pokemon.
    pub const INSERT: &str = "insert";
    /// Updates the name of a pokemon.
    pub const UPDATE: &str = "update";
    /// Deletes a pokemon by id.
    pub const DELETE: &str = "delete";
    /// Creates the keyspace.
    pub const CREATE_KEYSPACE: &str = "create-keyspace";
    /// Switches the session to the keyspace.
    pub const USE_KEYSPACE: &str = "use-keyspace";
    /// Creates the pokemons table.
    pub const CREATE_TABLE: &str = "create-table";
}

/// Complete service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Database settings.
    pub db: DbConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

/// Database settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    /// Where to find the Cassandra cluster.
    pub connection: ConnectionConfig,

    /// Named CQL statements.
    #[serde(default)]
    pub statements: Statements,
}

/// Cassandra contact point.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionConfig {
    /// Host name or address of a cluster node.
    pub host: String,

    /// CQL native protocol port of the node.
    pub port: u16,

    /// Datacenter to prefer when routing requests, if any.
    #[serde(default)]
    pub local_datacenter: Option<String>,
}

/// CQL statements configured by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Statements(HashMap<String, String>);

impl AppConfig {
    /// Loads configuration from the given YAML file, applying environment overrides.
    pub fn load<P>(path: P) -> crate::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        Self::build(
            ::config::Config::builder()
                .add_source(File::from(path).format(FileFormat::Yaml))
                .add_source(Self::environment()),
        )
        .with_config_context(|| format!("failed to load configuration from {}", path.display()))
    }

    /// Loads configuration from YAML content, without environment overrides.
    pub fn from_yaml(content: &str) -> crate::Result<Self> {
        Self::build(::config::Config::builder().add_source(File::from_str(content, FileFormat::Yaml)))
            .with_config_context(|| "failed to parse configuration")
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ::config::ConfigError> {
        builder.build()?.try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }
}

impl ServerConfig {
    fn default_host() -> String {
        "127.0.0.1".into()
    }

    fn default_port() -> u16 {
        8080
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: Self::default_host(), port: Self::default_port() }
    }
}

impl ConnectionConfig {
    /// Returns the contact point as a `host:port` string, as expected by the driver.
    pub fn known_node(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Statements {
    /// Returns the CQL text of the statement with the given name.
    pub fn get(&self, name: &str) -> crate::Result<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::Statement { name: name.into() })
    }
}

impl<K, V> FromIterator<(K, V)> for Statements
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Returns the path of the configuration file to load.
///
/// | Source                               | Priority |
/// |--------------------------------------|----------|
/// | First command-line argument          | 1        |
/// | `POKEDEX_CONFIG` environment variable | 2        |
/// | [`DEFAULT_CONFIG_FILE`]              | 3        |
pub fn config_file_path<I>(mut args: I) -> PathBuf
where
    I: Iterator<Item = String>,
{
    args.next()
        .or_else(|| env::var(CONFIG_FILE_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into())
        .into()
}
