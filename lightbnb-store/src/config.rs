//! Database connection configuration
//!
//! Resolution order: built-in defaults, then the `[database]` table of a TOML
//! file, then `LIGHTBNB_DB_*` environment variables.
//!
//! Connect options start from the driver's own defaults, which read the libpq
//! `PG*` variables (`PGHOST`, `PGPORT`, `PGPASSWORD`, ...) and `~/.pgpass`.
//! Host, port, database and user are always overwritten from this config. The
//! password is only set when configured, so with `password = None` an ambient
//! `PGPASSWORD` or `.pgpass` entry is used.
//!
//! ```toml
//! [database]
//! host = "localhost"
//! port = 5432
//! database = "lightbnb"
//! user = "vagrant"
//! password = "123"
//! ```

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

pub const ENV_HOST: &str = "LIGHTBNB_DB_HOST";
pub const ENV_PORT: &str = "LIGHTBNB_DB_PORT";
pub const ENV_DATABASE: &str = "LIGHTBNB_DB_NAME";
pub const ENV_USER: &str = "LIGHTBNB_DB_USER";
pub const ENV_PASSWORD: &str = "LIGHTBNB_DB_PASSWORD";
pub const ENV_MAX_CONNECTIONS: &str = "LIGHTBNB_DB_MAX_CONNECTIONS";

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the LightBnB database
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "lightbnb".to_string(),
            user: "vagrant".to_string(),
            password: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    database: DbConfig,
}

impl DbConfig {
    /// Default config file location: `~/.lightbnb/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".lightbnb").join("config.toml"))
    }

    /// Load configuration from the process environment and an optional file.
    ///
    /// With `path = None` the default file is read if it exists. An explicit
    /// path that doesn't exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse the `[database]` table of a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        Self::from_toml(&content)
            .map_err(|e| StoreError::config(format!("{}: {}", path.display(), e)))
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str::<ConfigFile>(content).map(|file| file.database)
    }

    /// Overlay environment variables onto this config.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| StoreError::config(format!("{ENV_PORT} must be a port number, got '{port}'")))?;
        }
        if let Some(database) = lookup(ENV_DATABASE) {
            self.database = database;
        }
        if let Some(user) = lookup(ENV_USER) {
            self.user = user;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.password = Some(password);
        }
        if let Some(max) = lookup(ENV_MAX_CONNECTIONS) {
            self.max_connections = max.trim().parse().map_err(|_| {
                StoreError::config(format!("{ENV_MAX_CONNECTIONS} must be a positive integer, got '{max}'"))
            })?;
        }
        Ok(())
    }

    /// Driver connection options built from this config.
    ///
    /// Without a configured password the driver falls back to `PGPASSWORD`
    /// and `~/.pgpass`.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user);

        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }

    /// Copy with the password masked, for display.
    pub fn redacted(&self) -> Self {
        Self {
            password: self.password.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}
