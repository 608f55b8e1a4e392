use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Upper bound on establishing the store connection, including the liveness check.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub collection_name: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or `PORT` is not a port
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_name: required("DATABASE_NAME")?,
            collection_name: required("COLLECTION_NAME")?,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Store settings handed to the data-access layer.
    pub fn store(&self) -> StoreConfig {
        StoreConfig::new(
            &self.database_url,
            &self.database_name,
            &self.collection_name,
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Connection details for the soldiers store.
///
/// `url` names the store location (e.g. `sqlite://data`), `database` selects the database
/// file within it and `collection` names the table holding the records. An in-memory URL
/// (`sqlite::memory:`) is used as-is and ignores `database`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout: Duration,
}

impl StoreConfig {
    pub fn new(
        url: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            collection: collection.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Private in-memory store using the entity's default table name.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        use sea_orm::EntityName;

        Self::new(
            "sqlite::memory:",
            "soldiers",
            entity::prelude::Soldier.table_name(),
        )
    }

    /// Whether the store lives in process memory and vanishes with its last connection.
    pub fn is_in_memory(&self) -> bool {
        self.url.ends_with(":memory:")
    }

    /// Filesystem directory holding the database file, if the store is file-backed.
    pub fn location(&self) -> Option<&str> {
        if self.is_in_memory() {
            return None;
        }

        let path = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?
            .trim_end_matches('/');

        (!path.is_empty()).then_some(path)
    }

    /// Full connection URL for the selected database.
    pub fn connection_url(&self) -> String {
        if self.is_in_memory() {
            return self.url.clone();
        }

        format!(
            "{}/{}.db?mode=rwc",
            self.url.trim_end_matches('/'),
            self.database
        )
    }
}
