use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::Config;
use crate::db::DbService;

/// Shared application state
///
/// Holds the configuration and the record store handle. Cloning is cheap:
/// the SurrealDB handle is internally reference-counted, so every request
/// sees the same connection established at startup.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// Shared record store handle
    pub db: Surreal<Any>,
}

impl ServerState {
    /// Assemble state from already-constructed parts
    ///
    /// Used by [`initialize`](Self::initialize) and by tests that supply
    /// their own store handle.
    pub fn new(config: Config, db: Surreal<Any>) -> Self {
        Self { config, db }
    }

    /// Connect to the record store and build the state
    ///
    /// This is the composition root for everything the handlers share. A
    /// connection failure propagates out and aborts startup.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db_service = DbService::connect(&config.database_url).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }
}
