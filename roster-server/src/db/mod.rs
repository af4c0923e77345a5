//! Database Module
//!
//! Owns the SurrealDB connection established once at startup.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::utils::AppError;

/// Namespace and database selected on every connection
const NAMESPACE: &str = "roster";
const DATABASE: &str = "roster";

/// Database service — owns the shared record store handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect to the record store from a connection string
    ///
    /// The `any` engine accepts `ws://`, `http://`, `rocksdb://` and
    /// `mem://` style URLs, so the same code path serves production and
    /// tests. Pooling is whatever the SurrealDB client manages; there is no
    /// per-request connection setup and no explicit retry.
    pub async fn connect(url: &str) -> Result<Self, AppError> {
        let db = surrealdb::engine::any::connect(url)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {url}: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database connection established ({url})");

        Ok(Self { db })
    }
}
