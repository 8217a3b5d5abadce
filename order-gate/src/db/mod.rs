//! Database Module
//!
//! Embedded SurrealDB (RocksDB) holding the catalog, menus and order rules.

pub mod models;
pub mod provider;
pub mod repository;
pub mod seed;
pub mod snapshot;

pub use provider::SurrealCatalog;
pub use snapshot::CatalogSnapshot;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the store at `path` and select namespace/database
    pub async fn new(path: impl AsRef<Path>, namespace: &str, database: &str) -> Result<Self, AppError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::database(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            path = %path.display(),
            namespace,
            database,
            "Database connection established (SurrealDB RocksDB)"
        );

        Ok(Self { db })
    }
}
