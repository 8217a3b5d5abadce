//! Repository Module
//!
//! Read/write access to the embedded SurrealDB tables backing the order gate.

pub mod catalog;
pub mod menu;
pub mod order_rule;

// Re-exports
pub use catalog::CatalogRepository;
pub use menu::MenuRepository;
pub use order_rule::OrderRuleRepository;

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 记录键统一使用 i64
// =============================================================================
//
//   - 写入: UPSERT type::thing($tb, $id) CONTENT $data  (行结构不序列化 id)
//   - 读取: SELECT record::id(id) AS id, ... FROM table

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Create or replace the record `table:id`
    pub async fn upsert<T>(&self, table: &'static str, id: i64, row: T) -> RepoResult<()>
    where
        T: Serialize + Send + 'static,
    {
        self.db
            .query("UPSERT type::thing($tb, $id) CONTENT $data")
            .bind(("tb", table))
            .bind(("id", id))
            .bind(("data", row))
            .await?
            .check()?;
        Ok(())
    }
}
