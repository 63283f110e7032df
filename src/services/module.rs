//! Module store: list, fetch and create module documents.
//!
//! DESIGN
//! ======
//! Each module is stored whole as one JSON document. `name` and `kind` are
//! copied into their own columns so listings never decode the document.
//! Handlers only see the [`ModuleStore`] trait; production runs on
//! [`PgModuleStore`], local development without a database on
//! [`MemoryModuleStore`].
//!
//! Ids are UUIDv4 strings. An id that does not parse as a UUID cannot name a
//! stored module, so it is reported as not found rather than as bad input.

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use records::{ModuleRecord, ModuleSummary};
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("no module with id {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored module is not valid: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence seam for module documents.
#[async_trait::async_trait]
pub trait ModuleStore: Send + Sync {
    /// Every stored module as `{id, name, type}`, oldest first.
    async fn list(&self) -> Result<Vec<ModuleSummary>, ModuleError>;

    /// The full record for `id`.
    async fn get(&self, id: &str) -> Result<ModuleRecord, ModuleError>;

    /// Store `record` under a fresh id and return that id. Names are not
    /// checked for duplicates.
    async fn create(&self, record: &ModuleRecord) -> Result<String, ModuleError>;
}

// =============================================================================
// POSTGRES
// =============================================================================

pub struct PgModuleStore {
    pool: PgPool,
}

impl PgModuleStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ModuleStore for PgModuleStore {
    async fn list(&self) -> Result<Vec<ModuleSummary>, ModuleError> {
        let rows = sqlx::query_as::<_, (Uuid, String, String)>(
            "SELECT id, name, kind FROM modules ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, kind)| ModuleSummary { id: id.to_string(), name, kind })
            .collect())
    }

    async fn get(&self, id: &str) -> Result<ModuleRecord, ModuleError> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Err(ModuleError::NotFound(id.to_owned()));
        };

        let data = sqlx::query_scalar::<_, serde_json::Value>("SELECT data FROM modules WHERE id = $1")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ModuleError::NotFound(id.to_owned()))?;

        Ok(serde_json::from_value(data)?)
    }

    async fn create(&self, record: &ModuleRecord) -> Result<String, ModuleError> {
        let id = Uuid::new_v4();
        let data = serde_json::to_value(record)?;

        sqlx::query("INSERT INTO modules (id, name, kind, data) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(&record.name)
            .bind(&record.kind)
            .bind(data)
            .execute(&self.pool)
            .await?;

        info!(%id, name = %record.name, "module stored");
        Ok(id.to_string())
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local store, used when no `DATABASE_URL` is configured and in tests.
#[derive(Default)]
pub struct MemoryModuleStore {
    modules: RwLock<Vec<(String, ModuleRecord)>>,
}

impl MemoryModuleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ModuleStore for MemoryModuleStore {
    async fn list(&self) -> Result<Vec<ModuleSummary>, ModuleError> {
        let modules = self.modules.read().await;
        Ok(modules
            .iter()
            .map(|(id, record)| ModuleSummary { id: id.clone(), name: record.name.clone(), kind: record.kind.clone() })
            .collect())
    }

    async fn get(&self, id: &str) -> Result<ModuleRecord, ModuleError> {
        let modules = self.modules.read().await;
        modules
            .iter()
            .find(|(stored, _)| stored == id)
            .map(|(_, record)| record.clone())
            .ok_or_else(|| ModuleError::NotFound(id.to_owned()))
    }

    async fn create(&self, record: &ModuleRecord) -> Result<String, ModuleError> {
        let id = Uuid::new_v4().to_string();
        self.modules.write().await.push((id.clone(), record.clone()));
        info!(%id, name = %record.name, "module stored in memory");
        Ok(id)
    }
}
