//! Application record storage.
//!
//! Handlers only see `Arc<dyn ApplicationStore>`; the backend is picked at
//! startup from `DATABASE_URL`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::application::{ApplicationUpdate, JobApplication, NewApplication};

pub use memory::InMemoryApplicationStore;
pub use postgres::PgApplicationStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// CRUD over job applications keyed by integer id.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn create(&self, new: NewApplication) -> Result<JobApplication, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<JobApplication>, StoreError>;

    /// Newest first; ties broken by id descending.
    async fn list(&self) -> Result<Vec<JobApplication>, StoreError>;

    /// Returns `None` if no application has this id.
    async fn update(
        &self,
        id: i64,
        update: ApplicationUpdate,
    ) -> Result<Option<JobApplication>, StoreError>;

    /// Returns `false` if no application has this id.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
