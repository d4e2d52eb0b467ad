use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::models::application::{ApplicationUpdate, JobApplication, NewApplication};
use crate::store::{ApplicationStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, JobApplication>,
}

/// Process-local store used when no database is configured, and in tests.
/// Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryApplicationStore {
    inner: Mutex<Inner>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationStore for InMemoryApplicationStore {
    async fn create(&self, new: NewApplication) -> Result<JobApplication, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let app = JobApplication {
            id: inner.last_id,
            company: new.company,
            role: new.role,
            location: new.location,
            job_url: new.job_url,
            status: new.status,
            deadline: new.deadline,
            notes: new.notes,
            created_at: Utc::now(),
        };
        inner.rows.insert(app.id, app.clone());
        Ok(app)
    }

    async fn get(&self, id: i64) -> Result<Option<JobApplication>, StoreError> {
        Ok(self.inner.lock().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<JobApplication>, StoreError> {
        let mut apps: Vec<JobApplication> =
            self.inner.lock().await.rows.values().cloned().collect();
        apps.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(apps)
    }

    async fn update(
        &self,
        id: i64,
        update: ApplicationUpdate,
    ) -> Result<Option<JobApplication>, StoreError> {
        let mut inner = self.inner.lock().await;
        let Some(app) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        update.apply_to(app);
        Ok(Some(app.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.lock().await.rows.remove(&id).is_some())
    }
}
