use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::application::{ApplicationUpdate, JobApplication, NewApplication};
use crate::store::{ApplicationStore, StoreError};

const COLUMNS: &str = "id, company, role, location, job_url, status, deadline, notes, created_at";

/// PostgreSQL-backed store over the `job_applications` table.
#[derive(Clone)]
pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn create(&self, new: NewApplication) -> Result<JobApplication, StoreError> {
        let app = sqlx::query_as::<_, JobApplication>(&format!(
            r#"
            INSERT INTO job_applications
                (company, role, location, job_url, status, deadline, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new.company)
        .bind(&new.role)
        .bind(&new.location)
        .bind(&new.job_url)
        .bind(&new.status)
        .bind(new.deadline)
        .bind(&new.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(app)
    }

    async fn get(&self, id: i64) -> Result<Option<JobApplication>, StoreError> {
        let app = sqlx::query_as::<_, JobApplication>(&format!(
            "SELECT {COLUMNS} FROM job_applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(app)
    }

    async fn list(&self) -> Result<Vec<JobApplication>, StoreError> {
        let apps = sqlx::query_as::<_, JobApplication>(&format!(
            "SELECT {COLUMNS} FROM job_applications ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(apps)
    }

    async fn update(
        &self,
        id: i64,
        update: ApplicationUpdate,
    ) -> Result<Option<JobApplication>, StoreError> {
        // NULL parameters keep the current column value.
        let app = sqlx::query_as::<_, JobApplication>(&format!(
            r#"
            UPDATE job_applications SET
                company  = COALESCE($2, company),
                role     = COALESCE($3, role),
                location = COALESCE($4, location),
                job_url  = COALESCE($5, job_url),
                status   = COALESCE($6, status),
                deadline = COALESCE($7, deadline),
                notes    = COALESCE($8, notes)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.company)
        .bind(update.role)
        .bind(update.location)
        .bind(update.job_url)
        .bind(update.status)
        .bind(update.deadline)
        .bind(update.notes)
        .fetch_optional(&self.pool)
        .await?;
        Ok(app)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
