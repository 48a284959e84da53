//! PostgreSQL implementation of the access log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AccessLogEntry, NewAccessLogEntry};
use crate::domain::repositories::AccessLogRepository;
use crate::error::AppError;

/// PostgreSQL repository for per-redirect access records.
pub struct PgAccessLogRepository {
    pool: Arc<PgPool>,
}

impl PgAccessLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccessLogRow {
    id: i64,
    link_id: i64,
    accessed_at: DateTime<Utc>,
    client_ip: Option<String>,
}

impl From<AccessLogRow> for AccessLogEntry {
    fn from(row: AccessLogRow) -> Self {
        AccessLogEntry {
            id: row.id,
            link_id: row.link_id,
            accessed_at: row.accessed_at,
            client_ip: row.client_ip,
        }
    }
}

#[async_trait]
impl AccessLogRepository for PgAccessLogRepository {
    async fn record_access(&self, entry: NewAccessLogEntry) -> Result<AccessLogEntry, AppError> {
        let row = sqlx::query_as::<_, AccessLogRow>(
            r#"
            INSERT INTO access_logs (link_id, client_ip)
            VALUES ($1, $2)
            RETURNING id, link_id, accessed_at, client_ip
            "#,
        )
        .bind(entry.link_id)
        .bind(&entry.client_ip)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_link(&self, link_id: i64) -> Result<Vec<AccessLogEntry>, AppError> {
        let rows = sqlx::query_as::<_, AccessLogRow>(
            r#"
            SELECT id, link_id, accessed_at, client_ip
            FROM access_logs
            WHERE link_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(AccessLogEntry::from).collect())
    }
}
