//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{map_sqlx_error, AppError};

/// PostgreSQL repository for link storage and retrieval.
///
/// Short-code uniqueness rests on the `links.short_code` unique constraint;
/// a violated insert maps to [`AppError::Conflict`] for the caller's retry
/// loop.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    password_protected: bool,
    password: Option<String>,
    access_count: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            short_code: row.short_code,
            original_url: row.original_url,
            created_at: row.created_at,
            expires_at: row.expires_at,
            password_protected: row.password_protected,
            password: row.password,
            access_count: row.access_count,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_code, original_url, expires_at, password_protected, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, short_code, original_url, created_at, expires_at,
                      password_protected, password, access_count
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .bind(new_link.expires_at)
        .bind(new_link.password.is_some())
        .bind(&new_link.password)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_code, original_url, created_at, expires_at,
                   password_protected, password, access_count
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_access_count(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE links SET access_count = access_count + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
