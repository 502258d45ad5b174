// src/infrastructure/attachments.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::images::{ImageStore, ImageUpload, StoredImage},
};
use crate::domain::article::ArticleId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

/// Attachment records live beside the articles table; the upload payload is
/// kept exactly as received.
#[derive(Clone)]
pub struct SqliteImageStore {
    pool: Arc<SqlitePool>,
}

impl SqliteImageStore {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ImageRow {
    key: String,
    article_id: i64,
    content_type: String,
    extension: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ImageRow> for StoredImage {
    type Error = ApplicationError;

    fn try_from(row: ImageRow) -> Result<Self, Self::Error> {
        Ok(StoredImage {
            key: row.key,
            article_id: ArticleId::new(row.article_id)?,
            content_type: row.content_type,
            extension: row.extension,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ImageStore for SqliteImageStore {
    async fn attach(
        &self,
        article_id: ArticleId,
        upload: ImageUpload,
    ) -> ApplicationResult<StoredImage> {
        let key = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        let row = sqlx::query_as::<_, ImageRow>(
            "INSERT INTO article_images (key, article_id, content_type, encoder, data, extension, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING key, article_id, content_type, extension, created_at",
        )
        .bind(&key)
        .bind(i64::from(article_id))
        .bind(&upload.content_type)
        .bind(&upload.encoder)
        .bind(&upload.data)
        .bind(&upload.extension)
        .bind(created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        StoredImage::try_from(row)
    }

    async fn find_by_article(
        &self,
        article_id: ArticleId,
    ) -> ApplicationResult<Option<StoredImage>> {
        let maybe_row = sqlx::query_as::<_, ImageRow>(
            "SELECT key, article_id, content_type, extension, created_at
             FROM article_images WHERE article_id = $1",
        )
        .bind(i64::from(article_id))
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        maybe_row.map(StoredImage::try_from).transpose()
    }
}
