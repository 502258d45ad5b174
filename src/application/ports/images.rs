// src/application/ports/images.rs
use crate::application::ApplicationResult;
use crate::domain::article::ArticleId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Upload payload as received on the wire. The store keeps it opaque; the
/// actual binary pipeline is an external collaborator.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: String,
    pub encoder: String,
    pub data: String,
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub key: String,
    pub article_id: ArticleId,
    pub content_type: String,
    pub extension: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Attach an upload to an article. At most one image per article.
    async fn attach(
        &self,
        article_id: ArticleId,
        upload: ImageUpload,
    ) -> ApplicationResult<StoredImage>;

    async fn find_by_article(
        &self,
        article_id: ArticleId,
    ) -> ApplicationResult<Option<StoredImage>>;
}
