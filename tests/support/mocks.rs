// tests/support/mocks.rs
use chrono::{DateTime, Utc};
use newsdesk_core::application::ApplicationResult;
use newsdesk_core::application::ports::images::{ImageStore, ImageUpload, StoredImage};
use newsdesk_core::application::ports::time::Clock;
use newsdesk_core::domain::article::{
    Article, ArticleId, ArticleWriteRepository, NewArticle,
};
use newsdesk_core::domain::errors::DomainResult;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Write repository that records how many inserts were attempted.
#[derive(Default)]
pub struct CountingWriteRepo {
    pub inserts: AtomicUsize,
}

impl CountingWriteRepo {
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ArticleWriteRepository for CountingWriteRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let n = self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(Article {
            id: ArticleId::new((n + 1) as i64).unwrap(),
            title: article.title,
            snippet: article.snippet,
            content: article.content,
            category: article.category,
            premium: article.premium,
            published: article.published,
            created_at: article.created_at,
            updated_at: article.updated_at,
        })
    }
}

/// Image store that records attachments without persisting anything.
#[derive(Default)]
pub struct CountingImageStore {
    pub attaches: AtomicUsize,
}

impl CountingImageStore {
    pub fn attach_count(&self) -> usize {
        self.attaches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ImageStore for CountingImageStore {
    async fn attach(
        &self,
        article_id: ArticleId,
        upload: ImageUpload,
    ) -> ApplicationResult<StoredImage> {
        self.attaches.fetch_add(1, Ordering::SeqCst);
        Ok(StoredImage {
            key: "mock-image".into(),
            article_id,
            content_type: upload.content_type,
            extension: upload.extension,
            created_at: Utc::now(),
        })
    }

    async fn find_by_article(
        &self,
        _article_id: ArticleId,
    ) -> ApplicationResult<Option<StoredImage>> {
        Ok(None)
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
