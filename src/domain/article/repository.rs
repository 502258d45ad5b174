// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_title(&self, title: &str) -> DomainResult<Option<Article>>;
    /// Published articles only, newest first.
    async fn list_published(&self) -> DomainResult<Vec<Article>>;
}
