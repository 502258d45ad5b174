// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::application::{dto::ArticleIndexDto, error::ApplicationResult};

/// The public index: published articles only, anyone may call it.
#[derive(Debug, Default)]
pub struct ListPublishedArticlesQuery;

impl ArticleQueryService {
    pub async fn list_published(
        &self,
        _query: ListPublishedArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleIndexDto>> {
        let records = self.read_repo.list_published().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
