// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str =
    "id, title, snippet, content, category, premium, published, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    snippet: String,
    content: String,
    category: String,
    premium: bool,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: row.title,
            snippet: row.snippet,
            content: row.content,
            category: row.category,
            premium: row.premium,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            snippet,
            content,
            category,
            premium,
            published,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, snippet, content, category, premium, published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, title, snippet, content, category, premium, published, created_at, updated_at",
        )
        .bind(title)
        .bind(snippet)
        .bind(content)
        .bind(category)
        .bind(premium)
        .bind(published)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let maybe_row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx)?;

        maybe_row.map(Article::try_from).transpose()
    }

    async fn find_by_title(&self, title: &str) -> DomainResult<Option<Article>> {
        let maybe_row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE title = $1 ORDER BY id LIMIT 1"
        ))
        .bind(title)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx)?;

        maybe_row.map(Article::try_from).transpose()
    }

    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE published = TRUE ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
