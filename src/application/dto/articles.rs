// src/application/dto/articles.rs
use crate::application::ports::images::StoredImage;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Listing projection returned by the public index.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleIndexDto {
    pub id: i64,
    pub title: String,
    pub snippet: String,
    pub category: String,
    pub premium: bool,
}

impl From<Article> for ArticleIndexDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            snippet: article.snippet,
            category: article.category,
            premium: article.premium,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImageDto {
    pub key: String,
    pub content_type: String,
    pub extension: String,
}

impl From<StoredImage> for ImageDto {
    fn from(image: StoredImage) -> Self {
        Self {
            key: image.key,
            content_type: image.content_type,
            extension: image.extension,
        }
    }
}

/// Detail projection returned by show and by a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleShowDto {
    pub id: i64,
    pub title: String,
    pub snippet: String,
    pub content: String,
    pub category: String,
    pub premium: bool,
    pub published: bool,
    #[serde(default)]
    pub image: Option<ImageDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl ArticleShowDto {
    pub fn project(article: Article, image: Option<StoredImage>) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            snippet: article.snippet,
            content: article.content,
            category: article.category,
            premium: article.premium,
            published: article.published,
            image: image.map(Into::into),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
