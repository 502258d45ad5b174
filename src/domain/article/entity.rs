// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub snippet: String,
    pub content: String,
    pub category: String,
    pub premium: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record ready for insertion. Field contents have already passed draft
/// validation; timestamps are server-assigned by the caller's clock.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub snippet: String,
    pub content: String,
    pub category: String,
    pub premium: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
