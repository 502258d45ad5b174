// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::articles::CreateArticleCommand, dto::ArticleShowDto, ports::images::ImageUpload,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// Wire format for an image upload; stored opaquely.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImageUploadRequest {
    #[serde(rename = "type")]
    pub content_type: String,
    pub encoder: String,
    pub data: String,
    pub extension: String,
}

impl From<ImageUploadRequest> for ImageUpload {
    fn from(req: ImageUploadRequest) -> Self {
        Self {
            content_type: req.content_type,
            encoder: req.encoder,
            data: req.data,
            extension: req.extension,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub image: Option<ImageUploadRequest>,
}

/// The create payload arrives wrapped under an `article` key.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleBody {
    pub article: CreateArticleRequest,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin",
    request_body = CreateArticleBody,
    responses(
        (status = 200, description = "Article created.", body = ArticleShowDto),
        (status = 401, description = "Caller is not allowed to create articles.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "First blank required field.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateArticleBody>,
) -> HttpResult<Json<ArticleShowDto>> {
    let article = payload.article;
    let command = CreateArticleCommand {
        title: article.title,
        snippet: article.snippet,
        content: article.content,
        category: article.category,
        premium: article.premium,
        published: article.published,
        image: article.image.map(Into::into),
    };

    state
        .services
        .article_commands
        .create_article(&actor, command)
        .await
        .into_http()
        .map(Json)
}
