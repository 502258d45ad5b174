// src/presentation/http/controllers/articles.rs
//
// Public read surface: the index lists published articles only, show returns
// the detail projection for any stored id.
use crate::application::{
    dto::{ArticleIndexDto, ArticleShowDto},
    queries::articles::{GetArticleByIdQuery, ListPublishedArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Published articles, newest first.", body = [ArticleIndexDto])
    ),
    tag = "Articles"
)]
pub async fn index(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleIndexDto>>> {
    state
        .services
        .article_queries
        .list_published(ListPublishedArticlesQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article detail view.", body = ArticleShowDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleShowDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}
