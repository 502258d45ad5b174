// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::index,
        crate::presentation::http::controllers::articles::show,
        crate::presentation::http::controllers::admin::create_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::admin::CreateArticleBody,
            crate::presentation::http::controllers::admin::CreateArticleRequest,
            crate::presentation::http::controllers::admin::ImageUploadRequest,
            crate::application::dto::ArticleIndexDto,
            crate::application::dto::ArticleShowDto,
            crate::application::dto::ImageDto
        )
    ),
    tags(
        (name = "Articles", description = "Public article read endpoints"),
        (name = "Admin", description = "Role-gated article creation"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Newsdesk API",
        description = "Content-publishing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
