// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header::AUTHORIZATION};
use newsdesk_core::application::dto::TokenSubject;
use newsdesk_core::application::ports::{images::ImageStore, security::TokenManager, time::Clock};
use newsdesk_core::application::services::ApplicationServices;
use newsdesk_core::domain::actor::{ActorId, Role};
use newsdesk_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use newsdesk_core::infrastructure::{
    attachments::SqliteImageStore,
    database,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    security::BiscuitTokenManager,
    time::SystemClock,
};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt as _;

/// Fixed Ed25519 root key for tests; any 32-byte value is a valid seed.
pub const TEST_ROOT_KEY: &str = "4e0dce0e745e59ce1aa8c8c1963e02bcd0b837f634dbe05fa2d9cbb1fc9bb9e3";

pub struct TestApp {
    pub router: axum::Router,
    pub pool: Arc<SqlitePool>,
    pub token_manager: Arc<dyn TokenManager>,
    pub write_repo: Arc<dyn ArticleWriteRepository>,
    pub read_repo: Arc<dyn ArticleReadRepository>,
    pub image_store: Arc<dyn ImageStore>,
}

/// Full application wired against an in-memory SQLite database. A single
/// pooled connection keeps every query on the same in-memory store.
pub async fn spawn_app() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    database::run_migrations(&pool).await.expect("migrations");
    let pool = Arc::new(pool);

    let write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let image_store: Arc<dyn ImageStore> = Arc::new(SqliteImageStore::new(Arc::clone(&pool)));
    let token_manager: Arc<dyn TokenManager> = Arc::new(
        BiscuitTokenManager::new(TEST_ROOT_KEY, Duration::from_secs(3600))
            .expect("token manager"),
    );
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&write_repo),
        Arc::clone(&read_repo),
        Arc::clone(&image_store),
        Arc::clone(&token_manager),
        clock,
    ));

    let router = build_router(HttpState { services });

    TestApp {
        router,
        pool,
        token_manager,
        write_repo,
        read_repo,
        image_store,
    }
}

impl TestApp {
    pub async fn issue_token(&self, role: Role) -> String {
        let subject = TokenSubject {
            actor_id: ActorId::new(1).unwrap(),
            name: "tester".into(),
            role,
        };
        self.token_manager
            .issue(subject)
            .await
            .expect("token issuance")
            .token
    }

    pub async fn request(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.expect("router call")
    }

    pub async fn article_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(self.pool.as_ref())
            .await
            .expect("article count")
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, payload: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

pub async fn read_json(resp: Response<Body>) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("response body");
    let json: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|err| panic!("non-JSON body ({err}): {}", String::from_utf8_lossy(&bytes)));
    (status, json)
}
