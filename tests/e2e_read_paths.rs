// tests/e2e_read_paths.rs
use axum::http::StatusCode;

mod support;

use support::{NewArticleBuilder, get, read_json};

#[tokio::test]
async fn health_returns_ok() {
    let app = support::spawn_app().await;

    let resp = app.request(get("/health")).await;
    let (status, body) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn index_returns_only_published_articles() {
    let app = support::spawn_app().await;
    app.write_repo
        .insert(NewArticleBuilder::new().title("Published one").published().build())
        .await
        .unwrap();
    app.write_repo
        .insert(NewArticleBuilder::new().title("Draft").build())
        .await
        .unwrap();
    app.write_repo
        .insert(NewArticleBuilder::new().title("Published two").published().build())
        .await
        .unwrap();

    let resp = app.request(get("/api/v1/articles")).await;
    let (status, body) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("JSON array");
    assert_eq!(items.len(), 2);
    let titles: Vec<&str> = items
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Published one"));
    assert!(titles.contains(&"Published two"));
    assert!(!titles.contains(&"Draft"));
}

#[tokio::test]
async fn index_projection_omits_article_content() {
    let app = support::spawn_app().await;
    app.write_repo
        .insert(NewArticleBuilder::new().published().build())
        .await
        .unwrap();

    let resp = app.request(get("/api/v1/articles")).await;
    let (status, body) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    let item = &body.as_array().expect("JSON array")[0];
    assert!(item.get("content").is_none());
    assert!(item["snippet"].is_string());
    assert!(item["category"].is_string());
    assert!(item["premium"].is_boolean());
}

#[tokio::test]
async fn index_is_empty_when_nothing_is_published() {
    let app = support::spawn_app().await;
    app.write_repo
        .insert(NewArticleBuilder::new().title("Draft").build())
        .await
        .unwrap();

    let resp = app.request(get("/api/v1/articles")).await;
    let (status, body) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("JSON array").len(), 0);
}

#[tokio::test]
async fn show_returns_detail_view() {
    let app = support::spawn_app().await;
    let created = app
        .write_repo
        .insert(
            NewArticleBuilder::new()
                .title("Space update")
                .category("science")
                .premium()
                .published()
                .build(),
        )
        .await
        .unwrap();

    let id = i64::from(created.id);
    let resp = app.request(get(&format!("/api/v1/articles/{id}"))).await;
    let (status, body) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Space update");
    assert_eq!(body["category"], "science");
    assert_eq!(body["premium"], true);
    assert_eq!(body["published"], true);
    assert!(body["content"].is_string());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn show_also_serves_unpublished_articles() {
    let app = support::spawn_app().await;
    let created = app
        .write_repo
        .insert(NewArticleBuilder::new().title("Draft").build())
        .await
        .unwrap();

    let resp = app
        .request(get(&format!("/api/v1/articles/{}", i64::from(created.id))))
        .await;
    let (status, body) = read_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["published"], false);
}

#[tokio::test]
async fn show_is_idempotent() {
    let app = support::spawn_app().await;
    let created = app
        .write_repo
        .insert(NewArticleBuilder::new().published().build())
        .await
        .unwrap();
    let uri = format!("/api/v1/articles/{}", i64::from(created.id));

    let (status_a, body_a) = read_json(app.request(get(&uri)).await).await;
    let (status_b, body_b) = read_json(app.request(get(&uri)).await).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn show_returns_404_for_unknown_id() {
    let app = support::spawn_app().await;

    let resp = app.request(get("/api/v1/articles/999")).await;
    let (status, body) = read_json(resp).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "article not found");
}
