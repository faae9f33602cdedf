use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use plators_server::{AppState, InMemoryPostRepository, Settings, build_app, demo_posts};

fn app(repo: InMemoryPostRepository) -> Router {
    build_app(&Settings::default(), AppState::new(repo)).expect("router must build")
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).expect("request must build"))
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body must be readable");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body must be json")
    };
    (status, value)
}

fn titles(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .expect("list must be an array")
        .iter()
        .map(|post| post["title"].as_str().expect("title is a string"))
        .collect()
}

fn body(title: &str, category: &str, published: bool) -> Value {
    json!({
        "title": title,
        "excerpt": "short",
        "content": "long",
        "category": category,
        "image_url": "",
        "video_url": null,
        "published": published,
    })
}

#[tokio::test]
async fn list_defaults_to_published_posts_only() {
    let app = app(InMemoryPostRepository::new());
    call(&app, Method::POST, "/api/posts", Some(body("draft", "text", false))).await;
    call(&app, Method::POST, "/api/posts", Some(body("live", "text", true))).await;

    let (status, listed) = call(&app, Method::GET, "/api/posts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&listed), ["live"]);

    let (_, everything) = call(&app, Method::GET, "/api/posts?published=false", None).await;
    assert_eq!(titles(&everything), ["live", "draft"]);

    let (_, odd) = call(&app, Method::GET, "/api/posts?published=yes", None).await;
    assert_eq!(titles(&odd).len(), 2);

    let (_, upper) = call(&app, Method::GET, "/api/posts?published=TRUE", None).await;
    assert_eq!(titles(&upper), ["live"]);
}

#[tokio::test]
async fn list_filters_by_category() {
    let app = app(InMemoryPostRepository::with_posts(demo_posts()));

    let (_, videos) = call(&app, Method::GET, "/api/posts?category=video", None).await;
    assert_eq!(
        titles(&videos),
        ["Будущее цифровых технологий", "Электронная музыка будущего"]
    );

    let (_, all) = call(&app, Method::GET, "/api/posts?category=all", None).await;
    assert_eq!(titles(&all).len(), 6);

    let (_, unknown) = call(&app, Method::GET, "/api/posts?category=audio", None).await;
    assert!(titles(&unknown).is_empty());
}

#[tokio::test]
async fn create_returns_created_post_with_nulls_for_empty_urls() {
    let app = app(InMemoryPostRepository::new());

    let (status, created) = call(&app, Method::POST, "/api/posts", Some(body("Hello", "video", true))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["category"], "video");
    assert_eq!(created["image_url"], Value::Null);
    assert_eq!(created["published"], true);
    assert!(created["created_at"].is_string());

    let (status, fetched) = call(&app, Method::GET, "/api/posts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_rejects_bad_title_and_category() {
    let app = app(InMemoryPostRepository::new());

    let (status, error) = call(&app, Method::POST, "/api/posts", Some(body("", "text", false))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].is_string());

    let (status, _) = call(&app, Method::POST, "/api/posts", Some(body("ok", "audio", false))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = call(&app, Method::GET, "/api/posts?published=false", None).await;
    assert!(titles(&listed).is_empty());
}

#[tokio::test]
async fn undecodable_body_is_a_json_bad_request() {
    let app = app(InMemoryPostRepository::new());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/posts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "category": "video" }).to_string()))
        .expect("request must build");
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body must be readable");
    let error: Value = serde_json::from_slice(&bytes).expect("body must be json");
    let message = error["error"].as_str().expect("error is a string");
    assert!(message.contains("title"), "unexpected message: {message}");

    let (status, error) = call(&app, Method::PUT, "/api/posts/1", Some(json!("not an object"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn update_replaces_fields_and_reports_missing_post() {
    let app = app(InMemoryPostRepository::new());
    call(&app, Method::POST, "/api/posts", Some(body("before", "text", false))).await;

    let (status, updated) = call(&app, Method::PUT, "/api/posts/1", Some(body("after", "photo", true))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["title"], "after");
    assert_eq!(updated["category"], "photo");
    assert_eq!(updated["published"], true);

    let (status, error) = call(&app, Method::PUT, "/api/posts/99", Some(body("x", "text", true))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error, json!({ "error": "Post not found" }));
}

#[tokio::test]
async fn delete_removes_post_once() {
    let app = app(InMemoryPostRepository::with_posts(demo_posts()));

    let (status, deleted) = call(&app, Method::DELETE, "/api/posts/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "message": "Post deleted", "id": 3 }));

    let (status, _) = call(&app, Method::GET, "/api/posts/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::DELETE, "/api/posts/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = app(InMemoryPostRepository::with_posts(demo_posts()));

    let (status, health) = call(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(health["posts"], 6);

    let (status, doc) = call(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/posts"].is_object());
    assert!(doc["paths"]["/api/posts/{id}"].is_object());
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let app = app(InMemoryPostRepository::new());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/posts")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .expect("request must build");

    let response = app.oneshot(request).await.expect("router is infallible");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
