use super::handlers::{comments, threads};
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

const METHODS: [Method; 3] = [Method::GET, Method::POST, Method::DELETE];

pub fn build_router(state: AppState, allowed_origins: &str) -> Router {
    Router::new()
        .route("/threads", post(threads::post_thread))
        .route("/threads/:thread_id", get(threads::get_thread))
        .route("/threads/:thread_id/comments", post(comments::post_comment))
        .route(
            "/threads/:thread_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let any = CorsLayer::new()
        .allow_methods(METHODS)
        .allow_origin(Any)
        .allow_headers(Any);

    if allowed_origins == "*" {
        return any;
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<HeaderValue>().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS config is invalid or empty, falling back to allow ANY.");
        any
    } else {
        tracing::info!("CORS enabled for origins: {:?}", origins);
        CorsLayer::new()
            .allow_methods(METHODS)
            .allow_origin(origins)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AccessTokens;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use storage::MemoryStore;
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        tokens: AccessTokens,
    }

    impl TestApp {
        async fn new() -> Self {
            let store = MemoryStore::new().with_id_generator(Arc::new(|| "123".to_string()));
            store.add_user("user-123", "dicoding").await;
            store.add_user("user-456", "ferris").await;
            let tokens = AccessTokens::new("test-secret").unwrap();
            let state = AppState::new(store, tokens.clone());
            Self {
                router: build_router(state, "*"),
                tokens,
            }
        }

        async fn send(
            &self,
            method: Method,
            uri: &str,
            user: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut req = Request::builder().method(method).uri(uri);
            if let Some(user) = user {
                req = req.header(
                    header::AUTHORIZATION,
                    format!("Bearer {}", self.tokens.issue(user)),
                );
            }
            let body = match body {
                Some(v) => {
                    req = req.header(header::CONTENT_TYPE, "application/json");
                    Body::from(v.to_string())
                }
                None => Body::empty(),
            };

            let resp = self
                .router
                .clone()
                .oneshot(req.body(body).unwrap())
                .await
                .unwrap();
            let status = resp.status();
            let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
                .await
                .unwrap();
            let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, json)
        }

        async fn seed_thread(&self) {
            let (status, _) = self
                .send(
                    Method::POST,
                    "/threads",
                    Some("user-123"),
                    Some(json!({ "title": "title", "body": "body" })),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        async fn seed_comment(&self) {
            let (status, _) = self
                .send(
                    Method::POST,
                    "/threads/thread-123/comments",
                    Some("user-123"),
                    Some(json!({ "content": "content" })),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED);
        }
    }

    #[tokio::test]
    async fn test_post_thread() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send(
                Method::POST,
                "/threads",
                Some("user-123"),
                Some(json!({ "title": "title", "body": "body" })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert_eq!(
            body["data"]["addedThread"],
            json!({ "id": "thread-123", "title": "title", "owner": "user-123" })
        );
    }

    #[tokio::test]
    async fn test_post_thread_requires_auth() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send(
                Method::POST,
                "/threads",
                None,
                Some(json!({ "title": "title", "body": "body" })),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], "fail");
    }

    #[tokio::test]
    async fn test_post_thread_bad_payload() {
        let app = TestApp::new().await;

        let (status, body) = app
            .send(Method::POST, "/threads", Some("user-123"), Some(json!({ "title": "title" })))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "cannot create a new thread because a required property is missing"
        );

        let (status, body) = app
            .send(
                Method::POST,
                "/threads",
                Some("user-123"),
                Some(json!({ "title": 123, "body": "body" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "cannot create a new thread because a property has the wrong data type"
        );

        let (status, _) = app.send(Method::POST, "/threads", Some("user-123"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_post_comment_to_missing_thread() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send(
                Method::POST,
                "/threads/thread-000/comments",
                Some("user-123"),
                Some(json!({ "content": "content" })),
            )
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], domain::THREAD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_comment_bad_payload() {
        let app = TestApp::new().await;
        app.seed_thread().await;

        let (status, body) = app
            .send(
                Method::POST,
                "/threads/thread-123/comments",
                Some("user-123"),
                Some(json!({ "content": "" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "cannot add the comment because a required property is missing"
        );

        let (status, body) = app
            .send(
                Method::POST,
                "/threads/thread-123/comments",
                Some("user-123"),
                Some(json!({ "content": true })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "cannot add the comment because a property has the wrong data type"
        );
    }

    #[tokio::test]
    async fn test_comment_lifecycle() {
        let app = TestApp::new().await;
        app.seed_thread().await;

        let (status, body) = app
            .send(
                Method::POST,
                "/threads/thread-123/comments",
                Some("user-123"),
                Some(json!({ "content": "content" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body["data"]["addedComment"],
            json!({ "id": "comment-123", "content": "content", "owner": "user-123" })
        );

        let (status, body) = app.send(Method::GET, "/threads/thread-123", None, None).await;
        assert_eq!(status, StatusCode::OK);
        let thread = &body["data"]["thread"];
        assert_eq!(thread["id"], "thread-123");
        assert_eq!(thread["username"], "dicoding");
        assert_eq!(thread["comments"][0]["content"], "content");
        assert_eq!(thread["comments"][0]["username"], "dicoding");

        let (status, body) = app
            .send(
                Method::DELETE,
                "/threads/thread-123/comments/comment-123",
                Some("user-123"),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "success" }));

        let (_, body) = app.send(Method::GET, "/threads/thread-123", None, None).await;
        assert_eq!(
            body["data"]["thread"]["comments"][0]["content"],
            domain::DELETED_COMMENT_PLACEHOLDER
        );
    }

    #[tokio::test]
    async fn test_delete_comment_errors() {
        let app = TestApp::new().await;
        app.seed_thread().await;

        let (status, body) = app
            .send(
                Method::DELETE,
                "/threads/thread-123/comments/comment-123",
                Some("user-456"),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], domain::COMMENT_NOT_FOUND);

        app.seed_comment().await;

        let (status, body) = app
            .send(
                Method::DELETE,
                "/threads/thread-123/comments/comment-123",
                Some("user-456"),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], domain::NOT_COMMENT_OWNER);
    }

    #[tokio::test]
    async fn test_get_missing_thread() {
        let app = TestApp::new().await;
        let (status, body) = app.send(Method::GET, "/threads/thread-000", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "fail");
    }
}
