pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::prompts::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/prompts", get(handlers::handle_list_prompts))
        .route("/prompt", post(handlers::handle_create_prompt))
        .route(
            "/prompt/:id",
            put(handlers::handle_update_prompt).delete(handlers::handle_delete_prompt),
        )
        .route("/create-seed-data", post(handlers::handle_create_seed_data))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::store::InMemoryPromptStore;

    fn app() -> Router {
        build_router(AppState {
            store: Arc::new(InMemoryPromptStore::new()),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_create_update_delete_flow() {
        let app = app();

        let (status, created) = send(
            &app,
            Method::POST,
            "/prompt",
            Some(json!({
                "prompt": "p",
                "promptTitle": "t",
                "promptDescription": "d",
                "createdBy": "Alice"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["lastUpdatedBy"], "Alice");
        assert_eq!(created["createdDateTime"], created["lastUpdatedDateTime"]);
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/prompt/{id}"),
            Some(json!({ "updatedBy": "Bob", "promptTitle": "t2" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["promptTitle"], "t2");
        assert_eq!(updated["prompt"], "p");
        assert_eq!(updated["lastUpdatedBy"], "Bob");
        assert_eq!(updated["createdBy"], "Alice");

        let (status, body) = send(&app, Method::DELETE, &format!("/prompt/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, list) = send(&app, Method::GET, "/prompts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(list
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["id"] != json!(id)));
    }

    #[tokio::test]
    async fn test_create_with_missing_field_is_unprocessable() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/prompt",
            Some(json!({ "prompt": "p", "promptTitle": "t", "promptDescription": "d" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_create_with_wrong_type_is_unprocessable() {
        let (status, _) = send(
            &app(),
            Method::POST,
            "/prompt",
            Some(json!({
                "prompt": 1,
                "promptTitle": "t",
                "promptDescription": "d",
                "createdBy": "Alice"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_without_updater_is_forbidden() {
        let app = app();
        let (_, created) = send(
            &app,
            Method::POST,
            "/prompt",
            Some(json!({
                "prompt": "p",
                "promptTitle": "t",
                "promptDescription": "d",
                "createdBy": "Alice"
            })),
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/prompt/{id}"),
            Some(json!({ "id": id, "promptTitle": "t2" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["message"], "User missing from request");
    }

    #[tokio::test]
    async fn test_update_uses_path_id_over_body_id() {
        let app = app();
        let (_, created) = send(
            &app,
            Method::POST,
            "/prompt",
            Some(json!({
                "prompt": "p",
                "promptTitle": "t",
                "promptDescription": "d",
                "createdBy": "Alice"
            })),
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/prompt/{id}"),
            Some(json!({ "id": id.to_uppercase(), "updatedBy": "Bob", "promptTitle": "t2" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], json!(id));
        assert_eq!(updated["promptTitle"], "t2");
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id_are_not_found() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::PUT,
            "/prompt/does-not-exist",
            Some(json!({ "updatedBy": "Bob" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/prompt/does-not-exist", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_seed_data_creates_requested_count() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/create-seed-data?num_records=5", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "5 prompts created successfully");

        let (_, list) = send(&app, Method::GET, "/prompts", None).await;
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 5);
        for p in list {
            assert_eq!(p["createdDateTime"], p["lastUpdatedDateTime"]);
        }
    }

    #[tokio::test]
    async fn test_seed_data_defaults_to_ten() {
        let (status, body) = send(&app(), Method::POST, "/create-seed-data", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "10 prompts created successfully");
    }

    #[tokio::test]
    async fn test_seed_data_rejects_bad_counts() {
        let app = app();
        for uri in [
            "/create-seed-data?num_records=0",
            "/create-seed-data?num_records=101",
            "/create-seed-data?num_records=lots",
        ] {
            let (status, body) = send(&app, Method::POST, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_health_reports_store() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "ok");
    }
}
