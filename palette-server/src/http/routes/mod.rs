//! Route handlers organized by resource

pub mod palettes;
pub mod projects;

use axum::Router;

use super::server::AppState;

/// API routes: /api/v1/*
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(projects::router())
        .merge(palettes::router())
}

/// Row id from a path segment. Anything that isn't an `i32` can't match a row.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db::memory::MemoryStore;
    use crate::http::{build_router, AppState};

    fn app() -> Router {
        build_router(AppState::new(Arc::new(MemoryStore::new())))
    }

    fn failing_app() -> Router {
        build_router(AppState::new(Arc::new(MemoryStore::failing())))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
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

    fn palette_body(name: &str, project_id: Option<i64>) -> Value {
        let mut body = json!({
            "palette_name": name,
            "color1": "#ff0000",
            "color2": "#00ff00",
            "color3": "#0000ff",
            "color4": "#ffff00",
            "color5": "#00ffff"
        });
        if let Some(id) = project_id {
            body["project_id"] = json!(id);
        }
        body
    }

    async fn create_project(app: &Router, name: &str) -> i64 {
        let (status, body) = send(app, "POST", "/api/v1/projects", Some(json!({ "project_name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    // === Projects ===

    #[tokio::test]
    async fn list_projects_starts_empty() {
        let (status, body) = send(&app(), "GET", "/api/v1/projects", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn create_project_returns_id_and_name() {
        let app = app();
        let (status, body) =
            send(&app, "POST", "/api/v1/projects", Some(json!({ "project_name": "Sunset" }))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["id"].is_i64());
        assert_eq!(body["project_name"], "Sunset");

        let (_, listed) = send(&app, "GET", "/api/v1/projects", None).await;
        assert_eq!(listed, json!([body]));
    }

    #[tokio::test]
    async fn create_project_requires_name() {
        let app = app();
        for body in [
            json!({}),
            json!({ "project_name": "" }),
            json!({ "project_name": null }),
            json!({ "project_name": 0 }),
            json!({ "project_name": false }),
        ] {
            let (status, response) = send(&app, "POST", "/api/v1/projects", Some(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(
                response["error"],
                "Expected format: { project_name: <String> }. You are missing a \"project_name\" property."
            );
        }
    }

    #[tokio::test]
    async fn create_project_without_json_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/projects")
            .header("content-type", "text/plain")
            .body(Body::from("project_name=Sunset"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_project_rejects_broken_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/projects")
            .header("content-type", "application/json")
            .body(Body::from("{\"project_name\": "))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_project_rejects_wrong_type() {
        let (status, body) =
            send(&app(), "POST", "/api/v1/projects", Some(json!({ "project_name": 12 }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn get_project_by_id() {
        let app = app();
        let id = create_project(&app, "Sunset").await;

        let (status, body) = send(&app, "GET", &format!("/api/v1/projects/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": id, "project_name": "Sunset" }]));
    }

    #[tokio::test]
    async fn get_missing_project_is_404() {
        let (status, body) = send(&app(), "GET", "/api/v1/projects/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Could not find project with id 999999");
    }

    #[tokio::test]
    async fn non_numeric_project_id_is_404() {
        let (status, body) = send(&app(), "GET", "/api/v1/projects/abc", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Could not find project with id abc");
    }

    // === Palettes ===

    #[tokio::test]
    async fn create_palette_echoes_fields_without_project_id() {
        let app = app();
        let project_id = create_project(&app, "Sunset").await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/palettes",
            Some(palette_body("Warm", Some(project_id))),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["id"].is_i64());
        assert_eq!(body["palette_name"], "Warm");
        assert_eq!(body["color5"], "#00ffff");
        assert!(body.get("project_id").is_none());

        let (_, listed) = send(&app, "GET", "/api/v1/palettes", None).await;
        assert_eq!(listed[0]["project_id"], project_id);
    }

    #[tokio::test]
    async fn create_palette_names_first_missing_field() {
        let app = app();
        let fields = ["palette_name", "color1", "color2", "color3", "color4", "color5"];

        for (i, field) in fields.iter().enumerate() {
            let mut body = palette_body("Warm", None);
            // Blank this field and everything after it; the first one is reported.
            for later in &fields[i..] {
                body[*later] = json!("");
            }

            let (status, response) = send(&app, "POST", "/api/v1/palettes", Some(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

            let message = response["error"].as_str().unwrap();
            assert!(message.starts_with("Expected format: { palette_name: <String>, color1: <String>"));
            assert!(message.ends_with(&format!("You are missing a \"{field}\" property.")));
        }
    }

    #[tokio::test]
    async fn create_palette_store_rejection_is_500() {
        // The in-memory store refuses unknown projects with a generic error;
        // the Postgres foreign key body is covered by
        // `unknown_project_violates_foreign_key` in the repo tests.
        let (status, body) = send(
            &app(),
            "POST",
            "/api/v1/palettes",
            Some(palette_body("Orphan", Some(424242))),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_object());
    }

    #[tokio::test]
    async fn create_palette_accepts_string_project_id() {
        let app = app();
        let project_id = create_project(&app, "Forms").await;

        let mut body = palette_body("Select", None);
        body["project_id"] = json!(project_id.to_string());

        let (status, created) = send(&app, "POST", "/api/v1/palettes", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["palette_name"], "Select");

        let (status, listed) =
            send(&app, "GET", &format!("/api/v1/projects/{project_id}/palettes"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed[0]["id"], created["id"]);
        assert_eq!(listed[0]["project_id"], project_id);
    }

    #[tokio::test]
    async fn create_palette_rejects_scalar_body() {
        let (status, body) = send(&app(), "POST", "/api/v1/palettes", Some(json!(null))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn delete_palette_then_absent_from_list() {
        let app = app();
        let (_, created) = send(&app, "POST", "/api/v1/palettes", Some(palette_body("Gone", None))).await;
        let id = created["id"].as_i64().unwrap();

        let (status, body) = send(&app, "DELETE", &format!("/api/v1/palettes/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (_, listed) = send(&app, "GET", "/api/v1/palettes", None).await;
        assert_eq!(listed, json!([]));

        let (status, body) = send(&app, "DELETE", &format!("/api/v1/palettes/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], format!("Could not find palette with id {id}"));
    }

    #[tokio::test]
    async fn delete_missing_palette_is_404() {
        let (status, body) = send(&app(), "DELETE", "/api/v1/palettes/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Could not find palette with id 999999");
    }

    #[tokio::test]
    async fn project_palettes_no_cross_project_leakage() {
        let app = app();
        let mine = create_project(&app, "Mine").await;
        let other = create_project(&app, "Other").await;

        for name in ["A", "B"] {
            send(&app, "POST", "/api/v1/palettes", Some(palette_body(name, Some(mine)))).await;
        }
        send(&app, "POST", "/api/v1/palettes", Some(palette_body("C", Some(other)))).await;

        let (status, body) = send(&app, "GET", &format!("/api/v1/projects/{mine}/palettes"), None).await;
        assert_eq!(status, StatusCode::OK);

        let palettes = body.as_array().unwrap();
        assert_eq!(palettes.len(), 2);
        assert!(palettes.iter().all(|p| p["project_id"] == mine));
    }

    #[tokio::test]
    async fn project_without_palettes_is_404() {
        let app = app();
        let id = create_project(&app, "Empty").await;

        let (status, body) = send(&app, "GET", &format!("/api/v1/projects/{id}/palettes"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], format!("Could not find palette with id {id}"));
    }

    #[tokio::test]
    async fn repeated_reads_are_stable() {
        let app = app();
        let id = create_project(&app, "Stable").await;
        send(&app, "POST", "/api/v1/palettes", Some(palette_body("P", Some(id)))).await;

        for uri in [
            "/api/v1/projects".to_string(),
            "/api/v1/palettes".to_string(),
            format!("/api/v1/projects/{id}"),
            format!("/api/v1/projects/{id}/palettes"),
        ] {
            let first = send(&app, "GET", &uri, None).await;
            let second = send(&app, "GET", &uri, None).await;
            assert_eq!(first, second, "{uri}");
        }
    }

    // === Persistence failures ===

    #[tokio::test]
    async fn persistence_failures_are_500() {
        let app = failing_app();
        let requests = [
            ("GET", "/api/v1/projects", None),
            ("POST", "/api/v1/projects", Some(json!({ "project_name": "X" }))),
            ("GET", "/api/v1/projects/1", None),
            ("GET", "/api/v1/palettes", None),
            ("POST", "/api/v1/palettes", Some(palette_body("X", None))),
            ("DELETE", "/api/v1/palettes/1", None),
            ("GET", "/api/v1/projects/1/palettes", None),
        ];

        for (method, uri, body) in requests {
            let (status, response) = send(&app, method, uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
            assert!(response["error"]["message"].is_string(), "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn validation_runs_before_persistence() {
        let (status, _) = send(&failing_app(), "POST", "/api/v1/projects", Some(json!({}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
