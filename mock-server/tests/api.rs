use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, DEFAULT_TOKEN};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authed(method: &str, uri: &str) -> http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-auth-token", DEFAULT_TOKEN)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<String> {
    authed(method, uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

// --- auth ---

#[tokio::test]
async fn management_requires_token() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/management/site/v1/channels")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_token_is_rejected() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/management/site/v1/channels")
                .header("x-auth-token", "nope")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delivery_channels_are_public() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/delivery/site/v1/channels")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let channels = body_json(resp).await;
    assert_eq!(channels[0]["id"], "reference-spa");
}

// --- channels ---

#[tokio::test]
async fn get_channel_returns_resource_version() {
    let resp = app()
        .oneshot(authed("GET", "/management/site/v1/channels/reference-spa").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-resource-version"], "1");
}

#[tokio::test]
async fn put_channel_with_stale_version_conflicts() {
    let app = app();
    let mut req = json_request("PUT", "/management/site/v1/channels/reference-spa", &json!({"id": "reference-spa"}));
    req.headers_mut().insert("x-resource-version", "0".parse().unwrap());
    assert_eq!(send(&app, req).await.status(), StatusCode::CONFLICT);

    let mut req = json_request("PUT", "/management/site/v1/channels/reference-spa", &json!({"id": "reference-spa"}));
    req.headers_mut().insert("x-resource-version", "1".parse().unwrap());
    let resp = send(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-resource-version"], "2");
}

#[tokio::test]
async fn branch_then_delete_channel() {
    let app = app();
    let resp = send(
        &app,
        json_request("POST", "/management/site/v1/channels", &json!({"branch": "p1", "branchOf": "reference-spa"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["id"], "reference-spa-p1");

    let resp = send(&app, authed("DELETE", "/management/site/v1/channels/reference-spa-p1").body(String::new()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, authed("DELETE", "/management/site/v1/channels/reference-spa").body(String::new()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn branch_of_unknown_channel_is_404() {
    let resp = app()
        .oneshot(json_request("POST", "/management/site/v1/channels", &json!({"branch": "p1", "branchOf": "missing"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- documents ---

#[tokio::test]
async fn document_create_then_versioned_update() {
    let app = app();
    let uri = "/management/content/v1/project/p1/document/content/documents/a";

    let resp = send(&app, json_request("PUT", uri, &json!({"name": "a"}))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers()["x-resource-version"], "1");

    // second PUT without a version is a stale write
    let resp = send(&app, json_request("PUT", uri, &json!({"name": "b"}))).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let mut req = json_request("PUT", uri, &json!({"name": "b"}));
    req.headers_mut().insert("x-resource-version", "1".parse().unwrap());
    let resp = send(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["name"], "b");

    let resp = send(&app, authed("DELETE", uri).body(String::new()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = send(&app, authed("GET", uri).body(String::new()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- projects ---

#[tokio::test]
async fn project_lifecycle() {
    let app = app();
    let resp = send(&app, json_request("POST", "/management/projects/v1/", &json!({"name": "Spring"}))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let project = body_json(resp).await;
    let id = project["id"].as_str().unwrap().to_string();
    assert_eq!(project["includeContentTypes"], false);

    let resp = send(&app, json_request("POST", &format!("/management/projects/v1/{id}:merge"), &json!({"approveAllChanges": true}))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["state"]["status"], "MERGED");

    let resp = send(&app, authed("POST", &format!("/management/projects/v1/{id}:explode")).body(String::new()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = send(&app, authed("DELETE", &format!("/management/projects/v1/{id}")).body(String::new()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, authed("GET", &format!("/management/projects/v1/{id}")).body(String::new()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn project_update_with_bad_body_is_422() {
    let app = app();
    let resp = send(&app, json_request("POST", "/management/projects/v1/", &json!({"name": "Spring"}))).await;
    let id = body_json(resp).await["id"].as_str().unwrap().to_string();
    let resp = send(&app, json_request("POST", &format!("/management/projects/v1/{id}"), &json!({"nope": 1}))).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- export ---

#[tokio::test]
async fn export_runs_then_serves_files() {
    let app = app();
    let resp = send(
        &app,
        json_request(
            "POST",
            "/management/content-export/v1/",
            &json!({"dataTypes": ["page"], "sourcePath": "/content/documents", "branch": "core"}),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = body_json(resp).await["id"].as_str().unwrap().to_string();
    let status_uri = format!("/management/content-export/v1/operations/{id}");
    let files_uri = format!("{status_uri}/files");

    let resp = send(&app, authed("GET", &files_uri).body(String::new()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let mut statuses = Vec::new();
    for _ in 0..3 {
        let resp = send(&app, authed("GET", &status_uri).body(String::new()).unwrap()).await;
        statuses.push(body_json(resp).await["status"].as_str().unwrap().to_string());
    }
    assert_eq!(statuses, vec!["RUNNING", "RUNNING", "COMPLETED"]);

    let resp = send(&app, authed("GET", &files_uri).body(String::new()).unwrap()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let manifest: Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(manifest["sourcePath"], "/content/documents");
}

#[tokio::test]
async fn unknown_operation_is_404() {
    let resp = app()
        .oneshot(authed("GET", "/management/content-import/v1/operations/missing").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
