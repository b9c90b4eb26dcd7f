//! In-memory stand-in for the content management API.
//!
//! Covers the endpoints the client integration tests drive: channels and
//! channel branching, versioned documents, developer projects, batch export
//! and import, and the public delivery channel listing. Management routes
//! require the configured `x-auth-token`. Versioned resources reject a PUT
//! whose `x-resource-version` does not match the stored one with 409.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const DEFAULT_TOKEN: &str = "mock-token";
const RESOURCE_VERSION: &str = "x-resource-version";
/// Status polls an export answers with `RUNNING` before it completes.
const EXPORT_POLLS_BEFORE_DONE: u32 = 2;
/// Exports of this source path end in `FAILED`.
pub const FAILING_EXPORT_PATH: &str = "/content/documents/broken";

#[derive(Debug, Clone)]
pub struct Versioned {
    pub version: u64,
    pub body: Value,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    pub polls_left: u32,
    pub failed: bool,
    pub payload: Vec<u8>,
}

impl Job {
    fn status(&self) -> &'static str {
        match (self.polls_left, self.failed) {
            (0, true) => "FAILED",
            (0, false) => "COMPLETED",
            _ => "RUNNING",
        }
    }

    fn to_json(&self) -> Value {
        json!({ "id": self.id, "status": self.status() })
    }
}

#[derive(Debug, Default)]
pub struct Store {
    pub channels: HashMap<String, Versioned>,
    pub documents: HashMap<(String, String), Versioned>,
    pub projects: HashMap<String, Value>,
    pub exports: HashMap<String, Job>,
    pub imports: HashMap<String, Job>,
}

#[derive(Clone)]
pub struct AppState {
    pub token: Arc<str>,
    pub store: Arc<RwLock<Store>>,
}

pub fn app() -> Router {
    app_with_token(DEFAULT_TOKEN)
}

pub fn app_with_token(token: &str) -> Router {
    let mut store = Store::default();
    store.channels.insert(
        "reference-spa".to_string(),
        Versioned {
            version: 1,
            body: json!({ "id": "reference-spa", "name": "Reference SPA" }),
        },
    );
    let state = AppState {
        token: Arc::from(token),
        store: Arc::new(RwLock::new(store)),
    };

    let management = Router::new()
        .route("/management/site/v1/channels", get(list_channels).post(branch_channel))
        .route(
            "/management/site/v1/channels/{id}",
            get(get_channel).put(put_channel).delete(delete_channel),
        )
        .route(
            "/management/content/v1/project/{project}/document/{*path}",
            get(get_document).put(put_document).delete(delete_document),
        )
        .route("/management/projects/v1", get(list_projects))
        .route("/management/projects/v1/", post(create_project))
        .route(
            "/management/projects/v1/{id}",
            get(get_project).post(project_post).delete(delete_project),
        )
        .route("/management/content-export/v1/", post(request_export))
        .route("/management/content-export/v1/operations/{id}", get(export_status))
        .route("/management/content-export/v1/operations/{id}/files", get(export_files))
        .route("/management/content-import/v1/", post(request_import))
        .route("/management/content-import/v1/operations/{id}", get(import_status))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .route("/delivery/site/v1/channels", get(list_channels))
        .merge(management)
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get("x-auth-token")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == &*state.token);
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    next.run(request).await
}

fn versioned_response(entry: &Versioned) -> Response {
    let mut resp = Json(entry.body.clone()).into_response();
    if let Ok(v) = HeaderValue::from_str(&entry.version.to_string()) {
        resp.headers_mut().insert(RESOURCE_VERSION, v);
    }
    resp
}

/// Create or update a versioned entry. An update must present the stored
/// version; a creation must not present one.
fn apply_put(
    slot: Option<&mut Versioned>,
    headers: &HeaderMap,
    body: Value,
) -> Result<Option<Versioned>, StatusCode> {
    let presented = headers
        .get(RESOURCE_VERSION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    match slot {
        Some(existing) => {
            if presented.as_deref() != Some(existing.version.to_string().as_str()) {
                return Err(StatusCode::CONFLICT);
            }
            existing.version += 1;
            existing.body = body;
            Ok(None)
        }
        None if presented.is_some() => Err(StatusCode::NOT_FOUND),
        None => Ok(Some(Versioned { version: 1, body })),
    }
}

// --- channels ---

async fn list_channels(State(state): State<AppState>) -> Json<Vec<Value>> {
    let store = state.store.read().await;
    let mut channels: Vec<Value> = store.channels.values().map(|c| c.body.clone()).collect();
    channels.sort_by(|a, b| a["id"].as_str().cmp(&b["id"].as_str()));
    Json(channels)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BranchInput {
    branch: String,
    branch_of: String,
}

async fn branch_channel(
    State(state): State<AppState>,
    Json(input): Json<BranchInput>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let mut store = state.store.write().await;
    let base = store
        .channels
        .get(&input.branch_of)
        .ok_or(StatusCode::NOT_FOUND)?
        .body
        .clone();
    let id = format!("{}-{}", input.branch_of, input.branch);
    if store.channels.contains_key(&id) {
        return Err(StatusCode::CONFLICT);
    }
    let mut body = base;
    body["id"] = json!(id);
    body["branch"] = json!(input.branch);
    body["branchOf"] = json!(input.branch_of);
    store.channels.insert(id, Versioned { version: 1, body: body.clone() });
    Ok((StatusCode::CREATED, Json(body)))
}

async fn get_channel(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, StatusCode> {
    let store = state.store.read().await;
    store.channels.get(&id).map(versioned_response).ok_or(StatusCode::NOT_FOUND)
}

async fn put_channel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Response, StatusCode> {
    let mut store = state.store.write().await;
    // Channels are created by branching, never by PUT.
    let slot = store.channels.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    apply_put(Some(&mut *slot), &headers, body)?;
    Ok(versioned_response(slot))
}

async fn delete_channel(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let mut store = state.store.write().await;
    let is_branch = store
        .channels
        .get(&id)
        .is_some_and(|c| c.body.get("branchOf").is_some());
    if !is_branch {
        // Only project branches can be deleted.
        return if store.channels.contains_key(&id) { StatusCode::BAD_REQUEST } else { StatusCode::NOT_FOUND };
    }
    store.channels.remove(&id);
    StatusCode::NO_CONTENT
}

// --- documents ---

async fn get_document(
    State(state): State<AppState>,
    Path((project, path)): Path<(String, String)>,
) -> Result<Response, StatusCode> {
    let store = state.store.read().await;
    store
        .documents
        .get(&(project, path))
        .map(versioned_response)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn put_document(
    State(state): State<AppState>,
    Path((project, path)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Response, StatusCode> {
    let mut store = state.store.write().await;
    let key = (project, path);
    match apply_put(store.documents.get_mut(&key), &headers, body)? {
        Some(created) => {
            let mut resp = versioned_response(&created);
            *resp.status_mut() = StatusCode::CREATED;
            store.documents.insert(key, created);
            Ok(resp)
        }
        None => store
            .documents
            .get(&key)
            .map(versioned_response)
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

async fn delete_document(
    State(state): State<AppState>,
    Path((project, path)): Path<(String, String)>,
) -> StatusCode {
    let mut store = state.store.write().await;
    store
        .documents
        .remove(&(project, path))
        .map(|_| StatusCode::NO_CONTENT)
        .unwrap_or(StatusCode::NOT_FOUND)
}

// --- projects ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectInput {
    name: String,
    #[serde(default)]
    include_content_types: bool,
    #[serde(default)]
    description: String,
}

async fn list_projects(State(state): State<AppState>) -> Json<Vec<Value>> {
    let store = state.store.read().await;
    Json(store.projects.values().cloned().collect())
}

async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> (StatusCode, Json<Value>) {
    let id: String = Uuid::new_v4().simple().to_string().chars().take(5).collect();
    let project = json!({
        "id": id,
        "name": input.name,
        "includeContentTypes": input.include_content_types,
        "description": input.description,
        "state": { "status": "IN_PROGRESS", "availableActions": ["MERGE", "DELETE"] },
        "items": null,
    });
    state.store.write().await.projects.insert(id, project.clone());
    (StatusCode::CREATED, Json(project))
}

async fn get_project(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let store = state.store.read().await;
    store.projects.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// POST on a project is an update, or an action when addressed as `{id}:{action}`.
async fn project_post(
    State(state): State<AppState>,
    Path(target): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, StatusCode> {
    let mut store = state.store.write().await;
    let (id, action) = match target.split_once(':') {
        Some((id, action)) => (id.to_string(), Some(action.to_string())),
        None => (target.clone(), None),
    };
    let project = store.projects.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    match action.as_deref() {
        None => {
            let input: ProjectInput =
                serde_json::from_slice(&body).map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
            project["name"] = json!(input.name);
            project["includeContentTypes"] = json!(input.include_content_types);
            project["description"] = json!(input.description);
        }
        Some("merge") => project["state"]["status"] = json!("MERGED"),
        Some("rebase") => project["state"]["status"] = json!("IN_PROGRESS"),
        Some("reopen") => project["state"]["status"] = json!("IN_PROGRESS"),
        Some(_) => return Err(StatusCode::BAD_REQUEST),
    }
    Ok(Json(project.clone()))
}

async fn delete_project(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let mut store = state.store.write().await;
    store
        .projects
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .unwrap_or(StatusCode::NOT_FOUND)
}

// --- batch export / import ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportInput {
    data_types: Vec<String>,
    source_path: String,
    branch: String,
}

async fn request_export(
    State(state): State<AppState>,
    Json(input): Json<ExportInput>,
) -> (StatusCode, Json<Value>) {
    let manifest = json!({
        "sourcePath": input.source_path,
        "branch": input.branch,
        "dataTypes": input.data_types,
    });
    let job = Job {
        id: Uuid::new_v4().to_string(),
        polls_left: EXPORT_POLLS_BEFORE_DONE,
        failed: input.source_path == FAILING_EXPORT_PATH,
        payload: manifest.to_string().into_bytes(),
    };
    let body = job.to_json();
    state.store.write().await.exports.insert(job.id.clone(), job);
    (StatusCode::CREATED, Json(body))
}

async fn export_status(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let mut store = state.store.write().await;
    let job = store.exports.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let body = job.to_json();
    job.polls_left = job.polls_left.saturating_sub(1);
    Ok(Json(body))
}

async fn export_files(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let store = state.store.read().await;
    match store.exports.get(&id) {
        None => StatusCode::NOT_FOUND.into_response(),
        Some(job) if job.polls_left > 0 => StatusCode::CONFLICT.into_response(),
        Some(job) if job.failed => StatusCode::GONE.into_response(),
        Some(job) => (
            [(header::CONTENT_TYPE, "application/octet-stream")],
            job.payload.clone(),
        )
            .into_response(),
    }
}

async fn request_import(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<Value>) {
    let job = Job {
        id: Uuid::new_v4().to_string(),
        polls_left: 0,
        failed: false,
        payload: body.to_vec(),
    };
    let mut resp = job.to_json();
    resp["size"] = json!(job.payload.len());
    state.store.write().await.imports.insert(job.id.clone(), job);
    (StatusCode::CREATED, Json(resp))
}

async fn import_status(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let store = state.store.read().await;
    store.imports.get(&id).map(|j| Json(j.to_json())).ok_or(StatusCode::NOT_FOUND)
}
