//! HTTP handlers for the task service.

use askama::Template;
use axum::{
    extract::{rejection::PathRejection, DefaultBodyLimit, Path, Query, State},
    response::Html,
    routing::{get, post, put},
    Json, Router,
};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::form::{TaskForm, Upload};
use super::ApiError;
use crate::models::{Analytics, ShowFilter, SortOrder, Task, TaskQuery};
use crate::store::TaskStore;
use crate::uploads::{UploadStore, UPLOADS_ROUTE};

pub const QUOTES: [&str; 7] = [
    "Small daily improvements are the key to staggering long-term results.",
    "Wellness is the natural state of my body.",
    "Every day is a fresh start.",
    "You are stronger than you think.",
    "Progress, not perfection.",
    "Consistency is more important than intensity.",
    "Take care of your body. It's the only place you have to live.",
];

/// The front-end page, rendered with a quote of the day.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    quote: &'static str,
}

#[derive(Clone)]
pub struct TaskState {
    pub store: TaskStore,
    pub uploads: UploadStore,
}

pub fn create_task_router(store: TaskStore, uploads: UploadStore) -> Router {
    let serve_uploads = ServeDir::new(uploads.dir());
    let state = TaskState { store, uploads };

    Router::new()
        .route("/", get(index))
        .route("/tasks/", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .route("/tasks/{id}/complete", post(complete_task))
        .route("/analytics/", get(analytics))
        .route("/quote/", get(quote))
        .nest_service(UPLOADS_ROUTE, serve_uploads)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Raw query string. Empty values count as absent and unknown `show` or
/// `sort` values fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub show: Option<String>,
}

impl From<ListTasksParams> for TaskQuery {
    fn from(params: ListTasksParams) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        TaskQuery {
            category: non_empty(params.category),
            search: non_empty(params.search),
            sort: params.sort.as_deref().and_then(SortOrder::from_str),
            show: params
                .show
                .as_deref()
                .and_then(ShowFilter::from_str)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
}

async fn list_tasks(
    State(state): State<TaskState>,
    Query(params): Query<ListTasksParams>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let query = TaskQuery::from(params);
    tracing::debug!(
        show = query.show.as_str(),
        sort = query.sort.map(|s| s.as_str()),
        "Listing tasks"
    );
    Ok(Json(state.store.list_tasks(&query)?))
}

async fn create_task(
    State(state): State<TaskState>,
    form: TaskForm,
) -> Result<Json<Task>, ApiError> {
    let (input, file) = form.into_parts();
    let id = state.store.reserve_id()?;
    let file = store_upload(&state.uploads, id, file).await?;

    let task = state.store.insert_task(id, input, file)?;
    tracing::info!(id = task.id, category = %task.category, "Created task");
    Ok(Json(task))
}

async fn update_task(
    State(state): State<TaskState>,
    id: Result<Path<i64>, PathRejection>,
    form: TaskForm,
) -> Result<Json<Task>, ApiError> {
    let id = task_id(id)?;
    let (input, file) = form.into_update();
    if file.is_some() && state.store.get_task(id)?.is_none() {
        return Err(not_found(id));
    }
    let file = store_upload(&state.uploads, id, file).await?;

    let task = state
        .store
        .update_task(id, input, file)?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Updated task");
    Ok(Json(task))
}

async fn complete_task(
    State(state): State<TaskState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let id = task_id(id)?;
    let task = state
        .store
        .complete_task(id)?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Completed task");
    Ok(Json(task))
}

async fn delete_task(
    State(state): State<TaskState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = task_id(id)?;
    if !state.store.delete_task(id)? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Deleted task");
    Ok(Json(DeletedResponse { deleted: true }))
}

async fn analytics(State(state): State<TaskState>) -> Result<Json<Analytics>, ApiError> {
    Ok(Json(state.store.analytics()?))
}

async fn quote() -> Json<QuoteResponse> {
    Json(QuoteResponse {
        quote: random_quote().to_string(),
    })
}

async fn index() -> Result<Html<String>, ApiError> {
    let page = IndexTemplate {
        quote: random_quote(),
    }
    .render()
    .map_err(anyhow::Error::from)?;
    Ok(Html(page))
}

fn random_quote() -> &'static str {
    QUOTES.choose(&mut rand::rng()).copied().unwrap_or(QUOTES[0])
}

/// Ids are never negative, so a negative segment names no task.
fn task_id(id: Result<Path<i64>, PathRejection>) -> Result<u64, ApiError> {
    let Path(id) = id?;
    u64::try_from(id).map_err(|_| {
        tracing::debug!(id, "Task not found");
        ApiError::TaskNotFound
    })
}

fn not_found(id: u64) -> ApiError {
    tracing::debug!(id, "Task not found");
    ApiError::TaskNotFound
}

async fn store_upload(
    uploads: &UploadStore,
    id: u64,
    file: Option<Upload>,
) -> Result<Option<String>, ApiError> {
    match file {
        Some(upload) => Ok(Some(uploads.save(id, &upload.filename, &upload.bytes).await?)),
        None => Ok(None),
    }
}
