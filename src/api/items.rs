//! HTTP handlers for the item service.
//!
//! Items are addressed by their current position in the list. Deleting an
//! item moves every later item down one index, so an index a client read
//! earlier may now name a different item.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use utoipa::{IntoParams, OpenApi, ToSchema};

use super::ApiError;
use crate::models::{Category, Item};
use crate::store::ItemStore;

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>WellNest Items - API docs</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "WellNest Items",
        description = "Categorized wellness items, addressed by list position.",
        version = "0.3.0"
    ),
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(schemas(Item, Category, DeletedItem, ErrorDetail))
)]
pub struct ItemApiDoc;

pub fn create_item_router(store: ItemStore) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/docs", get(docs))
        .route("/openapi.json", get(openapi))
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/{index}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    /// Only return items in this category.
    pub category: Option<Category>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedItem {
    pub deleted: Item,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

async fn root() -> Redirect {
    Redirect::temporary("/docs")
}

async fn docs() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ItemApiDoc::openapi())
}

#[utoipa::path(
    get,
    path = "/items/",
    params(ItemQuery),
    responses(
        (status = 200, description = "Items in list order", body = [Item]),
        (status = 422, description = "Unknown category", body = ErrorDetail)
    )
)]
async fn list_items(
    State(store): State<ItemStore>,
    query: Result<Query<ItemQuery>, QueryRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    Ok(Json(store.list_items(query.category)?))
}

/// Responds with the entire list, not just the new item.
#[utoipa::path(
    post,
    path = "/items/",
    request_body = Item,
    responses(
        (status = 201, description = "All items after the insert", body = [Item]),
        (status = 422, description = "Invalid item", body = ErrorDetail)
    )
)]
async fn create_item(
    State(store): State<ItemStore>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let Json(item) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    tracing::info!(category = item.category.as_str(), "Creating item");
    Ok((StatusCode::CREATED, Json(store.create_item(item)?)))
}

#[utoipa::path(
    get,
    path = "/items/{index}",
    params(("index" = i64, Path, description = "Zero-based list position")),
    responses(
        (status = 200, description = "The item at this position", body = Item),
        (status = 404, description = "Item not found", body = ErrorDetail)
    )
)]
async fn get_item(
    State(store): State<ItemStore>,
    index: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(index) = index?;
    let item = position(index)
        .map(|index| store.get_item(index))
        .transpose()?
        .flatten()
        .ok_or(ApiError::ItemNotFound)?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/items/{index}",
    params(("index" = i64, Path, description = "Zero-based list position")),
    request_body = Item,
    responses(
        (status = 200, description = "The replaced item", body = Item),
        (status = 404, description = "Item not found", body = ErrorDetail),
        (status = 422, description = "Invalid item", body = ErrorDetail)
    )
)]
async fn update_item(
    State(store): State<ItemStore>,
    index: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(index) = index?;
    let Json(item) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let updated = position(index)
        .map(|index| store.update_item(index, item))
        .transpose()?
        .flatten()
        .ok_or(ApiError::ItemNotFound)?;
    tracing::info!(index, "Updated item");
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/items/{index}",
    params(("index" = i64, Path, description = "Zero-based list position")),
    responses(
        (status = 200, description = "The removed item", body = DeletedItem),
        (status = 404, description = "Item not found", body = ErrorDetail)
    )
)]
async fn delete_item(
    State(store): State<ItemStore>,
    index: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedItem>, ApiError> {
    let Path(index) = index?;
    let deleted = position(index)
        .map(|index| store.delete_item(index))
        .transpose()?
        .flatten()
        .ok_or(ApiError::ItemNotFound)?;
    tracing::info!(index, "Deleted item");
    Ok(Json(DeletedItem { deleted }))
}

/// Negative indices never name an item.
fn position(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}
