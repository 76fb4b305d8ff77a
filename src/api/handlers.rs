use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::pages;
use crate::error::ViewerError;
use crate::loader::{load, load_page, Loaded, PageData};
use crate::routing::Route;
use crate::source::CacheSource;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint. Does not contact the cache server.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub upstream: String,
}

pub async fn health_check<S: CacheSource>(State(source): State<AppState<S>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        upstream: source.origin(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl ErrorResponse {
    pub fn new(message: &str, kind: &str) -> Self {
        Self {
            error: message.to_string(),
            kind: kind.to_string(),
        }
    }
}

/// Resolve a browser path. Paths that do not name a chapter or op are 404.
fn route_at(path: &str) -> Result<Route, ViewerError> {
    Route::parse(path).ok_or_else(|| ViewerError::NoSuchPage(path.to_string()))
}

// GET /, /:ch and /:ch/:op
pub async fn page<S: CacheSource>(
    State(source): State<AppState<S>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, ViewerError> {
    let route = route_at(uri.path())?;
    match load(source.as_ref(), route).await? {
        Loaded::Redirect { to, .. } => Ok(Redirect::to(&to.path()).into_response()),
        Loaded::Page(data) => Ok(pages::render_op_page(&data)?.into_response()),
    }
}

// GET /:ch/:op/data.json
pub async fn op_page_data<S: CacheSource>(
    State(source): State<AppState<S>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<PageData>, (StatusCode, Json<ErrorResponse>)> {
    let route = uri
        .path()
        .strip_suffix("/data.json")
        .and_then(Route::parse);
    let (ch, op) = match route {
        Some(Route::Op { ch, op }) => (ch, op),
        _ => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("no such page", "no_such_page")),
            ))
        }
    };

    load_page(source.as_ref(), ch, op).await.map(Json).map_err(|e| {
        (
            e.source.status_code(),
            Json(ErrorResponse::new(&e.to_string(), e.source.kind())),
        )
    })
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> ViewerError {
    ViewerError::NoSuchPage(uri.path().to_string())
}
