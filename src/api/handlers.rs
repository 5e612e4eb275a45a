use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::logic::dump::render_dump;
use crate::logic::inventory::{self, InventoryError};
use crate::model::Book;
use crate::store::traits::DatasetStore;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Serves the full dump: every dataset reloaded from storage, remapped and
/// serialized into one JSON document. Bound to every path and method not
/// claimed by another route. Failures return a sanitized 500 body; the
/// details stay in the log.
pub async fn get_dump<S: DatasetStore>(State(store): State<AppState<S>>) -> Response {
    match render_dump(store.as_ref()).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            log::error!("failed to assemble dump: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("failed to assemble dump")),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub instance_id: i64,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub instance_id: i64,
    pub available: bool,
}

pub async fn check_availability<S: DatasetStore>(
    State(store): State<AppState<S>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, (StatusCode, Json<ErrorResponse>)> {
    let available = inventory::check_availability(store.as_ref(), query.instance_id)
        .await
        .map_err(inventory_error)?;

    Ok(Json(AvailabilityResponse {
        instance_id: query.instance_id,
        available,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PublishedBooksQuery {
    pub author_id: i64,
}

#[derive(Debug, Serialize)]
pub struct PublishedBooksResponse {
    pub author_id: i64,
    pub published_books: usize,
}

pub async fn count_published_books<S: DatasetStore>(
    State(store): State<AppState<S>>,
    Query(query): Query<PublishedBooksQuery>,
) -> Result<Json<PublishedBooksResponse>, (StatusCode, Json<ErrorResponse>)> {
    let published_books = inventory::count_published_books(store.as_ref(), query.author_id)
        .await
        .map_err(inventory_error)?;

    Ok(Json(PublishedBooksResponse {
        author_id: query.author_id,
        published_books,
    }))
}

#[derive(Debug, Deserialize)]
pub struct BorrowedBooksQuery {
    pub reader_id: i64,
}

#[derive(Debug, Serialize)]
pub struct BorrowedBooksResponse {
    pub reader_id: i64,
    pub books: Vec<Book>,
}

pub async fn check_borrow_books<S: DatasetStore>(
    State(store): State<AppState<S>>,
    Query(query): Query<BorrowedBooksQuery>,
) -> Result<Json<BorrowedBooksResponse>, (StatusCode, Json<ErrorResponse>)> {
    let books = inventory::borrowed_books(store.as_ref(), query.reader_id)
        .await
        .map_err(inventory_error)?;

    Ok(Json(BorrowedBooksResponse {
        reader_id: query.reader_id,
        books,
    }))
}

/// Missing entities map to 404; storage faults map to a sanitized 500 with
/// the cause logged rather than echoed to the client.
fn inventory_error(err: InventoryError) -> (StatusCode, Json<ErrorResponse>) {
    if err.is_not_found() {
        (StatusCode::NOT_FOUND, Json(ErrorResponse::new(&err.to_string())))
    } else {
        log::error!("inventory query failed: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("storage unavailable")),
        )
    }
}
