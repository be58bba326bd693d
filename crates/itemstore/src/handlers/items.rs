//! Item submission handler.
//!
//! The one write path: validate the payload, stamp it, hand it to the store.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use itemstore_core::item::SubmitItem;

use crate::state::AppState;

/// Submit an item (POST /item).
///
/// Returns 200 once the record is stored, 400 when `id` or `data` is
/// missing or empty, and 500 when the store rejects the write. Store
/// failures are logged for operator diagnosis and never exposed in the
/// response body.
#[axum::debug_handler]
pub async fn submit_item(
    State(state): State<AppState>,
    payload: Result<Json<SubmitItem>, JsonRejection>,
) -> Response {
    // A body that is not a JSON object of the expected shape is treated the
    // same as one with missing fields.
    let Ok(Json(payload)) = payload else {
        return validation_failure();
    };

    let record = match payload.validate() {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(error = %err, "Rejected item submission");
            return validation_failure();
        }
    };

    match state.store.put_item(&record).await {
        Ok(()) => {
            tracing::info!(id = %record.id, "Item added");
            (
                StatusCode::OK,
                Json(json!({ "message": "Item added successfully!" })),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(id = %record.id, error = %err, "Error adding item");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to add item." })),
            )
                .into_response()
        }
    }
}

fn validation_failure() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Both id and data are required." })),
    )
        .into_response()
}
