//! Request handlers
//!
//! Thin adapters between HTTP and the record store. No handler holds a
//! store guard across an `.await`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use super::extract::RecordId;
use crate::error::{Result, SodaError};
use crate::record::{NewRecord, Record};
use crate::store::{RecordStore, WriteOutcome};

/// POST / : create or fully replace the record named by the body's `id`
pub async fn create_record(
    State(store): State<Arc<RecordStore>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode> {
    if !has_record_content_type(&headers) {
        return Err(SodaError::RouteNotFound);
    }

    let new_record = NewRecord::from_json(&body).inspect_err(|e| {
        tracing::error!(error = %e, input = %String::from_utf8_lossy(&body), "Couldn't decode input.");
    })?;

    let id = new_record.id;
    match store.upsert(new_record) {
        WriteOutcome::Inserted => tracing::info!(id, "Added the record."),
        WriteOutcome::Replaced => tracing::info!(id, "Updated the record."),
    }

    Ok(StatusCode::OK)
}

/// GET / : every record id, in no particular order
pub async fn list_records(State(store): State<Arc<RecordStore>>) -> Json<Vec<u64>> {
    let ids = store.read().list();
    Json(ids)
}

/// GET /{id}
pub async fn get_record(
    State(store): State<Arc<RecordStore>>,
    RecordId(id): RecordId,
) -> Result<Json<Record>> {
    let record = store.read().get(id).cloned().inspect_err(|_| {
        tracing::debug!(id, "Couldn't find the record ID.");
    })?;

    Ok(Json(record))
}

/// DELETE /{id}
pub async fn delete_record(
    State(store): State<Arc<RecordStore>>,
    RecordId(id): RecordId,
) -> Result<StatusCode> {
    store.write().delete(id).inspect_err(|_| {
        tracing::debug!(id, "Couldn't find the record ID.");
    })?;

    tracing::info!(id, "Deleted the record.");
    Ok(StatusCode::OK)
}

/// Fallback for requests no route matches
pub async fn not_found() -> SodaError {
    SodaError::RouteNotFound
}

/// `application/json` or `application/text` anywhere in Content-Type
fn has_record_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value.contains("application/json") || value.contains("application/text")
        })
}
