//! HTTP Module
//!
//! Routes requests to handlers that drive the record store.
//!
//! ## Routes
//! ```text
//! POST   /       create or replace a record (Content-Type: application/{json,text})
//! GET    /       list record ids
//! GET    /{id}   fetch one record
//! DELETE /{id}   delete one record
//! ```
//!
//! Routes are scoped to one host and the `http` scheme. Methods match
//! exactly (HEAD is not GET). Anything that does not match gets a plain
//! `404 page not found`. Request bodies are not size limited.

mod extract;
mod guard;
mod handlers;
mod response;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::store::RecordStore;

pub use extract::RecordId;
pub use guard::RoutedHost;
pub use handlers::{create_record, delete_record, get_record, list_records, not_found};
pub use response::INVALID_ID_MESSAGE;

/// Build the router for `store`, matching only requests addressed to `host`
pub fn router(store: Arc<RecordStore>, host: &str) -> Router {
    Router::new()
        .route(
            "/",
            get(list_records)
                .head(not_found)
                .post(create_record)
                .fallback(not_found),
        )
        .route(
            "/:id",
            get(get_record)
                .head(not_found)
                .delete(delete_record)
                .fallback(not_found),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn_with_state(
            RoutedHost::new(host),
            guard::match_host,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
