//! API module
//!
//! Contains HTTP request handlers for the phone collection endpoints and
//! the router that wires them up.

pub mod phones;
pub mod upload;

use crate::store::PhoneStore;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

/// Build the application router around a shared store.
///
/// Middleware layers (tracing, CORS, panic catching) are applied by the
/// binary; tests drive this router directly.
pub fn router(store: Arc<PhoneStore>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route(
            "/phones",
            get(phones::list_phones).post(phones::create_phone),
        )
        .route(
            "/phones/:id",
            put(phones::update_phone).delete(phones::delete_phone),
        )
        .route("/upload-phones", post(upload::upload_phones))
        .with_state(store)
}

/// GET / - Plain-text welcome message
async fn welcome() -> &'static str {
    "Welcome to the HyperOS Phone Management API."
}
