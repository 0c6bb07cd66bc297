//! Phone collection API handlers
//!
//! Contains HTTP request handlers for the phone CRUD operations. Each
//! handler is a single read-modify-write cycle against the shared store.

use crate::error::AppError;
use crate::phone::Phone;
use crate::store::PhoneStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

/// GET /phones - List the full collection
pub async fn list_phones(
    State(store): State<Arc<PhoneStore>>,
) -> Result<Json<Vec<Phone>>, AppError> {
    let phones = store.list().await?;
    Ok(Json(phones))
}

/// POST /phones - Append a new record
///
/// The record is taken from the body as-is: no field validation and no
/// server-generated id.
pub async fn create_phone(
    State(store): State<Arc<PhoneStore>>,
    Json(phone): Json<Phone>,
) -> Result<(StatusCode, Json<Phone>), AppError> {
    let created = store.create(phone).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /phones/:id - Shallow-merge the body into the first matching record
pub async fn update_phone(
    State(store): State<Arc<PhoneStore>>,
    Path(id): Path<String>,
    Json(patch): Json<Phone>,
) -> Result<Json<Phone>, AppError> {
    let merged = store
        .update(&id, patch)
        .await?
        .ok_or(AppError::PhoneNotFound(id))?;

    Ok(Json(merged))
}

/// DELETE /phones/:id - Remove all records with a matching id
pub async fn delete_phone(
    State(store): State<Arc<PhoneStore>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !store.delete(&id).await? {
        return Err(AppError::PhoneNotFound(id));
    }

    Ok(StatusCode::NO_CONTENT)
}
