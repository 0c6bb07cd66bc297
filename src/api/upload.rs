//! Bulk-replace upload handler
//!
//! Accepts a multipart form with a single file field named `phones` and
//! replaces the whole collection file with the uploaded bytes.

use crate::error::AppError;
use crate::phone::Phone;
use crate::store::PhoneStore;
use axum::{
    extract::{Multipart, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Multipart field name the uploaded file must arrive under
const UPLOAD_FIELD: &str = "phones";

/// POST /upload-phones - Replace the collection with an uploaded file
///
/// The file must be attached under the `phones` field and declare an
/// `application/json` content type. Its bytes overwrite the collection file
/// without prior validation; the file is then re-read and parsed, and a
/// parse failure is reported with the overwrite already done.
pub async fn upload_phones(
    State(store): State<Arc<PhoneStore>>,
    mut multipart: Multipart,
) -> Result<Json<Vec<Phone>>, AppError> {
    let mut upload: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        AppError::BadUpload(e.to_string())
    })? {
        let field_name = field.name().unwrap_or("");

        if field_name != UPLOAD_FIELD {
            warn!("Unknown multipart field: {}", field_name);
            continue;
        }

        if field.content_type() != Some("application/json") {
            return Err(AppError::UploadNotJson);
        }

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read uploaded file: {}", e);
            AppError::BadUpload(e.to_string())
        })?;
        upload = Some(data.to_vec());
    }

    let data = upload.ok_or(AppError::MissingUpload)?;

    let phones = store.replace(&data).await.map_err(|e| match e {
        crate::store::StoreError::Json(e) => AppError::InvalidUpload(e.to_string()),
        other => AppError::from(other),
    })?;

    info!(
        "Replaced phone collection ({} bytes, {} records)",
        data.len(),
        phones.len()
    );

    Ok(Json(phones))
}
