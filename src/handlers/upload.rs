//! Model upload handler

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::models::ModelRecord;
use crate::storage;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

/// Accept a pre-trained model file and register it.
///
/// The blob goes to the `models` bucket first, then the metadata row is
/// inserted. If the insert fails the blob is left in place (orphan kept,
/// matching the original pipeline).
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    tracing::info!("Starting model upload process");

    let mut model: Option<(String, Vec<u8>)> = None;
    let mut name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(e.to_string()))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("model") => {
                let file_name = field.file_name().unwrap_or("model.bin").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::ValidationError(e.to_string()))?;
                model = Some((file_name, bytes.to_vec()));
            }
            Some("name") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::ValidationError(e.to_string()))?;
                name = Some(value);
            }
            _ => {}
        }
    }

    let ((file_name, contents), name) = match (model, name) {
        (Some(model), Some(name)) if !name.is_empty() => (model, name),
        _ => {
            return Err(AppError::ValidationError(
                "Model file and name are required".to_string(),
            ))
        }
    };

    let file_path = storage::object_key(&file_name);
    tracing::info!("Generated file path: {}", file_path);

    state
        .store
        .put(&file_path, &contents)
        .await
        .map_err(|e| AppError::UploadFailure(e.to_string()))?;

    ModelRecord::create(&state.pool, &name, &file_path)
        .await
        .map_err(|e| AppError::PersistenceFailure(e.to_string()))?;

    tracing::info!("Upload process completed successfully");

    Ok(Json(UploadResponse {
        message: "Model uploaded successfully".to_string(),
        file_path,
    }))
}
