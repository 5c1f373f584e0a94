use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::response::AppError;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Pages { num_pages: usize },
    Failed { error: String },
}

pub async fn analyze_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    let bytes = read_file_field(&mut multipart).await?;
    let size = bytes.len();

    let counter = state.page_counter();
    let counted = tokio::task::spawn_blocking(move || counter.count_pages(&bytes))
        .await
        .map_err(|err| AppError::internal(format!("page counter task failed: {err}")))?;

    let response = match counted {
        Ok(num_pages) => {
            tracing::info!(size, num_pages, "document analyzed");
            AnalyzeResponse::Pages { num_pages }
        }
        Err(err) => {
            tracing::warn!(size, error = %err, "document analysis failed");
            AnalyzeResponse::Failed {
                error: err.to_string(),
            }
        }
    };

    Ok(Json(response))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(FILE_FIELD) {
            return field.bytes().await.map_err(multipart_error);
        }
    }
    Err(AppError::validation(format!(
        "campo `{FILE_FIELD}` mancante nel form"
    )))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(err.body_text())
    } else {
        AppError::validation(err.body_text())
    }
}
