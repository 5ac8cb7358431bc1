use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::pipeline::{self, BatchError};
use crate::upload::{self, UploadError};
use thumb_core::{ProcessResponse, ValidationError};

const TRANSFORM_FAILED_MESSAGE: &str = "Failed to process images.";
const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// `POST /api/process-images`
///
/// 検証 → 並行変換 → 集約の順に進み、いずれかで失敗すればその時点でエラーを返す。
pub async fn process_images(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let multipart = multipart?;
    tracing::debug!("received image batch");

    let request = upload::read_request(multipart, &state.config.limits).await?;
    let item_count = request.items().len();

    tracing::info!(
        items = item_count,
        query = %request.query(),
        "processing image batch"
    );

    let processed_images =
        pipeline::process_batch(request, state.transformer.clone(), state.config.request_timeout)
            .await?;

    tracing::info!(items = item_count, "image batch completed");

    Ok(Json(ProcessResponse::Completed { processed_images }))
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    TransformFailed(String),
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        tracing::warn!(error = %err, "batch rejected");
        AppError::BadRequest(err.to_string())
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Validation(validation_err) => validation_err.into(),
            UploadError::Multipart(multipart_err) => {
                tracing::warn!(error = %multipart_err, "malformed multipart body");
                AppError::BadRequest(format!(
                    "Failed to parse multipart data: {}",
                    multipart_err.body_text()
                ))
            }
        }
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::warn!(error = %rejection, "request is not multipart/form-data");
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<BatchError> for AppError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::ItemFailed { index, item, source } => {
                tracing::error!(
                    index = index,
                    filename = %item.filename,
                    error = %source,
                    "image transform failed"
                );
                AppError::TransformFailed(item.to_string())
            }
            BatchError::TimedOut(timeout) => {
                AppError::Internal(format!("batch timed out after {timeout:?}"))
            }
            BatchError::Worker(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::TransformFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                TRANSFORM_FAILED_MESSAGE.to_string(),
            ),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ProcessResponse::Failed { error: message })).into_response()
    }
}
