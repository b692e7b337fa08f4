use axum::response::{IntoResponse, Response};
use axum::Json;
use hyper::StatusCode;
use serde_json::json;

pub enum AppError {
    // List route errors
    InvalidSortField,
    InvalidSortDirection,
    // Create route errors
    MissingTitleOrContent,
    // Update route errors
    NoDataProvided,
    // Delete/update route errors
    PostNotFound(i64),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::InvalidSortField => "Invalid sort field".to_string(),
            AppError::InvalidSortDirection => "Invalid sort direction".to_string(),
            AppError::MissingTitleOrContent => "Missing title or content".to_string(),
            AppError::NoDataProvided => "No data provided".to_string(),
            AppError::PostNotFound(post_id) => {
                format!("Post with id {post_id} not found.")
            }
        };

        let status_code = match self {
            AppError::InvalidSortField
            | AppError::InvalidSortDirection
            | AppError::MissingTitleOrContent
            | AppError::NoDataProvided => StatusCode::BAD_REQUEST,
            AppError::PostNotFound(_) => StatusCode::NOT_FOUND,
        };

        (status_code, Json(json!({ "error": body }))).into_response()
    }
}
