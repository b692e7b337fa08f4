use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;
use serde_json::json;

use crate::store::PostRepository;
use crate::utils::app_error::AppError;
use crate::AppState;

pub async fn delete_post_route(
    State(app_state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.store.remove_by_id(post_id) {
        return Err(AppError::PostNotFound(post_id));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "message": format!("Post with id {post_id} has been deleted successfully.")
        })),
    ))
}
