use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::store::PostRepository;
use crate::structs::post::Post;
use crate::utils::app_error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn update_post_route(
    State(app_state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    payload: Option<Json<UpdatePost>>,
) -> Result<Json<Post>, AppError> {
    let Some(Json(update)) = payload else {
        return Err(AppError::NoDataProvided);
    };

    // Absent fields are left unchanged, the id is never altered.
    app_state
        .store
        .update_by_id(post_id, update.title, update.content)
        .map(Json)
        .ok_or(AppError::PostNotFound(post_id))
}
