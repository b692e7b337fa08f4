use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;
use serde::Deserialize;

use crate::store::PostRepository;
use crate::utils::app_error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn create_post_route(
    State(app_state): State<Arc<AppState>>,
    payload: Option<Json<NewPost>>,
) -> Result<impl IntoResponse, AppError> {
    // An absent or unparseable body fails the same way as missing keys.
    let Some(Json(new_post)) = payload else {
        return Err(AppError::MissingTitleOrContent);
    };

    // Presence-only check, empty strings are accepted.
    let (Some(title), Some(content)) = (new_post.title, new_post.content) else {
        return Err(AppError::MissingTitleOrContent);
    };

    let post = app_state.store.append(title, content);

    Ok((StatusCode::CREATED, Json(post)))
}
