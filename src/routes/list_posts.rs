use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::store::{sort_posts, PostRepository, SortDirection, SortField};
use crate::structs::post::Post;
use crate::utils::app_error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct ListPostsParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

pub async fn list_posts_route(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<ListPostsParams>,
) -> Result<Json<Vec<Post>>, AppError> {
    // Empty values count as absent, same as an omitted parameter.
    let sort = match params.sort.as_deref().filter(|sort| !sort.is_empty()) {
        None => None,
        Some("title") => Some(SortField::Title),
        Some("content") => Some(SortField::Content),
        Some(_) => return Err(AppError::InvalidSortField),
    };

    let direction = match params
        .direction
        .as_deref()
        .filter(|direction| !direction.is_empty())
    {
        None => None,
        Some("asc") => Some(SortDirection::Asc),
        Some("desc") => Some(SortDirection::Desc),
        Some(_) => return Err(AppError::InvalidSortDirection),
    };

    let posts = app_state.store.list();

    // Sorting only happens when both parameters are supplied.
    let posts = match (sort, direction) {
        (Some(field), Some(direction)) => sort_posts(posts, field, direction),
        _ => posts,
    };

    Ok(Json(posts))
}
