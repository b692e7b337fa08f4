use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::store::PostRepository;
use crate::structs::post::Post;
use crate::AppState;

#[derive(Deserialize)]
pub struct SearchPostsParams {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn search_posts_route(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<SearchPostsParams>,
) -> Json<Vec<Post>> {
    let title_search = params.title.as_deref().filter(|title| !title.is_empty());
    let content_search = params
        .content
        .as_deref()
        .filter(|content| !content.is_empty());

    // Case-sensitive substring match. A supplied title filter takes
    // precedence for every post: the content filter is only consulted when
    // no title filter was given.
    let matching_posts = app_state
        .store
        .list()
        .into_iter()
        .filter(|post| {
            if let Some(title) = title_search {
                post.title.contains(title)
            } else if let Some(content) = content_search {
                post.content.contains(content)
            } else {
                false
            }
        })
        .collect();

    Json(matching_posts)
}
