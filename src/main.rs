mod middleware;
mod routes;
mod store;
mod structs;
mod utils;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use middleware::logger_middleware::logger_middleware;
use routes::create_post::create_post_route;
use routes::delete_post::delete_post_route;
use routes::list_posts::list_posts_route;
use routes::search_posts::search_posts_route;
use routes::update_post::update_post_route;
use store::{seed_posts, InMemoryPostStore};

pub struct AppState {
    pub store: InMemoryPostStore,
}

fn app(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/posts", get(list_posts_route).post(create_post_route))
        .route("/api/posts/search", get(search_posts_route))
        .route(
            "/api/posts/:post_id",
            delete(delete_post_route).put(update_post_route),
        )
        .layer(cors)
        .layer(axum_middleware::from_fn(logger_middleware))
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let app_state = Arc::new(AppState {
        store: InMemoryPostStore::new(seed_posts()),
    });

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(5002);
    let addr = SocketAddr::new(host.parse().expect("Invalid HOST value"), port);

    info!("Listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app(app_state).into_make_service())
        .await
        .expect("Server error");
}
