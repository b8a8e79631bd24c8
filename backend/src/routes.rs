use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{handlers, seo, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/posts", get(handlers::list_posts))
        .route("/api/posts/:slug", get(handlers::get_post))
        .route("/api/tags", get(handlers::list_tags))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/profile", get(handlers::get_profile))
        .route("/blog/empty", get(handlers::blog_empty))
        .route("/sitemap.xml", get(seo::sitemap_xml))
        .route("/robots.txt", get(seo::robots_txt))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
