//! Folio backend: JSON API for the portfolio landing page and the blog,
//! serving markdown content straight from disk.

mod handlers;
mod listing;
mod markdown;
mod models;
mod profile;
mod routes;
mod seo;
mod state;

use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let content_dir = env::var("CONTENT_DIR").unwrap_or_else(|_| "./content/posts".to_string());
    let profile_dir = env::var("PROFILE_DIR").unwrap_or_else(|_| "./content/profile".to_string());
    let page_size = env::var("PAGE_SIZE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(listing::DEFAULT_PAGE_SIZE);

    tracing::info!("Starting Folio backend server");
    tracing::info!("Content directory: {}", content_dir);
    tracing::info!("Profile directory: {}", profile_dir);
    tracing::info!("Page size: {}", page_size);

    let app_state = state::AppState::new(&content_dir, &profile_dir, page_size);

    // Startup sanity log; content is re-read per request, never cached.
    let posts = folio_shared::post_store::scan_posts(app_state.content_dir()).await?;
    tracing::info!("Found {} posts", posts.len());

    let app = routes::create_router(app_state);

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
    let addr = format!("{}:{}", bind_addr, port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
