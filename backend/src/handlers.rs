use std::collections::HashMap;

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use folio_shared::{post_store, Language, PostMeta};
use serde::{Deserialize, Serialize};

use crate::listing::{
    build_listing, category_href, language_href, page_href, tag_href, ViewState,
};
use crate::markdown;
use crate::models::{CategoryInfo, TagInfo};
use crate::profile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// A facet value together with the shareable URL that selects it.
#[derive(Debug, Serialize)]
pub struct Facet {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLinks {
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsResponse {
    pub posts: Vec<PostMeta>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub categories: Vec<Facet>,
    pub tags: Vec<Facet>,
    pub languages: Vec<Facet>,
    pub links: PageLinks,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(flatten)]
    pub meta: PostMeta,
    pub content_html: String,
}

#[derive(Debug, Serialize)]
pub struct EmptyStateResponse {
    pub message: String,
    pub back: String,
}

#[derive(Debug, Deserialize)]
pub struct FacetQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<TagInfo>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

/// GET /api/posts — the filtered, paginated blog index.
///
/// All filter state comes from the query string; the facet and pagination
/// hrefs in the response are produced by merging changes into that same
/// query string, so every view stays shareable.
pub async fn list_posts(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<ListPostsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let raw = raw.unwrap_or_default();
    let view = ViewState::from_query(&raw);

    let all = post_store::scan_posts(state.content_dir())
        .await
        .map_err(|e| internal_error("Failed to scan posts", e))?;

    let listing = build_listing(&all, &view, state.page_size());

    let categories = listing
        .categories
        .iter()
        .map(|c| Facet { name: c.clone(), href: category_href(&raw, c) })
        .collect();
    let tags = listing
        .tags
        .iter()
        .map(|t| Facet { name: t.clone(), href: tag_href(&raw, t) })
        .collect();
    let languages = [Language::En, Language::Vi]
        .iter()
        .map(|l| Facet { name: l.as_str().to_string(), href: language_href(&raw, *l) })
        .collect();

    let prev = (view.page > 1).then(|| page_href(&raw, view.page - 1));
    let next = (view.page < listing.total_pages).then(|| page_href(&raw, view.page + 1));

    Ok(Json(ListPostsResponse {
        posts: listing.posts,
        total: listing.total,
        page: listing.page,
        total_pages: listing.total_pages,
        categories,
        tags,
        languages,
        links: PageLinks { prev, next },
    }))
}

/// GET /api/posts/:slug — post detail with the body rendered to HTML.
///
/// An unknown slug redirects to the empty-state view rather than erroring;
/// the lookup itself already tolerates casing drift.
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    match post_store::load_post(state.content_dir(), &slug).await {
        Ok(Some(post)) => {
            let content_html = markdown::markdown_to_html(&post.content);
            let response = PostResponse { meta: PostMeta::from(post), content_html };
            Ok(Json(response).into_response())
        }
        Ok(None) => Ok(Redirect::temporary("/blog/empty").into_response()),
        Err(e) => Err(internal_error("Failed to load post", e)),
    }
}

/// GET /blog/empty — terminal not-found view for unresolvable slugs.
pub async fn blog_empty() -> Json<EmptyStateResponse> {
    Json(EmptyStateResponse {
        message: "The post you are looking for does not exist or has been removed.".to_string(),
        back: "/blog".to_string(),
    })
}

/// GET /api/tags — tag counts for one language partition.
pub async fn list_tags(
    State(state): State<AppState>,
    Query(query): Query<FacetQuery>,
) -> Result<Json<TagsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let posts = partition(&state, query.lang.as_deref())
        .await
        .map_err(|e| internal_error("Failed to fetch tags", e))?;

    let mut tag_counts: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for tag in post.tags {
            *tag_counts.entry(tag).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<TagInfo> =
        tag_counts.into_iter().map(|(name, count)| TagInfo { name, count }).collect();
    tags.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Json(TagsResponse { tags }))
}

/// GET /api/categories — category counts for one language partition.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<FacetQuery>,
) -> Result<Json<CategoriesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let posts = partition(&state, query.lang.as_deref())
        .await
        .map_err(|e| internal_error("Failed to fetch categories", e))?;

    let mut category_counts: HashMap<String, usize> = HashMap::new();
    for post in posts {
        if post.category.is_empty() {
            continue;
        }
        *category_counts.entry(post.category).or_insert(0) += 1;
    }

    let mut categories: Vec<CategoryInfo> = category_counts
        .into_iter()
        .map(|(name, count)| CategoryInfo { name, count })
        .collect();
    categories.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Json(CategoriesResponse { categories }))
}

/// GET /api/profile — everything the landing page needs.
pub async fn get_profile(State(state): State<AppState>) -> Json<profile::Profile> {
    Json(profile::load_profile(state.profile_dir()).await)
}

async fn partition(state: &AppState, lang: Option<&str>) -> anyhow::Result<Vec<PostMeta>> {
    let language = lang.map(Language::parse_or_default).unwrap_or_default();
    let posts = post_store::scan_posts(state.content_dir()).await?;
    Ok(posts.into_iter().filter(|p| p.language == language).collect())
}

fn internal_error(message: &str, err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("{}: {}", message, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message.to_string(), code: 500 }),
    )
}
