//! Listing engine: the blog index is a pure function of the request URL.
//!
//! Filter state lives entirely in query parameters, so every filtered view
//! is shareable and bookmarkable. Each request re-derives the visible page
//! and the facets from scratch; nothing here is cached.

use folio_shared::{Language, PostMeta};

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Default number of posts per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Filter/pagination selection, reconstructed fresh from the query string
/// on every request. There is no other source of listing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Selected language partition.
    pub language: Language,
    /// Selected category, or [`ALL_CATEGORIES`].
    pub category: String,
    /// Free-text filter over title and summary.
    pub query: String,
    /// 1-based page index.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            language: Language::default(),
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
            page: 1,
        }
    }
}

impl ViewState {
    /// Parse a raw query string. Every value normalizes to a safe default;
    /// nothing here can fail.
    pub fn from_query(raw: &str) -> Self {
        let mut vs = ViewState::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "lang" => vs.language = Language::parse_or_default(&value),
                "category" => {
                    if !value.is_empty() {
                        vs.category = value.into_owned();
                    }
                }
                "q" => vs.query = value.into_owned(),
                "page" => {
                    vs.page = value.trim().parse::<usize>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                _ => {}
            }
        }
        vs
    }
}

/// One derived page of the listing plus its facets.
#[derive(Debug)]
pub struct Listing {
    /// The visible slice for the requested page.
    pub posts: Vec<PostMeta>,
    /// Number of posts matching the filters (before pagination).
    pub total: usize,
    /// Echo of the requested page.
    pub page: usize,
    /// `ceil(total / page_size)`; 0 when nothing matches.
    pub total_pages: usize,
    /// `["all"]` plus distinct categories of the language partition, in
    /// first-seen order.
    pub categories: Vec<String>,
    /// Distinct tags of the language partition, in first-seen order.
    pub tags: Vec<String>,
}

/// Unicode case folding via full lowercasing. `str::to_lowercase` applies
/// the Unicode mapping, so Vietnamese precomposed diacritics fold
/// correctly where an ASCII-only fold would not.
fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Derive the visible page and facets for one request.
///
/// Pipeline order matters: language partition first (facets come from the
/// partition, not the whole repository), then category, then free text,
/// then the page slice. A page past the end yields an empty slice rather
/// than an error.
pub fn build_listing(all: &[PostMeta], view: &ViewState, page_size: usize) -> Listing {
    let page_size = page_size.max(1);

    let partition: Vec<&PostMeta> =
        all.iter().filter(|p| p.language == view.language).collect();

    let categories = category_facets(&partition);
    let tags = tag_facets(&partition);

    let needle = fold(&view.query);
    let filtered: Vec<&PostMeta> = partition
        .iter()
        .copied()
        .filter(|p| {
            let match_category =
                view.category == ALL_CATEGORIES || p.category == view.category;
            let match_query = needle.is_empty()
                || fold(&p.title).contains(&needle)
                || fold(&p.summary).contains(&needle);
            match_category && match_query
        })
        .collect();

    let total = filtered.len();
    let total_pages = total.div_ceil(page_size);
    let start = (view.page - 1).saturating_mul(page_size);
    let posts = filtered.into_iter().skip(start).take(page_size).cloned().collect();

    Listing { posts, total, page: view.page, total_pages, categories, tags }
}

fn category_facets(partition: &[&PostMeta]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for post in partition {
        if post.category.is_empty() {
            continue;
        }
        if !out.iter().any(|c| c == &post.category) {
            out.push(post.category.clone());
        }
    }
    out
}

fn tag_facets(partition: &[&PostMeta]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for post in partition {
        for tag in &post.tags {
            if tag.is_empty() {
                continue;
            }
            if !out.iter().any(|t| t == tag) {
                out.push(tag.clone());
            }
        }
    }
    out
}

/// Merge parameter changes into an existing query string, preserving every
/// untouched key. An empty value or the `"all"` sentinel removes the key;
/// anything else sets it. This is the only way listing URLs are produced.
pub fn update_params(current: &str, changes: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> =
        url::form_urlencoded::parse(current.as_bytes()).into_owned().collect();

    for (key, value) in changes {
        if value.is_empty() || *value == ALL_CATEGORIES {
            pairs.retain(|(k, _)| k != key);
        } else if let Some(pair) = pairs.iter_mut().find(|(k, _)| k == *key) {
            pair.1 = (*value).to_string();
        } else {
            pairs.push((key.to_string(), value.to_string()));
        }
    }

    let mut out = url::form_urlencoded::Serializer::new(String::new());
    out.extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    out.finish()
}

fn blog_url(query: String) -> String {
    if query.is_empty() {
        "/blog".to_string()
    } else {
        format!("/blog?{query}")
    }
}

/// Shareable URL selecting a category. Resets the page.
pub fn category_href(current: &str, category: &str) -> String {
    blog_url(update_params(current, &[("category", category), ("page", "1")]))
}

/// Shareable URL for a tag click: the tag text becomes the free-text
/// query, the category filter clears, the page resets.
pub fn tag_href(current: &str, tag: &str) -> String {
    blog_url(update_params(
        current,
        &[("q", tag), ("category", ALL_CATEGORIES), ("page", "1")],
    ))
}

/// Shareable URL switching the language partition. Switching language is a
/// hard reset: category, query and page all return to their defaults.
pub fn language_href(current: &str, language: Language) -> String {
    blog_url(update_params(
        current,
        &[
            ("lang", language.as_str()),
            ("category", ALL_CATEGORIES),
            ("q", ""),
            ("page", "1"),
        ],
    ))
}

/// Shareable URL selecting a page within the current filters.
pub fn page_href(current: &str, page: usize) -> String {
    let page = page.to_string();
    blog_url(update_params(current, &[("page", page.as_str())]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, lang: Language, category: &str, title: &str) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: title.to_string(),
            summary: format!("summary of {title}"),
            tags: vec![],
            category: category.to_string(),
            date: "2025-01-01".to_string(),
            read_time: String::new(),
            hero_image: String::new(),
            language: lang,
        }
    }

    fn corpus() -> Vec<PostMeta> {
        // 10 English posts (5 "ai", 5 "systems") and 2 Vietnamese.
        let mut posts = Vec::new();
        for i in 0..5 {
            posts.push(post(&format!("ai-{i}"), Language::En, "ai", &format!("AI post {i}")));
        }
        for i in 0..5 {
            posts.push(post(
                &format!("sys-{i}"),
                Language::En,
                "systems",
                &format!("Systems post {i}"),
            ));
        }
        for i in 0..2 {
            posts.push(post(
                &format!("vi-{i}"),
                Language::Vi,
                "ai",
                &format!("Bài viết {i}"),
            ));
        }
        posts
    }

    #[test]
    fn view_state_defaults_and_bad_page_values() {
        let vs = ViewState::from_query("");
        assert_eq!(vs, ViewState::default());

        let vs = ViewState::from_query("page=abc");
        assert_eq!(vs.page, 1);
        let vs = ViewState::from_query("page=0");
        assert_eq!(vs.page, 1);
        let vs = ViewState::from_query("page=3");
        assert_eq!(vs.page, 3);

        let vs = ViewState::from_query("lang=klingon&category=&q=rust");
        assert_eq!(vs.language, Language::En);
        assert_eq!(vs.category, ALL_CATEGORIES);
        assert_eq!(vs.query, "rust");
    }

    #[test]
    fn empty_filters_equal_language_partition() {
        let posts = corpus();
        let view = ViewState::default();
        let listing = build_listing(&posts, &view, 100);
        assert_eq!(listing.total, 10);
        assert!(listing.posts.iter().all(|p| p.language == Language::En));
    }

    #[test]
    fn category_filter_and_page_counts() {
        let posts = corpus();
        let view = ViewState {
            category: "ai".to_string(),
            ..ViewState::default()
        };
        let listing = build_listing(&posts, &view, DEFAULT_PAGE_SIZE);
        assert_eq!(listing.total, 5);
        assert_eq!(listing.total_pages, 1);
        assert_eq!(listing.posts.len(), 5);
    }

    #[test]
    fn second_page_holds_the_overflow() {
        let posts = corpus();
        let view = ViewState { page: 2, ..ViewState::default() };
        let listing = build_listing(&posts, &view, DEFAULT_PAGE_SIZE);
        assert_eq!(listing.total, 10);
        assert_eq!(listing.total_pages, 2);
        assert_eq!(listing.posts.len(), 2);
    }

    #[test]
    fn pages_concatenate_to_the_full_filtered_sequence() {
        let posts = corpus();
        let full = build_listing(&posts, &ViewState::default(), 100).posts;

        let mut concatenated = Vec::new();
        for page in 1..=3 {
            let view = ViewState { page, ..ViewState::default() };
            concatenated.extend(build_listing(&posts, &view, 4).posts);
        }
        assert_eq!(concatenated, full);
    }

    #[test]
    fn page_past_the_end_is_an_empty_slice() {
        let posts = corpus();
        let view = ViewState { page: 99, ..ViewState::default() };
        let listing = build_listing(&posts, &view, DEFAULT_PAGE_SIZE);
        assert!(listing.posts.is_empty());
        assert_eq!(listing.total_pages, 2);
    }

    #[test]
    fn empty_result_is_a_valid_state() {
        let posts = corpus();
        let view = ViewState {
            query: "no such thing anywhere".to_string(),
            ..ViewState::default()
        };
        let listing = build_listing(&posts, &view, DEFAULT_PAGE_SIZE);
        assert_eq!(listing.total, 0);
        assert_eq!(listing.total_pages, 0);
        assert!(listing.posts.is_empty());
    }

    #[test]
    fn text_filter_folds_vietnamese_diacritics() {
        let posts = corpus();
        let view = ViewState {
            language: Language::Vi,
            query: "BÀI VIẾT".to_string(),
            ..ViewState::default()
        };
        let listing = build_listing(&posts, &view, DEFAULT_PAGE_SIZE);
        assert_eq!(listing.total, 2);
    }

    #[test]
    fn facets_come_from_the_language_partition_in_first_seen_order() {
        let mut posts = corpus();
        posts[0].tags = vec!["rust".to_string(), "llm".to_string()];
        posts[5].tags = vec!["rust".to_string(), "io".to_string()];
        posts[10].tags = vec!["vietnam-only".to_string()];

        let listing = build_listing(&posts, &ViewState::default(), DEFAULT_PAGE_SIZE);
        assert_eq!(listing.categories, ["all", "ai", "systems"]);
        assert_eq!(listing.tags, ["rust", "llm", "io"]);

        let vi = ViewState { language: Language::Vi, ..ViewState::default() };
        let listing = build_listing(&posts, &vi, DEFAULT_PAGE_SIZE);
        assert_eq!(listing.categories, ["all", "ai"]);
        assert_eq!(listing.tags, ["vietnam-only"]);
    }

    #[test]
    fn update_params_clears_with_all_sentinel_and_keeps_the_rest() {
        let next = update_params("category=ai&q=neural", &[("category", "all")]);
        assert_eq!(next, "q=neural");
    }

    #[test]
    fn update_params_sets_replaces_and_appends() {
        let next = update_params("lang=vi&page=3", &[("page", "1"), ("q", "rust")]);
        assert_eq!(next, "lang=vi&page=1&q=rust");
    }

    #[test]
    fn language_switch_is_a_hard_reset() {
        let href = language_href("lang=en&category=ai&q=neural&page=3", Language::Vi);
        assert_eq!(href, "/blog?lang=vi&page=1");
    }

    #[test]
    fn tag_click_sets_query_and_clears_category() {
        let href = tag_href("category=ai&page=2", "wasm");
        assert_eq!(href, "/blog?page=1&q=wasm");
    }

    #[test]
    fn category_href_resets_the_page() {
        let href = category_href("q=neural&page=4", "systems");
        assert_eq!(href, "/blog?q=neural&page=1&category=systems");
    }
}
