//! File-backed post store: one markdown file per post with YAML front
//! matter, the slug taken from the file stem.
//!
//! The directory is re-read in full on every call; the store never caches
//! across invocations and never mutates the content directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gray_matter::engine::YAML;
use gray_matter::Matter;
use serde::Deserialize;
use tokio::fs;

use crate::{Language, Post, PostMeta};

/// Category assigned to posts whose front matter omits one.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Raw front matter as written in the content files. Everything is
/// optional; [`normalize`] fills the documented defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FrontMatter {
    title: Option<String>,
    summary: Option<String>,
    tags: Option<Vec<String>>,
    category: Option<String>,
    date: Option<String>,
    read_time: Option<String>,
    hero_image: Option<String>,
    #[serde(alias = "lang")]
    language: Option<String>,
}

fn normalize(slug: &str, fm: FrontMatter, content: String) -> Post {
    let category = fm
        .category
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    Post {
        slug: slug.to_string(),
        title: fm.title.unwrap_or_else(|| slug.to_string()),
        summary: fm.summary.unwrap_or_default(),
        content,
        tags: fm.tags.unwrap_or_default(),
        category,
        date: fm.date.unwrap_or_default(),
        read_time: fm.read_time.unwrap_or_default(),
        hero_image: fm.hero_image.unwrap_or_default(),
        language: fm
            .language
            .as_deref()
            .map(Language::parse_or_default)
            .unwrap_or_default(),
    }
}

/// Parse a single content file into a [`Post`].
///
/// A file without a front-matter block is still a valid post: the body is
/// kept and every metadata field takes its default.
pub async fn load_post_from_path(path: &Path, slug: &str) -> Result<Post> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(&raw);

    let fm = match parsed.data {
        Some(data) => data
            .deserialize()
            .with_context(|| format!("bad front matter in {}", path.display()))?,
        None => FrontMatter::default(),
    };

    Ok(normalize(slug, fm, parsed.content))
}

/// Scan the content directory and return all posts, newest first.
///
/// A missing or empty directory yields an empty list, never an error.
/// Files that fail to parse are skipped with a warning so one broken post
/// cannot take down the listing.
pub async fn scan_posts(content_dir: &Path) -> Result<Vec<PostMeta>> {
    if !content_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    let mut entries = fs::read_dir(content_dir)
        .await
        .with_context(|| format!("failed to read {}", content_dir.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };

        match load_post_from_path(&path, &slug).await {
            Ok(post) => posts.push(PostMeta::from(post)),
            Err(e) => tracing::warn!("skipping {}: {e:#}", path.display()),
        }
    }

    // Newest first; dates are ISO strings so lexical order works.
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

/// Look up a single post by slug.
///
/// Tries the exact `{slug}.md` path first, then falls back to a
/// case-insensitive scan over file stems, which guards against casing
/// drift between a requested URL and the stored filename. The fallback is
/// O(n) over the directory; fine at personal-site scale.
pub async fn load_post(content_dir: &Path, slug: &str) -> Result<Option<Post>> {
    let exact = content_dir.join(format!("{slug}.md"));
    if fs::metadata(&exact).await.map(|m| m.is_file()).unwrap_or(false) {
        return Ok(Some(load_post_from_path(&exact, slug).await?));
    }

    let Some((path, stored_slug)) = find_slug_ignore_case(content_dir, slug).await? else {
        return Ok(None);
    };
    Ok(Some(load_post_from_path(&path, &stored_slug).await?))
}

async fn find_slug_ignore_case(
    content_dir: &Path,
    slug: &str,
) -> Result<Option<(PathBuf, String)>> {
    if !content_dir.is_dir() {
        return Ok(None);
    }

    let wanted = slug.to_lowercase();
    let mut entries = fs::read_dir(content_dir)
        .await
        .with_context(|| format!("failed to read {}", content_dir.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if stem.to_lowercase() == wanted {
                let stored = stem.to_string();
                return Ok(Some((path, stored)));
            }
        }
    }
    Ok(None)
}
