//! Shared data model for the Folio site: post types, the language
//! partition, and the file-backed post store used by both the backend
//! and the CLI.

pub mod post_store;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language partition for posts. The set is closed; anything
/// unrecognized normalizes to English rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (the default partition).
    #[default]
    En,
    /// Vietnamese.
    Vi,
}

impl Language {
    /// Parse a front-matter or query value. Unknown values fall back to
    /// English.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "vi" => Language::Vi,
            _ => Language::En,
        }
    }

    /// The lowercase code used in URLs and front matter.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Full post: normalized front matter plus the markdown body.
///
/// Every field is already normalized by the store; downstream code never
/// needs to null-check display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier derived from the content file stem.
    pub slug: String,
    /// Display title; falls back to the slug when absent.
    pub title: String,
    /// Short teaser shown on the listing page. Empty when absent.
    pub summary: String,
    /// Markdown body.
    pub content: String,
    /// Free-form labels in insertion order. Empty when absent.
    pub tags: Vec<String>,
    /// Category name; `"uncategorized"` when absent or empty.
    pub category: String,
    /// Publication date as a `YYYY-MM-DD` string. Empty when absent.
    pub date: String,
    /// Display reading time, e.g. `"8 min"`. Empty when absent.
    pub read_time: String,
    /// Hero image path. Empty when absent.
    pub hero_image: String,
    /// Language partition the post belongs to.
    pub language: Language,
}

/// List-item projection of a [`Post`] without the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    /// Unique identifier derived from the content file stem.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Short teaser shown on the listing page.
    pub summary: String,
    /// Free-form labels in insertion order.
    pub tags: Vec<String>,
    /// Category name.
    pub category: String,
    /// Publication date as a `YYYY-MM-DD` string.
    pub date: String,
    /// Display reading time.
    pub read_time: String,
    /// Hero image path.
    pub hero_image: String,
    /// Language partition the post belongs to.
    pub language: Language,
}

impl From<Post> for PostMeta {
    fn from(p: Post) -> Self {
        PostMeta {
            slug: p.slug,
            title: p.title,
            summary: p.summary,
            tags: p.tags,
            category: p.category,
            date: p.date,
            read_time: p.read_time,
            hero_image: p.hero_image,
            language: p.language,
        }
    }
}
