//! `check` — parse every post and report what a reader would hit in
//! production: broken front matter, fields that fell back to defaults,
//! and slugs that collide once lowercased (the lookup is
//! case-insensitive, so such posts shadow each other).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Result};
use folio_shared::post_store::{self, DEFAULT_CATEGORY};
use walkdir::WalkDir;

pub async fn run(content_dir: &Path) -> Result<()> {
    if !content_dir.is_dir() {
        bail!("content directory {} does not exist", content_dir.display());
    }

    let mut checked = 0usize;
    let mut problems = 0usize;
    // lowercased slug -> stored slug
    let mut seen: HashMap<String, String> = HashMap::new();

    for entry in WalkDir::new(content_dir).max_depth(1).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        checked += 1;

        if let Some(previous) = seen.insert(slug.to_lowercase(), slug.to_string()) {
            println!("DUPLICATE  {slug}: collides with {previous}");
            problems += 1;
        }

        match post_store::load_post_from_path(path, slug).await {
            Ok(post) => {
                let mut defaulted = Vec::new();
                if post.date.is_empty() {
                    defaulted.push("date");
                }
                if post.summary.is_empty() {
                    defaulted.push("summary");
                }
                if post.category == DEFAULT_CATEGORY {
                    defaulted.push("category");
                }
                if post.tags.is_empty() {
                    defaulted.push("tags");
                }
                if !defaulted.is_empty() {
                    println!("DEFAULTS   {slug}: {}", defaulted.join(", "));
                }
            }
            Err(e) => {
                println!("BROKEN     {}: {e:#}", path.display());
                problems += 1;
            }
        }
    }

    println!("Checked {checked} post(s)");
    if problems > 0 {
        bail!("{problems} problem(s) found");
    }
    Ok(())
}
