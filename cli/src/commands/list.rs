//! `list` — print the posts the way the listing endpoint would see them:
//! newest first, optionally restricted to one language partition.

use std::path::Path;

use anyhow::Result;
use folio_shared::{post_store, Language};

pub async fn run(content_dir: &Path, lang: Option<&str>) -> Result<()> {
    let posts = post_store::scan_posts(content_dir).await?;
    let language = lang.map(Language::parse_or_default);

    let mut shown = 0usize;
    for post in posts {
        if let Some(language) = language {
            if post.language != language {
                continue;
            }
        }
        println!(
            "{:<12} {:<3} {:<16} {:<28} {}",
            post.date, post.language, post.category, post.slug, post.title
        );
        shown += 1;
    }

    println!("{shown} post(s)");
    Ok(())
}
