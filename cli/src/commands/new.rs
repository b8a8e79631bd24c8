//! `new` — scaffold a post file with YAML front matter. The slug comes
//! from the title the same way readers will see it in the URL.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Local;
use folio_shared::Language;
use tokio::fs;

pub async fn run(
    content_dir: &Path,
    title: &str,
    lang: &str,
    category: Option<&str>,
) -> Result<()> {
    let slug = slugify(title);
    if slug.is_empty() {
        bail!("title {title:?} does not produce a usable slug");
    }

    let path = content_dir.join(format!("{slug}.md"));
    if fs::try_exists(&path).await? {
        bail!("{} already exists", path.display());
    }

    let date = Local::now().format("%Y-%m-%d");
    let language = Language::parse_or_default(lang);

    let mut front = format!(
        "---\ntitle: \"{}\"\nsummary: \"\"\ndate: \"{date}\"\nlanguage: {language}\n",
        title.replace('"', "\\\"")
    );
    if let Some(category) = category {
        front.push_str(&format!("category: \"{category}\"\n"));
    }
    front.push_str("tags: []\n---\n\nWrite here.\n");

    fs::create_dir_all(content_dir)
        .await
        .context("failed to create content directory")?;
    fs::write(&path, front)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}

fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() {
            out.push(c);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn slugify_strips_punctuation_and_collapses_separators() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust & WASM: a tour  "), "rust-wasm-a-tour");
        assert_eq!(slugify("???"), "");
    }

    #[tokio::test]
    async fn scaffolds_a_loadable_post() {
        let dir = TempDir::new().expect("tempdir");
        run(dir.path(), "My First Post", "vi", Some("ai")).await.expect("new");

        let post = folio_shared::post_store::load_post(dir.path(), "my-first-post")
            .await
            .expect("load")
            .expect("found");
        assert_eq!(post.title, "My First Post");
        assert_eq!(post.category, "ai");
        assert_eq!(post.language, Language::Vi);

        // Refuses to overwrite an existing post.
        assert!(run(dir.path(), "My First Post", "en", None).await.is_err());
    }
}
