//! Markdown body rendering for post detail pages.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Convert a markdown body into HTML with common extensions enabled.
///
/// Relative `images/` links are rewritten to absolute `/images/` paths so
/// the rendered HTML works regardless of the page URL it is embedded in.
pub fn markdown_to_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            let dest_url = if let Some(rest) = dest_url.strip_prefix("images/") {
                CowStr::from(format!("/images/{rest}"))
            } else {
                dest_url
            };
            Event::Start(Tag::Image { link_type, dest_url, title, id })
        }
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = markdown_to_html("# Title\n\nSome *emphasis* here.\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn rewrites_relative_image_links() {
        let html = markdown_to_html("![hero](images/hero.png)");
        assert!(html.contains("src=\"/images/hero.png\""));
    }

    #[test]
    fn leaves_absolute_image_links_alone() {
        let html = markdown_to_html("![x](https://example.com/x.png)");
        assert!(html.contains("src=\"https://example.com/x.png\""));
    }

    #[test]
    fn empty_body_renders_to_nothing() {
        assert_eq!(markdown_to_html("   \n"), "");
    }
}
