//! Markdown rendering for assistant replies.
//!
//! Output is injected with `inner_html`, so raw HTML is dropped and link or
//! image targets outside [`ALLOWED_SCHEMES`] are blanked.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// URL schemes a rendered link or image may point at.
pub const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render assistant Markdown to sanitized HTML.
pub fn render_markdown_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let events = Parser::new_ext(markdown, options).filter_map(sanitize);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Whether `url` is relative or uses an allowed scheme.
pub fn is_allowed_url(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return true;
    };
    // A colon after a path, query, or fragment delimiter is not a scheme separator.
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    ALLOWED_SCHEMES.iter().any(|allowed| scheme.eq_ignore_ascii_case(allowed))
}

fn sanitize(event: Event<'_>) -> Option<Event<'_>> {
    match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        // Replies use single newlines as visual breaks.
        Event::SoftBreak => Some(Event::HardBreak),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_allowed_url(&dest_url) => {
            log::debug!("blanked link target {dest_url}");
            Some(Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed(""), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if !is_allowed_url(&dest_url) => {
            log::debug!("blanked image source {dest_url}");
            Some(Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed(""), title, id }))
        }
        other => Some(other),
    }
}
