//! Post body formatting: Markdown to HTML with `@mention` links.
//!
//! Raw HTML in user input is escaped, never passed through. Link and image
//! destinations are kept only for `http`, `https` and `mailto` URLs or
//! scheme-less (relative) ones; anything else, such as `javascript:`, is
//! replaced by `#`. Mentions are linked only inside text nodes, so `@names`
//! in code spans and code blocks stay literal.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, TextMergeStream, html};

const MAX_MENTION_LEN: usize = 32;

/// Render Markdown `source` to HTML with mentions linked.
#[must_use]
pub fn render_post(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut in_link = false;
    let parser = TextMergeStream::new(Parser::new_ext(source, options));
    let events = parser.flat_map(move |event| match event {
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            in_link = true;
            vec![Event::Start(Tag::Link { link_type, dest_url: safe_url(dest_url), title, id })]
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            vec![Event::Start(Tag::Image { link_type, dest_url: safe_url(dest_url), title, id })]
        }
        Event::End(TagEnd::Link) => {
            in_link = false;
            vec![event]
        }
        Event::Html(raw) | Event::InlineHtml(raw) => vec![Event::Text(raw)],
        Event::Text(text) if !in_link => link_mentions(&text),
        other => vec![other],
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// `dest` when it is relative or uses an allowed scheme, else `#`.
fn safe_url(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&dest) { dest } else { CowStr::Borrowed("#") }
}

fn is_safe_url(dest: &str) -> bool {
    // Browsers drop these before parsing the scheme.
    let cleaned: String = dest.chars().filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control()).collect();
    let scheme_end = cleaned.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

/// Distinct mentioned handles in first-seen order, without the `@`.
#[must_use]
pub fn extract_mentions(source: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for segment in split_mentions(source) {
        if let Segment::Mention(handle) = segment {
            if !seen.iter().any(|h: &String| h == handle) {
                seen.push(handle.to_owned());
            }
        }
    }
    seen
}

fn link_mentions(text: &CowStr<'_>) -> Vec<Event<'static>> {
    split_mentions(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => Event::Text(CowStr::from(t.to_owned())),
            Segment::Mention(handle) => Event::InlineHtml(CowStr::from(format!(
                "<a class=\"mention\" href=\"/u/{handle}\">@{handle}</a>"
            ))),
        })
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Mention(&'a str),
}

fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Split `text` into plain runs and `@handle` mentions. An `@` only starts a
/// mention at the beginning of the text or after a non-handle character, so
/// email addresses are left alone.
fn split_mentions(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut prev: Option<char> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        let at_boundary = prev.is_none_or(|p| !is_handle_char(p) && p != '@');
        if c == '@' && at_boundary {
            let start = i + 1;
            let end = text[start..]
                .char_indices()
                .find(|(_, ch)| !is_handle_char(*ch))
                .map_or(text.len(), |(off, _)| start + off);
            let len = end - start;
            if len > 0 && len <= MAX_MENTION_LEN {
                if plain_start < i {
                    out.push(Segment::Text(&text[plain_start..i]));
                }
                out.push(Segment::Mention(&text[start..end]));
                plain_start = end;
                while iter.peek().is_some_and(|(j, _)| *j < end) {
                    iter.next();
                }
                prev = text[..end].chars().next_back();
                continue;
            }
        }
        prev = Some(c);
    }
    if plain_start < text.len() {
        out.push(Segment::Text(&text[plain_start..]));
    }
    out
}
