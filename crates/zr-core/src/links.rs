/// Piece of task content, either plain text or a bare URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSegment<'a> {
    Text(&'a str),
    Link(&'a str),
}

const LINK_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Split content into text and link segments.
///
/// A link is any whitespace-delimited token starting with `http://` or
/// `https://` that has something after the scheme. Whitespace stays in the
/// surrounding text segments, so concatenating all segments gives back the
/// input.
pub fn link_segments(content: &str) -> Vec<ContentSegment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while cursor < content.len() {
        let rest = &content[cursor..];
        let token_len = rest.find(char::is_whitespace).unwrap_or(rest.len());

        if token_len == 0 {
            let ws = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            cursor += ws;
            continue;
        }

        let token = &rest[..token_len];
        let is_link = LINK_PREFIXES
            .iter()
            .any(|p| token.len() > p.len() && token.starts_with(p));

        if is_link {
            if text_start < cursor {
                segments.push(ContentSegment::Text(&content[text_start..cursor]));
            }
            segments.push(ContentSegment::Link(token));
            text_start = cursor + token_len;
        }
        cursor += token_len;
    }

    if text_start < content.len() {
        segments.push(ContentSegment::Text(&content[text_start..]));
    }

    segments
}
