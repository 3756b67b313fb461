use lazy_static::lazy_static;
use regex::Regex;

use crate::render::code_spans;
use crate::render::telegram_html::replace_repeated;

/// Converts a Markdown body to plain text for channels without markup
/// support (the newsletter body fallback). Same rule order as the HTML
/// renderer; style markers are dropped, link and image URLs are kept.
pub fn render(body: &str) -> String {
    let spans = code_spans::extract(body);

    lazy_static! {
        static ref BOLD_STARS: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
        static ref BOLD_UNDER: Regex = Regex::new(r"__(.+?)__").unwrap();
        static ref ITALIC_STAR: Regex = Regex::new(r"(^|[^*_])\*([^*]+)\*($|[^*_])").unwrap();
        static ref ITALIC_UNDER: Regex = Regex::new(r"(^|[^*_])_([^_]+)_($|[^*_])").unwrap();
        static ref STRIKE: Regex = Regex::new(r"~~(.+?)~~").unwrap();
        static ref IMAGE: Regex = Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap();
        static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
        static ref HEADING: Regex = Regex::new(r"(?m)^#{1,6}\s+(.+)$").unwrap();
        static ref EXTRA_NEWLINES: Regex = Regex::new(r"\n{3,}").unwrap();
    }

    let text = BOLD_STARS.replace_all(&spans.text, "$1");
    let text = BOLD_UNDER.replace_all(&text, "$1");
    let text = replace_repeated(&ITALIC_STAR, &text, "${1}${2}${3}");
    let text = replace_repeated(&ITALIC_UNDER, &text, "${1}${2}${3}");
    let text = STRIKE.replace_all(&text, "$1");

    let text = IMAGE.replace_all(&text, "\u{1f5bc} $1: $2");
    let text = LINK.replace_all(&text, "$1 ($2)");

    let text = HEADING.replace_all(&text, "$1");
    let mut text = EXTRA_NEWLINES.replace_all(&text, "\n\n").into_owned();

    for (i, block) in spans.blocks.iter().enumerate() {
        let token = code_spans::block_token(i);
        text = text.replace(token.as_str(), block.trim());
    }
    for (i, code) in spans.inline.iter().enumerate() {
        let token = code_spans::inline_token(i);
        text = text.replace(token.as_str(), code);
    }

    text.trim().to_string()
}
