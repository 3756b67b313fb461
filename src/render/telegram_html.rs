use lazy_static::lazy_static;
use regex::Regex;

use crate::render::code_spans;

/// Escapes the characters Telegram reserves in HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Converts a Markdown body to the HTML subset accepted by the Telegram
/// sendMessage API. Pure; identical input always gives identical output.
///
/// Code is pulled out first and only restored after every other rule has
/// run, so nothing below ever rewrites literal code.
pub fn render(body: &str) -> String {
    let spans = code_spans::extract(body);
    let text = escape_html(&spans.text);

    lazy_static! {
        static ref BOLD_STARS: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
        static ref BOLD_UNDER: Regex = Regex::new(r"__(.+?)__").unwrap();
        static ref ITALIC_STAR: Regex = Regex::new(r"(^|[^*_])\*([^*]+)\*($|[^*_])").unwrap();
        static ref ITALIC_UNDER: Regex = Regex::new(r"(^|[^*_])_([^_]+)_($|[^*_])").unwrap();
        static ref STRIKE: Regex = Regex::new(r"~~(.+?)~~").unwrap();
        static ref IMAGE: Regex = Regex::new(r"!\[([^\]]*)\]\([^)]+\)").unwrap();
        static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
        static ref HEADING: Regex = Regex::new(r"(?m)^#{1,6}\s+(.+)$").unwrap();
        static ref EXTRA_NEWLINES: Regex = Regex::new(r"\n{3,}").unwrap();
    }

    let text = BOLD_STARS.replace_all(&text, "<b>$1</b>");
    let text = BOLD_UNDER.replace_all(&text, "<b>$1</b>");
    let text = replace_repeated(&ITALIC_STAR, &text, "${1}<i>${2}</i>${3}");
    let text = replace_repeated(&ITALIC_UNDER, &text, "${1}<i>${2}</i>${3}");
    let text = STRIKE.replace_all(&text, "<s>$1</s>");

    // Images before links: an image carries a link pattern inside it
    let text = IMAGE.replace_all(&text, "\u{1f5bc} $1");
    let text = LINK.replace_all(&text, "<a href=\"$2\">$1</a>");

    let text = HEADING.replace_all(&text, "<b>$1</b>");
    let mut text = EXTRA_NEWLINES.replace_all(&text, "\n\n").into_owned();

    for (i, block) in spans.blocks.iter().enumerate() {
        let token = code_spans::block_token(i);
        let rendered = format!("<pre>{}</pre>", escape_html(block.trim()));
        text = text.replace(token.as_str(), &rendered);
    }
    for (i, code) in spans.inline.iter().enumerate() {
        let token = code_spans::inline_token(i);
        let rendered = format!("<code>{}</code>", escape_html(code));
        text = text.replace(token.as_str(), &rendered);
    }

    text.trim().to_string()
}

/// Applies a first-match replacement until a fixed point. The italic rules
/// consume one boundary character on each side, so a single replace_all
/// would skip back-to-back matches.
pub(crate) fn replace_repeated(re: &Regex, text: &str, rep: &str) -> String {
    let mut text = text.to_string();
    loop {
        let replaced = re.replace(&text, rep).into_owned();
        if replaced == text {
            break;
        }
        text = replaced;
    }
    text
}
