/// Code extracted from a Markdown body before any other rule runs.
///
/// Fenced blocks and inline spans are swapped for placeholder tokens so the
/// escaping and inline-style rules never touch literal code. Contents are
/// kept raw; each output channel renders them with its own wrapping.
pub struct CodeSpans {
    pub text: String,
    pub blocks: Vec<String>,
    pub inline: Vec<String>,
}

// NUL-delimited, no markdown delimiter characters: none of the style,
// link or heading rules can match or mangle a token.
pub fn block_token(index: usize) -> String {
    format!("\u{0}CB{}\u{0}", index)
}

pub fn inline_token(index: usize) -> String {
    format!("\u{0}IC{}\u{0}", index)
}

pub fn extract(text: &str) -> CodeSpans {
    let (text, blocks) = extract_fenced(text);
    let (text, inline) = extract_inline(&text);
    CodeSpans {
        text,
        blocks,
        inline,
    }
}

/// A fence opens with ``` plus an optional language tag at the end of the
/// line, and closes at the next ```. An unterminated fence is left as-is.
fn extract_fenced(input: &str) -> (String, Vec<String>) {
    let mut out = String::new();
    let mut blocks: Vec<String> = vec![];
    let mut remaining = input;

    while let Some(start) = remaining.find("```") {
        let after = &remaining[start + 3..];
        let tag_len = after
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .map(|c| c.len_utf8())
            .sum::<usize>();
        let rest = &after[tag_len..];
        if !rest.starts_with('\n') {
            // Not a fence opener
            out.push_str(&remaining[..start + 3]);
            remaining = after;
            continue;
        }
        let content = &after[tag_len + 1..];
        match content.find("```") {
            Some(end) => {
                out.push_str(&remaining[..start]);
                out.push_str(&block_token(blocks.len()));
                blocks.push(content[..end].to_string());
                remaining = &content[end + 3..];
            }
            None => {
                out.push_str(&remaining[..start + 3]);
                remaining = after;
            }
        }
    }
    out.push_str(remaining);
    (out, blocks)
}

/// Inline spans are single-backtick pairs with non-empty content. Runs after
/// the fences, so no triple backticks are left in the input.
fn extract_inline(input: &str) -> (String, Vec<String>) {
    let mut out = String::new();
    let mut spans: Vec<String> = vec![];
    let mut remaining = input;

    while let Some(start) = remaining.find('`') {
        let after = &remaining[start + 1..];
        match after.find('`') {
            Some(end) if end > 0 => {
                out.push_str(&remaining[..start]);
                out.push_str(&inline_token(spans.len()));
                spans.push(after[..end].to_string());
                remaining = &after[end + 1..];
            }
            _ => {
                // Lone or empty backtick pair stays literal
                out.push_str(&remaining[..start + 1]);
                remaining = after;
            }
        }
    }
    out.push_str(remaining);
    (out, spans)
}
