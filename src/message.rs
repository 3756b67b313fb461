use crate::content::Post;
use crate::render::{plain, telegram_html};

/// Builds the Telegram channel announcement. Line order and the blank-line
/// separators are what the channel renders as visual spacing.
pub fn build_announcement(post: &Post, url: &str, signature: &str) -> String {
    let title = telegram_html::escape_html(post.title());
    let body = telegram_html::render(&post.body);

    let parts = [
        format!("<b>{}</b>", title),
        "".to_string(),
        body,
        "".to_string(),
        format!("\u{1f517} <a href=\"{}\">Read more</a>", url),
        "".to_string(),
        signature.to_string(),
    ];
    parts.join("\n")
}

/// Builds the newsletter (subject, body) pair. The body is the `summary`
/// header if present, else the post rendered as plain text.
pub fn build_email(post: &Post, url: &str) -> (String, String) {
    let subject = post.title().to_string();
    let summary = match post.summary() {
        Some(summary) if !summary.is_empty() => summary.to_string(),
        _ => plain::render(&post.body),
    };
    let body = format!("{}\n\nRead it here: {}", summary, url);
    (subject, body)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::test_data::POST_HELLO;

    fn hello_post() -> Post {
        Post::from_string(&PathBuf::from("content/posts/hello.md"), POST_HELLO)
    }

    #[test]
    fn test_announcement_layout() {
        let post = hello_post();
        let message = build_announcement(&post, "https://x/posts/hello/", "@lab_log");
        assert_eq!(
            message,
            "<b>Hello</b>\n\nBody <b>bold</b> text.\n\n\u{1f517} \
             <a href=\"https://x/posts/hello/\">Read more</a>\n\n@lab_log"
        );
    }

    #[test]
    fn test_announcement_title_is_escaped() {
        let post = Post::from_string(
            &PathBuf::from("content/posts/q.md"),
            "title: Q <&> A\nslug: q\n\nBody.",
        );
        let message = build_announcement(&post, "https://x/posts/q/", "@lab_log");
        assert!(message.starts_with("<b>Q &lt;&amp;&gt; A</b>\n"));
    }

    #[test]
    fn test_email_uses_summary() {
        let post = hello_post();
        let (subject, body) = build_email(&post, "https://x/posts/hello/");
        assert_eq!(subject, "Hello");
        assert_eq!(
            body,
            "A tiny greeting\n\nRead it here: https://x/posts/hello/"
        );
    }

    #[test]
    fn test_email_falls_back_to_plain_body() {
        let post = Post::from_string(
            &PathBuf::from("content/posts/n.md"),
            "title: N\nslug: n\n\nSome **plain** words.",
        );
        let (_, body) = build_email(&post, "https://x/posts/n/");
        assert_eq!(body, "Some plain words.\n\nRead it here: https://x/posts/n/");
    }
}
