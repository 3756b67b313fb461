use fmt::Display;
use std::fmt::Formatter;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use crate::content::Metadata;

/// Fallback title when the header has no `title` key
pub const DEFAULT_TITLE: &str = "New post";

/// Example of post
/// title: What I learned after 20+ years of software development
/// slug: what-i-learned
/// summary: A short retrospective
///
/// Body text in Markdown.
pub struct Post {
    pub file_name: PathBuf,
    pub metadata: Metadata,
    pub body: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slug={}, title={}\nbody:\n{}",
            self.slug(),
            self.title(),
            self.body
        )
    }
}

impl Post {
    pub fn from(file_name: &Path) -> io::Result<Post> {
        let content = fs::read_to_string(file_name)?;
        Ok(Self::from_string(file_name, &content))
    }

    pub fn from_string(file_name: &Path, content: &str) -> Post {
        let (metadata, body) = Metadata::parse(content);
        Post {
            file_name: file_name.to_path_buf(),
            metadata,
            body,
        }
    }

    /// The `slug` header key, falling back to the file stem
    pub fn slug(&self) -> String {
        match self.metadata.get("slug") {
            Some(slug) => slug.to_string(),
            None => self
                .file_name
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn title(&self) -> &str {
        self.metadata.get("title").unwrap_or(DEFAULT_TITLE)
    }

    pub fn summary(&self) -> Option<&str> {
        self.metadata.get("summary")
    }

    /// The explicit `link` header key, or `{base_url}/posts/{slug}/`
    pub fn link(&self, base_url: &str) -> String {
        match self.metadata.get("link") {
            Some(link) => link.to_string(),
            None => format!("{}/posts/{}/", base_url.trim_end_matches('/'), self.slug()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::POST_HELLO;

    #[test]
    fn test_from_string() {
        let file_name = PathBuf::from("content/posts/hello.md");
        let post = Post::from_string(&file_name, POST_HELLO);
        assert_eq!(post.slug(), "hello");
        assert_eq!(post.title(), "Hello");
        assert_eq!(post.body, "Body **bold** text.");
    }

    #[test]
    fn test_slug_falls_back_to_file_stem() {
        let file_name = PathBuf::from("content/posts/2024-first-post.md");
        let post = Post::from_string(&file_name, "title: First\n\nSomething");
        assert_eq!(post.slug(), "2024-first-post");
    }

    #[test]
    fn test_title_falls_back_to_default() {
        let file_name = PathBuf::from("content/posts/untitled.md");
        let post = Post::from_string(&file_name, "slug: untitled\n\nSomething");
        assert_eq!(post.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_link_built_from_base_url() {
        let file_name = PathBuf::from("content/posts/hello.md");
        let post = Post::from_string(&file_name, POST_HELLO);
        assert_eq!(post.link("https://x"), "https://x/posts/hello/");
        assert_eq!(post.link("https://x/"), "https://x/posts/hello/");
    }

    #[test]
    fn test_explicit_link_wins() {
        let file_name = PathBuf::from("content/posts/hello.md");
        let post = Post::from_string(&file_name, "link: https://elsewhere/p/1\n\nSomething");
        assert_eq!(post.link("https://x"), "https://elsewhere/p/1");
    }
}
