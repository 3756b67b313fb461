use std::path::Path;

use anyhow::{Context, Result};
use spdlog::{debug, info};

use crate::api::buttondown::ButtondownApi;
use crate::api::telegram::TelegramApi;
use crate::config::Config;
use crate::content::Post;
use crate::message;
use crate::post_list::list_posts;
use crate::sent_log::SentLog;

/// Secrets collected from the environment once, at the binary boundary.
pub struct Credentials {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub buttondown_api_key: Option<String>,
}

/// Every post whose slug is not yet in the sent log, in listing order.
pub fn pending_posts(posts_dir: &Path, sent_log: &SentLog) -> Result<Vec<Post>> {
    let sent = sent_log.load()?;
    let mut pending = vec![];

    let files = list_posts(posts_dir)
        .with_context(|| format!("Error listing posts in {}", posts_dir.display()))?;
    for file in files {
        let post = Post::from(&file)
            .with_context(|| format!("Error reading post {}", file.display()))?;
        let slug = post.slug();
        if sent.contains(&slug) {
            debug!("Already sent: {}", slug);
        } else {
            info!("Unsent post found: {} (slug: {})", file.display(), slug);
            pending.push(post);
        }
    }
    Ok(pending)
}

/// Announces all unsent posts to the Telegram channel. A slug is marked
/// sent only after its API call succeeded; the first failure aborts the
/// remaining posts of the run.
pub fn announce(config: &Config, creds: &Credentials) -> Result<()> {
    let token = creds
        .telegram_bot_token
        .as_deref()
        .context("Missing TELEGRAM_BOT_TOKEN")?;
    let chat_id = creds
        .telegram_chat_id
        .as_deref()
        .context("Missing TELEGRAM_CHAT_ID")?;
    let api = TelegramApi::new(token, chat_id)?;

    let sent_log = SentLog::new(&config.paths.telegram_sent_file);
    let pending = pending_posts(&config.paths.posts_dir, &sent_log)?;
    if pending.is_empty() {
        info!("No unsent posts found. Skipping Telegram.");
        return Ok(());
    }

    for post in &pending {
        let slug = post.slug();
        info!("Posting: {}", post.file_name.display());

        let url = post.link(&config.site.base_url);
        let text = message::build_announcement(post, &url, &config.site.signature);
        api.send_message(&text)?;
        sent_log.mark_sent(&slug)?;

        info!(
            "Posted to Telegram: {} (slug: {})",
            post.file_name.display(),
            slug
        );
    }
    Ok(())
}

/// Queues a newsletter email for every unsent post, with the same
/// send-then-mark bookkeeping as the Telegram run.
pub fn send_newsletter(config: &Config, creds: &Credentials) -> Result<()> {
    let api_key = creds
        .buttondown_api_key
        .as_deref()
        .context("Missing BUTTONDOWN_API_KEY")?;
    let api = ButtondownApi::new(api_key)?;

    let sent_log = SentLog::new(&config.paths.newsletter_sent_file);
    let pending = pending_posts(&config.paths.posts_dir, &sent_log)?;
    if pending.is_empty() {
        info!("No unsent posts found. Skipping newsletter.");
        return Ok(());
    }

    for post in &pending {
        let slug = post.slug();
        let url = post.link(&config.site.base_url);
        let (subject, body) = message::build_email(post, &url);
        api.queue_email(&subject, &body)?;
        sent_log.mark_sent(&slug)?;

        info!(
            "Queued newsletter for: {} (slug: {})",
            post.file_name.display(),
            slug
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use super::*;
    use crate::test_data::POST_HELLO;

    #[test]
    fn test_pending_skips_sent_slugs() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let posts_dir = dir.path().join("posts");
        fs::create_dir(&posts_dir)?;
        fs::write(posts_dir.join("hello.md"), POST_HELLO)?;
        fs::write(posts_dir.join("second.md"), "title: Second\n\nMore text.")?;

        let log_path = dir.path().join(".telegram_sent_posts");
        fs::write(&log_path, "hello")?;
        let sent_log = SentLog::new(&log_path);

        let pending = pending_posts(&posts_dir, &sent_log).unwrap();
        let slugs: Vec<String> = pending.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs, ["second"]);
        Ok(())
    }

    #[test]
    fn test_all_sent_means_nothing_pending() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let posts_dir = dir.path().join("posts");
        fs::create_dir(&posts_dir)?;
        fs::write(posts_dir.join("hello.md"), POST_HELLO)?;

        let log_path = dir.path().join(".telegram_sent_posts");
        fs::write(&log_path, "hello")?;
        let sent_log = SentLog::new(&log_path);

        let pending = pending_posts(&posts_dir, &sent_log).unwrap();
        assert!(pending.is_empty());
        Ok(())
    }

    #[test]
    fn test_slug_resolution_prefers_metadata() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let posts_dir = dir.path().join("posts");
        fs::create_dir(&posts_dir)?;
        // File stem and slug key differ; the sent log tracks the slug key
        fs::write(posts_dir.join("2024-01-hello.md"), POST_HELLO)?;

        let log_path = dir.path().join(".telegram_sent_posts");
        fs::write(&log_path, "hello")?;
        let sent_log = SentLog::new(&log_path);

        let pending = pending_posts(&posts_dir, &sent_log).unwrap();
        assert!(pending.is_empty());
        Ok(())
    }
}
