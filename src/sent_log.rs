use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Slugs already delivered on a channel, one per line, kept sorted.
///
/// Read-modify-write by the sole active writer; CI serializes runs, so
/// there is no locking and the last writer wins.
pub struct SentLog {
    path: PathBuf,
}

impl SentLog {
    pub fn new(path: &Path) -> SentLog {
        SentLog {
            path: path.to_path_buf(),
        }
    }

    /// The persisted slug set; empty if the log does not exist yet.
    pub fn load(&self) -> io::Result<BTreeSet<String>> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect())
    }

    pub fn is_sent(&self, slug: &str) -> io::Result<bool> {
        Ok(self.load()?.contains(slug))
    }

    /// Adds a slug and rewrites the whole log, sorted and newline-joined.
    pub fn mark_sent(&self, slug: &str) -> io::Result<()> {
        let mut sent = self.load()?;
        sent.insert(slug.to_string());
        let joined = sent.into_iter().collect::<Vec<_>>().join("\n");
        fs::write(&self.path, joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_log_is_empty() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let log = SentLog::new(&dir.path().join(".telegram_sent_posts"));
        assert!(log.load()?.is_empty());
        assert!(!log.is_sent("hello")?);
        Ok(())
    }

    #[test]
    fn test_mark_sent_persists() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(".telegram_sent_posts");
        let log = SentLog::new(&path);

        log.mark_sent("hello")?;
        assert!(log.is_sent("hello")?);
        assert!(!log.is_sent("other")?);

        // A fresh reader sees the same state
        let reread = SentLog::new(&path);
        assert!(reread.is_sent("hello")?);
        Ok(())
    }

    #[test]
    fn test_log_is_sorted_and_newline_joined() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(".telegram_sent_posts");
        let log = SentLog::new(&path);

        log.mark_sent("zebra")?;
        log.mark_sent("alpha")?;
        log.mark_sent("mango")?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "alpha\nmango\nzebra");
        Ok(())
    }

    #[test]
    fn test_mark_sent_is_idempotent() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(".telegram_sent_posts");
        let log = SentLog::new(&path);

        log.mark_sent("hello")?;
        log.mark_sent("hello")?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "hello");
        Ok(())
    }
}
