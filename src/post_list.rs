use std::path::{Path, PathBuf};
use std::{fs, io};

/// Lists the Markdown post files directly inside the posts directory,
/// sorted by file name so dispatch order is stable across runs.
pub fn list_posts(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut posts = vec![];
    let entries = fs::read_dir(posts_dir)?;
    for entry in entries {
        if let Ok(entry) = entry {
            if let Ok(file_type) = entry.file_type() {
                if !file_type.is_file() {
                    continue;
                }
                let file_name = entry.file_name();
                if let Some(file_name) = file_name.to_str() {
                    // Only .md posts are published by the site
                    if file_name.ends_with(".md") {
                        posts.push(entry.path());
                    }
                }
            }
        }
    }
    posts.sort();
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_lists_only_md_files_sorted() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("b.md"), "title: B\n\nbody")?;
        fs::write(dir.path().join("a.md"), "title: A\n\nbody")?;
        fs::write(dir.path().join("notes.txt"), "not a post")?;
        fs::create_dir(dir.path().join("drafts.md"))?;

        let posts = list_posts(dir.path())?;
        let names: Vec<String> = posts
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["a.md", "b.md"]);
        Ok(())
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let res = list_posts(Path::new("no/such/dir"));
        assert!(res.is_err());
    }
}
