use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use serde::Deserialize;

#[derive(Deserialize)]
#[serde(default)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub telegram_sent_file: PathBuf,
    pub newsletter_sent_file: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            posts_dir: PathBuf::from("content/posts"),
            telegram_sent_file: PathBuf::from(".telegram_sent_posts"),
            newsletter_sent_file: PathBuf::from(".newsletter_sent_posts"),
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct Site {
    /// Base URL used when a post has no explicit `link` header.
    /// The SITEURL environment variable overrides it.
    pub base_url: String,
    /// Fixed channel signature appended to every announcement
    pub signature: String,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            base_url: "https://kmamaroziqov.github.io".to_string(),
            signature: "@lab_log".to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub site: Site,
    pub log: Option<Log>,
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    Ok(cfg)
}
