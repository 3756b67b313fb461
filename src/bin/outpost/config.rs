use std::env;
use std::path::PathBuf;

use outpost::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_path = env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;
    let cur_dir = env::current_dir().ok()?;

    if exe_dir.join(CFG_FILE_NAME).exists() {
        return Some(exe_dir.join(CFG_FILE_NAME));
    }

    if cur_dir.join(CFG_FILE_NAME).exists() {
        return Some(cur_dir.join(CFG_FILE_NAME));
    }

    if let Some(cfg_dir) = dirs::config_dir() {
        if cfg_dir.join(CFG_FILE_NAME).exists() {
            return Some(cfg_dir.join(CFG_FILE_NAME));
        }
    }

    None
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path {
        Some(path) => path,
        None => match get_config_path() {
            Some(path) => path,
            // No config file anywhere; the built-in defaults are enough
            None => return Ok(Config::default()),
        },
    };

    println!("Reading config from {}", config_path.display());
    match read_config(&config_path) {
        Ok(config) => Ok(config),
        Err(e) => Err(e.to_string()),
    }
}
