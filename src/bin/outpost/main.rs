use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spdlog::error;

use outpost::dispatch::{announce, send_newsletter};
use outpost::logger::configure_logger;

use crate::config::open_config;
use crate::env::{env_flag, load_credentials, site_url_override};

mod config;
mod env;

const CFG_FILE_NAME: &str = "outpost.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Announce unsent posts to the Telegram channel
    Telegram(RunArgs),
    /// Queue newsletter emails for unsent posts
    Newsletter(RunArgs),
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct RunArgs {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Opt-out flags short-circuit the whole run
    let skip_flag = match args {
        Args::Telegram(_) => "SKIP_TELEGRAM",
        Args::Newsletter(_) => "SKIP_NEWSLETTER",
    };
    if env_flag(skip_flag) {
        println!("Skipping ({}=1).", skip_flag);
        return ExitCode::SUCCESS;
    }

    // Required credentials are checked before any post is read
    let creds = load_credentials();
    match args {
        Args::Telegram(_) => {
            if creds.telegram_bot_token.is_none() || creds.telegram_chat_id.is_none() {
                eprintln!("Missing TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID; aborting.");
                return ExitCode::FAILURE;
            }
        }
        Args::Newsletter(_) => {
            if creds.buttondown_api_key.is_none() {
                eprintln!("Missing BUTTONDOWN_API_KEY; aborting.");
                return ExitCode::FAILURE;
            }
        }
    }

    let config_path = match &args {
        Args::Telegram(run) | Args::Newsletter(run) => {
            run.config_path.clone().map(PathBuf::from)
        }
    };
    let mut config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run outpost --help");
            return ExitCode::FAILURE;
        }
    };

    if let Some(url) = site_url_override() {
        config.site.base_url = url;
    }

    if let Err(err) = configure_logger(&config) {
        eprintln!("Error creating logger sinks. Desc={}", err);
    }

    let result = match args {
        Args::Telegram(_) => announce(&config, &creds),
        Args::Newsletter(_) => send_newsletter(&config, &creds),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
