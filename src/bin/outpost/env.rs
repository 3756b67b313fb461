use std::env;

use outpost::dispatch::Credentials;

pub(crate) fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| v == "1").unwrap_or(false)
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// All secrets are read here, once; nothing below the binary touches the
/// environment.
pub(crate) fn load_credentials() -> Credentials {
    Credentials {
        telegram_bot_token: non_empty("TELEGRAM_BOT_TOKEN"),
        telegram_chat_id: non_empty("TELEGRAM_CHAT_ID"),
        buttondown_api_key: non_empty("BUTTONDOWN_API_KEY"),
    }
}

pub(crate) fn site_url_override() -> Option<String> {
    non_empty("SITEURL").map(|url| url.trim_end_matches('/').to_string())
}
