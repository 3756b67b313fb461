pub mod api;
pub mod config;
pub mod content;
pub mod dispatch;
pub mod logger;
pub mod message;
pub mod post_list;
pub mod render;
pub mod sent_log;
mod test_data;
