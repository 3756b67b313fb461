pub mod code_spans;
pub mod plain;
pub mod telegram_html;
