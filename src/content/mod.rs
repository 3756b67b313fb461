pub mod metadata;
pub mod post;

pub use metadata::Metadata;
pub use post::Post;
