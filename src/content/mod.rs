//! Content module - blog posts and their front-matter

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::FrontMatter;
pub use post::{Attachment, Post, Song, SongSource};
