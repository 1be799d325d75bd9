//! RSS 2.0 feed rendering.
//!
//! Builds a complete `<rss version="2.0">` document from a [`Feed`] using the
//! quick-xml event writer.

mod error;
pub mod models;
mod writer;

pub use error::RssError;
pub use models::{Enclosure, Feed, FeedItem};
pub use writer::render;

pub type Result<T> = std::result::Result<T, RssError>;
