use chrono::{DateTime, Utc};

/// Channel-level data of an RSS document.
#[derive(Debug, Clone)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Rendered as `lastBuildDate`.
    pub created: DateTime<Utc>,
    pub items: Vec<FeedItem>,
}

impl Feed {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            created,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: FeedItem) {
        self.items.push(item);
    }
}

/// A single `<item>` entry.
#[derive(Debug, Clone)]
pub struct FeedItem {
    /// Emitted as a non-permalink `<guid>`.
    pub id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    /// Rendered as `pubDate`.
    pub created: DateTime<Utc>,
    pub enclosure: Option<Enclosure>,
}

/// Media attached to an item, e.g. an episode still.
#[derive(Debug, Clone)]
pub struct Enclosure {
    pub url: String,
    pub mime_type: String,
}
