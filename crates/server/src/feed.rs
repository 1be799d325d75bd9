//! Mapping from aggregated episodes to RSS items.

use chrono::{DateTime, Utc};
use metadata::{parse_air_date, Episode};
use rss::{Enclosure, Feed, FeedItem};

pub const FEED_TITLE: &str = "moviefeed";
pub const FEED_LINK: &str = "http://localhost";
pub const FEED_DESCRIPTION: &str = "Latest episodes from followed shows";

const TMDB_EPISODE_URL: &str = "https://www.themoviedb.org/tv/episode";
const TMDB_STILL_BASE_URL: &str = "https://image.tmdb.org/t/p/w300";

/// `{show} S{season}E{episode}: {title}`
pub fn item_title(episode: &Episode) -> String {
    format!(
        "{} S{}E{}: {}",
        episode.show_name, episode.season_number, episode.episode_number, episode.title
    )
}

pub fn item_link(episode: &Episode) -> String {
    format!("{}/{}", TMDB_EPISODE_URL, episode.id)
}

fn to_item(episode: &Episode) -> FeedItem {
    FeedItem {
        id: episode.identity(),
        title: item_title(episode),
        link: item_link(episode),
        description: episode.overview.clone(),
        // Episodes only reach the feed after passing the recency filter,
        // which already required a parsable date.
        created: parse_air_date(&episode.air_date).unwrap_or_default(),
        enclosure: episode.still_path.as_ref().map(|path| Enclosure {
            url: format!("{}{}", TMDB_STILL_BASE_URL, path),
            mime_type: "image/jpeg".to_string(),
        }),
    }
}

/// Build the feed, newest-appended episodes first.
pub fn build_feed(episodes: &[Episode], built_at: DateTime<Utc>) -> Feed {
    let mut feed = Feed::new(FEED_TITLE, FEED_LINK, FEED_DESCRIPTION, built_at);
    for episode in episodes.iter().rev() {
        feed.push(to_item(episode));
    }
    feed
}

pub fn render_feed(episodes: &[Episode], built_at: DateTime<Utc>) -> rss::Result<String> {
    rss::render(&build_feed(episodes, built_at))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn episode(id: i64, season: i64, number: i64, title: &str) -> Episode {
        Episode {
            id,
            title: title.to_string(),
            overview: format!("Overview of {}", title),
            air_date: "2024-05-20".to_string(),
            episode_number: number,
            season_number: season,
            still_path: None,
            show_name: "Test Show".to_string(),
            show_id: "1399".to_string(),
        }
    }

    #[test]
    fn test_item_fields() {
        let mut ep = episode(63056, 1, 3, "Lord Snow");
        ep.still_path = Some("/abc.jpg".to_string());

        let item = to_item(&ep);
        assert_eq!(item.id, "1399-1-3");
        assert_eq!(item.title, "Test Show S1E3: Lord Snow");
        assert_eq!(item.link, "https://www.themoviedb.org/tv/episode/63056");
        assert_eq!(item.description, "Overview of Lord Snow");
        assert_eq!(item.created, Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap());
        assert_eq!(
            item.enclosure.unwrap().url,
            "https://image.tmdb.org/t/p/w300/abc.jpg"
        );
    }

    #[test]
    fn test_feed_is_reverse_of_aggregation_order() {
        let episodes = vec![
            episode(1, 1, 1, "First"),
            episode(2, 1, 2, "Second"),
            episode(3, 1, 3, "Third"),
        ];
        let feed = build_feed(&episodes, Utc::now());

        let titles: Vec<_> = feed.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Test Show S1E3: Third",
                "Test Show S1E2: Second",
                "Test Show S1E1: First"
            ]
        );
        assert_eq!(feed.title, FEED_TITLE);
    }

    #[test]
    fn test_render_empty_feed() {
        let xml = render_feed(&[], Utc::now()).unwrap();
        assert!(xml.contains("<title>moviefeed</title>"));
        assert!(!xml.contains("<item>"));
    }
}
