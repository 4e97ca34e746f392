//! Playable media descriptors
//!
//! `Scraper::scrape` turns a `Metadata` record into a `Media` value the host
//! can hand to a player. Single items and multi-part items are separate
//! variants so callers always match on both.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies which part of a multi-part item to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSelector {
    pub episode: u32,
    pub season: u32,
}

impl Default for EpisodeSelector {
    fn default() -> Self {
        Self {
            episode: 1,
            season: 1,
        }
    }
}

/// Episode number (or `None` for "no episode") mapped to a count
pub type EpisodeCounts = BTreeMap<Option<u32>, u32>;

/// A resolved single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub url: String,
    pub title: String,
    pub referrer: String,
    pub year: Option<String>,
    pub subtitles: Option<Vec<String>>,
}

/// A resolved part of a multi-part item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub url: String,
    pub title: String,
    pub referrer: String,
    pub episode: EpisodeSelector,
    pub subtitles: Option<Vec<String>>,
}

/// The result of scraping a metadata record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Single(Movie),
    Multi(Series),
}

impl Media {
    /// The playable stream URL
    pub fn url(&self) -> &str {
        match self {
            Media::Single(movie) => &movie.url,
            Media::Multi(series) => &series.url,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Media::Single(movie) => &movie.title,
            Media::Multi(series) => &series.title,
        }
    }

    /// The referrer header a player should send with the stream request
    pub fn referrer(&self) -> &str {
        match self {
            Media::Single(movie) => &movie.referrer,
            Media::Multi(series) => &series.referrer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selector_is_first_episode_of_first_season() {
        let selector = EpisodeSelector::default();
        assert_eq!(selector.episode, 1);
        assert_eq!(selector.season, 1);
    }

    #[test]
    fn test_accessors_cover_both_variants() {
        let single = Media::Single(Movie {
            url: "https://a/video.webm".to_string(),
            title: "A".to_string(),
            referrer: "https://a/".to_string(),
            year: Some("2001".to_string()),
            subtitles: None,
        });
        let multi = Media::Multi(Series {
            url: "https://b/video.webm".to_string(),
            title: "B".to_string(),
            referrer: "https://b/".to_string(),
            episode: EpisodeSelector {
                episode: 3,
                season: 2,
            },
            subtitles: None,
        });

        assert_eq!(single.url(), "https://a/video.webm");
        assert_eq!(single.title(), "A");
        assert_eq!(single.referrer(), "https://a/");
        assert_eq!(multi.url(), "https://b/video.webm");
        assert_eq!(multi.title(), "B");
        assert_eq!(multi.referrer(), "https://b/");
    }
}
