//! The scraper contract
//!
//! A scraper turns a free-text query into catalog metadata and turns a chosen
//! metadata record into a playable media descriptor. Hosts construct scrapers
//! through the factories registered in the plugin declaration.

mod test_scraper;

pub use test_scraper::{RESOLVE_STREAMS_OPTION, SearchResults, TestScraper};

use crate::media::{EpisodeCounts, EpisodeSelector, Media};
use crate::metadata::Metadata;
use crate::resolver::ResolveError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while scraping a metadata record
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Resolving the direct stream URL failed
    #[error("Stream resolution error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Scraper-specific options, as configured by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScraperOptions(HashMap<String, serde_json::Value>);

impl ScraperOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, returning the updated set
    pub fn with(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    /// Reads a boolean option; missing or non-boolean values count as false
    pub fn flag(&self, name: &str) -> bool {
        self.get(name)
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}

/// Trait implemented by every scraper a plugin registers
///
/// The host calls these methods sequentially for a single user session.
pub trait Scraper {
    /// Searches the scraper's source for the given query
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text query, matched case-insensitively
    /// * `limit` - Maximum number of results to yield (None for all)
    ///
    /// # Returns
    ///
    /// A lazy sequence of matching metadata. Each call starts a fresh scan.
    fn search<'a>(
        &'a self,
        query: &str,
        limit: Option<usize>,
    ) -> Box<dyn Iterator<Item = Metadata> + 'a>;

    /// Resolves a metadata record into a playable media descriptor
    ///
    /// # Errors
    ///
    /// Returns an error if the stream URL cannot be resolved.
    fn scrape(
        &self,
        metadata: &Metadata,
        episode: EpisodeSelector,
    ) -> Result<Media, ScraperError>;

    /// Returns the number of episodes per season for a metadata record
    ///
    /// The `None` key stands for "no episodes".
    fn scrape_episodes(&self, metadata: &Metadata) -> EpisodeCounts;
}
