//! mov-cli-test - A test scraper plugin for mov-cli
//!
//! This library shows the minimal shape of a mov-cli plugin: a declaration the
//! host loads, and a scraper that searches a small catalog of creative commons
//! films and resolves them to playable streams.
//!
//! # Examples
//!
//! ```no_run
//! use mov_cli_test::{Config, EpisodeSelector, HttpClient, ScraperOptions, plugin};
//!
//! let config = Config::default();
//! let http_client = HttpClient::new(&config).unwrap();
//! let factory = plugin().scraper(None).unwrap();
//! let scraper = factory(config, http_client, ScraperOptions::new());
//!
//! for metadata in scraper.search("bunny", None) {
//!     let media = scraper.scrape(&metadata, EpisodeSelector::default()).unwrap();
//!     println!("{}: {}", media.title(), media.url());
//! }
//! ```

mod config;
mod http;
mod logging;
mod media;
mod metadata;
mod plugin;
mod prompt;
mod resolver;
mod scraper;

// Re-export error types
pub use config::ConfigError;
pub use http::HttpClientError;
pub use prompt::PromptError;
pub use resolver::ResolveError;
pub use scraper::ScraperError;

pub use config::{Config, config_path};
pub use http::HttpClient;
pub use logging::{NullLogger, ScraperLogger, TracingLogger};
pub use media::{EpisodeCounts, EpisodeSelector, Media, Movie, Series};
pub use metadata::{Metadata, MetadataType};
pub use plugin::{
    DEFAULT_SCRAPER, PACKAGE_NAME, PLUGIN_SCHEMA_VERSION, PluginHookData, ScraperFactory, plugin,
};
pub use prompt::{ConsolePrompter, Prompter};
pub use resolver::{StreamResolver, YtDlpResolver, is_resolvable};
pub use scraper::{RESOLVE_STREAMS_OPTION, Scraper, ScraperOptions, SearchResults, TestScraper};

use thiserror::Error;

/// Version of this plugin package
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Top-level error type for mov-cli-test operations
#[derive(Debug, Error)]
pub enum MovCliTestError {
    /// Error while loading the configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while building the HTTP client
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] HttpClientError),

    /// Error while scraping a metadata record
    #[error("Scraper error: {0}")]
    Scraper(#[from] ScraperError),

    /// Error while prompting the user
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// The requested scraper is not registered
    #[error("Unknown scraper '{0}'")]
    UnknownScraper(String),

    /// The chosen result number is out of range
    #[error("Invalid choice {choice}, pick a number between 1 and {available}")]
    InvalidChoice { choice: usize, available: usize },
}
