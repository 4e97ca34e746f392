//! The test scraper
//!
//! Serves a small, fixed catalog of creative commons films. It exists to show
//! plugin authors the shape of a scraper and to give new users something to
//! watch before they install real plugins.

use super::{Scraper, ScraperError, ScraperOptions};
use crate::config::Config;
use crate::http::HttpClient;
use crate::logging::{ScraperLogger, TracingLogger};
use crate::media::{EpisodeCounts, EpisodeSelector, Media, Movie, Series};
use crate::metadata::{Metadata, MetadataType};
use crate::prompt::{ConsolePrompter, Prompter};
use crate::resolver::{StreamResolver, YtDlpResolver, is_resolvable};

/// Queries that show the welcome message and list the whole catalog
const SHOW_ALL_KEYWORDS: &[&str] = &["abc", "all", "example"];

/// Option that enables direct stream resolution for hosted videos
pub const RESOLVE_STREAMS_OPTION: &str = "resolve_streams";

const WELCOME_MESSAGE: &str = "
  ✨ Welcome to mov-cli!!!

  mov-cli is a command line tool used to stream or watch anything and everything from the comfort of your terminal.
  The plugin you just executed right now is a test plugin that contains some free films and animations in the creative commons.

  To leverage the full power of mov-cli you must install more plugins.

  You can find third-party plugins over here: https://github.com/topics/mov-cli-plugin
  Then you can find the instructions on how to install a plugin over here: https://github.com/mov-cli/mov-cli/wiki/Plugins
";

/// Scraper over a fixed in-memory catalog
pub struct TestScraper {
    config: Config,
    http_client: HttpClient,
    options: ScraperOptions,
    catalog: Vec<Metadata>,
    message: String,
    logger: Box<dyn ScraperLogger>,
    prompter: Box<dyn Prompter>,
    resolver: Box<dyn StreamResolver>,
}

impl TestScraper {
    /// Creates the scraper and its catalog
    ///
    /// No network or disk I/O happens here. The HTTP client is kept for parity
    /// with other scrapers; the test catalog never needs it.
    pub fn new(config: Config, http_client: HttpClient, options: ScraperOptions) -> Self {
        let catalog = vec![
            Metadata::new(
                "https://youtu.be/aqz-KE-bpKQ",
                "Big Buck Bunny",
                MetadataType::Movie,
                Some("2008"),
            ),
            Metadata::new(
                "https://www.youtube.com/watch?v=BBgghnQF6E4",
                "Steamboat Willie",
                MetadataType::Movie,
                Some("1928"),
            ),
            Metadata::new(
                "https://cdn.devgoldy.xyz/ricky.webm",
                "Ricky :)",
                MetadataType::Movie,
                Some("2009"),
            ),
        ];

        Self {
            config,
            http_client,
            options,
            catalog,
            message: WELCOME_MESSAGE.to_string(),
            logger: Box::new(TracingLogger::new("Test")),
            prompter: Box::new(ConsolePrompter),
            resolver: Box::new(YtDlpResolver::default()),
        }
    }

    /// Replaces the logger
    pub fn with_logger(mut self, logger: impl ScraperLogger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Replaces the prompter used for the welcome message
    pub fn with_prompter(mut self, prompter: impl Prompter + 'static) -> Self {
        self.prompter = Box::new(prompter);
        self
    }

    /// Replaces the stream resolver
    pub fn with_resolver(mut self, resolver: impl StreamResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// The full catalog, in order
    pub fn catalog(&self) -> &[Metadata] {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns a lazy iterator over the catalog entries matching `query`
    pub fn search_catalog(&self, query: &str, limit: Option<usize>) -> SearchResults<'_> {
        let query = query.to_lowercase();
        let show_all = SHOW_ALL_KEYWORDS.contains(&query.as_str());

        SearchResults {
            scraper: self,
            query,
            show_all,
            welcomed: false,
            position: 0,
            remaining: limit,
        }
    }

    /// Shows the welcome message and waits for the user
    fn welcome(&self) {
        self.logger.warning(
            "This is an example/test plugin for mov-cli, press enter to skip if you aren't new to that.",
        );

        if let Err(e) = self.prompter.acknowledge(&self.message) {
            self.logger
                .warning(&format!("Could not show the welcome message: {}", e));
        }
    }
}

/// Lazy search over the test catalog
///
/// Keyword searches (`all`, `example`, `abc`) show the welcome message on the
/// first call to `next` and then yield every entry exactly once.
pub struct SearchResults<'a> {
    scraper: &'a TestScraper,
    /// Lowercased query
    query: String,
    /// Whether the query is one of the show-all keywords
    show_all: bool,
    welcomed: bool,
    /// Index of the next catalog entry to inspect
    position: usize,
    /// Results still allowed by the limit (None for unlimited)
    remaining: Option<usize>,
}

impl SearchResults<'_> {
    fn matches(&self, metadata: &Metadata) -> bool {
        self.show_all || metadata.title.to_lowercase().contains(&self.query)
    }
}

impl Iterator for SearchResults<'_> {
    type Item = Metadata;

    fn next(&mut self) -> Option<Metadata> {
        if self.remaining == Some(0) {
            return None;
        }

        if self.show_all && !self.welcomed {
            self.welcomed = true;
            self.scraper.welcome();
        }

        let catalog = &self.scraper.catalog;
        while let Some(metadata) = catalog.get(self.position) {
            self.position += 1;

            if self.matches(metadata) {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Some(metadata.clone());
            }
        }

        None
    }
}

impl Scraper for TestScraper {
    fn search<'a>(
        &'a self,
        query: &str,
        limit: Option<usize>,
    ) -> Box<dyn Iterator<Item = Metadata> + 'a> {
        Box::new(self.search_catalog(query, limit))
    }

    fn scrape(
        &self,
        metadata: &Metadata,
        episode: EpisodeSelector,
    ) -> Result<Media, ScraperError> {
        let mut url = metadata.id.clone();

        if self.options.flag(RESOLVE_STREAMS_OPTION) && is_resolvable(&url) {
            self.logger
                .debug(&format!("Resolving direct stream for '{}'", url));
            url = self.resolver.resolve(&url)?;
        }

        let media = match metadata.kind {
            MetadataType::Series => Media::Multi(Series {
                url: url.clone(),
                title: metadata.title.clone(),
                referrer: url,
                episode,
                subtitles: None,
            }),
            MetadataType::Movie => Media::Single(Movie {
                url: url.clone(),
                title: metadata.title.clone(),
                referrer: url,
                year: metadata.year.clone(),
                subtitles: None,
            }),
        };

        Ok(media)
    }

    fn scrape_episodes(&self, _metadata: &Metadata) -> EpisodeCounts {
        // The catalog holds no series, so there are never any episodes
        EpisodeCounts::from([(None, 1)])
    }
}
