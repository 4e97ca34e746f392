//! Plugin declaration
//!
//! The host's plugin loader reads this declaration to learn which scrapers the
//! package provides and how to construct them.

use crate::config::Config;
use crate::http::HttpClient;
use crate::scraper::{Scraper, ScraperOptions, TestScraper};
use std::collections::BTreeMap;

/// Version of the plugin declaration layout
pub const PLUGIN_SCHEMA_VERSION: u32 = 1;

/// Name under which the package is published
pub const PACKAGE_NAME: &str = "mov-cli-test";

/// Scraper key the host uses when the user names no scraper
pub const DEFAULT_SCRAPER: &str = "DEFAULT";

/// Constructs a scraper from the host's configuration, HTTP client and options
pub type ScraperFactory = fn(Config, HttpClient, ScraperOptions) -> Box<dyn Scraper>;

/// What a plugin package exposes to the host
pub struct PluginHookData {
    pub version: u32,
    pub package_name: &'static str,
    pub scrapers: BTreeMap<&'static str, ScraperFactory>,
}

impl PluginHookData {
    /// Looks up a scraper factory by name, falling back to the default scraper
    pub fn scraper(&self, name: Option<&str>) -> Option<ScraperFactory> {
        self.scrapers.get(name.unwrap_or(DEFAULT_SCRAPER)).copied()
    }

    /// Registered scraper names, excluding the default alias
    pub fn scraper_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scrapers
            .keys()
            .copied()
            .filter(|name| *name != DEFAULT_SCRAPER)
    }
}

fn test_scraper(
    config: Config,
    http_client: HttpClient,
    options: ScraperOptions,
) -> Box<dyn Scraper> {
    Box::new(TestScraper::new(config, http_client, options))
}

/// Returns this package's plugin declaration
pub fn plugin() -> PluginHookData {
    let mut scrapers: BTreeMap<&'static str, ScraperFactory> = BTreeMap::new();
    scrapers.insert(DEFAULT_SCRAPER, test_scraper);
    scrapers.insert("test", test_scraper);

    PluginHookData {
        version: PLUGIN_SCHEMA_VERSION,
        package_name: PACKAGE_NAME,
        scrapers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_fields() {
        let plugin = plugin();

        assert_eq!(plugin.version, 1);
        assert_eq!(plugin.package_name, "mov-cli-test");
        assert_eq!(plugin.scraper_names().collect::<Vec<_>>(), vec!["test"]);
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let plugin = plugin();

        assert!(plugin.scraper(None).is_some());
        assert!(plugin.scraper(Some("test")).is_some());
        assert!(plugin.scraper(Some("missing")).is_none());
    }

    #[test]
    fn test_factory_builds_working_scraper() {
        let config = Config::default();
        let http_client = HttpClient::new(&config).unwrap();
        let factory = plugin().scraper(Some("test")).unwrap();

        let scraper = factory(config, http_client, ScraperOptions::new());
        let results: Vec<_> = scraper.search("steamboat", None).collect();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].year.as_deref(), Some("1928"));
    }
}
