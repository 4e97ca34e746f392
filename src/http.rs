//! Host-owned HTTP client handle
//!
//! Scrapers receive an `HttpClient` at construction so every plugin shares the
//! host's timeout and user agent settings.

use crate::config::Config;
use thiserror::Error;

/// Errors that can occur while building the HTTP client
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The underlying client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    BuildFailed(#[from] reqwest::Error),
}

/// A cheaply cloneable blocking HTTP client configured from `Config`
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    /// Builds a client using the timeout and user agent from the configuration
    pub fn new(config: &Config) -> Result<Self, HttpClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Starts a GET request against the given URL
    pub fn get(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        self.client.get(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_from_default_config() {
        let client = HttpClient::new(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_get_builds_request_without_sending() {
        let client = HttpClient::new(&Config::default()).unwrap();
        let request = client.get("https://example.com/video").build().unwrap();

        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "https://example.com/video");
    }
}
