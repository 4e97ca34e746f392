//! Stream URL resolution
//!
//! Some catalog entries point at a video hosting page rather than a media
//! file. A `StreamResolver` turns such a page URL into a direct, playable
//! stream URL.

mod yt_dlp;

pub use yt_dlp::YtDlpResolver;

use thiserror::Error;

/// Host of the short links that can be resolved to a direct stream
const RESOLVABLE_HOST: &str = "youtu.be";

/// Errors that can occur while resolving a stream URL
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The external resolution tool is not installed
    #[error("{0} not found. Please install it first.")]
    ToolNotFound(String),

    /// Failed to start the external resolution tool
    #[error("Failed to spawn {tool}: {source}")]
    SpawnFailed {
        tool: String,
        source: std::io::Error,
    },

    /// The tool ran but could not resolve the URL
    #[error("Failed to resolve {url}: {stderr}")]
    Failed { url: String, stderr: String },

    /// The tool succeeded but printed no stream URL
    #[error("No stream URL returned for {0}")]
    NoStreamUrl(String),
}

/// Trait for turning a hosted video page URL into a direct stream URL
pub trait StreamResolver {
    /// Resolves the highest resolution stream that carries both audio and video
    ///
    /// # Arguments
    ///
    /// * `url` - The hosted video URL
    ///
    /// # Returns
    ///
    /// The direct stream URL
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution tool is missing, fails, or finds no
    /// stream. Errors are never retried.
    fn resolve(&self, url: &str) -> Result<String, ResolveError>;
}

/// Returns true if the URL is a short link on the resolvable hosting domain
pub fn is_resolvable(url: &str) -> bool {
    match reqwest::Url::parse(url) {
        Ok(parsed) => parsed.scheme() == "https" && parsed.host_str() == Some(RESOLVABLE_HOST),
        Err(_) => false,
    }
}
