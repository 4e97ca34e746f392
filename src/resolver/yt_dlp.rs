//! yt-dlp based stream resolver
//!
//! This module provides an implementation of the StreamResolver trait that
//! asks the yt-dlp CLI for the direct URL of the best progressive stream.

use super::{ResolveError, StreamResolver};
use std::process::{Command, Stdio};

/// Stream resolver using the yt-dlp CLI
#[derive(Debug, Clone)]
pub struct YtDlpResolver {
    /// Name or path of the yt-dlp executable
    program: String,
}

impl Default for YtDlpResolver {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

impl YtDlpResolver {
    /// Creates a resolver that runs the given yt-dlp executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Checks if the yt-dlp CLI is installed and available
    fn is_installed(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Picks the stream URL out of yt-dlp's output
    ///
    /// `--get-url` prints one URL per selected format; `best` selects a single
    /// progressive format, so the first non-empty line is the stream.
    fn parse_stream_url(stdout: &str) -> Option<String> {
        stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
    }
}

impl StreamResolver for YtDlpResolver {
    fn resolve(&self, url: &str) -> Result<String, ResolveError> {
        if !self.is_installed() {
            return Err(ResolveError::ToolNotFound(self.program.clone()));
        }

        let output = Command::new(&self.program)
            .arg("--no-playlist")
            .arg("--format")
            .arg("best")
            .arg("--get-url")
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ResolveError::SpawnFailed {
                tool: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ResolveError::Failed {
                url: url.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Self::parse_stream_url(&String::from_utf8_lossy(&output.stdout))
            .ok_or_else(|| ResolveError::NoStreamUrl(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stream_url_takes_first_line() {
        let stdout = "\nhttps://rr1.googlevideo.com/videoplayback?id=1\nhttps://other\n";
        assert_eq!(
            YtDlpResolver::parse_stream_url(stdout).as_deref(),
            Some("https://rr1.googlevideo.com/videoplayback?id=1")
        );
    }

    #[test]
    fn test_parse_stream_url_empty_output() {
        assert_eq!(YtDlpResolver::parse_stream_url("  \n\n"), None);
    }

    #[test]
    fn test_missing_tool_is_reported() {
        let resolver = YtDlpResolver::new("yt-dlp-that-does-not-exist-anywhere");
        let result = resolver.resolve("https://youtu.be/aqz-KE-bpKQ");

        assert!(matches!(result, Err(ResolveError::ToolNotFound(_))));
    }
}
