//! Catalog metadata types
//!
//! A `Metadata` record is what a scraper hands back from a search. The host
//! later passes the chosen record back into `Scraper::scrape`.

use serde::{Deserialize, Serialize};

/// Distinguishes single items from multi-part items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataType {
    /// A single film or clip
    Movie,
    /// A multi-part item that needs an episode selector to play
    Series,
}

/// An immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Opaque handle for the scraper; for the test catalog this is a video URL
    pub id: String,
    /// Display title
    pub title: String,
    /// Whether this is a single item or a multi-part one
    #[serde(rename = "type")]
    pub kind: MetadataType,
    /// Release year, if known
    pub year: Option<String>,
}

impl Metadata {
    /// Creates a new metadata record
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: MetadataType,
        year: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            year: year.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_fields() {
        let metadata = Metadata::new("id-1", "Title", MetadataType::Series, Some("1999"));

        assert_eq!(metadata.id, "id-1");
        assert_eq!(metadata.title, "Title");
        assert_eq!(metadata.kind, MetadataType::Series);
        assert_eq!(metadata.year.as_deref(), Some("1999"));
    }

    #[test]
    fn test_serialized_kind_is_lowercase() {
        let metadata = Metadata::new("x", "X", MetadataType::Movie, None);
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["type"], "movie");
        assert!(json["year"].is_null());
    }
}
