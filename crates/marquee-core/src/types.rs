//! Data types for the Marquee catalog
//!
//! This module contains the wire types exchanged with the catalog API.
//! All types implement Serialize and Deserialize for JSON compatibility
//! with Tauri.

use serde::{Deserialize, Serialize};

/// A movie as it appears in the catalog listing
///
/// Immutable once received; list membership only, fields are never
/// patched individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Opaque unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Release year
    pub year: u16,
    /// Catalog rank
    pub rank: u32,
    /// Box-office revenue (millions)
    pub revenue: f64,
}

/// Full movie record, fetched individually for the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Opaque unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Release year
    pub year: u16,
    /// Catalog rank
    pub rank: u32,
    /// Box-office revenue (millions)
    pub revenue: f64,
    /// Comma-separated genre list
    pub genre: String,
    /// Plot description
    pub description: String,
    /// Director name
    pub director: String,
    /// Comma-separated main cast
    pub actors: String,
    /// Runtime in minutes
    pub runtime: u32,
    /// Aggregate rating (0.0 - 10.0)
    pub rating: f64,
    /// Number of rating votes
    pub votes: u64,
    /// Metascore (0 - 100)
    pub metascore: u32,
}

/// One server-side page of the catalog listing
///
/// Produced by the API gateway; consumers accumulate `items` across
/// pages in fetch order and never mutate a page in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    /// Movies on this page, in server order
    pub items: Vec<MovieSummary>,
    /// Page index (0-based)
    pub page_number: u32,
    /// Requested page size
    pub page_size: u32,
    /// Whether this is the first page
    pub is_first_page: bool,
    /// Whether this is the last page
    pub is_last_page: bool,
    /// Total number of movies in the (possibly narrowed) catalog
    pub total_elements: u64,
}

impl MoviePage {
    /// Create an empty first-and-last page
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page_number: 0,
            page_size: 0,
            is_first_page: true,
            is_last_page: true,
            total_elements: 0,
        }
    }
}

/// Response envelope used by every catalog endpoint: `{ "data": <payload> }`
///
/// The contract is fixed to the enveloped shape; bare payloads are a
/// decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> MovieSummary {
        MovieSummary {
            id: "m-42".to_string(),
            title: "Arrival".to_string(),
            year: 2016,
            rank: 42,
            revenue: 100.5,
        }
    }

    #[test]
    fn test_movie_summary_roundtrip() {
        let summary = sample_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: MovieSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_movie_page_wire_names() {
        let page = MoviePage {
            items: vec![sample_summary()],
            page_number: 2,
            page_size: 10,
            is_first_page: false,
            is_last_page: true,
            total_elements: 25,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"pageNumber\":2"));
        assert!(json.contains("\"isLastPage\":true"));
        assert!(json.contains("\"totalElements\":25"));
    }

    #[test]
    fn test_envelope_decodes_wrapped_page() {
        let body = r#"{"data":{"items":[],"pageNumber":0,"pageSize":10,
            "isFirstPage":true,"isLastPage":false,"totalElements":25}}"#;
        let envelope: Envelope<MoviePage> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.page_number, 0);
        assert!(!envelope.data.is_last_page);
    }

    #[test]
    fn test_envelope_rejects_bare_payload() {
        let body = r#"{"items":[],"pageNumber":0,"pageSize":10,
            "isFirstPage":true,"isLastPage":true,"totalElements":0}"#;
        let result: std::result::Result<Envelope<MoviePage>, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_movie_page_empty() {
        let page = MoviePage::empty();
        assert!(page.items.is_empty());
        assert!(page.is_first_page);
        assert!(page.is_last_page);
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn test_movie_detail_roundtrip() {
        let detail = MovieDetail {
            id: "m-1".to_string(),
            title: "Heat".to_string(),
            year: 1995,
            rank: 1,
            revenue: 187.4,
            genre: "Crime, Drama".to_string(),
            description: "A crew of thieves and the cop chasing them.".to_string(),
            director: "Michael Mann".to_string(),
            actors: "Al Pacino, Robert De Niro".to_string(),
            runtime: 170,
            rating: 8.3,
            votes: 640_000,
            metascore: 76,
        };
        let json = serde_json::to_string(&detail).unwrap();
        let back: MovieDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detail);
    }
}
