//! Error types for the Marquee catalog library
//!
//! This module defines all error types used throughout the library.
//! CatalogError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server responded with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
        /// URL of the failed request
        url: String,
    },

    /// Requested resource was not found (HTTP 404)
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected envelope shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid movie id provided (empty or whitespace-only)
    #[error("Invalid movie id: {0:?}")]
    InvalidId(String),
}

/// Serialize CatalogError as a string for Tauri compatibility
impl Serialize for CatalogError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display_status() {
        let error = CatalogError::Status {
            status: 500,
            url: "http://localhost/movies".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected status 500 from http://localhost/movies"
        );
    }

    #[test]
    fn test_catalog_error_display_not_found() {
        let error = CatalogError::NotFound("tt0137523".to_string());
        assert_eq!(error.to_string(), "Movie not found: tt0137523");
    }

    #[test]
    fn test_catalog_error_display_invalid_id() {
        let error = CatalogError::InvalidId("  ".to_string());
        assert_eq!(error.to_string(), "Invalid movie id: \"  \"");
    }

    #[test]
    fn test_catalog_error_display_decode() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = CatalogError::Decode(source);
        assert!(error.to_string().starts_with("Failed to decode response:"));
    }

    #[test]
    fn test_catalog_error_serialize() {
        let error = CatalogError::NotFound("abc".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Movie not found: abc\"");
    }

    #[test]
    fn test_catalog_error_serialize_status() {
        let error = CatalogError::Status {
            status: 429,
            url: "http://api/movies".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Unexpected status 429 from http://api/movies\"");
    }
}
