//! Marquee Core Library
//!
//! This crate provides the client side of the Marquee movie catalog:
//! a JSON REST gateway over the catalog API plus the view controllers
//! for the paginated list, the filter panel, and the detail modal.
//!
//! # Features
//! - Paginated / infinite-scroll movie listing with viewport prefetch
//! - Top-10-by-revenue and top-10-for-a-year client-side filters
//! - On-demand movie detail fetching for a modal view
//! - Generation-tokened fetch cycles so stale responses are dropped

pub mod browser;
pub mod client;
pub mod error;
pub mod filter;
pub mod list;
pub mod modal;
pub mod panel;
pub mod types;

// Re-export main types for convenience
pub use browser::CatalogBrowser;
pub use client::{CatalogClient, ClientConfig, PageQuery};
pub use error::{CatalogError, Result};
pub use filter::{distinct_years, top_by_revenue, Filter, TOP_N};
pub use list::{FetchKind, FetchPlan, ListState, LoadPhase, PageRequest};
pub use modal::{DetailModal, DetailRequest};
pub use panel::{FilterPanel, PanelState};
pub use types::{MovieDetail, MoviePage, MovieSummary};
