//! Catalog filters
//!
//! The filter is a tagged enum rather than a stringly-typed event
//! payload: exactly one variant is active at any time, and the variant
//! carries its own data (the chosen year).

use serde::{Deserialize, Serialize};

use crate::types::MovieSummary;

/// Number of movies kept by the revenue filters
pub const TOP_N: usize = 10;

/// The currently active catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    /// No filter: the paginated, unfiltered listing
    #[default]
    None,
    /// Top movies by revenue across the whole catalog
    TopRevenue,
    /// Top movies by revenue within a single release year
    TopRevenueForYear {
        /// The release year the candidate set is narrowed to
        year: u16,
    },
}

impl Filter {
    /// Whether any filter is active
    pub fn is_active(&self) -> bool {
        !matches!(self, Filter::None)
    }
}

/// Select the `n` highest-revenue movies, highest first
///
/// The sort is stable, so ties keep their insertion order. Idempotent:
/// applying it to its own output returns the same sequence.
pub fn top_by_revenue(n: usize, mut items: Vec<MovieSummary>) -> Vec<MovieSummary> {
    items.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    items.truncate(n);
    items
}

/// Distinct release years present in `items`, newest first
///
/// Feeds the year-picker options; derived once from an unfiltered
/// full-catalog fetch.
pub fn distinct_years(items: &[MovieSummary]) -> Vec<u16> {
    let mut years: Vec<u16> = items.iter().map(|m| m.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
