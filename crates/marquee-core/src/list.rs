//! Movie list controller
//!
//! Owns the pagination cursor, the accumulated rows, and the active
//! filter. The controller is a synchronous state machine driven through
//! begin/complete pairs; the async orchestration lives in
//! [`crate::browser::CatalogBrowser`].
//!
//! Every fetch cycle carries a generation token. Applying a filter (or
//! starting any new cycle) bumps the generation, so a completion from a
//! superseded fetch is dropped instead of overwriting newer state.

use tracing::warn;

use crate::client::PageQuery;
use crate::error::Result;
use crate::filter::{top_by_revenue, Filter};
use crate::types::{MoviePage, MovieSummary};

/// Default listing page size
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Approximate rendered height of one list row, in pixels
///
/// A heuristic for viewport filling only, never a correctness-critical
/// value.
pub const ROW_HEIGHT_PX: u32 = 64;

/// Load phase of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No fetch in flight
    Idle,
    /// A fetch with this generation is in flight
    Loading {
        /// Generation token of the pending fetch
        generation: u64,
    },
    /// The last fetch failed; previously accumulated rows are intact
    Failed,
}

/// A pending listing fetch handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Generation token to pass back on completion
    pub generation: u64,
    /// Query for the page to fetch
    pub query: PageQuery,
}

/// What to fetch after a filter change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    /// Generation token to pass back on completion
    pub generation: u64,
    /// The fetch the plan calls for
    pub kind: FetchKind,
}

/// Kind of fetch a [`FetchPlan`] calls for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    /// One page of the unfiltered listing
    Page(PageQuery),
    /// The full catalog, optionally narrowed to one release year,
    /// reduced client-side to the top N by revenue
    Catalog {
        /// Narrowing year (start = end), if any
        year: Option<u16>,
    },
}

/// Pagination and filter bookkeeping for the movie list
#[derive(Debug, Clone)]
pub struct ListState {
    /// Next page index to request (0-based)
    page: u32,
    /// Fixed page size for the unfiltered listing
    page_size: u32,
    /// Rows accumulated across pages, in fetch order
    accumulated: Vec<MovieSummary>,
    /// Whether the server has more pages
    has_more: bool,
    /// Load phase state machine
    phase: LoadPhase,
    /// Currently applied filter
    active_filter: Filter,
    /// Monotonically increasing fetch-cycle counter
    next_generation: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListState {
    /// Create an empty list with the given page size
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 0,
            page_size,
            accumulated: Vec::new(),
            has_more: true,
            phase: LoadPhase::Idle,
            active_filter: Filter::None,
            next_generation: 0,
        }
    }

    /// Rows accumulated so far, in fetch order
    pub fn movies(&self) -> &[MovieSummary] {
        &self.accumulated
    }

    /// Next page index to request
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether more pages remain on the server
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Current load phase
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Currently applied filter
    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }

    /// Start fetching the next unfiltered page
    ///
    /// Returns `None` when a fetch is already in flight, when no pages
    /// remain, or when a filter is active (filtered views are not
    /// paginated). Otherwise transitions to `Loading` and yields the
    /// request for page `self.page()`.
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if self.is_loading() || !self.has_more || self.active_filter.is_active() {
            return None;
        }

        let generation = self.bump_generation();
        self.phase = LoadPhase::Loading { generation };
        Some(PageRequest {
            generation,
            query: PageQuery::page(self.page, self.page_size),
        })
    }

    /// Complete a page fetch started by [`Self::begin_next_page`] or an
    /// unfiltered [`Self::apply_filter`] plan
    ///
    /// A completion whose generation was superseded is dropped without
    /// touching any state. On success the page's items are appended,
    /// the cursor advances, and `has_more` tracks the server's last-page
    /// flag. On failure the accumulated rows stay intact and the cursor
    /// does not advance; the error is handed back for surfacing.
    pub fn complete_page(&mut self, generation: u64, result: Result<MoviePage>) -> Result<()> {
        if !self.accept(generation) {
            return Ok(());
        }

        match result {
            Ok(page) => {
                self.accumulated.extend(page.items);
                self.page += 1;
                self.has_more = !page.is_last_page;
                self.phase = LoadPhase::Idle;
                Ok(())
            }
            Err(e) => {
                self.phase = LoadPhase::Failed;
                Err(e)
            }
        }
    }

    /// Apply a filter, resetting pagination, and plan the next fetch
    ///
    /// Clears the accumulated rows, resets the cursor to page 0, and
    /// bumps the generation so any in-flight completion is dropped. The
    /// returned plan says what to fetch: the first unfiltered page, or
    /// a (possibly year-narrowed) full-catalog candidate set for the
    /// top-N reduction.
    pub fn apply_filter(&mut self, filter: Filter) -> FetchPlan {
        self.page = 0;
        self.accumulated.clear();
        self.has_more = true;
        self.active_filter = filter;

        let generation = self.bump_generation();
        self.phase = LoadPhase::Loading { generation };

        let kind = match filter {
            Filter::None => FetchKind::Page(PageQuery::page(0, self.page_size)),
            Filter::TopRevenue => FetchKind::Catalog { year: None },
            Filter::TopRevenueForYear { year } => FetchKind::Catalog { year: Some(year) },
        };
        FetchPlan { generation, kind }
    }

    /// Complete a full-catalog fetch planned by [`Self::apply_filter`]
    ///
    /// Reduces the candidate set to the `n` highest-revenue movies and
    /// replaces the accumulated rows with the result. Filtered views
    /// are single-shot: `has_more` becomes false.
    pub fn complete_filtered(
        &mut self,
        generation: u64,
        result: Result<Vec<MovieSummary>>,
        n: usize,
    ) -> Result<()> {
        if !self.accept(generation) {
            return Ok(());
        }

        match result {
            Ok(items) => {
                self.accumulated = top_by_revenue(n, items);
                self.has_more = false;
                self.phase = LoadPhase::Idle;
                Ok(())
            }
            Err(e) => {
                self.phase = LoadPhase::Failed;
                Err(e)
            }
        }
    }

    /// Whether another page should be prefetched to fill the viewport
    ///
    /// Best-effort: compares the estimated rendered height of the
    /// accumulated rows (a fixed per-row constant) against the viewport
    /// height. Only meaningful for the unfiltered listing with pages
    /// remaining and nothing in flight.
    pub fn wants_prefetch(&self, viewport_px: u32) -> bool {
        if self.is_loading() || !self.has_more || self.active_filter.is_active() {
            return false;
        }
        let estimated_px = self.accumulated.len() as u64 * u64::from(ROW_HEIGHT_PX);
        estimated_px < u64::from(viewport_px)
    }

    /// Scroll-near-bottom trigger
    ///
    /// Requests the next page only for the unfiltered listing; all
    /// in-flight and has-more guards apply.
    pub fn on_near_bottom(&mut self) -> Option<PageRequest> {
        self.begin_next_page()
    }

    /// Check a completion's generation against the pending fetch
    fn accept(&self, generation: u64) -> bool {
        match self.phase {
            LoadPhase::Loading {
                generation: pending,
            } if pending == generation => true,
            _ => {
                warn!(generation, "dropping stale list completion");
                false
            }
        }
    }

    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn movie(id: &str, year: u16, revenue: f64) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: format!("Movie {id}"),
            year,
            rank: 0,
            revenue,
        }
    }

    fn page_of(ids: &[&str], page_number: u32, last: bool, total: u64) -> MoviePage {
        MoviePage {
            items: ids.iter().map(|id| movie(id, 2016, 10.0)).collect(),
            page_number,
            page_size: ids.len() as u32,
            is_first_page: page_number == 0,
            is_last_page: last,
            total_elements: total,
        }
    }

    fn fetch_failed() -> CatalogError {
        CatalogError::Status {
            status: 500,
            url: "http://localhost/movies".to_string(),
        }
    }

    #[test]
    fn test_three_page_accumulation_25_movies() {
        // Catalog of 25, size 10: pages of 10, 10, 5.
        let mut list = ListState::new(10);
        let ids: Vec<String> = (0..25).map(|i| format!("m{i}")).collect();

        for (chunk_idx, chunk) in ids.chunks(10).enumerate() {
            let request = list.begin_next_page().expect("next page available");
            assert_eq!(request.query.page, Some(chunk_idx as u32));
            let borrowed: Vec<&str> = chunk.iter().map(String::as_str).collect();
            let last = chunk_idx == 2;
            list.complete_page(
                request.generation,
                Ok(page_of(&borrowed, chunk_idx as u32, last, 25)),
            )
            .unwrap();

            assert_eq!(list.has_more(), !last);
        }

        assert_eq!(list.movies().len(), 25);
        assert!(list.begin_next_page().is_none());

        // Monotonic accumulation with no duplicates.
        let mut seen: Vec<&str> = list.movies().iter().map(|m| m.id.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 25);
    }

    #[test]
    fn test_begin_is_noop_while_loading() {
        let mut list = ListState::new(10);
        let first = list.begin_next_page();
        assert!(first.is_some());
        assert!(list.is_loading());
        assert!(list.begin_next_page().is_none());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut list = ListState::new(10);
        let stale = list.begin_next_page().unwrap();

        // A filter change supersedes the in-flight page fetch.
        let plan = list.apply_filter(Filter::TopRevenue);
        list.complete_page(stale.generation, Ok(page_of(&["ghost"], 0, false, 99)))
            .unwrap();
        assert!(list.movies().is_empty());
        assert!(list.is_loading());

        // The current cycle still completes normally.
        list.complete_filtered(plan.generation, Ok(vec![movie("a", 2016, 5.0)]), 10)
            .unwrap();
        assert_eq!(list.movies().len(), 1);
        assert_eq!(list.movies()[0].id, "a");
    }

    #[test]
    fn test_failed_page_leaves_accumulated_intact() {
        let mut list = ListState::new(10);
        let request = list.begin_next_page().unwrap();
        list.complete_page(request.generation, Ok(page_of(&["a", "b"], 0, false, 12)))
            .unwrap();

        let request = list.begin_next_page().unwrap();
        let err = list
            .complete_page(request.generation, Err(fetch_failed()))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 500, .. }));

        assert_eq!(list.phase(), LoadPhase::Failed);
        assert_eq!(list.movies().len(), 2);
        assert_eq!(list.page(), 1);

        // The next explicit trigger clears the failed phase.
        assert!(list.begin_next_page().is_some());
    }

    #[test]
    fn test_apply_filter_resets_pagination() {
        let mut list = ListState::new(10);
        let request = list.begin_next_page().unwrap();
        list.complete_page(request.generation, Ok(page_of(&["a", "b"], 0, false, 20)))
            .unwrap();

        let plan = list.apply_filter(Filter::TopRevenueForYear { year: 2014 });
        assert_eq!(plan.kind, FetchKind::Catalog { year: Some(2014) });
        assert!(list.movies().is_empty());
        assert_eq!(list.page(), 0);
        assert!(list.has_more());
        assert_eq!(
            list.active_filter(),
            Filter::TopRevenueForYear { year: 2014 }
        );
    }

    #[test]
    fn test_clearing_filter_plans_unfiltered_first_page() {
        let mut list = ListState::new(10);
        let plan = list.apply_filter(Filter::TopRevenueForYear { year: 2014 });
        list.complete_filtered(plan.generation, Ok(vec![movie("x", 2014, 7.0)]), 10)
            .unwrap();

        let plan = list.apply_filter(Filter::None);
        assert_eq!(plan.kind, FetchKind::Page(PageQuery::page(0, 10)));
        assert!(list.movies().is_empty());
        assert_eq!(list.page(), 0);
    }

    #[test]
    fn test_complete_filtered_applies_top_n() {
        let mut list = ListState::new(10);
        let plan = list.apply_filter(Filter::TopRevenue);

        let catalog: Vec<MovieSummary> = (0..30)
            .map(|i| movie(&format!("m{i}"), 2010, f64::from(i)))
            .collect();
        list.complete_filtered(plan.generation, Ok(catalog), 10)
            .unwrap();

        assert_eq!(list.movies().len(), 10);
        assert_eq!(list.movies()[0].id, "m29");
        assert_eq!(list.movies()[9].id, "m20");
        assert!(!list.has_more());
    }

    #[test]
    fn test_near_bottom_ignored_while_filtered() {
        let mut list = ListState::new(10);
        let plan = list.apply_filter(Filter::TopRevenue);
        list.complete_filtered(plan.generation, Ok(vec![movie("a", 2016, 5.0)]), 10)
            .unwrap();

        assert!(list.on_near_bottom().is_none());
    }

    #[test]
    fn test_wants_prefetch_until_viewport_filled() {
        let mut list = ListState::new(10);

        // Empty list, 800px viewport: prefetch wanted.
        assert!(list.wants_prefetch(800));

        let request = list.begin_next_page().unwrap();
        assert!(!list.wants_prefetch(800));

        let ids: Vec<String> = (0..10).map(|i| format!("m{i}")).collect();
        let borrowed: Vec<&str> = ids.iter().map(String::as_str).collect();
        list.complete_page(request.generation, Ok(page_of(&borrowed, 0, false, 25)))
            .unwrap();

        // 10 rows * 64px = 640px < 800px viewport.
        assert!(list.wants_prefetch(800));
        // 10 rows cover a 600px viewport.
        assert!(!list.wants_prefetch(600));
    }

    #[test]
    fn test_wants_prefetch_false_when_filtered_or_exhausted() {
        let mut list = ListState::new(10);
        let request = list.begin_next_page().unwrap();
        list.complete_page(request.generation, Ok(page_of(&["a"], 0, true, 1)))
            .unwrap();
        assert!(!list.wants_prefetch(800));

        let plan = list.apply_filter(Filter::TopRevenue);
        list.complete_filtered(plan.generation, Ok(vec![]), 10)
            .unwrap();
        assert!(!list.wants_prefetch(800));
    }
}
