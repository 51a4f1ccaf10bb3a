//! High-level catalog browsing API
//!
//! This module composes the HTTP gateway with the list, panel, and
//! modal controllers to provide a simple async interface: load pages,
//! flip filters, open a movie. Filter-panel emissions are consumed here
//! and turned into list fetch cycles, mirroring how the view layers
//! are wired together.
//!
//! # Example
//! ```no_run
//! use marquee_core::CatalogBrowser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut browser = CatalogBrowser::new()?;
//!     browser.load_next_page().await?;
//!     println!("{} movies loaded", browser.list().movies().len());
//!     Ok(())
//! }
//! ```

use crate::client::CatalogClient;
use crate::error::Result;
use crate::filter::{distinct_years, Filter, TOP_N};
use crate::list::{FetchKind, ListState, DEFAULT_PAGE_SIZE};
use crate::modal::DetailModal;
use crate::panel::FilterPanel;

/// Async facade over the catalog: client plus view controllers
pub struct CatalogBrowser {
    client: CatalogClient,
    list: ListState,
    panel: FilterPanel,
    modal: DetailModal,
}

impl CatalogBrowser {
    /// Create a browser with default client configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = CatalogClient::new()?;
        Ok(Self::with_client(client))
    }

    /// Create a browser with a pre-configured client.
    ///
    /// Useful for testing or custom base URLs.
    pub fn with_client(client: CatalogClient) -> Self {
        Self {
            client,
            list: ListState::new(DEFAULT_PAGE_SIZE),
            panel: FilterPanel::new(),
            modal: DetailModal::new(),
        }
    }

    /// The movie list controller
    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// The filter panel
    pub fn panel(&self) -> &FilterPanel {
        &self.panel
    }

    /// The detail modal
    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    /// Bootstrap the year-picker options from one unfiltered
    /// full-catalog fetch.
    ///
    /// Done once at initialization; the options are the distinct
    /// release years present in the catalog, newest first.
    pub async fn init_year_options(&mut self) -> Result<&[u16]> {
        let catalog = self.client.fetch_catalog(None).await?;
        self.panel.set_year_options(distinct_years(&catalog));
        Ok(self.panel.year_options())
    }

    /// Fetch the next page of the unfiltered listing.
    ///
    /// No-op while a fetch is in flight, while a filter is active, or
    /// when no pages remain.
    pub async fn load_next_page(&mut self) -> Result<()> {
        let Some(request) = self.list.begin_next_page() else {
            return Ok(());
        };
        let result = self.client.fetch_page(&request.query).await;
        self.list.complete_page(request.generation, result)
    }

    /// Scroll-near-bottom trigger.
    pub async fn near_bottom(&mut self) -> Result<()> {
        let Some(request) = self.list.on_near_bottom() else {
            return Ok(());
        };
        let result = self.client.fetch_page(&request.query).await;
        self.list.complete_page(request.generation, result)
    }

    /// Keep fetching pages until the estimated list height covers the
    /// viewport, or no pages remain.
    pub async fn fill_viewport(&mut self, viewport_px: u32) -> Result<()> {
        while self.list.wants_prefetch(viewport_px) {
            let before = self.list.movies().len();
            self.load_next_page().await?;
            // A server that returns empty non-final pages would spin
            // this loop forever.
            if self.list.movies().len() == before {
                break;
            }
        }
        Ok(())
    }

    /// Apply a filter directly, resetting pagination and fetching the
    /// matching view.
    ///
    /// `Filter::None` refetches the unfiltered first page; the revenue
    /// filters fetch a (possibly year-narrowed) candidate set and keep
    /// the top ten by revenue.
    pub async fn apply_filter(&mut self, filter: Filter) -> Result<()> {
        let plan = self.list.apply_filter(filter);
        match plan.kind {
            FetchKind::Page(query) => {
                let result = self.client.fetch_page(&query).await;
                self.list.complete_page(plan.generation, result)
            }
            FetchKind::Catalog { year } => {
                let result = self.client.fetch_catalog(year).await;
                self.list.complete_filtered(plan.generation, result, TOP_N)
            }
        }
    }

    /// Toggle the top-revenue filter on the panel and apply whatever it
    /// emits.
    pub async fn toggle_top(&mut self) -> Result<()> {
        let emitted = self.panel.toggle_top();
        self.dispatch(emitted).await
    }

    /// Open the year picker; leaving the top-revenue filter clears it.
    pub async fn open_year_picker(&mut self) -> Result<()> {
        let emitted = self.panel.open_year_picker();
        self.dispatch(emitted).await
    }

    /// Commit a year from the open picker.
    pub async fn pick_year(&mut self, year: u16) -> Result<()> {
        let emitted = self.panel.pick_year(year);
        self.dispatch(emitted).await
    }

    /// Dismiss the picker without choosing.
    pub fn dismiss_year_picker(&mut self) {
        self.panel.dismiss_picker();
    }

    /// Reset the panel to no filter and refetch the unfiltered listing
    /// if a filter was active.
    pub async fn reset_filters(&mut self) -> Result<()> {
        let emitted = self.panel.reset();
        self.dispatch(emitted).await
    }

    /// Select a movie and fetch its detail for the modal.
    ///
    /// On failure the modal closes itself and the error is returned.
    pub async fn open_movie(&mut self, id: &str) -> Result<()> {
        let request = self.modal.open(id);
        let result = self.client.fetch_movie(&request.id).await;
        self.modal.complete(request.generation, result)
    }

    /// Close the detail modal.
    pub fn close_movie(&mut self) {
        self.modal.close();
    }

    /// Apply a panel emission to the list, if there was one.
    async fn dispatch(&mut self, emitted: Option<Filter>) -> Result<()> {
        match emitted {
            Some(filter) => self.apply_filter(filter).await,
            None => Ok(()),
        }
    }
}
