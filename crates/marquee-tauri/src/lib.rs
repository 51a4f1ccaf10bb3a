//! Marquee Tauri Integration
//!
//! This crate provides Tauri commands for driving the Marquee catalog
//! browser from a Tauri 2.0 frontend.
//!
//! # Usage
//!
//! ```rust,ignore
//! use marquee_tauri::BrowserState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(BrowserState::new()?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             marquee_tauri::commands::load_next_page,
//!             marquee_tauri::commands::near_bottom,
//!             marquee_tauri::commands::fill_viewport,
//!             marquee_tauri::commands::apply_filter,
//!             marquee_tauri::commands::year_options,
//!             marquee_tauri::commands::open_movie,
//!             marquee_tauri::commands::close_movie,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `load_next_page` - Fetch the next unfiltered page
//! - `near_bottom` - Scroll-proximity trigger
//! - `fill_viewport` - Prefetch pages until the viewport is covered
//! - `apply_filter` - Apply a catalog filter and refetch
//! - `year_options` - Bootstrap the year-picker options
//! - `open_movie` - Fetch detail for the modal
//! - `close_movie` - Close the detail modal

pub mod commands;

use std::sync::Arc;
use tokio::sync::Mutex;

use marquee_core::CatalogBrowser;

/// Thread-safe wrapper for CatalogBrowser.
///
/// This state is managed by Tauri and provides safe concurrent access
/// to the browser from multiple commands. Commands serialize on the
/// lock; superseded fetches are additionally guarded by the browser's
/// generation tokens.
pub struct BrowserState {
    browser: Arc<Mutex<CatalogBrowser>>,
}

impl BrowserState {
    /// Create a new BrowserState with configuration from the
    /// environment.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn new() -> Result<Self, String> {
        let client = marquee_core::CatalogClient::with_config(
            marquee_core::ClientConfig::from_env(),
        )
        .map_err(|e| e.to_string())?;
        Ok(Self {
            browser: Arc::new(Mutex::new(CatalogBrowser::with_client(client))),
        })
    }

    /// Get a reference to the inner browser.
    pub fn browser(&self) -> &Arc<Mutex<CatalogBrowser>> {
        &self.browser
    }
}
