//! Tauri commands for the Marquee catalog browser
//!
//! This module contains all Tauri commands that can be invoked from
//! the frontend. Commands that change the list return the accumulated
//! rows after the change, so the frontend can re-render from the
//! returned snapshot.

use tauri::State;

use crate::BrowserState;
use marquee_core::{Filter, MovieDetail, MovieSummary};

/// Fetch the next page of the unfiltered listing.
///
/// # Returns
/// * `Ok(Vec<MovieSummary>)` - the accumulated rows after the fetch
/// * `Err(String)` with error message if the fetch fails
#[tauri::command]
pub async fn load_next_page(
    state: State<'_, BrowserState>,
) -> Result<Vec<MovieSummary>, String> {
    let mut browser = state.browser().lock().await;
    browser.load_next_page().await.map_err(|e| e.to_string())?;
    Ok(browser.list().movies().to_vec())
}

/// Scroll-near-bottom trigger.
///
/// # Returns
/// * `Ok(Vec<MovieSummary>)` - the accumulated rows after the fetch
/// * `Err(String)` with error message if the fetch fails
#[tauri::command]
pub async fn near_bottom(
    state: State<'_, BrowserState>,
) -> Result<Vec<MovieSummary>, String> {
    let mut browser = state.browser().lock().await;
    browser.near_bottom().await.map_err(|e| e.to_string())?;
    Ok(browser.list().movies().to_vec())
}

/// Prefetch pages until the estimated list height covers the viewport.
///
/// # Arguments
/// * `viewport_px` - Viewport height in pixels
///
/// # Returns
/// * `Ok(Vec<MovieSummary>)` - the accumulated rows after prefetching
/// * `Err(String)` with error message if a fetch fails
#[tauri::command]
pub async fn fill_viewport(
    state: State<'_, BrowserState>,
    viewport_px: u32,
) -> Result<Vec<MovieSummary>, String> {
    let mut browser = state.browser().lock().await;
    browser
        .fill_viewport(viewport_px)
        .await
        .map_err(|e| e.to_string())?;
    Ok(browser.list().movies().to_vec())
}

/// Apply a catalog filter, resetting pagination and refetching.
///
/// # Arguments
/// * `filter` - The filter to apply (tagged: none / top_revenue /
///   top_revenue_for_year)
///
/// # Returns
/// * `Ok(Vec<MovieSummary>)` - the rows of the filtered view
/// * `Err(String)` with error message if the fetch fails
#[tauri::command]
pub async fn apply_filter(
    state: State<'_, BrowserState>,
    filter: Filter,
) -> Result<Vec<MovieSummary>, String> {
    let mut browser = state.browser().lock().await;
    browser.apply_filter(filter).await.map_err(|e| e.to_string())?;
    Ok(browser.list().movies().to_vec())
}

/// Bootstrap the year-picker options from the full catalog.
///
/// # Returns
/// * `Ok(Vec<u16>)` - distinct release years, newest first
/// * `Err(String)` with error message if the fetch fails
#[tauri::command]
pub async fn year_options(state: State<'_, BrowserState>) -> Result<Vec<u16>, String> {
    let mut browser = state.browser().lock().await;
    browser
        .init_year_options()
        .await
        .map(|years| years.to_vec())
        .map_err(|e| e.to_string())
}

/// Fetch the full record for a movie and open the detail modal.
///
/// On failure the modal closes itself and the error message is
/// returned for the frontend alert.
///
/// # Arguments
/// * `id` - Opaque movie id from a listing row
#[tauri::command]
pub async fn open_movie(
    state: State<'_, BrowserState>,
    id: String,
) -> Result<MovieDetail, String> {
    let mut browser = state.browser().lock().await;
    browser.open_movie(&id).await.map_err(|e| e.to_string())?;
    browser
        .modal()
        .detail()
        .cloned()
        .ok_or_else(|| "detail discarded by a newer selection".to_string())
}

/// Close the detail modal, discarding its state.
#[tauri::command]
pub async fn close_movie(state: State<'_, BrowserState>) -> Result<(), String> {
    let mut browser = state.browser().lock().await;
    browser.close_movie();
    Ok(())
}
