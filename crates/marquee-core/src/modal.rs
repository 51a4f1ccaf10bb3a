//! Detail modal controller
//!
//! Holds the single selected movie id and the lazily fetched detail
//! record. Uses the same begin/complete + generation-token pattern as
//! the list controller, so a detail response for a superseded selection
//! is dropped instead of applied.

use tracing::warn;

use crate::error::Result;
use crate::types::MovieDetail;

/// A pending detail fetch handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    /// Generation token to pass back on completion
    pub generation: u64,
    /// Id of the movie to fetch
    pub id: String,
}

/// Modal state for the movie detail view
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    /// Id of the currently selected movie, if the modal is open
    selected_id: Option<String>,
    /// Fetched detail record, replaced wholesale per selection
    detail: Option<MovieDetail>,
    /// Generation of the in-flight fetch, if any
    pending: Option<u64>,
    /// Monotonically increasing fetch counter
    next_generation: u64,
}

impl DetailModal {
    /// Create a closed modal
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the modal is open (a movie is selected)
    pub fn is_open(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Whether a detail fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Currently selected movie id
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Fetched detail record, if loaded
    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    /// Select a movie and start fetching its detail
    ///
    /// Replaces any prior selection; a still-in-flight fetch for the
    /// old id is invalidated and its response will be dropped.
    pub fn open(&mut self, id: impl Into<String>) -> DetailRequest {
        let id = id.into();
        self.selected_id = Some(id.clone());
        self.detail = None;

        self.next_generation += 1;
        let generation = self.next_generation;
        self.pending = Some(generation);
        DetailRequest { generation, id }
    }

    /// Complete a fetch started by [`Self::open`]
    ///
    /// Stale completions are dropped. On success the detail record is
    /// stored; on failure the modal closes itself, discards any
    /// partially loaded state, and hands the error back for surfacing.
    pub fn complete(&mut self, generation: u64, result: Result<MovieDetail>) -> Result<()> {
        if self.pending != Some(generation) {
            warn!(generation, "dropping stale detail completion");
            return Ok(());
        }
        self.pending = None;

        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                Ok(())
            }
            Err(e) => {
                self.selected_id = None;
                self.detail = None;
                Err(e)
            }
        }
    }

    /// Close the modal (explicit close or overlay click)
    ///
    /// Clears the selection and detail; any in-flight fetch is
    /// invalidated.
    pub fn close(&mut self) {
        self.selected_id = None;
        self.detail = None;
        self.pending = None;
    }
}
