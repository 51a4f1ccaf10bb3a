//! Filter panel state machine
//!
//! Tracks which filter the user has committed and whether the year
//! picker is open. Every committed change is returned to the caller as
//! a [`Filter`] event; that event stream is the single source of truth
//! the list controller consumes. The panel's own view of the active
//! filter is a local mirror, never authoritative over the list.

use crate::filter::Filter;

/// Panel state
///
/// `YearPickerOpen` is a transient sub-state: the picker being open is
/// not itself a committed filter. `committed` remembers a year filter
/// that was already active when the picker was reopened, so dismissing
/// the picker without choosing falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// No filter committed
    Idle,
    /// Top-revenue filter committed
    TopSelected,
    /// Year picker open, nothing newly chosen yet
    YearPickerOpen {
        /// Year filter that was committed before the picker opened
        committed: Option<u16>,
    },
    /// Year-scoped filter committed
    YearSelected(u16),
}

/// The filter panel
#[derive(Debug, Clone)]
pub struct FilterPanel {
    state: PanelState,
    /// Distinct release years offered by the picker, newest first
    year_options: Vec<u16>,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPanel {
    /// Create a panel with no filter active and no year options yet
    pub fn new() -> Self {
        Self {
            state: PanelState::Idle,
            year_options: Vec::new(),
        }
    }

    /// Install the year-picker options (distinct years, newest first)
    pub fn set_year_options(&mut self, years: Vec<u16>) {
        self.year_options = years;
    }

    /// Years offered by the picker
    pub fn year_options(&self) -> &[u16] {
        &self.year_options
    }

    /// Current panel state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// The panel's local mirror of the committed filter
    pub fn active_filter(&self) -> Filter {
        match self.state {
            PanelState::Idle | PanelState::YearPickerOpen { committed: None } => Filter::None,
            PanelState::TopSelected => Filter::TopRevenue,
            PanelState::YearSelected(year)
            | PanelState::YearPickerOpen {
                committed: Some(year),
            } => Filter::TopRevenueForYear { year },
        }
    }

    /// Toggle the top-revenue filter
    ///
    /// Activating it replaces any year filter; deactivating it (second
    /// press) clears the filter. Returns the emitted event, if any.
    pub fn toggle_top(&mut self) -> Option<Filter> {
        // An open picker is dismissed first, as if clicking outside it.
        if matches!(self.state, PanelState::YearPickerOpen { .. }) {
            self.dismiss_picker();
        }

        match self.state {
            PanelState::TopSelected => {
                self.state = PanelState::Idle;
                Some(Filter::None)
            }
            _ => {
                self.state = PanelState::TopSelected;
                Some(Filter::TopRevenue)
            }
        }
    }

    /// Open the year picker
    ///
    /// Coming from the top-revenue filter first clears it (the emitted
    /// `Filter::None`); a previously committed year filter stays
    /// committed until a new year is chosen.
    pub fn open_year_picker(&mut self) -> Option<Filter> {
        match self.state {
            PanelState::TopSelected => {
                self.state = PanelState::YearPickerOpen { committed: None };
                Some(Filter::None)
            }
            PanelState::YearSelected(year) => {
                self.state = PanelState::YearPickerOpen {
                    committed: Some(year),
                };
                None
            }
            PanelState::Idle => {
                self.state = PanelState::YearPickerOpen { committed: None };
                None
            }
            PanelState::YearPickerOpen { .. } => None,
        }
    }

    /// Commit a year from the open picker
    ///
    /// No-op unless the picker is open.
    pub fn pick_year(&mut self, year: u16) -> Option<Filter> {
        match self.state {
            PanelState::YearPickerOpen { .. } => {
                self.state = PanelState::YearSelected(year);
                Some(Filter::TopRevenueForYear { year })
            }
            _ => None,
        }
    }

    /// Dismiss the picker without choosing (clicking the overlay)
    ///
    /// Falls back to whatever was committed before the picker opened;
    /// nothing is emitted because nothing changed.
    pub fn dismiss_picker(&mut self) -> Option<Filter> {
        if let PanelState::YearPickerOpen { committed } = self.state {
            self.state = match committed {
                Some(year) => PanelState::YearSelected(year),
                None => PanelState::Idle,
            };
        }
        None
    }

    /// Reset to no filter
    ///
    /// Emits `Filter::None` only if a filter was actually committed.
    pub fn reset(&mut self) -> Option<Filter> {
        let was_active = self.active_filter().is_active();
        self.state = PanelState::Idle;
        if was_active {
            Some(Filter::None)
        } else {
            None
        }
    }
}
