//! List presenter.
//!
//! Pure projection of the filtered subset and the selection into list rows.
//! The list is always rebuilt whole — the dataset is a few dozen records,
//! incremental patching is not worth the bookkeeping.

use globetrail_core::models::event::{CareerEvent, CareerPhase};

/// One selectable list row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    /// Position in the filtered subset (activation target)
    pub index: usize,
    /// Stable record rank
    pub rank: i64,
    pub company: String,
    pub city: String,
    pub country: String,
    pub phase: CareerPhase,
    /// Marker color for the phase chip (#RRGGBB)
    pub phase_color: &'static str,
    /// Whether this row is the active selection
    pub selected: bool,
}

/// Project the subset and selection into rows.
pub fn rows(visible: &[CareerEvent], selected: Option<usize>) -> Vec<ListRow> {
    visible
        .iter()
        .enumerate()
        .map(|(index, event)| ListRow {
            index,
            rank: event.rank,
            company: event.company.clone(),
            city: event.city.clone(),
            country: event.country.clone(),
            phase: event.phase,
            phase_color: event.phase.color(),
            selected: selected == Some(index),
        })
        .collect()
}
