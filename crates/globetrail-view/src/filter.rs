//! Filter engine.
//!
//! Recomputes the filtered subset from the two criteria (country, phase)
//! and pushes an equivalent definition-filter expression down to the data
//! layer so rendered markers match the list without a refetch. Applying
//! filters resets the selection and releases the highlight; it never stops
//! a running tour (the next tour tick simply sees the new subset).

use std::collections::BTreeSet;
use std::sync::Arc;

use globetrail_core::models::event::{CareerEvent, CareerPhase};
use globetrail_core::ports::scene::SceneSurface;
use tracing::info;

use crate::selection::SelectionManager;
use crate::state::SharedView;

/// User-selected filter criteria. `None` means "no constraint"; values are
/// exact matches drawn from the data, so matching is case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub country: Option<String>,
    pub phase: Option<CareerPhase>,
}

impl FilterCriteria {
    /// No constraints — the full set.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Whether `event` satisfies both criteria.
    pub fn matches(&self, event: &CareerEvent) -> bool {
        self.country
            .as_deref()
            .map_or(true, |c| event.country == c)
            && self.phase.map_or(true, |p| event.phase == p)
    }

    /// Equivalent boolean predicate for the data layer's server-side
    /// filtering. Single quotes in criterion values are doubled so the
    /// expression stays well-formed; the data is trusted, this is not a
    /// security boundary.
    pub fn definition_expression(&self) -> String {
        let mut clauses = Vec::with_capacity(2);
        if let Some(country) = &self.country {
            clauses.push(format!("country = '{}'", country.replace('\'', "''")));
        }
        if let Some(phase) = self.phase {
            clauses.push(format!("career_phase = '{}'", phase.as_str()));
        }
        if clauses.is_empty() {
            "1=1".to_string()
        } else {
            clauses.join(" AND ")
        }
    }
}

/// Dropdown contents, derived from the observed full set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct countries, sorted
    pub countries: Vec<String>,
    /// Distinct phases, in declaration order
    pub phases: Vec<CareerPhase>,
}

/// Derives the filtered subset and keeps the data layer in step.
pub struct FilterEngine {
    state: SharedView,
    scene: Arc<dyn SceneSurface>,
    selection: Arc<SelectionManager>,
}

impl FilterEngine {
    pub fn new(
        state: SharedView,
        scene: Arc<dyn SceneSurface>,
        selection: Arc<SelectionManager>,
    ) -> Self {
        Self {
            state,
            scene,
            selection,
        }
    }

    /// Recompute the subset. Returns its length.
    pub async fn apply(&self, criteria: &FilterCriteria) -> usize {
        let (len, expression) = {
            let mut st = self.state.lock();
            let subset: Vec<CareerEvent> = st
                .all
                .iter()
                .filter(|e| criteria.matches(e))
                .cloned()
                .collect();
            let len = subset.len();
            st.visible = subset;
            (len, criteria.definition_expression())
        };

        // the old index may no longer be meaningful
        self.selection.clear().await;
        self.scene.set_definition_filter(&expression).await;

        info!(count = len, %expression, "filters applied");
        len
    }

    /// Option lists for the two dropdowns.
    pub fn options(&self) -> FilterOptions {
        let st = self.state.lock();
        let countries: BTreeSet<String> = st.all.iter().map(|e| e.country.clone()).collect();
        let observed: BTreeSet<CareerPhase> = st.all.iter().map(|e| e.phase).collect();
        FilterOptions {
            countries: countries.into_iter().collect(),
            phases: CareerPhase::ALL
                .into_iter()
                .filter(|p| observed.contains(p))
                .collect(),
        }
    }
}
