//! Feature store.
//!
//! Fetches the full career-event collection once per session and installs
//! it in canonical rank order. Whole-or-nothing: a fetch or parse failure
//! leaves the previous state untouched.

use globetrail_core::error::GlobeError;
use globetrail_core::ports::geodata::GeodataSource;
use tracing::info;

use crate::state::SharedView;

/// Owns the full ordered set and the initial (unfiltered) subset.
pub struct FeatureStore {
    state: SharedView,
}

impl FeatureStore {
    pub fn new(state: SharedView) -> Self {
        Self { state }
    }

    /// Fetch all records and install them sorted ascending by rank.
    ///
    /// The sort is stable, so records with equal (or missing, i.e. zero)
    /// ranks keep their arrival order. Returns the number of records.
    pub async fn load(&self, source: &dyn GeodataSource) -> Result<usize, GlobeError> {
        let mut events = source.fetch_all().await?;
        events.sort_by_key(|e| e.rank);
        let len = events.len();

        let mut st = self.state.lock();
        st.visible = events.clone();
        st.all = events;
        st.selected = None;

        info!(count = len, "career events loaded");
        Ok(len)
    }
}
