//! Selection and highlight manager.
//!
//! Tracks the single active record and the single outstanding marker
//! highlight. Acquiring a new highlight always releases the previous one
//! first; external marker clicks are resolved by rank, never by array
//! position, because positions shift across filtering.

use std::sync::Arc;

use globetrail_core::error::GlobeError;
use globetrail_core::ports::scene::SceneSurface;
use tracing::debug;

use crate::state::SharedView;

/// Keeps selection index, highlight and list UI in agreement.
pub struct SelectionManager {
    state: SharedView,
    scene: Arc<dyn SceneSurface>,
}

impl SelectionManager {
    pub fn new(state: SharedView, scene: Arc<dyn SceneSurface>) -> Self {
        Self { state, scene }
    }

    /// Make `index` the active record: set the selection and swap the
    /// highlight over to it.
    ///
    /// The index is validated against the subset as it is *now* — a filter
    /// change during an in-flight animation may have invalidated it, in
    /// which case nothing changes.
    pub async fn activate(&self, index: usize) -> Result<(), GlobeError> {
        let (rank, previous) = {
            let mut st = self.state.lock();
            let Some(event) = st.visible.get(index) else {
                return Err(GlobeError::InvalidSelectionTarget {
                    index,
                    len: st.visible.len(),
                });
            };
            let rank = event.rank;
            let previous = st.highlighted.replace(rank);
            st.selected = Some(index);
            (rank, previous)
        };

        if let Some(prev) = previous {
            self.scene.release_highlight(prev).await;
        }
        self.scene.acquire_highlight(rank).await;
        Ok(())
    }

    /// Drop the selection and release any held highlight. Idempotent.
    pub async fn clear(&self) {
        let previous = {
            let mut st = self.state.lock();
            st.selected = None;
            st.highlighted.take()
        };
        if let Some(prev) = previous {
            self.scene.release_highlight(prev).await;
        }
    }

    /// External selection (marker click on the rendered scene): resolve the
    /// clicked record's rank to a position in the current filtered subset.
    /// Records that are filtered out leave the selection unchanged.
    pub async fn select_by_rank(&self, rank: i64) -> Option<usize> {
        let index = {
            let st = self.state.lock();
            st.visible.iter().position(|e| e.rank == rank)
        };
        match index {
            Some(index) => match self.activate(index).await {
                Ok(()) => Some(index),
                Err(e) => {
                    debug!(rank, error = %e, "external selection dropped");
                    None
                }
            },
            None => {
                debug!(rank, "marker click ignored, record is filtered out");
                None
            }
        }
    }

    /// Current selection index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.state.lock().selected
    }
}
