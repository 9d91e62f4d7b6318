//! Globe director.
//!
//! Wires the store, filter engine, selection manager, camera controller
//! and tour sequencer over one shared [`ViewState`], and exposes the
//! operations the thin UI controls map onto 1:1: load, apply filters,
//! toggle tour, reset, row activation, marker click, intro dismissal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use globetrail_core::config::AppConfig;
use globetrail_core::error::GlobeError;
use globetrail_core::ports::geodata::GeodataSource;
use globetrail_core::ports::scene::SceneSurface;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::camera::CameraController;
use crate::filter::{FilterCriteria, FilterEngine, FilterOptions};
use crate::presenter::{self, ListRow};
use crate::selection::SelectionManager;
use crate::state::{MotionState, SharedView, ViewState};
use crate::store::FeatureStore;
use crate::tour::TourSequencer;

/// Top-level view-state controller.
pub struct GlobeDirector {
    state: SharedView,
    store: FeatureStore,
    filter: FilterEngine,
    selection: Arc<SelectionManager>,
    camera: Arc<CameraController>,
    tour: TourSequencer,
    intro_dismissed: AtomicBool,
}

impl GlobeDirector {
    pub fn new(scene: Arc<dyn SceneSurface>, config: &AppConfig) -> Self {
        let state: SharedView = Arc::new(Mutex::new(ViewState::new()));
        let selection = Arc::new(SelectionManager::new(state.clone(), scene.clone()));
        let camera = Arc::new(CameraController::new(
            state.clone(),
            scene.clone(),
            selection.clone(),
            config.camera.clone(),
        ));
        let tour = TourSequencer::new(state.clone(), camera.clone(), config.tour.step_interval());
        let filter = FilterEngine::new(state.clone(), scene, selection.clone());
        let store = FeatureStore::new(state.clone());

        Self {
            state,
            store,
            filter,
            selection,
            camera,
            tour,
            intro_dismissed: AtomicBool::new(false),
        }
    }

    /// Fetch and install the full collection. A failure is surfaced to the
    /// caller (for the log channel) but leaves the view usable: empty list,
    /// idle rotation unaffected.
    ///
    /// A successful reload also discards leftovers keyed to the previous
    /// dataset: any running tour and any held highlight.
    pub async fn load(&self, source: &dyn GeodataSource) -> Result<usize, GlobeError> {
        let count = self.store.load(source).await?;
        self.tour.stop();
        self.selection.clear().await;
        Ok(count)
    }

    /// Start idle rotation once the one-time intro overlay is gone.
    /// Apps without an overlay call this right after [`load`](Self::load).
    /// Idempotent.
    pub fn dismiss_intro(&self) {
        if !self.intro_dismissed.swap(true, Ordering::SeqCst) {
            self.camera.engage_idle_rotation();
            info!("intro dismissed");
        }
    }

    /// Recompute the filtered subset. Resets selection and highlight; a
    /// running tour keeps going against the new subset (and stops by itself
    /// if the subset became empty).
    pub async fn apply_filters(&self, criteria: &FilterCriteria) -> usize {
        self.filter.apply(criteria).await
    }

    /// Dropdown option lists observed in the full set.
    pub fn filter_options(&self) -> FilterOptions {
        self.filter.options()
    }

    /// List-row activation: stop any running tour, then fly to the row.
    pub async fn activate_row(&self, index: usize) {
        self.tour.stop();
        if let Err(e) = self.camera.fly_to(index).await {
            debug!(index, error = %e, "row activation dropped");
        }
    }

    /// External marker click, keyed by record rank. Updates the selection
    /// only if the record is present in the current filtered subset.
    pub async fn select_marker(&self, rank: i64) -> Option<usize> {
        self.selection.select_by_rank(rank).await
    }

    /// Flip the tour between Running and Stopped.
    pub fn toggle_tour(&self) {
        self.tour.toggle();
    }

    /// Stop any tour, fly back to the overview pose, clear selection and
    /// highlight, close the detail panel, resume idle rotation.
    pub async fn reset(&self) {
        self.tour.stop();
        if let Err(e) = self.camera.reset_view().await {
            debug!(error = %e, "reset dropped");
        }
    }

    /// Current list rows (full rebuild).
    pub fn rows(&self) -> Vec<ListRow> {
        let st = self.state.lock();
        presenter::rows(&st.visible, st.selected)
    }

    /// Current selection index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.state.lock().selected
    }

    /// Length of the current filtered subset.
    pub fn visible_len(&self) -> usize {
        self.state.lock().visible.len()
    }

    /// Whether tour state is present.
    pub fn is_touring(&self) -> bool {
        self.tour.is_running()
    }

    /// Current motion mode.
    pub fn motion(&self) -> MotionState {
        self.state.lock().motion()
    }

    /// Whether an idle tick would currently write the camera.
    pub fn idle_eligible(&self) -> bool {
        self.state.lock().idle_eligible()
    }

    /// Tear down background tasks (tour, idle tick).
    pub fn shutdown(&self) {
        self.tour.stop();
        self.camera.stop_idle_rotation();
    }
}
