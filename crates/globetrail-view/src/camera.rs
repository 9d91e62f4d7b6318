//! Camera controller.
//!
//! Owns all camera motion: the idle auto-rotation tick, the directed
//! fly-to, and the reset to overview. Exclusivity is enforced two ways,
//! per the concurrency model:
//!
//! - directed moves share a single-flight gate ([`MoveGuard`]): an
//!   overlapping fly-to is ignored, not queued, while an overlapping reset
//!   supersedes the in-flight move's arrival side effects;
//! - the idle tick re-checks its enabling conditions before every write
//!   instead of being cancelled, so it is suspended by flag.
//!
//! The guard releases the gate and restores the motion mode on *every*
//! exit path, including an aborted tour step dropping the future mid-await.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use globetrail_core::config::CameraConfig;
use globetrail_core::error::GlobeError;
use globetrail_core::models::camera::CameraPose;
use globetrail_core::models::event::CareerEvent;
use globetrail_core::ports::scene::SceneSurface;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::selection::SelectionManager;
use crate::state::SharedView;

/// Arbitrates idle rotation, fly-to and reset over the scene surface.
pub struct CameraController {
    scene: Arc<dyn SceneSurface>,
    state: SharedView,
    selection: Arc<SelectionManager>,
    config: CameraConfig,
    move_gate: Arc<AtomicBool>,
    /// Set by a reset that found the gate held; the in-flight move checks
    /// it on arrival and skips its selection/detail side effects.
    reset_requested: AtomicBool,
    idle_task: Mutex<Option<JoinHandle<()>>>,
}

impl CameraController {
    pub fn new(
        state: SharedView,
        scene: Arc<dyn SceneSurface>,
        selection: Arc<SelectionManager>,
        config: CameraConfig,
    ) -> Self {
        Self {
            scene,
            state,
            selection,
            config,
            move_gate: Arc::new(AtomicBool::new(false)),
            reset_requested: AtomicBool::new(false),
            idle_task: Mutex::new(None),
        }
    }

    /// Spawn the recurring idle-rotation tick. Safe to call more than once;
    /// only the first call spawns.
    ///
    /// Each tick nudges the longitude by a small negative increment, but
    /// only while the motion mode is idle, nothing is selected and no tour
    /// is active. The task itself runs for the lifetime of the view.
    pub fn engage_idle_rotation(&self) {
        let mut slot = self.idle_task.lock();
        if slot.is_some() {
            return;
        }

        let scene = self.scene.clone();
        let state = self.state.clone();
        let step = self.config.idle_step_deg;
        let frame = self.config.idle_frame();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(frame);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !state.lock().idle_eligible() {
                    continue;
                }
                let pose = scene.camera_pose().await;
                // a directed move may have started while the pose was read
                if !state.lock().idle_eligible() {
                    continue;
                }
                scene.set_camera_pose(pose.rotated_by(-step)).await;
            }
        });

        *slot = Some(handle);
        info!("idle rotation engaged");
    }

    /// Tear down the idle tick task (view teardown only; normal suspension
    /// is flag-based).
    pub fn stop_idle_rotation(&self) {
        if let Some(handle) = self.idle_task.lock().take() {
            handle.abort();
        }
    }

    /// Directed move to the record at `index` in the filtered subset.
    ///
    /// Single-flight: if another directed move is in flight this call is a
    /// no-op. On arrival the record is re-resolved by rank: the subset may
    /// have been superseded during the animation, so the positional index is
    /// never trusted across the await. If the record is still present the
    /// detail panel opens and it becomes the active selection (at its
    /// current position); if it was filtered out, or a reset landed
    /// mid-flight, the arrival has no side effects. An interrupted animation
    /// is swallowed.
    pub async fn fly_to(&self, index: usize) -> Result<(), GlobeError> {
        let event = {
            let st = self.state.lock();
            match st.visible.get(index) {
                Some(event) => event.clone(),
                None => {
                    return Err(GlobeError::InvalidSelectionTarget {
                        index,
                        len: st.visible.len(),
                    })
                }
            }
        };

        let Some(_guard) = MoveGuard::try_acquire(&self.move_gate, &self.state) else {
            debug!(index, "fly-to ignored, another move is in flight");
            return Ok(());
        };
        // a leftover from an interrupted flight must not suppress this one
        self.reset_requested.store(false, Ordering::SeqCst);

        let target = self.approach_pose(&event);
        debug!(index, company = %event.company, "fly-to started");

        match self
            .scene
            .animate_camera(target, self.config.fly_duration())
            .await
        {
            Ok(()) => {
                if self.reset_requested.swap(false, Ordering::SeqCst) {
                    debug!(index, "fly-to arrival superseded by reset");
                    return Ok(());
                }
                let resolved = {
                    let st = self.state.lock();
                    st.visible.iter().position(|e| e.rank == event.rank)
                };
                match resolved {
                    Some(now) => {
                        self.scene.show_detail(&event).await;
                        if let Err(e) = self.selection.activate(now).await {
                            debug!(index = now, error = %e, "fly-to selection dropped");
                        }
                        debug!(index = now, rank = event.rank, "fly-to complete");
                    }
                    None => {
                        debug!(rank = event.rank, "fly-to target left the subset mid-flight");
                    }
                }
            }
            Err(GlobeError::AnimationInterrupted) => {
                debug!(index, "fly-to animation interrupted");
            }
            Err(e) => warn!(index, error = %e, "fly-to failed"),
        }

        Ok(())
    }

    /// Directed move back to the fixed overview pose. On completion the
    /// selection is cleared, the detail panel closes, the highlight is
    /// released and idle rotation becomes eligible again.
    ///
    /// Unlike an overlapping fly-to, a reset issued while another move is
    /// in flight is not dropped: it supersedes that move by running the
    /// neutral-state cleanup immediately and flagging the in-flight arrival
    /// to skip its selection/detail side effects. Only the camera animation
    /// itself is skipped.
    ///
    /// Stopping a running tour is the director's job and happens before
    /// this is called.
    pub async fn reset_view(&self) -> Result<(), GlobeError> {
        let Some(_guard) = MoveGuard::try_acquire(&self.move_gate, &self.state) else {
            self.reset_requested.store(true, Ordering::SeqCst);
            self.selection.clear().await;
            self.scene.close_detail().await;
            debug!("reset superseded an in-flight move");
            return Ok(());
        };
        self.reset_requested.store(false, Ordering::SeqCst);

        let overview = self.config.overview;
        let pose = CameraPose {
            longitude: overview.longitude,
            latitude: overview.latitude,
            elevation_m: overview.elevation_m,
            tilt: 0.0,
            heading: 0.0,
        };

        match self
            .scene
            .animate_camera(pose, self.config.reset_duration())
            .await
        {
            Ok(()) => debug!("reset complete"),
            Err(GlobeError::AnimationInterrupted) => debug!("reset animation interrupted"),
            Err(e) => warn!(error = %e, "reset failed"),
        }

        // idempotent cleanup, also run after an interrupted animation
        self.selection.clear().await;
        self.scene.close_detail().await;
        info!("view reset to overview");
        Ok(())
    }

    /// Target pose for a marker approach: the latitude is nudged toward
    /// the half of the viewport not covered by the docked detail panel —
    /// down in the northern hemisphere, up in the southern.
    fn approach_pose(&self, event: &CareerEvent) -> CameraPose {
        let offset = self.config.panel_latitude_offset_deg;
        let latitude = if event.latitude >= 0.0 {
            event.latitude - offset
        } else {
            event.latitude + offset
        };
        CameraPose {
            longitude: event.longitude,
            latitude,
            elevation_m: self.config.fly_elevation_m,
            tilt: self.config.fly_tilt_deg,
            heading: 0.0,
        }
    }
}

/// RAII single-flight gate for directed moves.
///
/// Acquiring flips the gate and enters `DirectedMove`; dropping restores
/// the motion mode and releases the gate. Because release happens in
/// `Drop`, an aborted task or an early return cannot leave the controller
/// permanently "busy".
struct MoveGuard {
    gate: Arc<AtomicBool>,
    state: SharedView,
}

impl MoveGuard {
    fn try_acquire(gate: &Arc<AtomicBool>, state: &SharedView) -> Option<Self> {
        gate.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        state.lock().begin_move();
        Some(Self {
            gate: gate.clone(),
            state: state.clone(),
        })
    }
}

impl Drop for MoveGuard {
    fn drop(&mut self) {
        self.state.lock().end_move();
        self.gate.store(false, Ordering::Release);
    }
}
