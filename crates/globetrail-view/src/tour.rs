//! Tour sequencer.
//!
//! Timer-driven autoplay over the filtered subset. The sequencer is a
//! client of the camera controller — it never writes the camera itself.
//! Each tick is independent: it re-reads the subset under the state lock
//! and tolerates a previous step's animation still being in flight (the
//! camera's single-flight gate absorbs the overlap by skipping the step).

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::camera::CameraController;
use crate::state::{SharedView, TourTick};

/// Drives the autoplay loop.
pub struct TourSequencer {
    state: SharedView,
    camera: Arc<CameraController>,
    step_interval: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl TourSequencer {
    pub fn new(state: SharedView, camera: Arc<CameraController>, step_interval: Duration) -> Self {
        Self {
            state,
            camera,
            step_interval,
            task: Mutex::new(None),
        }
    }

    /// Begin touring at the current selection (or 0). No-op when the
    /// filtered subset is empty or a tour is already running.
    ///
    /// The first step fires immediately; subsequent steps follow the fixed
    /// cadence. The spawned task exits on its own once the tour state is
    /// gone — a reset invalidates the state before aborting the task, so a
    /// tick that races the stop is inert.
    pub fn start(&self) {
        {
            let mut st = self.state.lock();
            if st.tour.is_some() {
                debug!("tour already running");
                return;
            }
            if st.visible.is_empty() {
                debug!("tour not started, filtered subset is empty");
                return;
            }
            let first = st.selected.unwrap_or(0);
            st.start_tour(first);
        }

        let state = self.state.clone();
        let camera = self.camera.clone();
        let period = self.step_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let tick = state.lock().tour_advance();
                match tick {
                    TourTick::Inactive => break,
                    TourTick::Emptied => {
                        info!("tour stopped, filtered subset became empty");
                        break;
                    }
                    TourTick::Step(index) => {
                        if let Err(e) = camera.fly_to(index).await {
                            debug!(index, error = %e, "tour step skipped");
                        }
                    }
                }
            }
        });

        *self.task.lock() = Some(handle);
        info!("tour started");
    }

    /// Stop touring, discard tour state and let idle rotation re-engage.
    /// Idempotent.
    pub fn stop(&self) {
        let was_running = {
            let mut st = self.state.lock();
            let running = st.tour.is_some();
            st.clear_tour();
            running
        };
        if let Some(handle) = self.task.lock().take() {
            handle.abort();
        }
        if was_running {
            info!("tour stopped");
        }
    }

    /// Flip between Running and Stopped.
    pub fn toggle(&self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Whether tour state is present.
    pub fn is_running(&self) -> bool {
        self.state.lock().tour.is_some()
    }
}
