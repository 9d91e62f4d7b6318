//! Headless scene surface.
//!
//! Simulates the external renderer: camera pose in a cell, animation as a
//! timed sleep, highlight/detail/definition-filter bookkeeping, and an
//! operation log for assertions. Animations can be told to fail once to
//! exercise the interruption path.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use globetrail_core::error::GlobeError;
use globetrail_core::models::camera::CameraPose;
use globetrail_core::models::event::CareerEvent;
use globetrail_core::ports::scene::SceneSurface;
use parking_lot::Mutex;
use tracing::debug;

/// In-memory stand-in for the rendering surface.
pub struct HeadlessScene {
    pose: Mutex<CameraPose>,
    highlighted: Mutex<HashSet<i64>>,
    detail: Mutex<Option<String>>,
    definition_filter: Mutex<String>,
    animations_started: AtomicUsize,
    animations_completed: AtomicUsize,
    animation_targets: Mutex<Vec<CameraPose>>,
    shown_ranks: Mutex<Vec<i64>>,
    fail_next_animation: AtomicBool,
}

impl HeadlessScene {
    pub fn new(initial: CameraPose) -> Self {
        Self {
            pose: Mutex::new(initial),
            highlighted: Mutex::new(HashSet::new()),
            detail: Mutex::new(None),
            definition_filter: Mutex::new("1=1".to_string()),
            animations_started: AtomicUsize::new(0),
            animations_completed: AtomicUsize::new(0),
            animation_targets: Mutex::new(Vec::new()),
            shown_ranks: Mutex::new(Vec::new()),
            fail_next_animation: AtomicBool::new(false),
        }
    }

    /// Make the next `animate_camera` call fail with
    /// [`GlobeError::AnimationInterrupted`].
    pub fn interrupt_next_animation(&self) {
        self.fail_next_animation.store(true, Ordering::SeqCst);
    }

    /// Current pose snapshot.
    pub fn pose(&self) -> CameraPose {
        *self.pose.lock()
    }

    /// Ranks currently holding a highlight.
    pub fn highlighted(&self) -> Vec<i64> {
        let mut ranks: Vec<i64> = self.highlighted.lock().iter().copied().collect();
        ranks.sort_unstable();
        ranks
    }

    /// Title of the open detail panel, if any.
    pub fn detail_title(&self) -> Option<String> {
        self.detail.lock().clone()
    }

    /// Last definition filter pushed down.
    pub fn definition_filter(&self) -> String {
        self.definition_filter.lock().clone()
    }

    /// Number of animations started (including interrupted ones).
    pub fn animations_started(&self) -> usize {
        self.animations_started.load(Ordering::SeqCst)
    }

    /// Number of animations that ran to completion.
    pub fn animations_completed(&self) -> usize {
        self.animations_completed.load(Ordering::SeqCst)
    }

    /// Target poses of completed animations, in order.
    pub fn animation_targets(&self) -> Vec<CameraPose> {
        self.animation_targets.lock().clone()
    }

    /// Ranks whose detail panel was shown, in order.
    pub fn shown_ranks(&self) -> Vec<i64> {
        self.shown_ranks.lock().clone()
    }
}

#[async_trait]
impl SceneSurface for HeadlessScene {
    async fn camera_pose(&self) -> CameraPose {
        *self.pose.lock()
    }

    async fn set_camera_pose(&self, pose: CameraPose) {
        *self.pose.lock() = pose;
    }

    async fn animate_camera(
        &self,
        pose: CameraPose,
        duration: Duration,
    ) -> Result<(), GlobeError> {
        self.animations_started.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_animation.swap(false, Ordering::SeqCst) {
            debug!("simulated animation interruption");
            return Err(GlobeError::AnimationInterrupted);
        }
        tokio::time::sleep(duration).await;
        *self.pose.lock() = pose;
        self.animation_targets.lock().push(pose);
        self.animations_completed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn acquire_highlight(&self, rank: i64) {
        self.highlighted.lock().insert(rank);
    }

    async fn release_highlight(&self, rank: i64) {
        self.highlighted.lock().remove(&rank);
    }

    async fn show_detail(&self, event: &CareerEvent) {
        *self.detail.lock() = Some(format!("{}, {}", event.city, event.country));
        self.shown_ranks.lock().push(event.rank);
    }

    async fn close_detail(&self) {
        *self.detail.lock() = None;
    }

    async fn set_definition_filter(&self, expression: &str) {
        *self.definition_filter.lock() = expression.to_string();
    }
}
