//! The shared view state.
//!
//! One explicit object instead of module-level globals: the full set, the
//! filtered subset, the selection, the highlight bookkeeping and the motion
//! mode all live here, behind a `parking_lot::Mutex` that is never held
//! across an await point.

use std::sync::Arc;

use globetrail_core::models::event::CareerEvent;
use parking_lot::Mutex;

/// Shared handle to the view state.
pub type SharedView = Arc<Mutex<ViewState>>;

/// Exclusive motion mode. Exactly one is logically active at a time; all
/// transitions go through the [`ViewState`] methods below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    /// Default background drift (may be inert while a selection is held).
    IdleRotating,
    /// A fly-to or reset animation is in flight.
    DirectedMove,
    /// A tour is active and no directed move is currently in flight.
    Touring,
}

/// Present only while a tour runs: the next subset index to visit.
/// The recurring-timer handle lives in the tour sequencer.
#[derive(Debug, Clone, Copy)]
pub struct TourProgress {
    /// Next index to visit (interpreted modulo the current subset length).
    pub next: usize,
}

/// Outcome of one tour timer tick, decided under the state lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourTick {
    /// Tour state is absent; the timer task must exit.
    Inactive,
    /// The filtered subset became empty; tour state was discarded.
    Emptied,
    /// Perform a directed move to this subset index.
    Step(usize),
}

/// The single mutable view state shared by all components.
#[derive(Debug)]
pub struct ViewState {
    /// Full ordered set, sorted ascending by rank. Write-once per session.
    pub all: Vec<CareerEvent>,
    /// Current filtered subset, always a stable-order subsequence of `all`.
    pub visible: Vec<CareerEvent>,
    /// Selection index into `visible`, or none.
    pub selected: Option<usize>,
    /// Rank of the record currently holding the highlight, if any.
    pub highlighted: Option<i64>,
    /// Tour state; absent when not touring.
    pub tour: Option<TourProgress>,
    motion: MotionState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            visible: Vec::new(),
            selected: None,
            highlighted: None,
            tour: None,
            motion: MotionState::IdleRotating,
        }
    }

    /// Current motion mode.
    pub fn motion(&self) -> MotionState {
        self.motion
    }

    /// A directed move (fly-to or reset) starts camera writes.
    pub fn begin_move(&mut self) {
        self.motion = MotionState::DirectedMove;
    }

    /// A directed move finished or was interrupted. Returns to `Touring`
    /// while a tour is active, otherwise to the idle default.
    pub fn end_move(&mut self) {
        self.motion = if self.tour.is_some() {
            MotionState::Touring
        } else {
            MotionState::IdleRotating
        };
    }

    /// Install tour state starting at `first`.
    pub fn start_tour(&mut self, first: usize) {
        self.tour = Some(TourProgress { next: first });
        if self.motion == MotionState::IdleRotating {
            self.motion = MotionState::Touring;
        }
    }

    /// Discard tour state. Idempotent; a move still in flight keeps the
    /// `DirectedMove` mode until its guard ends it.
    pub fn clear_tour(&mut self) {
        self.tour = None;
        if self.motion == MotionState::Touring {
            self.motion = MotionState::IdleRotating;
        }
    }

    /// Decide what one tour timer tick should do and advance the pointer.
    pub fn tour_advance(&mut self) -> TourTick {
        let len = self.visible.len();
        match self.tour.take() {
            None => TourTick::Inactive,
            Some(_) if len == 0 => {
                if self.motion == MotionState::Touring {
                    self.motion = MotionState::IdleRotating;
                }
                TourTick::Emptied
            }
            Some(progress) => {
                let index = progress.next % len;
                self.tour = Some(TourProgress { next: index + 1 });
                TourTick::Step(index)
            }
        }
    }

    /// Whether an idle-rotation tick may write the camera right now.
    pub fn idle_eligible(&self) -> bool {
        self.motion == MotionState::IdleRotating
            && self.selected.is_none()
            && self.tour.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globetrail_core::models::event::CareerPhase;

    fn event(rank: i64) -> CareerEvent {
        CareerEvent {
            rank,
            longitude: 0.0,
            latitude: 0.0,
            city: format!("city-{rank}"),
            company: format!("co-{rank}"),
            role: String::new(),
            description: String::new(),
            stack: String::new(),
            phase: CareerPhase::Technical,
            country: "X".to_string(),
        }
    }

    #[test]
    fn fresh_state_is_idle_eligible() {
        let state = ViewState::new();
        assert_eq!(state.motion(), MotionState::IdleRotating);
        assert!(state.idle_eligible());
    }

    #[test]
    fn move_suspends_idle_and_restores_mode() {
        let mut state = ViewState::new();
        state.begin_move();
        assert!(!state.idle_eligible());
        state.end_move();
        assert!(state.idle_eligible());

        state.start_tour(0);
        state.begin_move();
        state.end_move();
        assert_eq!(state.motion(), MotionState::Touring);
        state.clear_tour();
        assert_eq!(state.motion(), MotionState::IdleRotating);
    }

    #[test]
    fn selection_blocks_idle_but_not_motion_mode() {
        let mut state = ViewState::new();
        state.selected = Some(0);
        assert_eq!(state.motion(), MotionState::IdleRotating);
        assert!(!state.idle_eligible());
    }

    #[test]
    fn tour_advance_wraps_and_empties() {
        let mut state = ViewState::new();
        state.visible = vec![event(1), event(2)];
        state.start_tour(0);

        assert_eq!(state.tour_advance(), TourTick::Step(0));
        assert_eq!(state.tour_advance(), TourTick::Step(1));
        assert_eq!(state.tour_advance(), TourTick::Step(0)); // wrapped

        state.visible.clear();
        assert_eq!(state.tour_advance(), TourTick::Emptied);
        assert!(state.tour.is_none());
        assert_eq!(state.motion(), MotionState::IdleRotating);

        assert_eq!(state.tour_advance(), TourTick::Inactive);
    }
}
