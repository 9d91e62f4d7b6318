//! # globetrail-view
//!
//! The view-state controller: keeps camera pose, selection, filtered
//! subset, list rows and autonomous motion (idle rotation, tour playback)
//! mutually consistent over the `SceneSurface` and `GeodataSource` ports.
//!
//! ## Structure
//!
//! - [`state`] — the single explicit [`state::ViewState`] object and the
//!   motion-state transitions
//! - [`store`] — feature store (load + canonical rank order)
//! - [`filter`] — filtered subset + definition-filter push-down
//! - [`selection`] — selection index and the one-at-a-time highlight
//! - [`camera`] — idle rotation, fly-to, reset; single-flight move gate
//! - [`tour`] — timer-driven autoplay over the filtered subset
//! - [`presenter`] — pure list-row projection
//! - [`director`] — wiring + the 1:1 UI operations

pub mod camera;
pub mod director;
pub mod filter;
pub mod presenter;
pub mod selection;
pub mod state;
pub mod store;
pub mod tour;
