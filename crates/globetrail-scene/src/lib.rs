//! # globetrail-scene
//!
//! Adapter implementations of the core ports:
//!
//! - [`headless`] — an in-memory [`SceneSurface`] with simulated camera
//!   animation, used by the demo binary and the integration tests. The
//!   real 3D renderer lives outside this workspace and plugs into the same
//!   trait.
//! - [`geodata`] — JSON-file and in-memory [`GeodataSource`]s.
//!
//! [`SceneSurface`]: globetrail_core::ports::scene::SceneSurface
//! [`GeodataSource`]: globetrail_core::ports::geodata::GeodataSource

pub mod geodata;
pub mod headless;
