//! globetrail domain models.
//!
//! Data structures shared between the view-state controller and the
//! scene/data adapters. All models implement `serde` Serialize/Deserialize.

pub mod camera;
pub mod event;
