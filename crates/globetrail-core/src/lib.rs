//! # globetrail-core
//!
//! globetrail domain models, port (trait) definitions and error types.
//! Everything the view-state controller and the adapters share lives here.
//!
//! ## Structure
//!
//! - [`models`] — domain data structures (serde Serialize/Deserialize)
//! - [`ports`] — hexagonal-architecture port interfaces (async_trait)
//! - [`error`] — core error type (thiserror)
//! - [`config`] — application settings structs
//! - [`config_manager`] — settings file management (load/save)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;
