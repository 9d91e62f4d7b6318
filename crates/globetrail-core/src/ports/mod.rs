//! Port interfaces (traits).
//!
//! The rendering engine, basemap and geodata transport are external
//! collaborators; these traits are the only seams the view-state
//! controller talks through. Adapters implement them and the app wires
//! everything as `Arc<dyn T>`.
//!
//! All async traits use the `async_trait` macro for object safety.

pub mod geodata;
pub mod scene;
