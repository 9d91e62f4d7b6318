//! Geodata sources.
//!
//! JSON-file and in-memory implementations of the geodata port. Both are
//! whole-or-nothing: any read or parse problem maps to `DataUnavailable`.

use std::path::PathBuf;

use async_trait::async_trait;
use globetrail_core::error::GlobeError;
use globetrail_core::models::event::CareerEvent;
use globetrail_core::ports::geodata::GeodataSource;
use tracing::debug;

/// Career events from a JSON file (a plain array of records).
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GeodataSource for JsonFileSource {
    async fn fetch_all(&self) -> Result<Vec<CareerEvent>, GlobeError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            GlobeError::DataUnavailable(format!("could not read {}: {e}", self.path.display()))
        })?;
        let events: Vec<CareerEvent> = serde_json::from_str(&contents).map_err(|e| {
            GlobeError::DataUnavailable(format!("could not parse {}: {e}", self.path.display()))
        })?;
        debug!(count = events.len(), path = %self.path.display(), "geodata read");
        Ok(events)
    }
}

/// Fixed in-memory collection (demos, tests).
pub struct StaticSource {
    events: Vec<CareerEvent>,
}

impl StaticSource {
    pub fn new(events: Vec<CareerEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl GeodataSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<CareerEvent>, GlobeError> {
        Ok(self.events.clone())
    }
}
