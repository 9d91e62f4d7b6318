//! Geodata source port.
//!
//! Implementations: `globetrail-scene` crate (JSON file, in-memory).

use async_trait::async_trait;

use crate::error::GlobeError;
use crate::models::event::CareerEvent;

/// Read-once source of the full career-event collection.
///
/// There are no partial-load semantics: either the whole collection is
/// returned or the call fails with [`GlobeError::DataUnavailable`].
/// Transport and on-disk format are up to the implementation.
#[async_trait]
pub trait GeodataSource: Send + Sync {
    /// Fetch every record, in arrival order (the feature store sorts).
    async fn fetch_all(&self) -> Result<Vec<CareerEvent>, GlobeError>;
}
