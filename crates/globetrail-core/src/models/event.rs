//! Career event model.
//!
//! One geolocated career-timeline entry. Created once at load time from the
//! geodata source and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A single career timeline entry rendered as a globe marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerEvent {
    /// Stable integer defining canonical display/tour order.
    /// Missing in the source data means 0.
    #[serde(default)]
    pub rank: i64,
    /// Marker longitude (degrees)
    pub longitude: f64,
    /// Marker latitude (degrees)
    pub latitude: f64,
    /// City name (detail panel title is "{city}, {country}")
    pub city: String,
    /// Employer / client
    pub company: String,
    /// Role held at this stop
    pub role: String,
    /// Free-text description
    pub description: String,
    /// Comma-separated technology tokens
    pub stack: String,
    /// Career phase bucket
    pub phase: CareerPhase,
    /// Country name
    pub country: String,
}

impl CareerEvent {
    /// Technology tokens: split on commas, trimmed, empties dropped.
    pub fn stack_tokens(&self) -> Vec<String> {
        self.stack
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Career phase bucket (fixed enumeration observed in the data).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CareerPhase {
    Leadership,
    Consultant,
    Technical,
    Academic,
}

impl CareerPhase {
    /// All phases, in the renderer's declaration order.
    pub const ALL: [CareerPhase; 4] = [
        CareerPhase::Leadership,
        CareerPhase::Consultant,
        CareerPhase::Technical,
        CareerPhase::Academic,
    ];

    /// Canonical string form, matching the values stored in the data and
    /// used in definition-filter expressions.
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerPhase::Leadership => "Leadership",
            CareerPhase::Consultant => "Consultant",
            CareerPhase::Technical => "Technical",
            CareerPhase::Academic => "Academic",
        }
    }

    /// Marker color (#RRGGBB) for this phase.
    pub fn color(&self) -> &'static str {
        match self {
            CareerPhase::Leadership => "#f97316",
            CareerPhase::Consultant => "#22c55e",
            CareerPhase::Technical => "#0ea5e9",
            CareerPhase::Academic => "#a855f7",
        }
    }

    /// Parse the canonical string form. Returns `None` for anything else;
    /// filter criteria are populated from observed data, so unknown values
    /// simply never match.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }
}
