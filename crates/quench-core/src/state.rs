//! Field snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::Phase;
use crate::events::SimEvent;
use crate::field::ScalarField;
use crate::types::{FieldStats, SimTime};

/// Complete state of the simulation after one tick, handed to the
/// rendering and logging layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub time: SimTime,
    pub temperature: f64,
    pub correlation_length: f64,
    pub phase: Phase,
    /// Latched true from the transition tick onward.
    pub bootstrapped: bool,
    pub stats: FieldStats,
    /// One-shot events that fired on this tick.
    pub events: Vec<SimEvent>,
    pub field: ScalarField,
}
