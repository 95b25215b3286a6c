//! One-shot events emitted by the simulation.

use serde::{Deserialize, Serialize};

/// Events surfaced in the snapshot for the tick on which they fired.
/// Each fires at most once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The correlation length crossed the critical threshold and the
    /// update rule switched permanently to the relaxation form.
    Bootstrap {
        tick: u64,
        temperature: f64,
        correlation_length: f64,
    },
    /// The cooling schedule reached its floor temperature.
    FloorReached { tick: u64 },
}
