//! Snapshot system: builds the complete FieldSnapshot for one tick.
//!
//! Read-only over the field; never modifies engine state.

use quench_core::constants::{XI_CRITICAL, XI_WARNING_FRACTION};
use quench_core::enums::Phase;
use quench_core::events::SimEvent;
use quench_core::field::ScalarField;
use quench_core::state::FieldSnapshot;
use quench_core::types::SimTime;

/// Build the snapshot handed to rendering and logging.
pub fn build_snapshot(
    field: &ScalarField,
    time: SimTime,
    temperature: f64,
    correlation_length: f64,
    bootstrapped: bool,
    events: Vec<SimEvent>,
) -> FieldSnapshot {
    FieldSnapshot {
        time,
        temperature,
        correlation_length,
        phase: phase_label(correlation_length, bootstrapped),
        bootstrapped,
        stats: field.stats(),
        events,
        field: field.clone(),
    }
}

/// Derive the display label from the latch and the current xi.
pub fn phase_label(correlation_length: f64, bootstrapped: bool) -> Phase {
    if bootstrapped {
        Phase::PostBootstrap
    } else if correlation_length > XI_CRITICAL * XI_WARNING_FRACTION {
        Phase::ApproachingCritical
    } else {
        Phase::PreBootstrap
    }
}
