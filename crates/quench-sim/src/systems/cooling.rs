//! Cooling system: recomputes temperature from the schedule each tick.
//!
//! Temperature is never integrated incrementally; it is re-derived from
//! the tick count so it cannot drift from the pure schedule.

use quench_core::constants::T_FINAL;
use quench_core::events::SimEvent;
use quench_core::schedule::temperature_at;

/// Recompute the temperature for `tick`. Emits `FloorReached` the first
/// tick the schedule sits on its floor.
pub fn run(tick: u64, floor_reached: &mut bool, events: &mut Vec<SimEvent>) -> f64 {
    let temperature = temperature_at(tick);
    if !*floor_reached && temperature == T_FINAL {
        *floor_reached = true;
        events.push(SimEvent::FloorReached { tick });
    }
    temperature
}
