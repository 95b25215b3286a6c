//! The cooling schedule and correlation-length relation.
//!
//! Both are pure functions: temperature depends only on the tick count,
//! and correlation length only on temperature. The engine never carries
//! accumulated temperature state that could drift from these.

use crate::constants::{COOLING_PER_TICK, T_FINAL, T_INITIAL, XI_COEFFICIENT, XI_EPSILON};

/// Temperature after `tick` cooling steps: linear decay clamped at the floor.
pub fn temperature_at(tick: u64) -> f64 {
    (T_INITIAL - tick as f64 * COOLING_PER_TICK).max(T_FINAL)
}

/// Correlation length `xi = XI_COEFFICIENT / (T + XI_EPSILON)`.
///
/// Strictly decreasing in T; the epsilon keeps it finite as T -> 0.
pub fn correlation_length(temperature: f64) -> f64 {
    XI_COEFFICIENT / (temperature + XI_EPSILON)
}

/// First tick at which the schedule sits exactly on the floor temperature.
pub fn floor_tick() -> u64 {
    ((T_INITIAL - T_FINAL) / COOLING_PER_TICK).ceil() as u64
}
