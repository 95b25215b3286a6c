//! Per-tick systems that drive the simulation.
//!
//! Systems are plain functions over the engine's state. The engine calls
//! them in a fixed order each tick; none of them owns state of its own
//! except the noise generator's scratch buffers.

pub mod cooling;
pub mod fluctuation;
pub mod noise;
pub mod relaxation;
pub mod snapshot;
