//! Simulation engine for QUENCH.
//!
//! Owns the field grid and the seeded RNG, runs the per-tick systems
//! (cooling, noise synthesis, field update), and produces FieldSnapshots
//! for the rendering and logging layers.

pub mod engine;
pub mod setup;
pub mod systems;

pub use engine::SimulationEngine;
pub use quench_core as core;
