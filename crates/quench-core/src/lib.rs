//! Core types and definitions for the QUENCH field simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the field grid, tuning constants, the cooling schedule, phase enums,
//! events, and state snapshots. It has no dependency on the RNG stack
//! or any rendering framework.

pub mod constants;
pub mod enums;
pub mod events;
pub mod field;
pub mod schedule;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
