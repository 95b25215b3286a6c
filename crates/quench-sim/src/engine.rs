//! Simulation engine — the core of the run.
//!
//! `SimulationEngine` owns the field grid, the seeded RNG, and the phase
//! latch; it runs all systems each tick and produces `FieldSnapshot`s.
//! Completely headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use quench_core::constants::{GRID_SIZE, XI_CRITICAL};
use quench_core::events::SimEvent;
use quench_core::field::ScalarField;
use quench_core::schedule::{correlation_length, temperature_at};
use quench_core::state::FieldSnapshot;
use quench_core::types::SimTime;

use crate::setup;
use crate::systems;
use crate::systems::noise::CorrelatedNoise;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Side length of the field grid in cells.
    pub size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            size: GRID_SIZE,
        }
    }
}

/// The simulation engine. Owns the field and all run state.
pub struct SimulationEngine {
    field: ScalarField,
    time: SimTime,
    temperature: f64,
    correlation_length: f64,
    bootstrapped: bool,
    floor_reached: bool,
    rng: ChaCha8Rng,
    noise: CorrelatedNoise,
    lap_buffer: Vec<f64>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new engine with the given config. The initial field is
    /// small-amplitude white noise drawn from the seeded RNG.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let field = setup::initial_field(config.size, &mut rng);
        let temperature = temperature_at(0);
        Self {
            field,
            time: SimTime::default(),
            temperature,
            correlation_length: correlation_length(temperature),
            bootstrapped: false,
            floor_reached: false,
            rng,
            noise: CorrelatedNoise::new(config.size),
            lap_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> FieldSnapshot {
        self.time.advance();
        self.run_systems();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.field,
            self.time,
            self.temperature,
            self.correlation_length,
            self.bootstrapped,
            events,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Get the current correlation length.
    pub fn correlation_length(&self) -> f64 {
        self.correlation_length
    }

    /// True once the transition has fired. Never reverts.
    pub fn bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// Get a read-only reference to the field grid.
    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Cooling (pure schedule, floor event)
        self.temperature =
            systems::cooling::run(self.time.tick, &mut self.floor_reached, &mut self.events);
        // 2. Correlation length (pure inverse relation)
        self.correlation_length = correlation_length(self.temperature);
        // 3. Phase decision (one-shot latch)
        if !self.bootstrapped && self.correlation_length >= XI_CRITICAL {
            self.bootstrapped = true;
            self.events.push(SimEvent::Bootstrap {
                tick: self.time.tick,
                temperature: self.temperature,
                correlation_length: self.correlation_length,
            });
        }
        // 4. Noise synthesis at the current correlation length
        let noise = self.noise.generate(&mut self.rng, self.correlation_length);
        // 5. Field update (rule depends on the latch)
        if self.bootstrapped {
            systems::relaxation::run(&mut self.field, noise, &mut self.lap_buffer);
        } else {
            systems::fluctuation::run(&mut self.field, noise);
        }
    }
}
