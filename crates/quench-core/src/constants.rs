//! Simulation constants and tuning parameters.
//!
//! These are the full configuration surface: a fixed set of named numeric
//! knobs, edited in source. There is no parsed CLI.

// --- Grid ---

/// Side length of the square field grid (cells).
pub const GRID_SIZE: usize = 128;

/// Amplitude of the initial white-noise field.
pub const INITIAL_AMPLITUDE: f64 = 0.1;

// --- Cooling schedule ---

/// Initial temperature (hot).
pub const T_INITIAL: f64 = 100.0;

/// Final temperature floor (cool). The schedule never goes below this.
pub const T_FINAL: f64 = 0.1;

/// Cooling rate. Temperature drops by `COOLING_RATE * 0.01` per tick.
pub const COOLING_RATE: f64 = 8.0;

/// Temperature drop per tick.
pub const COOLING_PER_TICK: f64 = COOLING_RATE * 0.01;

// --- Correlation length ---

/// Numerator of the inverse relation `xi = XI_COEFFICIENT / (T + XI_EPSILON)`.
pub const XI_COEFFICIENT: f64 = 10.0;

/// Guard term that keeps the inverse relation finite as T approaches zero.
pub const XI_EPSILON: f64 = 0.1;

/// Critical correlation length (grid units). Crossing it latches the
/// bootstrap transition.
pub const XI_CRITICAL: f64 = 8.0;

/// Fraction of `XI_CRITICAL` above which the display label switches to
/// "approaching critical".
pub const XI_WARNING_FRACTION: f64 = 0.7;

// --- Correlated noise ---

/// Overall scale applied to the smoothed noise grid.
pub const NOISE_AMPLITUDE: f64 = 1.0;

/// Gaussian smoothing width as a fraction of the correlation length.
pub const XI_TO_SIGMA: f64 = 1.0 / 3.0;

/// Gaussian kernel truncation radius, in multiples of sigma.
pub const KERNEL_TRUNCATE: f64 = 4.0;

// --- Pre-transition (fluctuation) update ---

/// Exponential damping factor applied to the field each tick.
pub const FLUCTUATION_DAMPING: f64 = 0.95;

/// Gain on the correlated-noise term.
pub const FLUCTUATION_NOISE_GAIN: f64 = 0.2;

// --- Post-transition (relaxation) update ---

/// Diffusion coefficient on the discrete Laplacian.
pub const RELAXATION_DIFFUSION: f64 = 0.1;

/// Coefficient of the cubic self-interaction term.
pub const RELAXATION_CUBIC: f64 = 0.05;

/// Gain on the residual noise term.
pub const RELAXATION_NOISE_GAIN: f64 = 0.05;

// --- Display ---

/// Lower bound of the fixed colormap range.
pub const FIELD_VMIN: f64 = -2.0;

/// Upper bound of the fixed colormap range.
pub const FIELD_VMAX: f64 = 2.0;
