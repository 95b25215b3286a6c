//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Display label for the current phase of the run.
///
/// `PreBootstrap` and `ApproachingCritical` are both pre-transition; the
/// split at `XI_WARNING_FRACTION * XI_CRITICAL` exists purely for display.
/// Only the transition to `PostBootstrap` is irreversible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Pure potential: random fluctuations, no stable structure.
    #[default]
    PreBootstrap,
    /// Correlation length nearing the critical threshold.
    ApproachingCritical,
    /// Transition has fired: structure stabilizes and persists.
    PostBootstrap,
}

impl Phase {
    /// Short label for log lines and frame annotations.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::PreBootstrap => "PRE-BOOTSTRAP",
            Phase::ApproachingCritical => "APPROACHING",
            Phase::PostBootstrap => "POST-BOOTSTRAP",
        }
    }
}
