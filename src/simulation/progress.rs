//! Challenge-progress tracking
//!
//! Explicit state for the sandbox's challenge counters (impacts caused,
//! matter fed to black holes, time survived). Updated by a pure function
//! from the events each tick emits — no hidden statics, the host owns the
//! struct and threads it across frames like any other state.

use crate::simulation::collisions::ContactEvent;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeProgress {
    pub elapsed: f64, // simulated seconds observed
    pub impacts: u32,
    pub absorptions: u32,
    pub peak_impact_energy: f64,
}

/// Fold one tick's events into the progress counters.
pub fn record_step(
    mut progress: ChallengeProgress,
    events: &[ContactEvent],
    dt: f64,
) -> ChallengeProgress {
    progress.elapsed += dt;
    for ev in events {
        match ev {
            ContactEvent::Absorption { .. } => progress.absorptions += 1,
            ContactEvent::Impact { energy, .. } => {
                progress.impacts += 1;
                progress.peak_impact_energy = progress.peak_impact_energy.max(*energy);
            }
        }
    }
    progress
}
