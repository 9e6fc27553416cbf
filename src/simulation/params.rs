//! Global simulation parameters
//!
//! `Parameters` holds the per-step runtime settings read by the pipeline:
//! - gravitational constant scale and top-K influencer count,
//! - distance/radius/mass scale factors,
//! - operating mode, time scale, paused flag,
//! - floating-origin rebase threshold and substep count
//!
//! `time_scale` is expected to be strictly positive; the owning
//! configuration clamps it before it reaches the core.

use crate::configuration::config::SimMode;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,              // gravitational constant (simulation units)
    pub top_k: usize,        // influencer count, 1 or 2
    pub distance_scale: f64, // multiplies orbital semi-major axes
    pub radius_scale: f64,   // multiplies body radii in collision shells
    pub mass_scale: f64,     // multiplies masses in gravity
    pub debris_scale: f64,   // scales emitted impact-event energy
    pub impact_energy_min: f64,
    pub impact_energy_max: f64,
    pub time_scale: f64,
    pub paused: bool,
    pub mode: SimMode, // Realistic evaluates orbits analytically, Chaos does not
    pub rebase_threshold: f64, // camera distance that triggers an origin rebase
    pub substeps: usize, // 1 normally, 2..=4 in high-quality capture mode
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 1.0,
            top_k: 1,
            distance_scale: 1.0,
            radius_scale: 1.0,
            mass_scale: 1.0,
            debris_scale: 1.0,
            impact_energy_min: 0.0,
            impact_energy_max: 1.0e12,
            time_scale: 1.0,
            paused: false,
            mode: SimMode::Realistic,
            rebase_threshold: 400.0,
            substeps: 1,
        }
    }
}
