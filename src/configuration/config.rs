//! Configuration types for loading and saving sandbox scenes as YAML.
//!
//! This module defines a thin, `serde` representation of a scene. Because
//! the same fields that describe an initial scenario (bodies, camera,
//! globals) plus `t` and `origin_offset` fully reconstruct a running
//! simulation, one type doubles as the save-slot snapshot: deserialize to
//! load, serialize a running [`Scenario`](crate::simulation::scenario::Scenario)
//! to save.
//!
//! # YAML format
//! A minimal scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 1.0
//!   top_k: 2
//!   mode: "realistic"       # or "chaos"
//!   time_scale: 1.0
//!
//! camera:
//!   position: [0.0, 5.0, 40.0]
//!   target: [0.0, 0.0, 0.0]
//!
//! bodies:
//!   - name: "Sol"
//!     kind: star
//!     x: [0.0, 0.0, 0.0]
//!     m: 1000.0
//!     radius: 5.0
//!   - name: "Terra"
//!     kind: planet
//!     m: 10.0
//!     radius: 1.0
//!     orbit:
//!       parent: "Sol"
//!       a: 30.0
//!       e: 0.02
//!       period: 120.0
//! ```
//!
//! Omitted fields take defaults; ids are assigned from list position when
//! not given explicitly.

use serde::{Deserialize, Serialize};

use crate::simulation::states::{AtmosphereSpec, BodyKind, OceanSpec, RingSpec, TrailSpec};

/// Operating mode of the simulation.
/// `mode: "realistic"` evaluates analytic orbits; `mode: "chaos"` leaves
/// every body to gravity and momentum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SimMode {
    #[serde(rename = "realistic")]
    Realistic,
    #[serde(rename = "chaos")]
    Chaos,
}

/// Global numerical parameters for a scene. Every field has a default so
/// scenario files only state what they change.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ParametersConfig {
    pub g: f64,              // gravitational constant scale
    pub top_k: usize,        // influencer count, 1 or 2
    pub distance_scale: f64, // orbital distance multiplier
    pub radius_scale: f64,   // body radius multiplier
    pub mass_scale: f64,     // mass multiplier
    pub debris_scale: f64,   // impact effect energy multiplier
    pub impact_energy_min: f64,
    pub impact_energy_max: f64,
    pub time_scale: f64, // clamped to a positive minimum on load
    pub paused: bool,
    pub mode: SimMode,
    pub rebase_threshold: f64,
    pub substeps: usize, // 2..=4 for high-quality capture
}

impl Default for ParametersConfig {
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

/// Camera / focus configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub target: [f64; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Orbit elements in configuration form. The parent is referenced by body
/// name and resolved to an id when the scenario is built.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrbitConfig {
    pub parent: String,
    pub a: f64,
    #[serde(default)]
    pub e: f64,
    #[serde(default)]
    pub inclination: f64,
    #[serde(default)]
    pub ascending_node: f64,
    #[serde(default)]
    pub arg_periapsis: f64,
    #[serde(default)]
    pub mean_anomaly: f64,
    pub period: f64,
}

/// Black-hole descriptor in configuration form.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlackHoleConfig {
    pub event_horizon: f64,
    pub absorb_radius: f64,
    #[serde(default)]
    pub lensing: f64,
}

/// Configuration for a single body's initial (or saved) state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BodyConfig {
    #[serde(default)]
    pub id: Option<u64>, // assigned from list position when omitted
    pub name: String,
    pub kind: BodyKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub x: [f64; 3],
    #[serde(default)]
    pub v: [f64; 3],
    pub radius: f64,
    pub m: f64,
    #[serde(default)]
    pub spin: f64,
    #[serde(default)]
    pub tilt: f64,
    #[serde(default)]
    pub phase: f64,
    #[serde(default)]
    pub orbit: Option<OrbitConfig>,
    #[serde(default)]
    pub black_hole: Option<BlackHoleConfig>,
    #[serde(default)]
    pub ring: Option<RingSpec>,
    #[serde(default)]
    pub atmosphere: Option<AtmosphereSpec>,
    #[serde(default)]
    pub ocean: Option<OceanSpec>,
    #[serde(default)]
    pub trail: Option<TrailSpec>,
}

fn default_visible() -> bool {
    true
}

/// Top-level scene configuration: initial scenario or saved snapshot.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub t: f64, // nonzero when restoring a snapshot
    #[serde(default)]
    pub origin_offset: [f64; 3],
    pub bodies: Vec<BodyConfig>,
}
