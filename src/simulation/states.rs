//! Core state types for the sandbox simulation.
//!
//! Defines the central [`Body`] entity with its kind tag and optional
//! descriptors (orbit, black hole, render-only extras), plus:
//! - `System` — the list of bodies, current simulation time `t`, and the
//!   accumulated floating-origin offset
//! - `Camera` — focus position and look-target used for rebase decisions
//!
//! Render descriptors (rings, atmosphere, ocean, trail) are carried through
//! the pipeline untouched; only the renderer reads them.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub type NVec3 = Vector3<f64>;

/// Stable unique body identifier. Immutable for the body's lifetime.
pub type BodyId = u64;

/// Kind tag for a body. Drives which pipeline stages apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum BodyKind {
    #[serde(rename = "star")]
    Star,
    #[serde(rename = "planet")]
    Planet,
    #[serde(rename = "moon")]
    Moon,
    #[serde(rename = "asteroid")]
    Asteroid,
    #[serde(rename = "debris")]
    Debris,
    #[serde(rename = "black_hole")]
    BlackHole,
}

/// Analytic orbital elements around a parent body.
///
/// Presence of this descriptor makes a body orbit-controlled, except for
/// Asteroid/Debris kinds which stay force-driven regardless.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Orbit {
    pub parent: BodyId, // id of the body this orbit is around
    pub a: f64,         // semi-major axis (pre distance-scale)
    pub e: f64,         // eccentricity
    pub inclination: f64,
    pub ascending_node: f64, // longitude of ascending node
    pub arg_periapsis: f64,  // argument of periapsis
    pub mean_anomaly: f64,   // mean anomaly at epoch t = 0
    pub period: f64,         // orbital period in simulation seconds
}

/// Black-hole behavior descriptor. Bodies of kind `BlackHole` carry one.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlackHole {
    pub event_horizon: f64,
    pub absorb_radius: f64,
    pub lensing: f64, // lensing strength, renderer input only
}

/// Planetary ring, renderer input only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RingSpec {
    pub inner: f64,
    pub outer: f64,
    pub tint: [f64; 3],
}

/// Atmosphere shell, renderer input only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AtmosphereSpec {
    pub density: f64,
    pub color: [f64; 3],
}

/// Ocean layer, renderer input only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OceanSpec {
    pub level: f64,
    pub color: [f64; 3],
}

/// Motion trail, renderer input only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrailSpec {
    pub max_points: usize,
    pub width: f64,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    pub visible: bool, // excluded bodies are skipped by every stage
    pub x: NVec3,      // position
    pub v: NVec3,      // velocity
    pub radius: f64,
    pub m: f64, // mass (simulation-scaled units)
    pub spin: f64,
    pub tilt: f64,
    pub phase: f64, // rotation phase, advanced by spin * dt each tick
    pub orbit: Option<Orbit>,
    pub black_hole: Option<BlackHole>,
    pub ring: Option<RingSpec>,
    pub atmosphere: Option<AtmosphereSpec>,
    pub ocean: Option<OceanSpec>,
    pub trail: Option<TrailSpec>,
}

impl Body {
    /// Orbit-controlled: position derived analytically from Kepler elements.
    /// Asteroid/Debris stay force-driven even with an orbit attached.
    pub fn is_orbit_controlled(&self) -> bool {
        self.orbit.is_some() && !matches!(self.kind, BodyKind::Asteroid | BodyKind::Debris)
    }

    /// Free: motion governed by accumulated gravity + velocity integration.
    pub fn is_free(&self) -> bool {
        self.visible
            && !matches!(self.kind, BodyKind::Star | BodyKind::BlackHole)
            && !self.is_orbit_controlled()
    }

    /// Whether this body acts as a gravity source for others.
    /// Asteroids and debris never attract.
    pub fn is_gravity_source(&self) -> bool {
        matches!(
            self.kind,
            BodyKind::Star | BodyKind::Planet | BodyKind::Moon | BodyKind::BlackHole
        )
    }
}

/// Full simulation state advanced by the engine each tick.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,
    pub t: f64, // simulation time
    /// Total translation removed from world coordinates by origin rebases.
    /// `origin_offset + body.x` is the absolute position of a body.
    pub origin_offset: NVec3,
}

impl System {
    /// Look up a body by id. Ids are unique within a system.
    pub fn body_by_id(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }
}

/// Camera / focus point, used only for floating-origin decisions.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: NVec3,
    pub target: NVec3,
}
