//! Build fully-initialized scenes from configuration, and back
//!
//! Takes a [`ScenarioConfig`] (YAML-facing) and produces the runtime bundle
//! consumed by the engine:
//! - global parameters ([`Parameters`])
//! - system state ([`System`] with bodies, time, origin offset)
//! - camera ([`Camera`])
//!
//! The reverse direction, [`Scenario::to_config`], is the persistence
//! boundary: everything needed to resume the simulation identically comes
//! out of it — there is no hidden internal state.

use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};

use crate::configuration::config::{
    BlackHoleConfig, BodyConfig, CameraConfig, OrbitConfig, ParametersConfig, ScenarioConfig,
};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BlackHole, Body, BodyId, Camera, NVec3, Orbit, System};

/// Floor applied to configured `time_scale`; the core itself assumes the
/// value is strictly positive.
const MIN_TIME_SCALE: f64 = 1e-9;

/// A fully-initialized runtime scene.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub camera: Camera,
}

impl Scenario {
    /// Map a `ScenarioConfig` into runtime state.
    ///
    /// Authoring mistakes — duplicate ids, duplicate names used as orbit
    /// parents, parents that do not exist — are hard errors here. Once the
    /// simulation is running the same conditions only degrade.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = build_parameters(&cfg.parameters);

        // First pass: assign ids and map names for parent resolution.
        let mut ids: Vec<BodyId> = Vec::with_capacity(cfg.bodies.len());
        let mut by_name: HashMap<&str, Vec<BodyId>> = HashMap::new();
        let mut seen = HashMap::new();
        for (index, bc) in cfg.bodies.iter().enumerate() {
            let id = bc.id.unwrap_or(index as BodyId);
            if let Some(prev) = seen.insert(id, &bc.name) {
                bail!("duplicate body id {} ('{}' and '{}')", id, prev, bc.name);
            }
            by_name.entry(bc.name.as_str()).or_default().push(id);
            ids.push(id);
        }

        // Second pass: build runtime bodies, resolving orbit parents.
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (bc, id) in cfg.bodies.iter().zip(ids.iter()) {
            let orbit = match &bc.orbit {
                Some(oc) => Some(build_orbit(oc, &bc.name, &by_name)?),
                None => None,
            };
            bodies.push(Body {
                id: *id,
                name: bc.name.clone(),
                kind: bc.kind,
                visible: bc.visible,
                x: NVec3::from(bc.x),
                v: NVec3::from(bc.v),
                radius: bc.radius,
                m: bc.m,
                spin: bc.spin,
                tilt: bc.tilt,
                phase: bc.phase,
                orbit,
                black_hole: bc.black_hole.as_ref().map(|bh| BlackHole {
                    event_horizon: bh.event_horizon,
                    absorb_radius: bh.absorb_radius,
                    lensing: bh.lensing,
                }),
                ring: bc.ring.clone(),
                atmosphere: bc.atmosphere.clone(),
                ocean: bc.ocean.clone(),
                trail: bc.trail.clone(),
            });
        }

        log::info!(
            "built scenario: {} bodies, t = {}, mode = {:?}",
            bodies.len(),
            cfg.t,
            parameters.mode
        );

        Ok(Self {
            parameters,
            system: System {
                bodies,
                t: cfg.t,
                origin_offset: NVec3::from(cfg.origin_offset),
            },
            camera: Camera {
                position: NVec3::from(cfg.camera.position),
                target: NVec3::from(cfg.camera.target),
            },
        })
    }

    /// Serialize-ready snapshot of the running scene. Feeding the result
    /// back through [`Scenario::build_scenario`] reproduces this state.
    ///
    /// An orbit whose parent has been consumed at runtime is dropped from
    /// the snapshot: the body's position and velocity are already saved,
    /// and a dangling name reference would make the snapshot unloadable.
    pub fn to_config(&self) -> ScenarioConfig {
        let bodies = self
            .system
            .bodies
            .iter()
            .map(|b| BodyConfig {
                id: Some(b.id),
                name: b.name.clone(),
                kind: b.kind,
                visible: b.visible,
                x: [b.x.x, b.x.y, b.x.z],
                v: [b.v.x, b.v.y, b.v.z],
                radius: b.radius,
                m: b.m,
                spin: b.spin,
                tilt: b.tilt,
                phase: b.phase,
                orbit: b.orbit.as_ref().and_then(|o| {
                    let parent = self.system.body_by_id(o.parent)?;
                    Some(OrbitConfig {
                        parent: parent.name.clone(),
                        a: o.a,
                        e: o.e,
                        inclination: o.inclination,
                        ascending_node: o.ascending_node,
                        arg_periapsis: o.arg_periapsis,
                        mean_anomaly: o.mean_anomaly,
                        period: o.period,
                    })
                }),
                black_hole: b.black_hole.as_ref().map(|bh| BlackHoleConfig {
                    event_horizon: bh.event_horizon,
                    absorb_radius: bh.absorb_radius,
                    lensing: bh.lensing,
                }),
                ring: b.ring.clone(),
                atmosphere: b.atmosphere.clone(),
                ocean: b.ocean.clone(),
                trail: b.trail.clone(),
            })
            .collect();

        ScenarioConfig {
            parameters: parameters_to_config(&self.parameters),
            camera: CameraConfig {
                position: [self.camera.position.x, self.camera.position.y, self.camera.position.z],
                target: [self.camera.target.x, self.camera.target.y, self.camera.target.z],
            },
            t: self.system.t,
            origin_offset: [
                self.system.origin_offset.x,
                self.system.origin_offset.y,
                self.system.origin_offset.z,
            ],
            bodies,
        }
    }
}

fn build_parameters(p: &ParametersConfig) -> Parameters {
    Parameters {
        g: p.g,
        top_k: p.top_k.clamp(1, 2),
        distance_scale: p.distance_scale,
        radius_scale: p.radius_scale,
        mass_scale: p.mass_scale,
        debris_scale: p.debris_scale,
        impact_energy_min: p.impact_energy_min,
        impact_energy_max: p.impact_energy_max,
        time_scale: p.time_scale.max(MIN_TIME_SCALE),
        paused: p.paused,
        mode: p.mode,
        rebase_threshold: p.rebase_threshold,
        substeps: p.substeps.clamp(1, 4),
    }
}

fn parameters_to_config(p: &Parameters) -> ParametersConfig {
    ParametersConfig {
        g: p.g,
        top_k: p.top_k,
        distance_scale: p.distance_scale,
        radius_scale: p.radius_scale,
        mass_scale: p.mass_scale,
        debris_scale: p.debris_scale,
        impact_energy_min: p.impact_energy_min,
        impact_energy_max: p.impact_energy_max,
        time_scale: p.time_scale,
        paused: p.paused,
        mode: p.mode,
        rebase_threshold: p.rebase_threshold,
        substeps: p.substeps,
    }
}

fn build_orbit(
    oc: &OrbitConfig,
    owner: &str,
    by_name: &HashMap<&str, Vec<BodyId>>,
) -> Result<Orbit> {
    let candidates = by_name
        .get(oc.parent.as_str())
        .ok_or_else(|| anyhow!("body '{}' orbits unknown parent '{}'", owner, oc.parent))?;
    if candidates.len() > 1 {
        bail!(
            "body '{}' orbits '{}', but {} bodies share that name",
            owner,
            oc.parent,
            candidates.len()
        );
    }
    if !(oc.period > 0.0) {
        bail!("body '{}' has non-positive orbital period {}", owner, oc.period);
    }
    Ok(Orbit {
        parent: candidates[0],
        a: oc.a,
        e: oc.e,
        inclination: oc.inclination,
        ascending_node: oc.ascending_node,
        arg_periapsis: oc.arg_periapsis,
        mean_anomaly: oc.mean_anomaly,
        period: oc.period,
    })
}
