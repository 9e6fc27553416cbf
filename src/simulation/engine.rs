//! Frame orchestrator
//!
//! Sequences the pipeline each simulated tick:
//! orbits → gravity → integration → absorption → impacts → origin rebase →
//! time advance. The order is fixed: gravity and integration must see the
//! orbit-corrected positions of analytic bodies, and collision tests must
//! see the fully updated positions for the tick.
//!
//! [`step`] is a pure(ish) transform `(system, camera, params, dt) ->
//! (system', camera', events)`: inputs are read, a fresh output is built,
//! and the previous state stays valid until the host commits the result.
//! A consumer reading between frames always observes a whole snapshot.
//!
//! [`Engine`] wraps `step` in the run-state machine (Idle / Running /
//! Paused / SteppingOnce) and the optional substep loop.

use crate::simulation::clock;
use crate::simulation::collisions::{self, ContactEvent};
use crate::simulation::forces::{AccelSet, TopKGravity};
use crate::simulation::integrator;
use crate::simulation::kepler;
use crate::simulation::origin;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Camera, NVec3, System};

/// Tick size used when single-stepping from pause.
pub const FIXED_STEP_DT: f64 = 1.0 / 60.0;

/// Run state of the frame orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    SteppingOnce,
}

/// Result of one engine tick. The body list may be shorter than the input
/// (absorbed/impacted bodies removed) but never longer.
#[derive(Debug, Clone)]
pub struct StepOutput {
    pub system: System,
    pub camera: Camera,
    pub events: Vec<ContactEvent>,
}

/// Run one pipeline pass over a copy of the inputs.
///
/// A non-finite `dt` skips the frame entirely, and so does
/// `params.paused`: the inputs come back unchanged with no events, never
/// partially applied. Pausing must freeze motion together with time, or
/// the two would disagree. No stage aborts for malformed body data;
/// unresolvable references degrade to pass-through.
pub fn step(sys: &System, cam: &Camera, params: &Parameters, dt: f64) -> StepOutput {
    let mut sys = sys.clone();
    let mut cam = cam.clone();
    let mut events = Vec::new();

    if !dt.is_finite() || params.paused {
        return StepOutput { system: sys, camera: cam, events };
    }

    let dt_sim = dt * params.time_scale;

    // Orbits are evaluated at the time this tick advances to, so the
    // committed `t` and the orbital phases agree.
    let t_next = clock::advance_time(sys.t, dt, params.time_scale, params.paused);
    kepler::evaluate_orbits(&mut sys, params, t_next);

    let forces = AccelSet::new().with(TopKGravity {
        g: params.g,
        top_k: params.top_k,
        mass_scale: params.mass_scale,
    });
    let mut accel = vec![NVec3::zeros(); sys.bodies.len()];
    forces.accumulate_accels(t_next, &sys, &mut accel);

    integrator::euler_semi_implicit(&mut sys, &accel, dt_sim);
    integrator::advance_spin(&mut sys, dt_sim);

    collisions::resolve_absorption(&mut sys, params, &mut events);
    collisions::resolve_impacts(&mut sys, params, &mut events);

    origin::rebase_origin(&mut sys, &mut cam, params.rebase_threshold);

    sys.t = t_next;

    StepOutput { system: sys, camera: cam, events }
}

/// The frame orchestrator state machine.
#[derive(Debug, Clone)]
pub struct Engine {
    state: RunState,
}

impl Engine {
    pub fn new() -> Self {
        Self { state: RunState::Idle }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Idle → Running. No effect in any other state.
    pub fn start(&mut self) {
        if self.state == RunState::Idle {
            self.state = RunState::Running;
        }
    }

    /// Running ⇄ Paused.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            other => other,
        };
    }

    /// Paused → SteppingOnce: the next tick advances exactly one fixed-size
    /// step and returns to Paused.
    pub fn request_step(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::SteppingOnce;
        }
    }

    /// Advance one frame according to the current run state.
    ///
    /// Idle and Paused (including `params.paused`) return the inputs
    /// unchanged. Running splits `dt` across `params.substeps` pipeline
    /// passes (the high-quality capture mode runs 2–4 smaller steps per
    /// rendered frame). SteppingOnce ignores the pause flag for its single
    /// fixed tick.
    pub fn tick(&mut self, sys: &System, cam: &Camera, params: &Parameters, dt: f64) -> StepOutput {
        match self.state {
            RunState::Idle | RunState::Paused => StepOutput {
                system: sys.clone(),
                camera: cam.clone(),
                events: Vec::new(),
            },
            RunState::Running => {
                if params.paused {
                    return StepOutput {
                        system: sys.clone(),
                        camera: cam.clone(),
                        events: Vec::new(),
                    };
                }
                let substeps = params.substeps.clamp(1, 4);
                let sub_dt = dt / substeps as f64;
                let mut out = step(sys, cam, params, sub_dt);
                for _ in 1..substeps {
                    let mut next = step(&out.system, &out.camera, params, sub_dt);
                    out.events.append(&mut next.events);
                    out.system = next.system;
                    out.camera = next.camera;
                }
                out
            }
            RunState::SteppingOnce => {
                let mut params = params.clone();
                params.paused = false;
                let out = step(sys, cam, &params, FIXED_STEP_DT);
                self.state = RunState::Paused;
                out
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
