//! Analytic Kepler orbit solver
//!
//! Positions orbit-controlled bodies on their ellipses each tick instead of
//! force-integrating them. Kepler's equation `E - e sin E = M` is solved
//! with a fixed number of Newton-Raphson iterations; for the eccentricities
//! the sandbox uses (e < ~0.1) six iterations land well below render
//! precision, and the fixed count keeps per-body cost constant.

use std::f64::consts::TAU;

use nalgebra::Rotation3;

use crate::configuration::config::SimMode;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Orbit, System};

/// Newton-Raphson iteration count for Kepler's equation. No convergence
/// check; bounded cost is the point.
const KEPLER_ITERS: usize = 6;

/// Solve Kepler's equation `E - e sin E = M` for the eccentric anomaly.
/// `m` in radians.
pub fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ea = m; // initial guess
    for _ in 0..KEPLER_ITERS {
        let delta = ea - e * ea.sin() - m;
        let derivative = 1.0 - e * ea.cos();
        ea -= delta / derivative;
    }
    ea
}

/// World position of a body on `orbit` at simulation time `t`, relative to
/// its parent's current position.
pub fn orbit_position(orbit: &Orbit, parent_pos: NVec3, t: f64, distance_scale: f64) -> NVec3 {
    let mean_motion = TAU / orbit.period;
    let m = (orbit.mean_anomaly + mean_motion * t).rem_euclid(TAU);

    let e = orbit.e;
    let ea = solve_kepler(m, e);

    let a = orbit.a * distance_scale;
    let r = a * (1.0 - e * ea.cos());
    let nu = ((1.0 - e * e).sqrt() * ea.sin()).atan2(ea.cos() - e);

    // Position in the orbital plane (y is the plane normal).
    let plane = NVec3::new(r * nu.cos(), 0.0, r * nu.sin());

    // Orientation: periapsis about the plane normal, then inclination about
    // the reference axis, then ascending node about the normal. The order is
    // load-bearing; swapping it tilts the orbit into the wrong plane.
    let rot = Rotation3::from_axis_angle(&NVec3::y_axis(), orbit.ascending_node)
        * Rotation3::from_axis_angle(&NVec3::x_axis(), orbit.inclination)
        * Rotation3::from_axis_angle(&NVec3::y_axis(), orbit.arg_periapsis);

    parent_pos + rot * plane
}

/// Reposition every orbit-controlled body for time `t`.
///
/// No-op outside Realistic mode. Bodies whose parent id cannot be resolved
/// keep their previous position (tolerated degenerate case, not an error),
/// and so do bodies with a degenerate period, which would otherwise turn
/// the mean-motion division into NaN. Parents are read from the list as it
/// updates, so a moon orbiting a planet listed before it sees the planet's
/// fresh position.
pub fn evaluate_orbits(sys: &mut System, params: &Parameters, t: f64) {
    if params.mode != SimMode::Realistic {
        return;
    }

    for i in 0..sys.bodies.len() {
        if !sys.bodies[i].visible || !sys.bodies[i].is_orbit_controlled() {
            continue;
        }
        let Some(orbit) = sys.bodies[i].orbit.clone() else {
            continue;
        };
        if !(orbit.period > 0.0) {
            continue; // zero/negative/NaN period: pass through
        }
        let Some(parent) = sys.body_by_id(orbit.parent) else {
            continue; // missing parent: pass through unmodified
        };
        let parent_pos = parent.x;
        sys.bodies[i].x = orbit_position(&orbit, parent_pos, t, params.distance_scale);
    }
}
