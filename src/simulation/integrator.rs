//! Fixed-step time integration for free bodies
//!
//! Semi-implicit Euler: velocity absorbs this tick's acceleration first,
//! then position advances along the updated velocity. One force evaluation
//! per tick, no energy-conservation correction; long-run drift is the
//! accepted price for O(1) per-body cost.

use crate::simulation::states::{NVec3, System};

/// Advance every free, visible body by one step.
/// `accel[i]` is the accumulated acceleration for body `i` this tick.
pub fn euler_semi_implicit(sys: &mut System, accel: &[NVec3], dt: f64) {
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        if !b.is_free() {
            continue; // stars, black holes, orbit-controlled: pass-through
        }
        // Kick then drift: v_n+1 = v_n + a dt, x_n+1 = x_n + v_n+1 dt
        b.v += *a * dt;
        b.x += b.v * dt;
    }
}

/// Advance rotation phase for every visible body.
pub fn advance_spin(sys: &mut System, dt: f64) {
    for b in sys.bodies.iter_mut() {
        if b.visible {
            b.phase += b.spin * dt;
        }
    }
}
