//! Collision and absorption resolution
//!
//! Runs on post-integration positions each tick and resolves two classes of
//! contact:
//! - black-hole absorption: anything inside a hole's absorption radius is
//!   consumed,
//! - asteroid/debris impacts on planets and moons.
//!
//! Both are irreversible, once-per-step events: a removed body never appears
//! in the next tick's input. Each removal emits a [`ContactEvent`] for the
//! effects layer.

use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyKind, NVec3, System};

/// Representative energy attached to absorption events. The effects layer
/// only needs a plausible flash magnitude; absorption has no meaningful
/// kinetic energy of its own once matter crosses the horizon.
pub const ABSORPTION_ENERGY: f64 = 100.0;

/// Shrink factor on the impact shell. Slightly below visual contact reads
/// better in motion; tuned, not derived.
const IMPACT_SHELL_FACTOR: f64 = 0.9;

/// Event emitted for the effects/rendering layer when a body is consumed.
#[derive(Debug, Clone)]
pub enum ContactEvent {
    /// A body crossed a black hole's absorption radius and was removed.
    Absorption { position: NVec3, energy: f64 },
    /// An asteroid or debris body struck a planet or moon and was removed.
    Impact {
        position: NVec3, // contact point on the target's surface
        normal: NVec3,   // outward surface normal at the contact point
        energy: f64,     // kinetic energy, debris-scaled and clamped
    },
}

/// Remove every visible body inside a black hole's absorption radius.
/// Multiple bodies may be absorbed in one step. A hole never absorbs
/// itself, but can absorb another hole.
pub fn resolve_absorption(sys: &mut System, params: &Parameters, events: &mut Vec<ContactEvent>) {
    // Snapshot hole geometry first; removal below must not alias the scan.
    let holes: Vec<(u64, NVec3, f64)> = sys
        .bodies
        .iter()
        .filter(|b| b.visible && b.kind == BodyKind::BlackHole)
        .filter_map(|b| {
            b.black_hole
                .as_ref()
                .map(|bh| (b.id, b.x, bh.absorb_radius * params.radius_scale))
        })
        .collect();

    if holes.is_empty() {
        return;
    }

    sys.bodies.retain(|b| {
        if !b.visible {
            return true;
        }
        for (hole_id, hole_pos, absorb_r) in &holes {
            if b.id == *hole_id {
                continue;
            }
            if (b.x - hole_pos).norm() < *absorb_r {
                events.push(ContactEvent::Absorption {
                    position: b.x,
                    energy: ABSORPTION_ENERGY,
                });
                return false;
            }
        }
        true
    });
}

/// Test every visible asteroid/debris body against planets and moons in
/// list order. The first overlapping target wins; with simultaneous
/// multi-planet overlap the outcome depends on body ordering (kept from the
/// original behavior, see tests).
pub fn resolve_impacts(sys: &mut System, params: &Parameters, events: &mut Vec<ContactEvent>) {
    // (position, scaled radius) per target, in list order.
    let targets: Vec<(NVec3, f64, f64)> = sys
        .bodies
        .iter()
        .filter(|b| b.visible && matches!(b.kind, BodyKind::Planet | BodyKind::Moon))
        .map(|b| (b.x, b.radius, b.radius * params.radius_scale))
        .collect();

    if targets.is_empty() {
        return;
    }

    sys.bodies.retain(|b| {
        if !b.visible || !matches!(b.kind, BodyKind::Asteroid | BodyKind::Debris) {
            return true;
        }
        for (target_pos, target_radius, scaled_radius) in &targets {
            let shell = (target_radius + b.radius) * params.radius_scale * IMPACT_SHELL_FACTOR;
            let offset = b.x - target_pos;
            if offset.norm() >= shell {
                continue;
            }

            // Outward surface normal at the contact point. A dead-center
            // overlap has no direction; fall back to +Y.
            let normal = if offset.norm() > f64::EPSILON {
                offset.normalize()
            } else {
                NVec3::y()
            };

            let kinetic = 0.5 * b.m * b.v.norm_squared();
            let energy = (kinetic * params.debris_scale)
                .clamp(params.impact_energy_min, params.impact_energy_max);

            events.push(ContactEvent::Impact {
                position: *target_pos + normal * *scaled_radius,
                normal,
                energy,
            });
            return false; // consumed; no further targets tested
        }
        true
    });
}
