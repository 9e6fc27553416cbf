//! Floating-origin rebasing
//!
//! A scene that spans interplanetary distances and close orbital shots in
//! the same frame exhausts f64 mantissa far from the origin. When the
//! camera drifts past a threshold, the whole world is translated so the
//! camera sits at the origin again. The removed translation accumulates in
//! `System::origin_offset`, so `origin_offset + position` always
//! reconstructs the absolute frame (and survives save/load).

use crate::simulation::states::{Camera, System};

/// Shift the world onto the camera if the camera is farther than
/// `threshold` from the origin. Returns whether a rebase happened.
///
/// The shift is one pure translation applied to every position-bearing
/// entity in the same step; relative distances are untouched.
pub fn rebase_origin(sys: &mut System, cam: &mut Camera, threshold: f64) -> bool {
    let shift = cam.position;
    if shift.norm() <= threshold {
        return false;
    }

    for b in sys.bodies.iter_mut() {
        b.x -= shift;
    }
    cam.position -= shift; // lands exactly on the origin
    cam.target -= shift;
    sys.origin_offset += shift;

    true
}
