//! Time flow control
//!
//! One rule: time never advances while paused, whatever `dt` was requested.
//! `time_scale` is strictly positive by precondition (the configuration
//! owner clamps it; the controller does not).

/// Next simulation time after a tick of wall-clock `dt`.
pub fn advance_time(t: f64, dt: f64, time_scale: f64, paused: bool) -> f64 {
    if paused {
        t
    } else {
        t + dt * time_scale
    }
}
