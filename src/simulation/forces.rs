//! Force / acceleration contributors for the sandbox engine
//!
//! Defines the acceleration trait and the bounded top-K gravity term.
//! Full pairwise N-body summation was rejected for this sandbox; each free
//! body instead feels only its K (1 or 2) most influential sources, which
//! keeps the per-frame cost at O(N·M) with small M and produces stable,
//! readable orbits under arbitrary user spawning.

use crate::simulation::states::{NVec3, System};

/// Distance-squared floor. Not a softening radius — it exists only to keep
/// the division finite. Arbitrarily strong accelerations at close range are
/// intentional (near-miss slingshots).
pub const MIN_DIST2: f64 = 1e-6;

/// Collection of acceleration terms (gravity, future drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity from the top-K most influential sources.
///
/// Candidates are visible stars, planets, moons and black holes (never
/// asteroids or debris). Influence is ranked by `mass / distance²` and only
/// the K highest-scoring sources contribute to each free body.
pub struct TopKGravity {
    pub g: f64,          // gravitational constant
    pub top_k: usize,    // 1 or 2
    pub mass_scale: f64, // global mass multiplier
}

impl TopKGravity {
    /// Pick the indices of the up-to-K strongest sources for the body at
    /// `target`, excluding index `skip`. Score is scaled mass over squared
    /// distance, floored at [`MIN_DIST2`].
    fn select_influencers(&self, sys: &System, target: NVec3, skip: usize) -> Vec<usize> {
        let mut scored: Vec<(usize, f64)> = Vec::new();
        for (j, src) in sys.bodies.iter().enumerate() {
            if j == skip || !src.visible || !src.is_gravity_source() {
                continue;
            }
            let r = src.x - target;
            let d2 = r.dot(&r).max(MIN_DIST2);
            scored.push((j, src.m * self.mass_scale / d2));
        }
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.top_k.min(2));
        scored.into_iter().map(|(j, _)| j).collect()
    }
}

impl Acceleration for TopKGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        for i in 0..sys.bodies.len() {
            if !sys.bodies[i].is_free() {
                continue;
            }
            let xi = sys.bodies[i].x;

            for j in self.select_influencers(sys, xi, i) {
                let src = &sys.bodies[j];

                // r points from the target toward the source, so the
                // contribution pulls the target inward.
                let r = src.x - xi;
                let d2 = r.dot(&r).max(MIN_DIST2);
                let mag = self.g * src.m * self.mass_scale / d2;

                out[i] += mag * (r / d2.sqrt());
            }
        }
    }
}
