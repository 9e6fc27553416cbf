use std::time::Instant;

use crate::simulation::engine::step;
use crate::simulation::forces::{AccelSet, TopKGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, Camera, NVec3, System};

/// Helper to build a deterministic system of size `n`: one central star
/// and `n - 1` free asteroids scattered by trig sequences, no rand needed.
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    bodies.push(Body {
        id: 0,
        name: "star".to_string(),
        kind: BodyKind::Star,
        visible: true,
        x: NVec3::zeros(),
        v: NVec3::zeros(),
        radius: 2.0,
        m: 1000.0,
        spin: 0.0,
        tilt: 0.0,
        phase: 0.0,
        orbit: None,
        black_hole: None,
        ring: None,
        atmosphere: None,
        ocean: None,
        trail: None,
    });

    for i in 1..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 50.0,
            (i_f * 0.13).cos() * 50.0,
            (i_f * 0.07).sin() * 50.0,
        );

        bodies.push(Body {
            id: i as u64,
            name: format!("asteroid-{i}"),
            kind: BodyKind::Asteroid,
            visible: true,
            x,
            v: NVec3::zeros(),
            radius: 0.01,
            m: 1.0,
            spin: 0.0,
            tilt: 0.0,
            phase: 0.0,
            orbit: None,
            black_hole: None,
            ring: None,
            atmosphere: None,
            ocean: None,
            trail: None,
        });
    }

    System {
        bodies,
        t: 0.0,
        origin_offset: NVec3::zeros(),
    }
}

/// Time the top-K gravity accumulation for K = 1 and K = 2 across a range
/// of system sizes.
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_system(n);
        let mut out = vec![NVec3::zeros(); n];

        let k1 = AccelSet::new().with(TopKGravity {
            g: 1.0,
            top_k: 1,
            mass_scale: 1.0,
        });
        let k2 = AccelSet::new().with(TopKGravity {
            g: 1.0,
            top_k: 2,
            mass_scale: 1.0,
        });

        // Warm up
        k1.accumulate_accels(0.0, &sys, &mut out);
        k2.accumulate_accels(0.0, &sys, &mut out);

        let t0 = Instant::now();
        k1.accumulate_accels(0.0, &sys, &mut out);
        let dt_k1 = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        k2.accumulate_accels(0.0, &sys, &mut out);
        let dt_k2 = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, K=1 = {dt_k1:8.6} s, K=2 = {dt_k2:8.6} s");
    }
}

/// Benchmark the whole pipeline tick for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    let params = Parameters::default();
    let camera = Camera {
        position: NVec3::new(0.0, 10.0, 100.0),
        target: NVec3::zeros(),
    };

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few ticks to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys = make_system(n);

        let t0 = Instant::now();
        for _ in 0..steps {
            let out = step(&sys, &camera, &params, 1.0 / 60.0);
            sys = out.system;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
