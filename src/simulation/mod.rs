pub mod states;
pub mod params;
pub mod engine;
pub mod kepler;
pub mod forces;
pub mod integrator;
pub mod collisions;
pub mod origin;
pub mod clock;
pub mod progress;
pub mod scenario;
