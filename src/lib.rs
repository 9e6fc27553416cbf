pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, BodyKind, BlackHole, Camera, NVec3, Orbit, System};
pub use simulation::params::Parameters;
pub use simulation::engine::{step, Engine, RunState, StepOutput, FIXED_STEP_DT};
pub use simulation::forces::{AccelSet, Acceleration, TopKGravity};
pub use simulation::collisions::ContactEvent;
pub use simulation::progress::{record_step, ChallengeProgress};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, CameraConfig, OrbitConfig, ParametersConfig, ScenarioConfig, SimMode,
};

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
