//! Simulation - Multi-Period Macro Engine
//!
//! See `engine.rs` for the period-update loop and `snapshot.rs` for
//! trajectory serialization and determinism digests.

pub mod engine;
pub mod snapshot;

pub use engine::{EconomicSimulator, ShockMode, SimulationOptions, STRESS_HORIZON};
pub use snapshot::TrajectorySnapshot;
