//! CBDC Analytics Core - Rust Engine
//!
//! Macroeconomic simulation and financial-network systemic-risk scoring
//! under CBDC adoption scenarios, with deterministic execution.
//!
//! # Architecture
//!
//! - **params**: validated structural model constants
//! - **models**: domain types (MacroState) and input validation
//! - **simulation**: multi-period macro engine (IS-LM / Phillips / Taylor)
//! - **risk**: network metrics, systemic aggregation, stress testing
//! - **rng**: deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Every call is a pure function of its explicit inputs — no shared
//!    mutable state, safe to parallelize from the host
//! 2. All randomness is deterministic (seeded RNG)
//! 3. Inputs are validated before any computation; results are never
//!    partial
//! 4. Adoption, reserve, and currency ratios stay in [0, 1] across every
//!    simulated trajectory

// Module declarations
pub mod models;
pub mod params;
pub mod risk;
pub mod rng;
pub mod simulation;

// Re-exports for convenience
pub use models::{MacroState, ValidationError};
pub use params::EconomicParameters;
pub use risk::{
    assess_systemic_risk, calculate_network_risk, LiquidityMetrics, NetworkMetrics,
    NetworkOptions, RiskBreakdown, RiskError, RiskGraph, RiskWeights, StressScenario,
    StressTester, SystemicRiskResult,
};
pub use rng::DeterministicRng;
pub use simulation::{
    EconomicSimulator, ShockMode, SimulationOptions, TrajectorySnapshot, STRESS_HORIZON,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn cbdcdai_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::simulator::PySimulator>()?;
    m.add_function(wrap_pyfunction!(ffi::risk::calculate_network_risk_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::risk::assess_systemic_risk_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::risk::run_stress_test_py, m)?)?;
    Ok(())
}
