//! Risk - Network Metrics and Systemic Aggregation
//!
//! - `network`: exposure graph and concentration/centrality scoring
//! - `systemic`: weighted composite systemic-risk score
//! - `stress`: named-scenario and Monte Carlo stress batches

pub mod network;
pub mod stress;
pub mod systemic;

pub use network::{calculate_network_risk, NetworkMetrics, NetworkOptions, RiskGraph};
pub use stress::{StressScenario, StressTester};
pub use systemic::{
    assess_systemic_risk, LiquidityMetrics, RiskBreakdown, RiskWeights, SystemicRiskResult,
};

use crate::models::ValidationError;
use thiserror::Error;

/// Errors surfaced by the risk aggregation layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// Aggregation weights malformed (do not sum to 1, or negative)
    #[error("invalid risk configuration: {reason}")]
    Configuration { reason: String },

    /// An input violated a structural invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
