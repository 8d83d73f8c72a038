//! Systemic Risk Aggregation
//!
//! Combines network metrics, liquidity metrics, and a caller-supplied
//! operational score into one composite systemic-risk score with a full
//! attribution breakdown. Weights are caller configuration and must sum to
//! one; any sub-score that lands outside [0, 1] is clamped with a logged
//! (never silent) adjustment.

use crate::models::{require_finite, require_in_range, require_positive, ValidationError};
use crate::risk::network::NetworkMetrics;
use crate::risk::RiskError;
use crate::{EconomicParameters, MacroState};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tolerance for the weight-sum-equals-one check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

// ============================================================================
// Inputs
// ============================================================================

/// Aggregation weights over the three risk components.
///
/// Must be non-negative and sum to 1 (validated at every call, not at
/// construction, so deserialized or hand-built values cannot slip through).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub network: f64,
    pub liquidity: f64,
    pub operational: f64,
}

impl Default for RiskWeights {
    /// 0.4 / 0.3 / 0.3 — the historical calibration.
    fn default() -> Self {
        Self {
            network: 0.4,
            liquidity: 0.3,
            operational: 0.3,
        }
    }
}

impl RiskWeights {
    /// Validate non-negativity and the sum-to-one constraint.
    pub fn validate(&self) -> Result<(), RiskError> {
        for (name, value) in [
            ("network", self.network),
            ("liquidity", self.liquidity),
            ("operational", self.operational),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RiskError::Configuration {
                    reason: format!("weight '{}' must be a non-negative finite number, got {}", name, value),
                });
            }
        }
        let sum = self.network + self.liquidity + self.operational;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RiskError::Configuration {
                reason: format!("weights must sum to 1, got {}", sum),
            });
        }
        Ok(())
    }
}

/// Liquidity inputs to the aggregator.
///
/// A typed record rather than an open-ended mapping: the contract is
/// statically checkable and validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidityMetrics {
    /// Available liquidity buffer (non-negative)
    pub liquid_assets: f64,

    /// Short-term obligations the buffer must cover (strictly positive)
    pub short_term_obligations: f64,

    /// Money-multiplier capacity proxy:
    /// `reserve_ratio * currency_ratio * money_velocity`
    pub multiplier_capacity: f64,
}

impl LiquidityMetrics {
    /// Create validated liquidity metrics.
    pub fn new(
        liquid_assets: f64,
        short_term_obligations: f64,
        multiplier_capacity: f64,
    ) -> Result<Self, ValidationError> {
        require_in_range("liquid_assets", liquid_assets, 0.0, f64::MAX)?;
        require_positive("short_term_obligations", short_term_obligations)?;
        require_in_range("multiplier_capacity", multiplier_capacity, 0.0, f64::MAX)?;
        Ok(Self {
            liquid_assets,
            short_term_obligations,
            multiplier_capacity,
        })
    }

    /// Derive the stress-test form from a simulated state: the liquidity
    /// proxy serves both as the buffer estimate (against unit obligations)
    /// and as the multiplier-capacity term.
    pub fn from_macro_state(state: &MacroState, params: &EconomicParameters) -> Self {
        let proxy = state.liquidity_proxy(params.money_velocity);
        Self {
            liquid_assets: proxy,
            short_term_obligations: 1.0,
            multiplier_capacity: proxy,
        }
    }

    /// Buffer coverage of short-term obligations.
    pub fn coverage(&self) -> f64 {
        self.liquid_assets / self.short_term_obligations
    }
}

// ============================================================================
// Output
// ============================================================================

/// Attribution of the composite score to its components (post-clamp).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub network: f64,
    pub liquidity: f64,
    pub operational: f64,
}

/// Composite systemic-risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemicRiskResult {
    /// Weighted composite score in [0, 1]
    pub composite: f64,

    /// Per-component sub-scores that produced the composite
    pub breakdown: RiskBreakdown,

    /// Name of the stress scenario this result belongs to, if any
    pub scenario: Option<String>,

    /// True when any sub-score needed a clamp into [0, 1]
    pub clamped: bool,
}

// ============================================================================
// Aggregator
// ============================================================================

/// Combine network, liquidity, and operational risk into one score.
///
/// # Errors
///
/// - [`RiskError::Configuration`] when `weights` are malformed (checked
///   before any aggregation)
/// - [`RiskError::Validation`] when `operational_risk` is outside [0, 1]
pub fn assess_systemic_risk(
    network: &NetworkMetrics,
    liquidity: &LiquidityMetrics,
    operational_risk: f64,
    weights: &RiskWeights,
) -> Result<SystemicRiskResult, RiskError> {
    weights.validate()?;
    require_in_range("operational_risk", operational_risk, 0.0, 1.0)?;
    require_finite("liquid_assets", liquidity.liquid_assets)?;
    require_positive("short_term_obligations", liquidity.short_term_obligations)?;

    let mut clamped = false;

    // Network component: concentration plus the share of hub nodes.
    let network_raw = 0.5 * network.concentration + 0.5 * network.hub_fraction();
    let network_score = clamp_logged("network", network_raw, &mut clamped);

    // Liquidity component: inverse of buffer coverage, damped by the
    // multiplier-capacity proxy.
    let liquidity_raw = 1.0 - liquidity.coverage() * (1.0 + liquidity.multiplier_capacity);
    let liquidity_score = clamp_logged("liquidity", liquidity_raw, &mut clamped);

    let operational_score = clamp_logged("operational", operational_risk, &mut clamped);

    let composite_raw = weights.network * network_score
        + weights.liquidity * liquidity_score
        + weights.operational * operational_score;
    let composite = clamp_logged("composite", composite_raw, &mut clamped);

    Ok(SystemicRiskResult {
        composite,
        breakdown: RiskBreakdown {
            network: network_score,
            liquidity: liquidity_score,
            operational: operational_score,
        },
        scenario: None,
        clamped,
    })
}

/// Clamp a sub-score into [0, 1], logging the adjustment when it bites.
fn clamp_logged(component: &'static str, value: f64, clamped: &mut bool) -> f64 {
    if (0.0..=1.0).contains(&value) {
        return value;
    }
    let adjusted = value.clamp(0.0, 1.0);
    warn!(component, value, adjusted, "sub-score clamped into [0, 1]");
    *clamped = true;
    adjusted
}
