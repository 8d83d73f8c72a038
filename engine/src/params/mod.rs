//! EconomicParameters - Structural Model Constants
//!
//! Immutable parameters of the macro model (natural rate, inflation target,
//! Taylor-rule weights, money velocity, fiscal multiplier). Validated once
//! at construction and then shared read-only by every simulation run; no
//! call mutates a parameter set.

use crate::models::{require_in_range, require_positive, ValidationError};
use serde::{Deserialize, Serialize};

/// Economically plausible bound for rate-like parameters.
const RATE_MIN: f64 = -0.05;
const RATE_MAX: f64 = 0.20;

/// Fiscal multiplier bound (typical empirical range).
const FISCAL_MULTIPLIER_MAX: f64 = 3.0;

/// Upper sanity bound for the Taylor-rule weights.
const WEIGHT_MAX: f64 = 10.0;

/// Structural constants for the macro model.
///
/// Construct via [`EconomicParameters::new`], which enforces the ranges
/// below; the struct is `Copy` and intended to be passed by shared
/// reference to every call that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicParameters {
    /// Natural (neutral real) rate of interest, in [-0.05, 0.20]
    pub natural_rate: f64,

    /// Central-bank inflation target, in [-0.05, 0.20]
    pub inflation_target: f64,

    /// Taylor-rule weight on the output gap, non-negative
    pub output_gap_weight: f64,

    /// Taylor-rule weight on inflation deviation, non-negative
    pub inflation_weight: f64,

    /// Money velocity, strictly positive
    pub money_velocity: f64,

    /// Fiscal multiplier, in [0, 3]
    pub fiscal_multiplier: f64,
}

impl EconomicParameters {
    /// Create a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field when any
    /// value is non-finite or outside its plausible range.
    pub fn new(
        natural_rate: f64,
        inflation_target: f64,
        output_gap_weight: f64,
        inflation_weight: f64,
        money_velocity: f64,
        fiscal_multiplier: f64,
    ) -> Result<Self, ValidationError> {
        require_in_range("natural_rate", natural_rate, RATE_MIN, RATE_MAX)?;
        require_in_range("inflation_target", inflation_target, RATE_MIN, RATE_MAX)?;
        require_in_range("output_gap_weight", output_gap_weight, 0.0, WEIGHT_MAX)?;
        require_in_range("inflation_weight", inflation_weight, 0.0, WEIGHT_MAX)?;
        require_positive("money_velocity", money_velocity)?;
        require_in_range(
            "fiscal_multiplier",
            fiscal_multiplier,
            0.0,
            FISCAL_MULTIPLIER_MAX,
        )?;

        Ok(Self {
            natural_rate,
            inflation_target,
            output_gap_weight,
            inflation_weight,
            money_velocity,
            fiscal_multiplier,
        })
    }

    /// Nominal rate consistent with the model's steady state:
    /// `natural_rate + inflation_target`.
    ///
    /// At this rate, with output at potential and inflation on target, the
    /// simulator reproduces the same state every period.
    pub fn neutral_nominal_rate(&self) -> f64 {
        self.natural_rate + self.inflation_target
    }
}
