//! MacroState - One-Period Economic Snapshot
//!
//! A `MacroState` captures the economy at a single period. An ordered
//! sequence of states (length `periods + 1`) forms a trajectory; period 0
//! is always the caller-supplied initial conditions.
//!
//! # Critical Invariants
//!
//! 1. `cbdc_adoption`, `reserve_ratio`, `currency_ratio` ∈ [0, 1]
//! 2. `unemployment` ∈ [0, 1]
//! 3. `output` and `potential_output` strictly positive
//! 4. All fields finite
//!
//! The simulator validates the initial state before producing anything and
//! keeps the invariants for every derived state, so a trajectory is either
//! complete and invariant-respecting or never produced at all.
//!
//! Field names are part of the external contract (reporting layers key on
//! them); do not rename without versioning the FFI surface.

use crate::models::{require_finite, require_in_range, require_positive, ValidationError};
use serde::{Deserialize, Serialize};

/// Snapshot of the economy at one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroState {
    /// Nominal policy interest rate (annualized fraction, e.g. 0.02 = 2%)
    pub interest_rate: f64,

    /// Inflation rate (annualized fraction)
    pub inflation: f64,

    /// Real output (index units, strictly positive)
    pub output: f64,

    /// Potential (full-capacity) output, strictly positive
    pub potential_output: f64,

    /// Unemployment rate, fraction in [0, 1]
    pub unemployment: f64,

    /// CBDC adoption, fraction of transactional money in [0, 1]
    pub cbdc_adoption: f64,

    /// Reserve requirement ratio, fraction in [0, 1]
    pub reserve_ratio: f64,

    /// Currency-to-deposit ratio, fraction in [0, 1]
    pub currency_ratio: f64,
}

impl MacroState {
    /// Validate every structural invariant.
    ///
    /// Called by the simulator on initial conditions before any period is
    /// computed (fail fast, no partial trajectory).
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_finite("interest_rate", self.interest_rate)?;
        require_finite("inflation", self.inflation)?;
        require_positive("output", self.output)?;
        require_positive("potential_output", self.potential_output)?;
        require_in_range("unemployment", self.unemployment, 0.0, 1.0)?;
        require_in_range("cbdc_adoption", self.cbdc_adoption, 0.0, 1.0)?;
        require_in_range("reserve_ratio", self.reserve_ratio, 0.0, 1.0)?;
        require_in_range("currency_ratio", self.currency_ratio, 0.0, 1.0)?;
        Ok(())
    }

    /// Output gap: `(output - potential) / potential`.
    ///
    /// Positive when the economy runs above capacity.
    pub fn output_gap(&self) -> f64 {
        (self.output - self.potential_output) / self.potential_output
    }

    /// Liquidity proxy used downstream by the systemic risk aggregator:
    /// `reserve_ratio * currency_ratio * money_velocity`.
    pub fn liquidity_proxy(&self, money_velocity: f64) -> f64 {
        self.reserve_ratio * self.currency_ratio * money_velocity
    }
}
