//! EconomicSimulator - Period-by-Period Macro Dynamics
//!
//! Advances a [`MacroState`] under a policy shock, one period at a time:
//!
//! ```text
//! For each period t -> t+1:
//! 1. Output gap from current output vs potential
//! 2. IS-curve output response (real-rate deviation + policy shock)
//! 3. Phillips-curve inflation update (floored against deep deflation)
//! 4. Taylor-rule policy-rate response (configurable zero floor)
//! 5. CBDC adoption (logistic pull from the rate spread, monotone)
//! 6. Money-multiplier identity (currency/reserve shift with adoption)
//! 7. Okun's-law unemployment response
//! ```
//!
//! The update order is fixed and every step is pure arithmetic on the
//! previous state, so a trajectory is bit-reproducible for identical
//! inputs. The engine holds no mutable state between calls and never
//! retains references to caller data.
//!
//! # Policy shock semantics
//!
//! By default the shock is a one-time impulse applied only in the first
//! period (`t = 0`). A sustained shock that is re-applied every period is
//! available via [`ShockMode::Sustained`]; the two produce materially
//! different trajectory shapes.

use crate::models::{MacroState, ValidationError};
use crate::params::EconomicParameters;
use serde::{Deserialize, Serialize};

// ============================================================================
// Calibration Constants
// ============================================================================

/// Fraction of the output gap carried into the next period (IS persistence).
const GAP_PERSISTENCE: f64 = 0.5;

/// Output never falls below this fraction of potential (keeps output > 0).
const MIN_OUTPUT_FRACTION: f64 = 0.01;

/// Phillips-curve slope per unit of `inflation_weight`.
const PHILLIPS_CALIBRATION: f64 = 0.1;

/// Deflation floor: inflation is never simulated below -10%.
const DEFLATION_FLOOR: f64 = -0.10;

/// Steepness of the adoption-attractiveness logistic.
const ADOPTION_STEEPNESS: f64 = 10.0;

/// Per-period adoption diffusion speed.
const ADOPTION_SPEED: f64 = 0.5;

/// Currency-to-deposit substitution per unit of adoption growth.
const CASH_SUBSTITUTION: f64 = 0.5;

/// Precautionary reserve buildup per unit of adoption growth.
const RESERVE_BUFFERING: f64 = 0.25;

/// Okun's-law coefficient (unemployment response to the output gap).
const OKUN_COEFFICIENT: f64 = 0.4;

/// Cap on the money multiplier when reserve + currency + adoption is tiny.
const MAX_MONEY_MULTIPLIER: f64 = 100.0;

/// Default horizon for stress-test simulations (periods).
pub const STRESS_HORIZON: usize = 12;

// ============================================================================
// Options
// ============================================================================

/// How the policy shock enters the IS curve over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShockMode {
    /// One-time impulse applied only at period 0 (default)
    Impulse,

    /// Shock re-applied every period
    Sustained,
}

/// Per-run simulation options.
///
/// Both fields correspond to deliberate policy choices rather than model
/// structure, so they are configuration instead of constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationOptions {
    /// Shock application mode
    pub shock_mode: ShockMode,

    /// Floor on the nominal policy rate. `Some(0.0)` models a
    /// non-negative-rate regime; `None` allows negative rates (some CBDC
    /// designs remunerate below zero).
    pub rate_floor: Option<f64>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            shock_mode: ShockMode::Impulse,
            rate_floor: Some(0.0),
        }
    }
}

// ============================================================================
// Simulator
// ============================================================================

/// Multi-period macro simulation engine.
///
/// # Example
///
/// ```
/// use cbdcdai_core_rs::{EconomicParameters, EconomicSimulator, MacroState};
///
/// let params = EconomicParameters::new(0.02, 0.02, 0.5, 1.5, 1.5, 1.0).unwrap();
/// let initial = MacroState {
///     interest_rate: 0.02,
///     inflation: 0.02,
///     output: 1000.0,
///     potential_output: 1000.0,
///     unemployment: 0.05,
///     cbdc_adoption: 0.1,
///     reserve_ratio: 0.1,
///     currency_ratio: 0.2,
/// };
///
/// let simulator = EconomicSimulator::new(params);
/// let trajectory = simulator.simulate(&initial, 0.01, 12).unwrap();
/// assert_eq!(trajectory.len(), 13);
/// ```
#[derive(Debug, Clone)]
pub struct EconomicSimulator {
    params: EconomicParameters,
}

impl EconomicSimulator {
    /// Create a simulator over a validated parameter set.
    pub fn new(params: EconomicParameters) -> Self {
        Self { params }
    }

    /// Parameter set this simulator runs under.
    pub fn params(&self) -> &EconomicParameters {
        &self.params
    }

    /// Simulate `periods` steps from `initial` with default options
    /// (impulse shock, zero rate floor).
    ///
    /// Returns `periods + 1` states; index 0 is a copy of `initial`.
    /// `periods = 0` yields just the initial state.
    ///
    /// # Errors
    ///
    /// Fails with a [`ValidationError`] before any period is computed when
    /// `initial` violates its invariants or `policy_shock` is not finite.
    pub fn simulate(
        &self,
        initial: &MacroState,
        policy_shock: f64,
        periods: usize,
    ) -> Result<Vec<MacroState>, ValidationError> {
        self.simulate_with(initial, policy_shock, periods, &SimulationOptions::default())
    }

    /// Simulate with explicit [`SimulationOptions`].
    pub fn simulate_with(
        &self,
        initial: &MacroState,
        policy_shock: f64,
        periods: usize,
        options: &SimulationOptions,
    ) -> Result<Vec<MacroState>, ValidationError> {
        initial.validate()?;
        crate::models::require_finite("policy_shock", policy_shock)?;
        if let Some(floor) = options.rate_floor {
            crate::models::require_finite("rate_floor", floor)?;
        }

        let mut trajectory = Vec::with_capacity(periods + 1);
        trajectory.push(*initial);

        let mut current = *initial;
        for t in 0..periods {
            let shock = match options.shock_mode {
                ShockMode::Impulse if t == 0 => policy_shock,
                ShockMode::Impulse => 0.0,
                ShockMode::Sustained => policy_shock,
            };
            current = self.step(&current, shock, options);
            trajectory.push(current);
        }

        Ok(trajectory)
    }

    /// One period update. `shock` is the IS-curve impulse for this period.
    fn step(&self, state: &MacroState, shock: f64, options: &SimulationOptions) -> MacroState {
        let p = &self.params;
        let potential = state.potential_output;

        // 1. Output gap
        let gap = state.output_gap();

        // 2. IS curve: demand responds to the real-rate deviation from the
        //    natural rate plus the policy impulse, with geometric gap decay.
        let real_rate_gap = (state.interest_rate - state.inflation) - p.natural_rate;
        let demand = GAP_PERSISTENCE * gap - p.fiscal_multiplier * (real_rate_gap + shock);
        let output = (potential * (1.0 + demand)).max(potential * MIN_OUTPUT_FRACTION);

        // 3. Phillips curve, floored against runaway deflation
        let inflation =
            (state.inflation + PHILLIPS_CALIBRATION * p.inflation_weight * gap).max(DEFLATION_FLOOR);

        // 4. Taylor rule on the gap observed this period
        let mut interest_rate = p.natural_rate
            + inflation
            + p.output_gap_weight * gap
            + p.inflation_weight * (inflation - p.inflation_target);
        if let Some(floor) = options.rate_floor {
            interest_rate = interest_rate.max(floor);
        }

        // 5. CBDC adoption: logistic diffusion pulled by the spread of the
        //    policy rate over its neutral level. The pull is floored at
        //    zero, so adoption already made never reverses with time.
        let spread = interest_rate - p.neutral_nominal_rate();
        let pull = (2.0 * (logistic(p.money_velocity * ADOPTION_STEEPNESS * spread) - 0.5)).max(0.0);
        let cbdc_adoption = clamp01(
            state.cbdc_adoption
                + ADOPTION_SPEED * state.cbdc_adoption * (1.0 - state.cbdc_adoption) * pull,
        );

        // 6. Multiplier identity: adoption growth substitutes for physical
        //    currency and nudges banks toward larger reserve cover.
        let adoption_growth = cbdc_adoption - state.cbdc_adoption;
        let currency_ratio = clamp01(state.currency_ratio - CASH_SUBSTITUTION * adoption_growth);
        let reserve_ratio = clamp01(state.reserve_ratio + RESERVE_BUFFERING * adoption_growth);

        // 7. Okun's law
        let unemployment = clamp01(state.unemployment - OKUN_COEFFICIENT * gap);

        MacroState {
            interest_rate,
            inflation,
            output,
            potential_output: potential,
            unemployment,
            cbdc_adoption,
            reserve_ratio,
            currency_ratio,
        }
    }

    /// Money multiplier implied by a state: `1 / (r + c + cbdc)`, capped
    /// when the denominator approaches zero.
    pub fn money_multiplier(state: &MacroState) -> f64 {
        let denominator = state.reserve_ratio + state.currency_ratio + state.cbdc_adoption;
        if denominator <= 1.0 / MAX_MONEY_MULTIPLIER {
            MAX_MONEY_MULTIPLIER
        } else {
            1.0 / denominator
        }
    }
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}
