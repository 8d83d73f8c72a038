//! Tests for the multi-period economic simulator
//!
//! Covers trajectory shape, determinism, ratio invariants, steady-state
//! idempotence, the reference policy-shock scenario, and the configurable
//! shock-mode / rate-floor behavior.

use cbdcdai_core_rs::{
    EconomicParameters, EconomicSimulator, MacroState, ShockMode, SimulationOptions,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn reference_params() -> EconomicParameters {
    EconomicParameters::new(0.02, 0.02, 0.5, 1.5, 1.5, 1.0).unwrap()
}

fn reference_initial() -> MacroState {
    MacroState {
        interest_rate: 0.02,
        inflation: 0.02,
        output: 1000.0,
        potential_output: 1000.0,
        unemployment: 0.05,
        cbdc_adoption: 0.1,
        reserve_ratio: 0.1,
        currency_ratio: 0.2,
    }
}

/// Initial conditions at the model's steady state: output at potential,
/// inflation on target, nominal rate at natural + target.
fn steady_initial(params: &EconomicParameters) -> MacroState {
    MacroState {
        interest_rate: params.neutral_nominal_rate(),
        inflation: params.inflation_target,
        output: 1000.0,
        potential_output: 1000.0,
        unemployment: 0.05,
        cbdc_adoption: 0.1,
        reserve_ratio: 0.1,
        currency_ratio: 0.2,
    }
}

// ============================================================================
// Trajectory Shape
// ============================================================================

#[test]
fn test_trajectory_length_is_periods_plus_one() {
    let simulator = EconomicSimulator::new(reference_params());
    let initial = reference_initial();

    for periods in [0, 1, 5, 12, 50] {
        let trajectory = simulator.simulate(&initial, 0.01, periods).unwrap();
        assert_eq!(trajectory.len(), periods + 1);
    }
}

#[test]
fn test_zero_periods_returns_initial_only() {
    let simulator = EconomicSimulator::new(reference_params());
    let initial = reference_initial();
    let trajectory = simulator.simulate(&initial, 0.05, 0).unwrap();
    assert_eq!(trajectory, vec![initial]);
}

#[test]
fn test_invalid_initial_rejected_before_simulation() {
    let simulator = EconomicSimulator::new(reference_params());
    let mut initial = reference_initial();
    initial.reserve_ratio = 1.4;
    assert!(simulator.simulate(&initial, 0.01, 12).is_err());
}

#[test]
fn test_non_finite_shock_rejected() {
    let simulator = EconomicSimulator::new(reference_params());
    assert!(simulator
        .simulate(&reference_initial(), f64::NAN, 12)
        .is_err());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_repeated_calls_bit_identical() {
    let simulator = EconomicSimulator::new(reference_params());
    let initial = reference_initial();

    let first = simulator.simulate(&initial, 0.01, 24).unwrap();
    let second = simulator.simulate(&initial, 0.01, 24).unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.interest_rate.to_bits(), b.interest_rate.to_bits());
        assert_eq!(a.inflation.to_bits(), b.inflation.to_bits());
        assert_eq!(a.output.to_bits(), b.output.to_bits());
        assert_eq!(a.cbdc_adoption.to_bits(), b.cbdc_adoption.to_bits());
    }
}

#[test]
fn test_caller_state_not_mutated() {
    let simulator = EconomicSimulator::new(reference_params());
    let initial = reference_initial();
    let copy = initial;
    simulator.simulate(&initial, 0.1, 12).unwrap();
    assert_eq!(initial, copy);
}

// ============================================================================
// Invariants Along Trajectories
// ============================================================================

#[test]
fn test_ratios_stay_in_unit_interval_under_large_shock() {
    let simulator = EconomicSimulator::new(reference_params());
    let trajectory = simulator.simulate(&reference_initial(), 0.5, 50).unwrap();

    for (period, state) in trajectory.iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(&state.cbdc_adoption),
            "adoption out of range at period {}",
            period
        );
        assert!((0.0..=1.0).contains(&state.reserve_ratio));
        assert!((0.0..=1.0).contains(&state.currency_ratio));
        assert!((0.0..=1.0).contains(&state.unemployment));
        assert!(state.output > 0.0, "output not positive at period {}", period);
    }
}

#[test]
fn test_steady_state_is_fixed_point() {
    let params = reference_params();
    let simulator = EconomicSimulator::new(params);
    let initial = steady_initial(&params);

    let trajectory = simulator.simulate(&initial, 0.0, 20).unwrap();
    for (period, state) in trajectory.iter().enumerate() {
        assert!(
            (state.interest_rate - initial.interest_rate).abs() < 1e-12,
            "rate drifted at period {}",
            period
        );
        assert!((state.inflation - initial.inflation).abs() < 1e-12);
        assert!((state.output - initial.output).abs() < 1e-9);
        assert!((state.cbdc_adoption - initial.cbdc_adoption).abs() < 1e-12);
        assert!((state.unemployment - initial.unemployment).abs() < 1e-12);
    }
}

#[test]
fn test_zero_shock_still_evolves_off_steady_state() {
    // Initial rate sits below neutral, so endogenous dynamics must move
    // output even with no policy shock.
    let simulator = EconomicSimulator::new(reference_params());
    let trajectory = simulator.simulate(&reference_initial(), 0.0, 3).unwrap();
    assert!((trajectory[1].output - trajectory[0].output).abs() > 1.0);
}

// ============================================================================
// Reference Scenario (positive shock, 12 periods)
// ============================================================================

#[test]
fn test_reference_scenario_shape() {
    let simulator = EconomicSimulator::new(reference_params());
    let trajectory = simulator.simulate(&reference_initial(), 0.01, 12).unwrap();

    assert_eq!(trajectory.len(), 13);

    // Positive shock pushes the policy-rule rate above the initial 2%
    assert!(
        trajectory[1].interest_rate > 0.02,
        "period-1 rate {} should exceed the initial rate",
        trajectory[1].interest_rate
    );
    assert!((trajectory[1].interest_rate - 0.04).abs() < 1e-9);

    // Rates stay inside a stable band around the neutral rate...
    for state in &trajectory[1..] {
        assert!(
            state.interest_rate > 0.03 && state.interest_rate < 0.055,
            "rate {} left the stable band",
            state.interest_rate
        );
    }

    // ...and the oscillation is damped: late amplitude < early amplitude.
    let amplitude = |window: &[MacroState]| {
        let rates: Vec<f64> = window.iter().map(|s| s.interest_rate).collect();
        rates.iter().cloned().fold(f64::MIN, f64::max)
            - rates.iter().cloned().fold(f64::MAX, f64::min)
    };
    assert!(
        amplitude(&trajectory[9..13]) < amplitude(&trajectory[1..5]),
        "rate oscillation should be damped over time"
    );
}

#[test]
fn test_positive_shock_raises_adoption_monotonically() {
    let simulator = EconomicSimulator::new(reference_params());
    let trajectory = simulator.simulate(&reference_initial(), 0.01, 12).unwrap();

    for pair in trajectory.windows(2) {
        assert!(
            pair[1].cbdc_adoption >= pair[0].cbdc_adoption,
            "adoption decreased between periods"
        );
    }
    assert!(trajectory[12].cbdc_adoption > trajectory[0].cbdc_adoption);
}

#[test]
fn test_adoption_growth_shifts_currency_and_reserves() {
    let simulator = EconomicSimulator::new(reference_params());
    let trajectory = simulator.simulate(&reference_initial(), 0.01, 12).unwrap();

    // Currency substitutes away as adoption grows; reserves build up.
    assert!(trajectory[12].currency_ratio < trajectory[0].currency_ratio);
    assert!(trajectory[12].reserve_ratio > trajectory[0].reserve_ratio);
}

// ============================================================================
// Options: Shock Mode and Rate Floor
// ============================================================================

#[test]
fn test_impulse_and_sustained_shocks_diverge() {
    let simulator = EconomicSimulator::new(reference_params());
    let initial = reference_initial();

    let impulse = simulator.simulate(&initial, 0.01, 12).unwrap();
    let sustained = simulator
        .simulate_with(
            &initial,
            0.01,
            12,
            &SimulationOptions {
                shock_mode: ShockMode::Sustained,
                rate_floor: Some(0.0),
            },
        )
        .unwrap();

    // Identical through period 1 (same first impulse), different after
    assert_eq!(impulse[1], sustained[1]);
    assert_ne!(impulse[2].output, sustained[2].output);
}

#[test]
fn test_default_zero_floor_blocks_negative_rates() {
    let simulator = EconomicSimulator::new(reference_params());
    let trajectory = simulator.simulate(&reference_initial(), -0.5, 12).unwrap();

    let min_rate = trajectory
        .iter()
        .map(|s| s.interest_rate)
        .fold(f64::MAX, f64::min);
    assert_eq!(min_rate, 0.0, "zero floor should bind under a deep cut");
}

#[test]
fn test_disabled_floor_allows_negative_rates() {
    let simulator = EconomicSimulator::new(reference_params());
    let trajectory = simulator
        .simulate_with(
            &reference_initial(),
            -0.5,
            12,
            &SimulationOptions {
                shock_mode: ShockMode::Impulse,
                rate_floor: None,
            },
        )
        .unwrap();

    assert!(
        trajectory.iter().any(|s| s.interest_rate < 0.0),
        "disabling the floor should admit negative nominal rates"
    );
}
