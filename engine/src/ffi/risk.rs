//! PyO3 wrappers for the risk layer

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{
    network_metrics_to_py, parse_liquidity, parse_macro_state, parse_parameters, parse_weights,
    risk_result_to_py,
};
use crate::risk::network::{calculate_network_risk, RiskGraph};
use crate::risk::stress::{StressScenario, StressTester};
use crate::risk::systemic::assess_systemic_risk;

/// Score an exposure matrix (list of equal-length rows of non-negative
/// floats) and return the network metrics dict.
#[pyfunction]
#[pyo3(name = "calculate_network_risk")]
pub fn calculate_network_risk_py(py: Python, matrix: Vec<Vec<f64>>) -> PyResult<Py<PyDict>> {
    let graph = RiskGraph::from_matrix(&matrix).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let metrics = calculate_network_risk(&graph);
    network_metrics_to_py(py, &metrics)
}

/// Aggregate a composite systemic-risk score.
///
/// `network_metrics` must be the exposure matrix to score; `liquidity` and
/// `weights` are dicts with the documented field names.
#[pyfunction]
#[pyo3(name = "assess_systemic_risk")]
pub fn assess_systemic_risk_py(
    py: Python,
    matrix: Vec<Vec<f64>>,
    liquidity: &Bound<'_, PyDict>,
    operational_risk: f64,
    weights: &Bound<'_, PyDict>,
) -> PyResult<Py<PyDict>> {
    let graph = RiskGraph::from_matrix(&matrix).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let metrics = calculate_network_risk(&graph);
    let result = assess_systemic_risk(
        &metrics,
        &parse_liquidity(liquidity)?,
        operational_risk,
        &parse_weights(weights)?,
    )
    .map_err(|e| PyValueError::new_err(e.to_string()))?;
    risk_result_to_py(py, &result)
}

/// Run named stress scenarios (list of `{"name": str, "policy_shock": float}`
/// dicts) from one baseline and return a result dict per scenario.
#[pyfunction]
#[pyo3(name = "run_stress_test")]
pub fn run_stress_test_py(
    py: Python,
    baseline: &Bound<'_, PyDict>,
    params: &Bound<'_, PyDict>,
    matrix: Vec<Vec<f64>>,
    scenarios: &Bound<'_, PyList>,
    weights: &Bound<'_, PyDict>,
    operational_risk: f64,
) -> PyResult<Py<PyList>> {
    let baseline_state = parse_macro_state(baseline)?;
    let parsed_params = parse_parameters(params)?;
    let graph = RiskGraph::from_matrix(&matrix).map_err(|e| PyValueError::new_err(e.to_string()))?;

    let mut parsed_scenarios = Vec::with_capacity(scenarios.len());
    for item in scenarios.iter() {
        let dict = item.downcast::<PyDict>()?;
        let name: String = dict
            .get_item("name")?
            .ok_or_else(|| PyValueError::new_err("Missing required field 'name'"))?
            .extract()?;
        let shock: f64 = dict
            .get_item("policy_shock")?
            .ok_or_else(|| PyValueError::new_err("Missing required field 'policy_shock'"))?
            .extract()?;
        parsed_scenarios.push(StressScenario::new(name, shock));
    }

    let results = StressTester::new(parsed_params)
        .run_stress_test(
            &baseline_state,
            &graph,
            &parsed_scenarios,
            &parse_weights(weights)?,
            operational_risk,
        )
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let out = PyList::empty_bound(py);
    for result in &results {
        out.append(risk_result_to_py(py, result)?)?;
    }
    Ok(out.into())
}
