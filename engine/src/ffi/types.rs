//! Type conversion utilities for the FFI boundary
//!
//! Converts between core types and Python dicts/lists.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::models::MacroState;
use crate::params::EconomicParameters;
use crate::risk::network::NetworkMetrics;
use crate::risk::systemic::{LiquidityMetrics, RiskWeights, SystemicRiskResult};

/// Extract a required float field with a clear error message.
fn required_f64(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<f64> {
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Parse a MacroState from a Python dict.
pub fn parse_macro_state(dict: &Bound<'_, PyDict>) -> PyResult<MacroState> {
    Ok(MacroState {
        interest_rate: required_f64(dict, "interest_rate")?,
        inflation: required_f64(dict, "inflation")?,
        output: required_f64(dict, "output")?,
        potential_output: required_f64(dict, "potential_output")?,
        unemployment: required_f64(dict, "unemployment")?,
        cbdc_adoption: required_f64(dict, "cbdc_adoption")?,
        reserve_ratio: required_f64(dict, "reserve_ratio")?,
        currency_ratio: required_f64(dict, "currency_ratio")?,
    })
}

/// Parse validated EconomicParameters from a Python dict.
pub fn parse_parameters(dict: &Bound<'_, PyDict>) -> PyResult<EconomicParameters> {
    EconomicParameters::new(
        required_f64(dict, "natural_rate")?,
        required_f64(dict, "inflation_target")?,
        required_f64(dict, "output_gap_weight")?,
        required_f64(dict, "inflation_weight")?,
        required_f64(dict, "money_velocity")?,
        required_f64(dict, "fiscal_multiplier")?,
    )
    .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Parse aggregation weights from a Python dict.
pub fn parse_weights(dict: &Bound<'_, PyDict>) -> PyResult<RiskWeights> {
    Ok(RiskWeights {
        network: required_f64(dict, "network")?,
        liquidity: required_f64(dict, "liquidity")?,
        operational: required_f64(dict, "operational")?,
    })
}

/// Parse validated liquidity metrics from a Python dict.
pub fn parse_liquidity(dict: &Bound<'_, PyDict>) -> PyResult<LiquidityMetrics> {
    LiquidityMetrics::new(
        required_f64(dict, "liquid_assets")?,
        required_f64(dict, "short_term_obligations")?,
        required_f64(dict, "multiplier_capacity")?,
    )
    .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Render a MacroState as a Python dict.
pub fn macro_state_to_py(py: Python, state: &MacroState) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("interest_rate", state.interest_rate)?;
    dict.set_item("inflation", state.inflation)?;
    dict.set_item("output", state.output)?;
    dict.set_item("potential_output", state.potential_output)?;
    dict.set_item("unemployment", state.unemployment)?;
    dict.set_item("cbdc_adoption", state.cbdc_adoption)?;
    dict.set_item("reserve_ratio", state.reserve_ratio)?;
    dict.set_item("currency_ratio", state.currency_ratio)?;
    Ok(dict.into())
}

/// Render network metrics as a Python dict.
pub fn network_metrics_to_py(py: Python, metrics: &NetworkMetrics) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("node_count", metrics.node_count)?;
    dict.set_item("total_exposure", metrics.total_exposure)?;
    dict.set_item("concentration", metrics.concentration)?;
    dict.set_item("centrality", PyList::new_bound(py, &metrics.centrality))?;
    dict.set_item(
        "eigenvector_centrality",
        PyList::new_bound(py, &metrics.eigenvector_centrality),
    )?;
    dict.set_item("hubs", PyList::new_bound(py, &metrics.hubs))?;
    dict.set_item("converged", metrics.converged)?;
    Ok(dict.into())
}

/// Render a systemic-risk result as a Python dict.
pub fn risk_result_to_py(py: Python, result: &SystemicRiskResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("composite", result.composite)?;
    let breakdown = PyDict::new_bound(py);
    breakdown.set_item("network", result.breakdown.network)?;
    breakdown.set_item("liquidity", result.breakdown.liquidity)?;
    breakdown.set_item("operational", result.breakdown.operational)?;
    dict.set_item("breakdown", breakdown)?;
    dict.set_item("scenario", result.scenario.clone())?;
    dict.set_item("clamped", result.clamped)?;
    Ok(dict.into())
}
