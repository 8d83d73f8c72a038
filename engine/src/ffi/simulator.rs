//! PyO3 wrapper for the economic simulator
//!
//! # Example (from Python)
//!
//! ```python
//! from cbdcdai._core import Simulator
//!
//! sim = Simulator.new({
//!     "natural_rate": 0.02,
//!     "inflation_target": 0.02,
//!     "output_gap_weight": 0.5,
//!     "inflation_weight": 1.5,
//!     "money_velocity": 1.5,
//!     "fiscal_multiplier": 1.0,
//! })
//! trajectory = sim.simulate(initial_conditions, policy_shock=0.01, periods=12)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{macro_state_to_py, parse_macro_state, parse_parameters};
use crate::simulation::{EconomicSimulator, ShockMode, SimulationOptions};

/// Python wrapper for the Rust [`EconomicSimulator`].
#[pyclass(name = "Simulator")]
pub struct PySimulator {
    inner: EconomicSimulator,
}

#[pymethods]
impl PySimulator {
    /// Create a simulator from a parameter dict.
    ///
    /// Raises `ValueError` on missing fields or out-of-range parameters.
    #[staticmethod]
    fn new(params: &Bound<'_, PyDict>) -> PyResult<Self> {
        let parsed = parse_parameters(params)?;
        Ok(PySimulator {
            inner: EconomicSimulator::new(parsed),
        })
    }

    /// Run a simulation and return the trajectory as a list of dicts
    /// (`periods + 1` entries, entry 0 is the initial state).
    ///
    /// `sustained_shock` re-applies the shock every period instead of the
    /// default one-time impulse; `rate_floor=None` allows negative rates.
    #[pyo3(signature = (initial, policy_shock, periods, sustained_shock = false, rate_floor = Some(0.0)))]
    fn simulate(
        &self,
        py: Python,
        initial: &Bound<'_, PyDict>,
        policy_shock: f64,
        periods: usize,
        sustained_shock: bool,
        rate_floor: Option<f64>,
    ) -> PyResult<Py<PyList>> {
        let state = parse_macro_state(initial)?;
        let options = SimulationOptions {
            shock_mode: if sustained_shock {
                ShockMode::Sustained
            } else {
                ShockMode::Impulse
            },
            rate_floor,
        };

        let trajectory = self
            .inner
            .simulate_with(&state, policy_shock, periods, &options)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let out = PyList::empty_bound(py);
        for period_state in &trajectory {
            out.append(macro_state_to_py(py, period_state)?)?;
        }
        Ok(out.into())
    }
}
