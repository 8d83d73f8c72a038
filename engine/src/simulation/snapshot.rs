//! Trajectory Snapshot - Serialization and Determinism Digest
//!
//! Captures a full simulation trajectory together with a SHA-256 digest of
//! every numeric field's bit pattern. Two runs with identical inputs must
//! produce identical digests; a digest mismatch is the fastest way to spot
//! a reproducibility regression.

use crate::models::MacroState;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Serializable snapshot of a complete trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectorySnapshot {
    /// Number of simulated periods (states = periods + 1)
    pub periods: usize,

    /// Policy shock the trajectory was produced under
    pub policy_shock: f64,

    /// The full ordered state sequence
    pub states: Vec<MacroState>,

    /// Hex SHA-256 over the bit patterns of every field, in period order
    pub digest: String,
}

impl TrajectorySnapshot {
    /// Build a snapshot from a trajectory produced by the simulator.
    pub fn from_trajectory(states: &[MacroState], policy_shock: f64) -> Self {
        Self {
            periods: states.len().saturating_sub(1),
            policy_shock,
            states: states.to_vec(),
            digest: Self::digest_of(states),
        }
    }

    /// SHA-256 over the exact bit patterns of the trajectory.
    ///
    /// Uses `to_bits` rather than a decimal rendering so the digest
    /// distinguishes values that round-trip identically through formatting.
    pub fn digest_of(states: &[MacroState]) -> String {
        let mut hasher = Sha256::new();
        for state in states {
            for value in [
                state.interest_rate,
                state.inflation,
                state.output,
                state.potential_output,
                state.unemployment,
                state.cbdc_adoption,
                state.reserve_ratio,
                state.currency_ratio,
            ] {
                hasher.update(value.to_bits().to_le_bytes());
            }
        }
        let hash = hasher.finalize();
        hash.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Serialize to a JSON string (reporting layers consume this form).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON produced by [`TrajectorySnapshot::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
