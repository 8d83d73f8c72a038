//! Network Risk - Exposure Graph Metrics
//!
//! Scores a weighted directed graph of interbank exposures:
//! - Concentration: normalized Herfindahl index of node exposure shares
//! - Centrality: weighted degree (primary) and an eigenvector-style
//!   iterative ranking (bounded power iteration, never unbounded)
//! - Hub flagging: nodes whose centrality exceeds a configurable multiple
//!   of the mean
//!
//! # Determinism
//!
//! Iteration is index-ordered and bounded; identical inputs produce
//! identical metrics. Permuting node labels permutes per-node outputs the
//! same way and leaves scalar metrics unchanged.

use crate::models::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::warn;

// ============================================================================
// RiskGraph - Exposure Matrix
// ============================================================================

/// Weighted directed exposure graph over `n` institutions.
///
/// `exposure(i, j)` is the notional at risk of institution `i` against
/// institution `j`. The diagonal is held at zero (no self-exposure).
/// Node identity is an opaque index owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskGraph {
    n: usize,
    /// Row-major n*n exposure matrix
    exposures: Vec<f64>,
}

impl RiskGraph {
    /// Create an empty graph over `n` institutions (all exposures zero).
    pub fn new(n: usize) -> Self {
        Self {
            n,
            exposures: vec![0.0; n * n],
        }
    }

    /// Build a graph from a square matrix.
    ///
    /// Diagonal entries are forced to zero. Rejects ragged rows and
    /// negative or non-finite exposures.
    pub fn from_matrix(matrix: &[Vec<f64>]) -> Result<Self, ValidationError> {
        let n = matrix.len();
        let mut graph = Self::new(n);

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(ValidationError::RaggedMatrix {
                    row: i,
                    expected: n,
                    found: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if i == j {
                    continue; // self-exposure is zero by convention
                }
                if !value.is_finite() || value < 0.0 {
                    return Err(ValidationError::InvalidExposure {
                        row: i,
                        col: j,
                        value,
                    });
                }
                graph.exposures[i * n + j] = value;
            }
        }

        Ok(graph)
    }

    /// Number of institutions.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Exposure of `i` to `j`.
    ///
    /// # Panics
    ///
    /// Panics when either index is out of bounds; use [`RiskGraph::node_count`]
    /// to stay inside the graph.
    pub fn exposure(&self, i: usize, j: usize) -> f64 {
        self.exposures[i * self.n + j]
    }

    /// Set the exposure of `i` to `j`.
    ///
    /// # Errors
    ///
    /// Rejects out-of-bounds node indices, negative or non-finite values,
    /// and self-exposure (`i == j`); the graph is left untouched on error.
    pub fn set_exposure(&mut self, i: usize, j: usize, value: f64) -> Result<(), ValidationError> {
        for index in [i, j] {
            if index >= self.n {
                return Err(ValidationError::NodeOutOfBounds {
                    index,
                    node_count: self.n,
                });
            }
        }
        if i == j || !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidExposure {
                row: i,
                col: j,
                value,
            });
        }
        self.exposures[i * self.n + j] = value;
        Ok(())
    }

    /// Sum of all exposures in the graph.
    pub fn total_exposure(&self) -> f64 {
        self.exposures.iter().sum()
    }

    /// Total outgoing exposure of node `i`.
    pub fn out_strength(&self, i: usize) -> f64 {
        self.exposures[i * self.n..(i + 1) * self.n].iter().sum()
    }

    /// Total incoming exposure of node `i`.
    pub fn in_strength(&self, i: usize) -> f64 {
        (0..self.n).map(|j| self.exposures[j * self.n + i]).sum()
    }
}

// ============================================================================
// Metrics
// ============================================================================

/// Scoring options for [`calculate_network_risk_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkOptions {
    /// A node is a hub when its centrality exceeds this multiple of the
    /// mean centrality
    pub hub_multiplier: f64,

    /// Iteration cap for the eigenvector power iteration
    pub max_iterations: usize,

    /// L1 convergence tolerance for the power iteration
    pub tolerance: f64,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            hub_multiplier: 2.0,
            max_iterations: 100,
            tolerance: 1e-9,
        }
    }
}

impl NetworkOptions {
    /// Validate the options: `hub_multiplier` and `tolerance` must be
    /// positive finite numbers, and at least one iteration is required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        crate::models::require_positive("hub_multiplier", self.hub_multiplier)?;
        crate::models::require_positive("tolerance", self.tolerance)?;
        if self.max_iterations == 0 {
            return Err(ValidationError::NonPositive {
                field: "max_iterations",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Per-graph network risk metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkMetrics {
    /// Number of institutions scored
    pub node_count: usize,

    /// Sum of all exposures
    pub total_exposure: f64,

    /// Normalized Herfindahl concentration in [0, 1]
    /// (1 = all exposure flows through a single node)
    pub concentration: f64,

    /// Weighted degree centrality per node; sums to 1 when the graph
    /// carries any exposure
    pub centrality: Vec<f64>,

    /// Eigenvector-style centrality per node (L1-normalized)
    pub eigenvector_centrality: Vec<f64>,

    /// Flagged hub nodes, ascending index order
    pub hubs: Vec<usize>,

    /// False when the eigenvector iteration hit its cap before reaching
    /// tolerance; the estimate is still the best available (never fatal)
    pub converged: bool,
}

impl NetworkMetrics {
    /// Metrics for an empty (0-node) graph.
    fn empty() -> Self {
        Self {
            node_count: 0,
            total_exposure: 0.0,
            concentration: 0.0,
            centrality: Vec::new(),
            eigenvector_centrality: Vec::new(),
            hubs: Vec::new(),
            converged: true,
        }
    }

    /// Fraction of nodes flagged as hubs (0 for empty graphs).
    pub fn hub_fraction(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.hubs.len() as f64 / self.node_count as f64
        }
    }
}

// ============================================================================
// Scorer
// ============================================================================

/// Score a graph with default [`NetworkOptions`].
pub fn calculate_network_risk(graph: &RiskGraph) -> NetworkMetrics {
    score(graph, &NetworkOptions::default())
}

/// Score a graph with explicit options.
///
/// An empty graph returns zeroed metrics; disconnected and asymmetric
/// graphs are valid and scored over the whole matrix.
///
/// # Errors
///
/// Rejects malformed options (non-positive multiplier or tolerance, zero
/// iteration cap) before scoring anything.
pub fn calculate_network_risk_with(
    graph: &RiskGraph,
    options: &NetworkOptions,
) -> Result<NetworkMetrics, ValidationError> {
    options.validate()?;
    Ok(score(graph, options))
}

fn score(graph: &RiskGraph, options: &NetworkOptions) -> NetworkMetrics {
    let n = graph.node_count();
    if n == 0 {
        return NetworkMetrics::empty();
    }

    let total = graph.total_exposure();
    let node_exposure: Vec<f64> = (0..n)
        .map(|i| graph.out_strength(i) + graph.in_strength(i))
        .collect();
    let node_total: f64 = node_exposure.iter().sum();

    // Concentration: Herfindahl over node exposure shares, rescaled so a
    // uniform graph scores 0 and a single dominant node scores 1.
    let concentration = if node_total > 0.0 {
        let hhi: f64 = node_exposure
            .iter()
            .map(|&e| {
                let share = e / node_total;
                share * share
            })
            .sum();
        if n > 1 {
            ((hhi - 1.0 / n as f64) / (1.0 - 1.0 / n as f64)).clamp(0.0, 1.0)
        } else {
            hhi
        }
    } else {
        0.0
    };

    // Weighted degree centrality, normalized by total graph exposure.
    // Each edge contributes to one node's out- and one node's in-strength,
    // so dividing by 2*total makes the vector sum to 1.
    let centrality: Vec<f64> = if total > 0.0 {
        node_exposure.iter().map(|&e| e / (2.0 * total)).collect()
    } else {
        vec![0.0; n]
    };

    let (eigenvector_centrality, converged) = eigenvector_centrality(graph, options);
    if !converged {
        warn!(
            node_count = n,
            max_iterations = options.max_iterations,
            "eigenvector centrality hit iteration cap before converging; returning best estimate"
        );
    }

    // Hub flagging against the mean degree centrality
    let mean = centrality.iter().sum::<f64>() / n as f64;
    let hubs: Vec<usize> = (0..n)
        .filter(|&i| centrality[i] > options.hub_multiplier * mean && mean > 0.0)
        .collect();

    NetworkMetrics {
        node_count: n,
        total_exposure: total,
        concentration,
        centrality,
        eigenvector_centrality,
        hubs,
        converged,
    }
}

/// Bounded power iteration on the symmetrized exposure matrix.
///
/// Iterates `v <- normalize((A + A^T) v + v)`; the identity shift keeps
/// bipartite-like exposure patterns (pure hub-and-spoke graphs) from
/// oscillating between two eigenvectors forever.
fn eigenvector_centrality(graph: &RiskGraph, options: &NetworkOptions) -> (Vec<f64>, bool) {
    let n = graph.node_count();
    let mut v = vec![1.0 / n as f64; n];

    for _ in 0..options.max_iterations {
        let mut next = vec![0.0; n];
        for (i, slot) in next.iter_mut().enumerate() {
            let mut acc = v[i]; // identity shift
            for j in 0..n {
                acc += (graph.exposure(i, j) + graph.exposure(j, i)) * v[j];
            }
            *slot = acc;
        }

        let norm: f64 = next.iter().map(|x| x.abs()).sum();
        if norm == 0.0 {
            // No exposure anywhere; the uniform vector is exact.
            return (v, true);
        }
        for x in next.iter_mut() {
            *x /= norm;
        }

        let delta: f64 = next
            .iter()
            .zip(v.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        v = next;
        if delta < options.tolerance {
            return (v, true);
        }
    }

    (v, false)
}
