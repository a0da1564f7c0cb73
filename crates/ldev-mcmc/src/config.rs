//! Run configuration schema and validation.

use std::path::PathBuf;

use ldev_core::errors::ErrorInfo;
use ldev_core::LdevError;
use serde::{Deserialize, Serialize};

/// Full description of one sampling run: the graph ensemble, the output
/// directory and the action to perform on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSpec {
    /// Graph ensemble parameters.
    pub graph: GraphConfig,
    /// Directory receiving every data file of the run.
    pub output_directory: PathBuf,
    /// The sampling action to execute.
    pub action: ActionConfig,
}

impl RunSpec {
    /// Checks the cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), LdevError> {
        if self.graph.vertices == 0 {
            return Err(LdevError::Argument(ErrorInfo::new(
                "no-vertices",
                "the graph needs at least one vertex",
            )));
        }
        if let EnsembleConfig::Sbm { blocks, .. } = self.graph.ensemble {
            if blocks == 0 {
                return Err(LdevError::Argument(ErrorInfo::new(
                    "no-blocks",
                    "a stochastic block model needs at least one block",
                )));
            }
        }
        match &self.action {
            ActionConfig::SimpleSampling { .. } => Ok(()),
            ActionConfig::Metropolis { temperature, .. }
            | ActionConfig::Equilibration { temperature, .. } => {
                if *temperature == 0.0 {
                    Err(LdevError::Argument(ErrorInfo::new(
                        "zero-temperature",
                        "the Metropolis acceptance rule divides by the temperature",
                    )))
                } else {
                    Ok(())
                }
            }
            ActionConfig::WangLandau {
                lower,
                upper,
                sweeps_to_evaluate,
                final_factor,
                ..
            } => {
                if *lower < 1 || *upper < *lower || *upper > self.graph.vertices {
                    return Err(LdevError::Argument(
                        ErrorInfo::new(
                            "bad-window",
                            "the Wang-Landau window must satisfy 1 <= lower <= upper <= n",
                        )
                        .with_context("lower", lower.to_string())
                        .with_context("upper", upper.to_string())
                        .with_context("vertices", self.graph.vertices.to_string()),
                    ));
                }
                if *sweeps_to_evaluate == 0 {
                    return Err(LdevError::Argument(ErrorInfo::new(
                        "no-eval-interval",
                        "the histogram evaluation interval must be positive",
                    )));
                }
                if *final_factor <= 0.0 {
                    return Err(LdevError::Argument(
                        ErrorInfo::new(
                            "bad-final-factor",
                            "the final modification factor must be positive",
                        )
                        .with_context("final_factor", final_factor.to_string()),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Graph ensemble parameters shared by every action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether edges are directed.
    #[serde(default)]
    pub directed: bool,
    /// Whether self-loops may be inserted.
    #[serde(default)]
    pub loops_allowed: bool,
    /// Number of vertices `n`.
    pub vertices: usize,
    /// Master seed for the run's RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// The random-graph ensemble to sample from.
    pub ensemble: EnsembleConfig,
}

fn default_seed() -> u64 {
    1
}

/// Supported random-graph ensembles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EnsembleConfig {
    /// Erdős–Rényi `G(n, c/n)`.
    Er {
        /// Connectivity `c`; the edge probability is `c/n`.
        connectivity: f64,
    },
    /// Stochastic block model with a uniformly drawn labeling.
    Sbm {
        /// Connectivity between different blocks.
        inter_connectivity: f64,
        /// Connectivity within a block.
        intra_connectivity: f64,
        /// Number of blocks `B`.
        blocks: usize,
    },
}

/// The sampling actions offered by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ActionConfig {
    /// Draw independent graphs and histogram the observable.
    SimpleSampling {
        /// Number of graphs to draw.
        samples: usize,
    },
    /// Metropolis importance sampling at an artificial temperature.
    Metropolis {
        /// Artificial temperature `T != 0`.
        temperature: f64,
        /// Number of recorded sweeps.
        sweeps: usize,
        /// Number of silent sweeps before recording starts.
        equilibration_sweeps: usize,
    },
    /// Four-chain equilibration probe from the canonical start states.
    Equilibration {
        /// Artificial temperature `T != 0`.
        temperature: f64,
        /// Number of sweeps to trace.
        sweeps: usize,
    },
    /// Wang–Landau flat-histogram sampling over a value window.
    WangLandau {
        /// Smallest accepted observable value.
        lower: usize,
        /// Largest accepted observable value.
        upper: usize,
        /// Sweeps between histogram evaluations.
        sweeps_to_evaluate: usize,
        /// Terminal modification factor (log scale).
        final_factor: f64,
        /// Use the textbook `exp(g[x] - g[x'])` acceptance instead of the
        /// historical ratio form `exp(g[x] / g[x'])` this sampler was
        /// validated with.
        #[serde(default)]
        canonical_acceptance: bool,
    },
}
