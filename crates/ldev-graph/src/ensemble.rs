//! Ensemble policies deciding which candidate edges enter the graph.

use ldev_core::errors::ErrorInfo;
use ldev_core::{LdevError, RngHandle};

/// Decides whether a proposed edge belongs to the random-graph ensemble.
///
/// A policy is a pure function of the endpoints and its own constants; it
/// never mutates anything beyond the RNG it is handed. This is the single
/// seam separating the graph mechanics from the ensemble being sampled.
pub trait EnsemblePolicy {
    /// Returns true when the proposed edge `(head, tail)` should be inserted.
    fn should_insert(&self, head: usize, tail: usize, rng: &mut RngHandle) -> bool;
}

/// Erdős–Rényi ensemble: every edge is present independently with `p = c/n`.
#[derive(Debug, Clone)]
pub struct ErPolicy {
    connectivity: f64,
    probability: f64,
}

impl ErPolicy {
    /// Creates a policy for `G(n, c/n)`.
    pub fn new(connectivity: f64, n: usize) -> Self {
        Self {
            connectivity,
            probability: connectivity / n as f64,
        }
    }

    /// The connectivity `c` this policy was built with.
    pub fn connectivity(&self) -> f64 {
        self.connectivity
    }
}

impl EnsemblePolicy for ErPolicy {
    fn should_insert(&self, _head: usize, _tail: usize, rng: &mut RngHandle) -> bool {
        rng.uniform() <= self.probability
    }
}

/// Stochastic block model: intra-block edges with `c_intra/n`, inter-block
/// edges with `c_inter/n`, over a block labeling drawn uniformly once at
/// construction.
#[derive(Debug, Clone)]
pub struct SbmPolicy {
    inter_probability: f64,
    intra_probability: f64,
    labeling: Vec<usize>,
    block_sizes: Vec<usize>,
}

impl SbmPolicy {
    /// Creates a policy over `blocks` blocks, drawing each vertex's block
    /// independently and uniformly from the provided RNG.
    pub fn new(
        inter_connectivity: f64,
        intra_connectivity: f64,
        blocks: usize,
        n: usize,
        rng: &mut RngHandle,
    ) -> Result<Self, LdevError> {
        if blocks == 0 {
            return Err(LdevError::Argument(ErrorInfo::new(
                "no-blocks",
                "a stochastic block model needs at least one block",
            )));
        }
        let mut labeling = Vec::with_capacity(n);
        let mut block_sizes = vec![0usize; blocks];
        for _ in 0..n {
            let block = ((blocks as f64 * rng.uniform()) as usize).min(blocks - 1);
            labeling.push(block);
            block_sizes[block] += 1;
        }
        Ok(Self {
            inter_probability: inter_connectivity / n as f64,
            intra_probability: intra_connectivity / n as f64,
            labeling,
            block_sizes,
        })
    }

    /// The block labeling drawn at construction.
    pub fn labeling(&self) -> &[usize] {
        &self.labeling
    }

    /// Number of vertices assigned to each block.
    pub fn block_sizes(&self) -> &[usize] {
        &self.block_sizes
    }
}

impl EnsemblePolicy for SbmPolicy {
    fn should_insert(&self, head: usize, tail: usize, rng: &mut RngHandle) -> bool {
        if self.labeling[head] == self.labeling[tail] {
            rng.uniform() <= self.intra_probability
        } else {
            rng.uniform() <= self.inter_probability
        }
    }
}
