//! Dense graph state with reversible single-vertex re-randomization moves.

use ldev_core::errors::ErrorInfo;
use ldev_core::{LdevError, RngHandle};

use crate::components::{self, ComponentStats};
use crate::ensemble::EnsemblePolicy;
use crate::rollback::MoveUndo;

/// A simple graph on `n` fixed vertices backed by a dense adjacency matrix.
///
/// Undirected graphs are stored canonically in the strict lower triangle:
/// `A[i][j]` may be true only for `i > j`, plus diagonal entries when loops
/// are allowed. This removes double counting and defines edge identity for
/// the rollback record. Directed graphs use the full matrix.
///
/// Component statistics are cached and invalidated on every mutation; the
/// accessors recompute lazily.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphState {
    n: usize,
    directed: bool,
    loops_allowed: bool,
    adjacency: Vec<bool>,
    edge_count: usize,
    components: Option<ComponentStats>,
}

impl GraphState {
    /// Creates an empty graph on `n` vertices.
    pub fn new(n: usize, directed: bool, loops_allowed: bool) -> Result<Self, LdevError> {
        if n == 0 {
            return Err(LdevError::Graph(ErrorInfo::new(
                "empty-graph",
                "a graph state needs at least one vertex",
            )));
        }
        Ok(Self {
            n,
            directed,
            loops_allowed,
            adjacency: vec![false; n * n],
            edge_count: 0,
            components: None,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of edges under the canonical storage convention.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether self-loops may be inserted.
    pub fn loops_allowed(&self) -> bool {
        self.loops_allowed
    }

    /// Raw adjacency matrix entry `(row, col)`.
    pub fn has_edge(&self, row: usize, col: usize) -> bool {
        self.adjacency[row * self.n + col]
    }

    /// Size of the largest component, recomputing the cache when stale.
    pub fn largest_component_size(&mut self) -> usize {
        self.component_stats().largest
    }

    /// Number of components, recomputing the cache when stale.
    pub fn component_count(&mut self) -> usize {
        self.component_stats().count
    }

    fn component_stats(&mut self) -> ComponentStats {
        if let Some(stats) = self.components {
            return stats;
        }
        let stats = components::analyze(self);
        self.components = Some(stats);
        stats
    }

    /// Clears every edge and invalidates the caches.
    pub fn reset(&mut self) {
        self.adjacency.fill(false);
        self.edge_count = 0;
        self.components = None;
    }

    /// Connects every pair of distinct vertices; loops are never included.
    pub fn generate_complete(&mut self) {
        self.edge_count = 0;
        if self.directed {
            for i in 0..self.n {
                for j in 0..self.n {
                    self.set(i, j, i != j);
                    if i != j {
                        self.edge_count += 1;
                    }
                }
            }
        } else {
            for i in 0..self.n {
                for j in (i + 1)..self.n {
                    self.set(j, i, true);
                    self.edge_count += 1;
                }
            }
        }
        self.components = Some(ComponentStats {
            largest: self.n,
            count: 1,
        });
    }

    /// Aligns all vertices on one line: edges `(i+1, i)` for `i < n-1`.
    ///
    /// The edges land in the lower triangle either way, so no directedness
    /// split is needed.
    pub fn generate_line(&mut self) {
        if self.edge_count != 0 {
            self.reset();
        }
        for i in 0..self.n.saturating_sub(1) {
            self.set(i + 1, i, true);
        }
        self.edge_count = self.n - 1;
        self.components = Some(ComponentStats {
            largest: self.n,
            count: 1,
        });
    }

    /// Redraws the whole graph from the ensemble: every feasible pair is
    /// offered to the policy once.
    pub fn generate_random(&mut self, policy: &dyn EnsemblePolicy, rng: &mut RngHandle) {
        if self.edge_count != 0 {
            self.reset();
        }
        if self.directed {
            for i in 0..self.n {
                for j in 0..self.n {
                    if policy.should_insert(i, j, rng) {
                        self.add_edge_directed(i, j);
                    }
                }
            }
        } else {
            for i in 0..self.n {
                for j in i..self.n {
                    if policy.should_insert(i, j, rng) {
                        self.add_edge_undirected(i, j);
                    }
                }
            }
        }
    }

    /// Inserts one uniformly drawn edge, retrying until the edge count grows.
    pub fn add_random_edge(&mut self, rng: &mut RngHandle) {
        loop {
            let head = rng.uniform_vertex(self.n);
            let tail = rng.uniform_vertex(self.n);
            let before = self.edge_count;
            self.add_edge(head, tail);
            if self.edge_count != before {
                return;
            }
        }
    }

    /// The reversible MCMC proposal: picks a vertex uniformly, strips its
    /// incident edges into the undo record and re-samples them from the
    /// ensemble.
    ///
    /// The proposal distribution is symmetric: the vertex is drawn uniformly
    /// and, given the vertex, every incident edge is re-sampled under the
    /// same policy regardless of its previous configuration.
    pub fn candidate(
        &mut self,
        policy: &dyn EnsemblePolicy,
        rng: &mut RngHandle,
    ) -> (usize, MoveUndo) {
        let vertex = rng.uniform_vertex(self.n);
        let mut undo = MoveUndo::snapshot(self.edge_count, self.components);
        self.remove_incident_edges(vertex, Some(&mut undo));
        self.insert_random_edges(vertex, policy, rng);
        (vertex, undo)
    }

    /// Undoes a candidate move. Afterwards the adjacency matrix, the edge
    /// count and the component caches are bit-identical to the pre-move
    /// state.
    pub fn revert(&mut self, vertex: usize, mut undo: MoveUndo) {
        self.remove_incident_edges(vertex, None);
        while let Some((head, tail)) = undo.pop() {
            self.add_edge(head, tail);
        }
        self.edge_count = undo.edge_count();
        self.components = undo.components();
    }

    /// Offers every feasible edge incident to `vertex` to the policy.
    fn insert_random_edges(
        &mut self,
        vertex: usize,
        policy: &dyn EnsemblePolicy,
        rng: &mut RngHandle,
    ) {
        if self.directed {
            for i in 0..self.n {
                if policy.should_insert(vertex, i, rng) {
                    self.add_edge_directed(vertex, i);
                }
                if policy.should_insert(i, vertex, rng) {
                    self.add_edge_directed(i, vertex);
                }
            }
        } else {
            for i in 0..self.n {
                if policy.should_insert(vertex, i, rng) {
                    self.add_edge_undirected(vertex, i);
                }
            }
        }
    }

    /// Clears row and column `vertex`, optionally recording the removals.
    fn remove_incident_edges(&mut self, vertex: usize, mut undo: Option<&mut MoveUndo>) {
        self.components = None;
        for i in 0..self.n {
            if self.has_edge(vertex, i) {
                if let Some(record) = undo.as_deref_mut() {
                    record.push(vertex, i);
                }
                self.set(vertex, i, false);
                self.edge_count -= 1;
            }
            if self.has_edge(i, vertex) {
                if let Some(record) = undo.as_deref_mut() {
                    record.push(i, vertex);
                }
                self.set(i, vertex, false);
                self.edge_count -= 1;
            }
        }
    }

    fn add_edge(&mut self, head: usize, tail: usize) {
        if self.directed {
            self.add_edge_directed(head, tail);
        } else {
            self.add_edge_undirected(head, tail);
        }
    }

    /// Inserts a directed edge unless it already exists or is a forbidden
    /// loop. Invalidates the component cache unconditionally.
    fn add_edge_directed(&mut self, head: usize, tail: usize) {
        self.components = None;
        if !self.has_edge(head, tail) && (self.loops_allowed || head != tail) {
            self.set(head, tail, true);
            self.edge_count += 1;
        }
    }

    /// Inserts an undirected edge in canonical lower-triangular form.
    /// Invalidates the component cache unconditionally.
    fn add_edge_undirected(&mut self, a: usize, b: usize) {
        self.components = None;
        if a > b && !self.has_edge(a, b) {
            self.set(a, b, true);
            self.edge_count += 1;
        } else if a < b && !self.has_edge(b, a) {
            self.set(b, a, true);
            self.edge_count += 1;
        } else if a == b && self.loops_allowed && !self.has_edge(a, a) {
            self.set(a, a, true);
            self.edge_count += 1;
        }
    }

    fn set(&mut self, row: usize, col: usize, value: bool) {
        self.adjacency[row * self.n + col] = value;
    }
}
