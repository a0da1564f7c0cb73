//! Scalar observables measured on graph states.

use ldev_graph::GraphState;

/// Auxiliary statistics appended to every record row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservableStats {
    /// Number of components of the measured state.
    pub component_count: usize,
    /// Number of edges of the measured state.
    pub edge_count: usize,
}

/// A scalar measurement over graph states.
///
/// The drivers only ever see this interface, so adding observables beyond
/// the largest component is a matter of one more implementation.
pub trait Observable {
    /// Returns the value of interest for the current state.
    fn value(&self, graph: &mut GraphState) -> f64;

    /// Returns the statistics recorded next to the value.
    fn statistics(&self, graph: &mut GraphState) -> ObservableStats;
}

/// The size of the largest connected component.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestComponent;

impl Observable for LargestComponent {
    fn value(&self, graph: &mut GraphState) -> f64 {
        graph.largest_component_size() as f64
    }

    fn statistics(&self, graph: &mut GraphState) -> ObservableStats {
        ObservableStats {
            component_count: graph.component_count(),
            edge_count: graph.edge_count(),
        }
    }
}
