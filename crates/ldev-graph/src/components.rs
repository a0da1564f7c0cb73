//! Connected-component analysis over the dense graph state.

use crate::state::GraphState;

/// Cached component statistics for a graph state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentStats {
    /// Number of vertices in the largest component.
    pub largest: usize,
    /// Total number of components.
    pub count: usize,
}

/// Computes component statistics with an iterative depth-first traversal.
///
/// Undirected graphs follow the canonical adjacency in both directions, so
/// the result describes the usual (weakly) connected components. Directed
/// graphs follow `A[u][.]` successors only: a component here is the set of
/// vertices first reached forward from its start vertex, which is the
/// semantics the rest of the sampler is calibrated against.
pub(crate) fn analyze(graph: &GraphState) -> ComponentStats {
    let n = graph.vertex_count();
    let mut marked = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut marked_count = 0usize;
    let mut start = 0usize;
    let mut largest = 0usize;
    let mut count = 0usize;

    while marked_count < n {
        while start < n && marked[start] {
            start += 1;
        }
        if start == n {
            break;
        }
        count += 1;
        let mut current = start;
        let mut size = 1usize;
        marked[current] = true;
        marked_count += 1;
        stack.push(current);
        while !stack.is_empty() {
            match unmarked_successor(graph, current, &marked) {
                Some(next) => {
                    marked[next] = true;
                    marked_count += 1;
                    stack.push(next);
                    size += 1;
                    current = next;
                }
                None => {
                    if size > largest {
                        largest = size;
                    }
                    stack.pop();
                    if let Some(&top) = stack.last() {
                        current = top;
                    }
                }
            }
        }
    }

    ComponentStats { largest, count }
}

/// Finds an unmarked vertex adjacent to `vertex`, honouring directedness.
fn unmarked_successor(graph: &GraphState, vertex: usize, marked: &[bool]) -> Option<usize> {
    let n = graph.vertex_count();
    for j in 0..n {
        if marked[j] {
            continue;
        }
        if graph.is_directed() {
            if graph.has_edge(vertex, j) {
                return Some(j);
            }
        } else if vertex > j {
            if graph.has_edge(vertex, j) {
                return Some(j);
            }
        } else if j > vertex && graph.has_edge(j, vertex) {
            return Some(j);
        }
    }
    None
}
