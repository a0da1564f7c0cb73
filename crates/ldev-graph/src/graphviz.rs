//! Graphviz emission for graph states.

use std::io::{self, Write};

use crate::state::GraphState;

/// Writes the graph in Graphviz format.
///
/// Edges are emitted in row-major canonical order. When a block labeling is
/// supplied, vertices in block 0 are filled red and vertices in block 1
/// blue, matching the two-block plots this tool is normally used for.
pub fn write_graphviz<W: Write>(
    graph: &GraphState,
    labeling: Option<&[usize]>,
    writer: &mut W,
) -> io::Result<()> {
    if graph.is_directed() {
        writeln!(writer, "digraph G {{")?;
    } else {
        writeln!(writer, "graph G {{")?;
    }
    let n = graph.vertex_count();
    for i in 0..n {
        for j in 0..n {
            if graph.has_edge(i, j) {
                if graph.is_directed() {
                    writeln!(writer, "{i} -> {j}")?;
                } else {
                    writeln!(writer, "{i} -- {j}")?;
                }
            }
        }
    }
    if let Some(labels) = labeling {
        for (vertex, &block) in labels.iter().enumerate().take(n) {
            if block == 0 {
                writeln!(writer, "{vertex} [style=filled, fillcolor=red]")?;
            } else if block == 1 {
                writeln!(writer, "{vertex} [style=filled, fillcolor=blue]")?;
            }
        }
    }
    writeln!(writer, "}}")?;
    Ok(())
}
