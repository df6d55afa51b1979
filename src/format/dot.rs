//! Graphviz DOT rendering.

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Render `graph` as DOT text with nodes labelled by their index.
///
/// Edges appear in [`Graph::edges`] order. Fails with `NotRenderable` if the
/// graph was built with `printable = false`.
pub fn to_dot(graph: &Graph) -> GraphResult<String> {
    if !graph.printable() {
        return Err(GraphError::NotRenderable);
    }

    let (header, connector) = if graph.directed() {
        ("digraph g{\n", " -> ")
    } else {
        ("graph g{\n", " -- ")
    };

    let mut out = String::from(header);
    out.push_str("node[label=\"\"]; \n");
    for record in graph.edge_records() {
        out.push_str(&record.source.to_string());
        out.push_str(connector);
        out.push_str(&record.target.to_string());
        if let Some(weight) = record.weight {
            out.push_str(&format!(" [ label = \"{weight}\" ];"));
        }
        out.push('\n');
    }
    out.push('}');
    Ok(out)
}
