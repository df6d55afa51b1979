//! CLI command implementations.
//!
//! Each `cmd_*` loads a graph document, builds the graph and prints a
//! report. The `*_report` functions return the text instead of printing it.

use std::path::Path;

use crate::format::{to_dot, GraphDocument, LoadedGraph};
use crate::graph::{search_with, Graph, TraversalMode};
use crate::types::GraphResult;

/// Load and build a document, enabling whichever algorithm fits its shape.
fn load(path: &Path) -> GraphResult<LoadedGraph> {
    let mut doc = GraphDocument::load(path)?;
    let config = &mut doc.config;
    config.mst = config.weighted && !config.directed;
    config.sssp = config.weighted && config.directed;
    doc.build()
}

fn pretty(value: &serde_json::Value) -> GraphResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Summary of the graph's shape and size.
pub fn info_report(graph: &Graph, json: bool) -> GraphResult<String> {
    if json {
        return pretty(&serde_json::json!({
            "directed": graph.directed(),
            "weighted": graph.weighted(),
            "representation": graph.representation(),
            "nodes": graph.size(),
            "edges": graph.edge_count(),
            "total_weight": graph.total_weight(),
        }));
    }
    let mut lines = vec![
        format!("Directed: {}", graph.directed()),
        format!("Weighted: {}", graph.weighted()),
        format!("Representation: {}", graph.representation()),
        format!("Nodes: {}", graph.size()),
        format!("Edges: {}", graph.edge_count()),
    ];
    if graph.weighted() {
        lines.push(format!("Total weight: {}", graph.total_weight()));
    }
    Ok(lines.join("\n"))
}

/// Reachability of `to` from `from`.
pub fn search_report(
    loaded: &LoadedGraph,
    from: u64,
    to: u64,
    mode: TraversalMode,
    json: bool,
) -> GraphResult<String> {
    let reachable = search_with(&loaded.graph, loaded.node(from)?, loaded.node(to)?, mode)?;
    if json {
        return pretty(&serde_json::json!({
            "from": from,
            "to": to,
            "mode": mode.name(),
            "reachable": reachable,
        }));
    }
    let verdict = if reachable { "reachable" } else { "not reachable" };
    Ok(format!("{} is {} from {} ({})", to, verdict, from, mode))
}

/// Print a derived graph using the labels of the graph it came from.
pub fn tree_report(loaded: &LoadedGraph, tree: &Graph, json: bool) -> GraphResult<String> {
    let doc = loaded.relabel(tree)?;
    if json {
        return pretty(&serde_json::json!({
            "nodes": tree.size(),
            "edges": tree.edge_count(),
            "total_weight": tree.total_weight(),
            "graph": doc,
        }));
    }
    let connector = if tree.directed() { "->" } else { "--" };
    let mut lines: Vec<String> = doc
        .edges
        .iter()
        .map(|edge| match edge.weight {
            Some(w) => format!("{} {} {} ({})", edge.source, connector, edge.target, w),
            None => format!("{} {} {}", edge.source, connector, edge.target),
        })
        .collect();
    lines.push(format!(
        "Nodes: {}, edges: {}, total weight: {}",
        tree.size(),
        tree.edge_count(),
        tree.total_weight()
    ));
    Ok(lines.join("\n"))
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let loaded = load(path)?;
    println!("{}", info_report(&loaded.graph, json)?);
    Ok(())
}

/// Print the graph as DOT.
pub fn cmd_dot(path: &Path) -> GraphResult<()> {
    let loaded = load(path)?;
    println!("{}", to_dot(&loaded.graph)?);
    Ok(())
}

/// Check whether `to` can be reached from `from`.
pub fn cmd_search(
    path: &Path,
    from: u64,
    to: u64,
    mode: TraversalMode,
    json: bool,
) -> GraphResult<()> {
    let loaded = load(path)?;
    println!("{}", search_report(&loaded, from, to, mode, json)?);
    Ok(())
}

/// Compute and print the minimum spanning tree.
pub fn cmd_mst(path: &Path, json: bool) -> GraphResult<()> {
    let loaded = load(path)?;
    let tree = loaded.graph.minimum_spanning_tree()?;
    println!("{}", tree_report(&loaded, &tree, json)?);
    Ok(())
}

/// Compute and print the shortest-path tree rooted at `source`.
pub fn cmd_sssp(path: &Path, source: u64, json: bool) -> GraphResult<()> {
    let loaded = load(path)?;
    let tree = loaded.graph.shortest_path_tree(loaded.node(source)?)?;
    println!("{}", tree_report(&loaded, &tree, json)?);
    Ok(())
}
