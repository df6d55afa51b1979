//! Reachability search (BFS / DFS) over any graph representation.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::Graph;

/// Search strategy used by [`Graph::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalMode {
    /// FIFO frontier.
    #[serde(alias = "bfs")]
    BreadthFirst,
    /// LIFO frontier.
    #[serde(alias = "dfs")]
    DepthFirst,
}

impl TraversalMode {
    /// Return a short name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse a traversal mode from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadthfirst" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depthfirst" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pending nodes of a search: a queue for BFS, a stack for DFS.
#[derive(Debug)]
pub enum Frontier<T> {
    Queue(VecDeque<T>),
    Stack(Vec<T>),
}

impl<T> Frontier<T> {
    /// Empty frontier matching `mode`.
    pub fn new(mode: TraversalMode) -> Self {
        match mode {
            TraversalMode::BreadthFirst => Self::Queue(VecDeque::new()),
            TraversalMode::DepthFirst => Self::Stack(Vec::new()),
        }
    }

    pub fn mode(&self) -> TraversalMode {
        match self {
            Self::Queue(_) => TraversalMode::BreadthFirst,
            Self::Stack(_) => TraversalMode::DepthFirst,
        }
    }

    pub fn push(&mut self, item: T) {
        match self {
            Self::Queue(queue) => queue.push_back(item),
            Self::Stack(stack) => stack.push(item),
        }
    }

    /// Remove the next item: oldest for a queue, newest for a stack.
    pub fn pop(&mut self) -> Option<T> {
        match self {
            Self::Queue(queue) => queue.pop_front(),
            Self::Stack(stack) => stack.pop(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Queue(queue) => queue.len(),
            Self::Stack(stack) => stack.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether `goal` is reachable from `start`, exploring with `mode`.
pub fn search_with(
    graph: &Graph,
    start: &Node,
    goal: &Node,
    mode: TraversalMode,
) -> GraphResult<bool> {
    for node in [start, goal] {
        if !graph.contains(node) {
            return Err(GraphError::NodeNotInGraph(node.id()));
        }
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut frontier = Frontier::new(mode);
    visited.insert(start.id());
    frontier.push(start.clone());

    while let Some(node) = frontier.pop() {
        if node == *goal {
            log::trace!("{} search reached {} after {} visits", mode, goal.id(), visited.len());
            return Ok(true);
        }
        for neighbour in graph.neighbours(&node)? {
            if visited.insert(neighbour.id()) {
                frontier.push(neighbour);
            }
        }
    }
    Ok(false)
}

impl Graph {
    /// Whether `goal` is reachable from `start` under the selected traversal mode.
    pub fn search(&self, start: &Node, goal: &Node) -> GraphResult<bool> {
        let mode = self.traversal().ok_or(GraphError::TraversalDisabled)?;
        search_with(self, start, goal, mode)
    }
}
