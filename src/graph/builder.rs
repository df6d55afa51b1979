//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::config::{GraphConfig, Representation, WeightPolicy};
use super::traversal::TraversalMode;
use super::Graph;

/// Fluent builder for constructing a validated, empty [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    /// Start from the default configuration: undirected, unweighted, edge list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.config.directed = directed;
        self
    }

    pub fn weighted(mut self, weighted: bool) -> Self {
        self.config.weighted = weighted;
        self
    }

    pub fn representation(mut self, representation: Representation) -> Self {
        self.config.representation = representation;
        self
    }

    pub fn traversal(mut self, mode: TraversalMode) -> Self {
        self.config.traversal = Some(mode);
        self
    }

    pub fn printable(mut self, printable: bool) -> Self {
        self.config.printable = printable;
        self
    }

    /// Enable the minimum spanning tree capability.
    pub fn mst(mut self, enabled: bool) -> Self {
        self.config.mst = enabled;
        self
    }

    /// Enable the single-source shortest path capability.
    pub fn sssp(mut self, enabled: bool) -> Self {
        self.config.sssp = enabled;
        self
    }

    pub fn weight_policy(mut self, policy: WeightPolicy) -> Self {
        self.config.weight_policy = policy;
        self
    }

    /// Validate the configuration and create the graph.
    pub fn build(self) -> GraphResult<Graph> {
        Graph::new(self.config)
    }
}
