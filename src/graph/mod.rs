//! Graph store: configuration, construction, queries and search.

pub mod builder;
pub mod config;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use config::{GraphConfig, Representation, WeightPolicy};
pub use store::Graph;
pub use traversal::{search_with, Frontier, TraversalMode};
