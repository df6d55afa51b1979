//! Entity model: nodes, links, edges and errors.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::{Edge, EdgeHandle, EdgeRecord};
pub use error::{Capability, GraphError, GraphResult};
pub use node::{AdjacencyLink, AdjacencyStore, GraphId, HasAdjacency, Node, NodeId};
