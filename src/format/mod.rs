//! Textual forms of a graph: DOT output and JSON documents.

pub mod document;
pub mod dot;

pub use document::{DocumentEdge, GraphDocument, LoadedGraph};
pub use dot::to_dot;
