//! linkgraph core library
//!
//! Turns a CSV edge list (`SourceURL`, `TargetURL` columns) into a
//! deduplicated directed graph and serializes it as GEXF. The pipeline
//! is strictly sequential: parse rows, build the graph, emit XML.

pub mod builder;
pub mod convert;
pub mod gexf;
pub mod graph;
pub mod input;
pub mod retry;
pub mod storage;

// Re-export commonly used types
pub use graph::{Edge, Graph, Node};
pub use input::Row;
