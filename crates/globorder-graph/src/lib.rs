//! Dependency graph and load ordering for globorder
//!
//! Turns a set of annotated source files into a [`DependencyGraph`] and
//! the graph into a load order, or a [`CycleError`] naming the files that
//! can never be placed.

pub mod error;
pub mod graph;
pub mod sort;
pub mod source;

pub use error::CycleError;
pub use graph::{build_graph, DependencyGraph};
pub use sort::{topological_order, topological_order_with, TieBreak};
pub use source::SourceFile;
