//! Ordering errors

use std::collections::BTreeSet;

use thiserror::Error;

/// Files whose dependencies could never all be placed before them.
///
/// Holds every file that is part of a cycle or that depends, directly or
/// not, on one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cycle(s) detected: {}", join_names(.nodes))]
pub struct CycleError {
    pub nodes: BTreeSet<String>,
}

impl CycleError {
    pub fn new(nodes: BTreeSet<String>) -> Self {
        Self { nodes }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }
}

fn join_names(nodes: &BTreeSet<String>) -> String {
    nodes.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
