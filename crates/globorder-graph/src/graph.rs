//! Dependency graph between source files

use std::collections::{HashMap, HashSet};

use globorder_annot::extract_definitions;
use tracing::debug;

use crate::source::SourceFile;

/// Map from each file to the files it depends on.
///
/// Every input file is a node, including ones with no dependencies and
/// no dependents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: HashMap<String, HashSet<String>>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and the files it depends on. Replaces any earlier entry
    /// for the same name.
    pub fn add_file(&mut self, name: impl Into<String>, dependencies: HashSet<String>) {
        self.nodes.insert(name.into(), dependencies);
    }

    /// Files `name` depends on, or `None` if it is not in the graph
    pub fn dependencies(&self, name: &str) -> Option<&HashSet<String>> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// All file names, in no particular order
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every `(dependent, dependency)` pair, sorted
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges: Vec<(&str, &str)> = self
            .nodes
            .iter()
            .flat_map(|(file, deps)| deps.iter().map(move |dep| (file.as_str(), dep.as_str())))
            .collect();
        edges.sort_unstable();
        edges
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &HashSet<String>)> {
        self.nodes.iter()
    }
}

/// Build the dependency graph for `files`.
///
/// A file depends on every other file that defines at least one of the
/// identifiers in its `/*global*/` block. When several files define the
/// same identifier, all of them become dependencies. Identifiers nobody
/// defines (host globals such as `window`) add no edge.
pub fn build_graph(files: &[SourceFile]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();

    for file in files {
        let required = file.requirements();
        let mut dependencies = HashSet::new();

        if !required.is_empty() {
            let wanted: HashSet<String> = required.iter().cloned().collect();
            let mut provided: HashSet<String> = HashSet::new();

            for candidate in files.iter().filter(|other| other.name() != file.name()) {
                let defined = extract_definitions(candidate.text(), &wanted);
                if !defined.is_empty() {
                    dependencies.insert(candidate.name().to_string());
                    provided.extend(defined);
                }
            }

            for name in required.iter().filter(|name| !provided.contains(*name)) {
                debug!(file = file.name(), identifier = %name, "no file defines required identifier");
            }
        }

        debug!(file = file.name(), dependencies = dependencies.len(), "resolved file dependencies");
        graph.add_file(file.name(), dependencies);
    }

    graph
}
