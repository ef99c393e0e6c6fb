//! Topological ordering (Kahn's algorithm)

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::CycleError;
use crate::graph::DependencyGraph;

/// How to choose among files that are ready at the same time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Whatever the ready set yields first; may differ between runs
    #[default]
    Arbitrary,
    /// Lexically smallest name first; reproducible
    Lexical,
}

/// Nodes whose dependencies have all been emitted
trait ReadySet<'g> {
    fn push(&mut self, node: &'g str);
    fn pop_next(&mut self) -> Option<&'g str>;
}

impl<'g> ReadySet<'g> for HashSet<&'g str> {
    fn push(&mut self, node: &'g str) {
        self.insert(node);
    }

    fn pop_next(&mut self) -> Option<&'g str> {
        let node = *self.iter().next()?;
        self.remove(node);
        Some(node)
    }
}

impl<'g> ReadySet<'g> for BTreeSet<&'g str> {
    fn push(&mut self, node: &'g str) {
        self.insert(node);
    }

    fn pop_next(&mut self) -> Option<&'g str> {
        self.pop_first()
    }
}

/// Order `graph` so every file comes after the files it depends on.
///
/// Files with no ordering constraint between them come out in no
/// particular order. Fails with every file that could not be placed when
/// the graph has a cycle.
pub fn topological_order(graph: &DependencyGraph) -> Result<Vec<String>, CycleError> {
    topological_order_with(graph, TieBreak::Arbitrary)
}

/// [`topological_order`] with an explicit tie-break policy
pub fn topological_order_with(graph: &DependencyGraph, tie_break: TieBreak) -> Result<Vec<String>, CycleError> {
    match tie_break {
        TieBreak::Arbitrary => kahn(graph, HashSet::new()),
        TieBreak::Lexical => kahn(graph, BTreeSet::new()),
    }
}

fn kahn<'g, R: ReadySet<'g>>(graph: &'g DependencyGraph, mut ready: R) -> Result<Vec<String>, CycleError> {
    // Private working copy; the caller's graph is never touched.
    // A dependency on a name outside the graph is never emitted, so its
    // dependents stay pending and end up in the error.
    let mut pending: HashMap<&'g str, HashSet<&'g str>> = graph
        .iter()
        .map(|(file, deps)| (file.as_str(), deps.iter().map(String::as_str).collect()))
        .collect();

    // Reverse edges: dependency -> files waiting on it
    let mut dependents: HashMap<&'g str, Vec<&'g str>> = HashMap::new();
    for (&file, deps) in &pending {
        for &dep in deps {
            dependents.entry(dep).or_default().push(file);
        }
        if deps.is_empty() {
            ready.push(file);
        }
    }

    let mut order = Vec::with_capacity(pending.len());
    while let Some(node) = ready.pop_next() {
        trace!(node, "emitting");
        order.push(node.to_string());

        for &dependent in dependents.get(node).into_iter().flatten() {
            if let Some(deps) = pending.get_mut(dependent) {
                if deps.remove(node) && deps.is_empty() {
                    ready.push(dependent);
                }
            }
        }
    }

    let unresolved: BTreeSet<String> = pending
        .iter()
        .filter(|(_, deps)| !deps.is_empty())
        .map(|(file, _)| file.to_string())
        .collect();

    if !unresolved.is_empty() {
        debug!(count = unresolved.len(), "files left with unresolved dependencies");
        return Err(CycleError::new(unresolved));
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, Vec<&str>)]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for (file, deps) in edges {
            graph.add_file(*file, deps.iter().map(|d| d.to_string()).collect());
        }
        graph
    }

    fn position(order: &[String], name: &str) -> usize {
        order.iter().position(|n| n == name).unwrap()
    }

    /// Every node once, every dependency before its dependent
    fn assert_valid_order(graph: &DependencyGraph, order: &[String]) {
        assert_eq!(order.len(), graph.len());
        for file in graph.files() {
            assert_eq!(order.iter().filter(|n| *n == file).count(), 1);
            for dep in graph.dependencies(file).unwrap() {
                assert!(position(order, dep) < position(order, file), "{dep} must precede {file}");
            }
        }
    }

    #[test]
    fn test_simple_chain() {
        let g = graph(&[("a.js", vec![]), ("b.js", vec!["a.js"]), ("c.js", vec!["b.js"])]);
        let order = topological_order(&g).unwrap();
        assert_eq!(order, vec!["a.js", "b.js", "c.js"]);
    }

    #[test]
    fn test_diamond_dependency() {
        let g = graph(&[
            ("a.js", vec![]),
            ("b.js", vec!["a.js"]),
            ("c.js", vec!["a.js"]),
            ("d.js", vec!["b.js", "c.js"]),
        ]);
        let order = topological_order(&g).unwrap();

        assert_valid_order(&g, &order);
        assert!(position(&order, "a.js") < position(&order, "b.js"));
        assert!(position(&order, "a.js") < position(&order, "c.js"));
        assert!(position(&order, "b.js") < position(&order, "d.js"));
        assert!(position(&order, "c.js") < position(&order, "d.js"));
    }

    #[test]
    fn test_wide_graph_is_valid() {
        let g = graph(&[
            ("core", vec![]),
            ("dom", vec!["core"]),
            ("ajax", vec!["core"]),
            ("events", vec!["core", "dom"]),
            ("widgets", vec!["dom", "events"]),
            ("app", vec!["widgets", "ajax"]),
            ("vendor", vec![]),
            ("analytics", vec!["vendor"]),
        ]);

        for _ in 0..10 {
            let order = topological_order(&g).unwrap();
            assert_valid_order(&g, &order);
        }
    }

    #[test]
    fn test_cycle_reports_only_stuck_nodes() {
        // a <-> b, c depends on the cycle, d and e resolve
        let g = graph(&[
            ("a", vec!["b"]),
            ("b", vec!["a"]),
            ("c", vec!["a"]),
            ("d", vec![]),
            ("e", vec!["d"]),
        ]);
        let err = topological_order(&g).unwrap_err();

        let expected: BTreeSet<String> = ["a", "b", "c"].iter().map(|n| n.to_string()).collect();
        assert_eq!(err.nodes, expected);
    }

    #[test]
    fn test_three_way_cycle() {
        let g = graph(&[("A", vec!["C"]), ("B", vec!["A"]), ("C", vec!["B"])]);
        let err = topological_order_with(&g, TieBreak::Lexical).unwrap_err();
        assert_eq!(err.nodes.len(), 3);
    }

    #[test]
    fn test_input_graph_is_not_mutated() {
        let g = graph(&[("a", vec![]), ("b", vec!["a"])]);
        let before = g.clone();
        topological_order(&g).unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn test_lexical_tie_break_is_stable() {
        let g = graph(&[
            ("zeta", vec![]),
            ("beta", vec![]),
            ("alpha", vec!["zeta"]),
            ("gamma", vec!["beta"]),
        ]);

        let order = topological_order_with(&g, TieBreak::Lexical).unwrap();
        assert_eq!(order, vec!["beta", "gamma", "zeta", "alpha"]);
    }

    #[test]
    fn test_unknown_dependency_never_resolves() {
        let g = graph(&[("a", vec!["missing"]), ("b", vec!["a"]), ("c", vec![])]);
        let err = topological_order(&g).unwrap_err();

        let expected: BTreeSet<String> = ["a", "b"].iter().map(|n| n.to_string()).collect();
        assert_eq!(err.nodes, expected);
    }

    #[test]
    fn test_empty_graph() {
        assert!(topological_order(&DependencyGraph::new()).unwrap().is_empty());
    }
}
