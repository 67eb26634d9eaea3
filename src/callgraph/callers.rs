//! Resolution of the callers of sensitive APIs.

use super::{sensitive::SensitiveNodes, CallGraph};
use std::collections::{btree_set::Iter, BTreeSet};

/// Methods calling sensitive APIs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Callers {
    labels: BTreeSet<String>,
    weighted_in_degree: usize,
}

impl Callers {
    /// Iterates over the caller labels in ascending order.
    pub fn labels(&self) -> Iter<'_, String> {
        self.labels.iter()
    }

    /// Checks if the label was resolved as a caller.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Number of distinct caller labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Checks if no caller was found.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of the in-degree of the called node each time a new caller was recorded.
    pub fn weighted_in_degree(&self) -> usize {
        self.weighted_in_degree
    }
}

/// Resolves the callers of the sensitive nodes.
///
/// Only callers that are sensitive themselves are recorded, so the result always is a subset of
/// the sensitive labels. Callers are deduplicated by label.
pub fn resolve(graph: &CallGraph, sensitive: &SensitiveNodes) -> Callers {
    let mut callers = Callers::default();

    for &callee in sensitive.iter() {
        for caller in graph.callers(callee) {
            if !sensitive.contains(caller) {
                continue;
            }

            let label = graph.label(caller);
            if !callers.labels.contains(label) {
                let _ = callers.labels.insert(label.to_owned());
                callers.weighted_in_degree += graph.in_degree(callee);
            }
        }
    }

    callers
}

/// Gets the sensitive callers of every method with the given label.
///
/// Methods can appear more than once in a call graph with the same label, so the callers of all
/// of them are merged.
pub fn callers_of<'g>(
    graph: &'g CallGraph,
    sensitive: &SensitiveNodes,
    label: &str,
) -> BTreeSet<&'g str> {
    graph
        .nodes_by_label(label)
        .iter()
        .flat_map(|&callee| graph.callers(callee))
        .filter(|&caller| sensitive.contains(caller))
        .map(|caller| graph.label(caller))
        .collect()
}
