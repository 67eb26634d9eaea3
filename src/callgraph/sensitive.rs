//! Sensitive node classification.

use super::CallGraph;
use petgraph::graph::NodeIndex;
use std::{collections::HashSet, slice::Iter};

/// Gets the class path of a method label, the part before the first `;`.
pub fn class_path(label: &str) -> &str {
    label.split(';').next().unwrap_or(label)
}

/// Checks if the label belongs to a class of the catalog.
///
/// The class path is split in its `/` separated components, and one of them must be exactly
/// equal to a catalog entry: `Landroid/telephony/TelephonyManager` matches `TelephonyManager`,
/// but `Lcom/x/MyTelephonyManager` does not.
pub fn is_sensitive(label: &str, catalog: &[&str]) -> bool {
    class_path(label)
        .split('/')
        .any(|component| catalog.contains(&component))
}

/// Nodes of a call graph that belong to sensitive classes.
///
/// Nodes are kept in graph order, without repetitions.
#[derive(Debug, Default)]
pub struct SensitiveNodes {
    nodes: Vec<NodeIndex>,
    members: HashSet<NodeIndex>,
}

impl SensitiveNodes {
    /// Finds the nodes of the graph whose class is in the catalog.
    pub fn classify(graph: &CallGraph, catalog: &[&str]) -> Self {
        let mut sensitive = Self::default();
        for node in graph.nodes() {
            if is_sensitive(graph.label(node), catalog) && sensitive.members.insert(node) {
                sensitive.nodes.push(node);
            }
        }

        sensitive
    }

    /// Checks if the node is sensitive.
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.members.contains(&node)
    }

    /// Number of sensitive nodes found.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if no sensitive node was found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the sensitive nodes in graph order.
    pub fn iter(&self) -> Iter<'_, NodeIndex> {
        self.nodes.iter()
    }
}
