//! Call graph loading and sensitive API caller analysis.
//!
//! The call graph is read once from its GML description. Each node is a method, identified by
//! the integer `id` of the file and described by its `label`, for example
//! `Landroid/telephony/TelephonyManager;->getDeviceId()Ljava/lang/String;`. Edges go from the
//! calling method to the called method.

pub mod callers;
pub mod gml;
pub mod sensitive;

use self::gml::Value;
use crate::error::Kind;
use failure::{Error, ResultExt};
use petgraph::{
    graph::{DiGraph, NodeIndex},
    Direction,
};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

/// Method node of the call graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    id: i64,
    label: String,
}

impl Method {
    /// Gets the graph-local identifier of the method.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Gets the label of the method.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }
}

/// Whole-program call graph.
#[derive(Debug, Default)]
pub struct CallGraph {
    graph: DiGraph<Method, ()>,
    ids: HashMap<i64, NodeIndex>,
    labels: HashMap<String, Vec<NodeIndex>>,
}

impl CallGraph {
    /// Loads the call graph stored in the given GML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|_| format!("could not read call graph `{}`", path.display()))?;

        Self::from_gml(&source)
    }

    /// Builds the call graph from a GML document.
    pub fn from_gml(source: &str) -> Result<Self, Error> {
        let document = gml::parse(source)?;

        let mut graphs = document.iter().filter(|(key, _)| key == "graph");
        let graph = match (graphs.next(), graphs.next()) {
            (Some((_, Value::List(graph))), None) => graph,
            (Some(_), None) => return Err(graph_error("`graph` is not a list")),
            (None, _) => return Err(graph_error("no `graph` found")),
            (Some(_), Some(_)) => return Err(graph_error("more than one `graph` found")),
        };

        if gml::get(graph, "directed").and_then(Value::as_int) != Some(1) {
            return Err(graph_error("the graph is not directed"));
        }
        let multigraph = gml::get(graph, "multigraph").and_then(Value::as_int) == Some(1);

        let mut call_graph = Self::default();
        for (key, value) in graph {
            if key == "node" {
                let node = value
                    .as_list()
                    .ok_or_else(|| graph_error("`node` is not a list"))?;
                call_graph.add_node(node)?;
            }
        }

        let mut seen = HashSet::new();
        for (key, value) in graph {
            if key == "edge" {
                let edge = value
                    .as_list()
                    .ok_or_else(|| graph_error("`edge` is not a list"))?;
                let (source, target) = call_graph.add_edge(edge)?;
                if !multigraph && !seen.insert((source, target)) {
                    return Err(graph_error(format!(
                        "edge ({} -> {}) is duplicated",
                        source, target
                    )));
                }
            }
        }

        Ok(call_graph)
    }

    fn add_node(&mut self, node: &[(String, Value)]) -> Result<(), Error> {
        let id = gml::get(node, "id")
            .and_then(Value::as_int)
            .ok_or_else(|| graph_error("node without integer `id`"))?;
        let label = gml::get(node, "label")
            .and_then(Value::as_str)
            .ok_or_else(|| graph_error(format!("node {} has no `label`", id)))?;

        if self.ids.contains_key(&id) {
            return Err(graph_error(format!("node id {} is duplicated", id)));
        }

        let index = self.graph.add_node(Method {
            id,
            label: label.to_owned(),
        });
        let _ = self.ids.insert(id, index);
        self.labels
            .entry(label.to_owned())
            .or_insert_with(Vec::new)
            .push(index);

        Ok(())
    }

    fn add_edge(&mut self, edge: &[(String, Value)]) -> Result<(i64, i64), Error> {
        let endpoint = |key: &str| -> Result<(i64, NodeIndex), Error> {
            let id = gml::get(edge, key)
                .and_then(Value::as_int)
                .ok_or_else(|| graph_error(format!("edge without integer `{}`", key)))?;
            let index = self
                .ids
                .get(&id)
                .cloned()
                .ok_or_else(|| graph_error(format!("edge {} {} does not exist", key, id)))?;
            Ok((id, index))
        };

        let (source_id, source) = endpoint("source")?;
        let (target_id, target) = endpoint("target")?;
        let _ = self.graph.add_edge(source, target, ());

        Ok((source_id, target_id))
    }

    /// Number of methods in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of calls in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over the nodes, in file order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Gets the method of a node.
    pub fn method(&self, node: NodeIndex) -> &Method {
        &self.graph[node]
    }

    /// Gets the label of a node.
    pub fn label(&self, node: NodeIndex) -> &str {
        self.graph[node].label()
    }

    /// Finds the node with the given identifier.
    pub fn node_by_id(&self, id: i64) -> Option<NodeIndex> {
        self.ids.get(&id).cloned()
    }

    /// Finds the nodes with the given label.
    pub fn nodes_by_label(&self, label: &str) -> &[NodeIndex] {
        self.labels.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over the source of every call to the given node.
    ///
    /// Parallel calls yield the same caller more than once.
    pub fn callers(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(node, Direction::Incoming)
    }

    /// Number of calls to the given node.
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .count()
    }
}

fn graph_error<S: Into<String>>(message: S) -> Error {
    Kind::Graph {
        message: message.into(),
    }
    .into()
}
