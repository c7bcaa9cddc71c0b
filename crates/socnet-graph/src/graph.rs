//! Core graph data structure.
//!
//! `SocialGraph` pairs the node registry with per-node adjacency lists.
//! Both are indexed by [`NodeId`], so adjacency entries never dangle.

use crate::edge::{Edge, GraphEdge};
use crate::error::Result;
use crate::registry::{Node, NodeId, NodeRegistry};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The social relationship graph.
///
/// Only [`GraphBuilder`](crate::GraphBuilder) can add edges; once built the
/// graph is read-only and every query borrows it immutably.
#[derive(Debug, Default, Clone)]
pub struct SocialGraph {
    /// Names, identities and coordinates.
    registry: NodeRegistry,

    /// `adjacency[i]` lists every edge endpoint incident to node `i`,
    /// in insertion order.
    adjacency: Vec<Vec<Edge>>,
}

impl SocialGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts an undirected edge, registering unseen endpoints.
    ///
    /// Appends `(target, weight)` to the source's list and `(source, weight)`
    /// to the target's. Parallel edges are kept as separate entries; a
    /// self-loop therefore appears twice in its node's list.
    pub(crate) fn insert_edge<R: Rng>(
        &mut self,
        source: &str,
        target: &str,
        weight: f64,
        rng: &mut R,
        range: &Range<f64>,
    ) -> (NodeId, NodeId) {
        let from = self.registry.resolve(source, rng, range);
        let to = self.registry.resolve(target, rng, range);
        self.adjacency.resize_with(self.registry.len(), Vec::new);

        self.adjacency[from].push(Edge::new(to, weight));
        self.adjacency[to].push(Edge::new(from, weight));
        (from, to)
    }

    /// Resolves a name to its identity.
    pub fn lookup(&self, name: &str) -> Result<NodeId> {
        self.registry.lookup(name)
    }

    /// Resolves a name to its node.
    pub(crate) fn person(&self, name: &str) -> Result<&Node> {
        self.registry.lookup_node(name)
    }

    /// Gets a node by identity.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.registry.node(id)
    }

    /// Display name of `id`, empty if out of range.
    pub(crate) fn name(&self, id: NodeId) -> &str {
        self.registry
            .node(id)
            .map(|n| n.name.as_str())
            .unwrap_or_default()
    }

    /// Adjacency entries of `id` in insertion order.
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of incident edge endpoints (parallel edges and self-loops
    /// count fully).
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Iterates over all nodes in identity order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.registry.iter()
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|v| v.len()).sum::<usize>() / 2
    }

    /// Dumps nodes and edges for visualization.
    ///
    /// Each undirected edge is emitted once, from its lower identity. Self
    /// loops are not exported.
    pub fn export(&self) -> GraphData {
        let nodes = self.registry.iter().cloned().collect();
        let edges = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, list)| {
                list.iter()
                    .filter(move |e| from < e.target)
                    .map(move |e| GraphEdge {
                        source: self.name(from).to_string(),
                        target: self.name(e.target).to_string(),
                        weight: e.weight,
                    })
            })
            .collect();

        GraphData { nodes, edges }
    }
}

/// Full graph dump for the export command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<GraphEdge>,
}

/// Graph statistics for the stats command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
}

impl SocialGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
        }
    }
}
