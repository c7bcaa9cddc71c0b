//! Node registry: stable identities for named people.
//!
//! Identities are dense and handed out in first-seen order, so identity `i`
//! is always the `i`-th node created and doubles as an index into the
//! adjacency store.

use crate::error::{GraphError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;

/// Unique identifier for a node in the graph.
pub type NodeId = usize;

/// A point on the 2-D plane people are scattered over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A registered person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub loc: Coordinate,
}

/// Maps names to identities and owns per-node data.
#[derive(Debug, Default, Clone)]
pub struct NodeRegistry {
    /// Nodes in identity order.
    nodes: Vec<Node>,

    /// Case-sensitive name index.
    by_name: HashMap<String, NodeId>,
}

impl NodeRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identity for `name`, registering it if unseen.
    ///
    /// A new node gets the next sequential identity and a coordinate drawn
    /// uniformly from `range` on each axis. Existing nodes keep theirs.
    pub fn resolve<R: Rng>(&mut self, name: &str, rng: &mut R, range: &Range<f64>) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }

        let id = self.nodes.len();
        let loc = Coordinate::new(rng.gen_range(range.clone()), rng.gen_range(range.clone()));
        self.by_name.insert(name.to_string(), id);
        self.nodes.push(Node {
            id,
            name: name.to_string(),
            loc,
        });
        id
    }

    /// Looks up a registered name without side effects.
    pub fn lookup(&self, name: &str) -> Result<NodeId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NotFound(name.to_string()))
    }

    /// Looks up a registered name and returns its node.
    pub fn lookup_node(&self, name: &str) -> Result<&Node> {
        let id = self.lookup(name)?;
        // Every id in `by_name` indexes `nodes`.
        Ok(&self.nodes[id])
    }

    /// Gets a node by identity.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterates nodes in identity order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
