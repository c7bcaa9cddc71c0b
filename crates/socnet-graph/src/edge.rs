//! Edge types for the social graph.
//!
//! Relationships are undirected and carry a single weight. Internally an
//! edge is two [`Edge`] entries, one in each endpoint's adjacency list.

use crate::registry::NodeId;
use serde::{Deserialize, Serialize};

/// One adjacency entry: the far endpoint and the shared weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The neighbor this entry points at.
    pub target: NodeId,

    /// Weight of the relationship.
    pub weight: f64,
}

impl Edge {
    /// Creates a new adjacency entry.
    pub fn new(target: NodeId, weight: f64) -> Self {
        Self { target, weight }
    }
}

/// A raw edge as it arrives from ingestion, endpoints still by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// A simplified edge for graph export/visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}
