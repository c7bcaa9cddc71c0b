//! Query result types and single-node inspection.
//!
//! Every query returns plain serializable data; rendering is left to the
//! caller.

use crate::error::Result;
use crate::graph::SocialGraph;
use crate::registry::{Coordinate, NodeId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shortest hop path, endpoints included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<String>,
    /// `path.len() - 1`.
    pub hops: usize,
}

/// A person within the search radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPerson {
    pub name: String,
    pub distance: f64,
}

/// A person reachable within the hop bound, at their minimum hop count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachablePerson {
    pub name: String,
    pub hops: usize,
}

/// Degree figures for one person in a segmentation band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonStats {
    pub name: String,
    pub degree: usize,
    /// Sum of incident edge weights. Informational; not used for ranking.
    pub weight_sum: f64,
}

/// Population split into rank bands by degree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Top 20% by rank.
    pub core: Vec<PersonStats>,
    /// Next 40%.
    pub active: Vec<PersonStats>,
    /// Bottom 40%.
    pub edge: Vec<PersonStats>,
}

/// One entry of a person's adjacency list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMember {
    pub name: String,
    pub weight: f64,
}

/// Snapshot of a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub index: NodeId,
    pub name: String,
    pub loc: Coordinate,
    pub degree: usize,
}

impl SocialGraph {
    /// Lists `person`'s adjacency entries in insertion order.
    ///
    /// Parallel edges and self-loops show up as repeated entries.
    pub fn circle(&self, person: &str) -> Result<Vec<CircleMember>> {
        let id = self.lookup(person)?;
        debug!("circle: {}", person);

        Ok(self
            .neighbors(id)
            .iter()
            .map(|e| CircleMember {
                name: self.name(e.target).to_string(),
                weight: e.weight,
            })
            .collect())
    }

    /// Returns identity, position and degree of `person`.
    pub fn info(&self, person: &str) -> Result<PersonInfo> {
        let node = self.person(person)?;
        debug!("info: {}", person);

        Ok(PersonInfo {
            index: node.id,
            name: node.name.clone(),
            loc: node.loc,
            degree: self.degree(node.id),
        })
    }
}
