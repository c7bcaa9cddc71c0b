//! socnet Graph - in-memory social graph engine
//!
//! This crate builds an undirected weighted graph of people from edge
//! records and answers structural queries over it: shortest hop paths,
//! proximity on a 2-D plane, bounded-hop reachability, degree-based
//! segmentation, and single-node inspection.
//!
//! # Architecture
//!
//! - A node registry hands out dense identities in first-seen order and
//!   places each person at a random coordinate.
//! - Adjacency lists, indexed by identity, hold `(neighbor, weight)` pairs
//!   in insertion order.
//! - The builder is the only mutation path. Once built, the graph is
//!   read-only.
//!
//! # Example
//!
//! ```
//! use socnet_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::seeded(42);
//! builder.add_edge("alice", "bob", 1.0).unwrap();
//! builder.add_edge("bob", "carol", 2.0).unwrap();
//! let graph = builder.build();
//!
//! let path = graph.shortest_hop_path("alice", "carol").unwrap();
//! assert_eq!(path.hops, 2);
//! ```

mod builder;
mod config;
mod edge;
mod error;
mod graph;
mod query;
mod ranking;
mod registry;
mod spatial;
mod traversal;

pub use builder::{GraphBuilder, LoadReport};
pub use config::{GraphConfig, DEFAULT_COORDINATE_MAX, DEFAULT_COORDINATE_MIN};
pub use edge::{Edge, EdgeRecord, GraphEdge};
pub use error::{GraphError, Result};
pub use graph::{GraphData, GraphStats, SocialGraph};
pub use query::{
    CircleMember, NearbyPerson, PathResult, PersonInfo, PersonStats, ReachablePerson,
    Segmentation,
};
pub use ranking::band_bounds;
pub use registry::{Coordinate, Node, NodeId, NodeRegistry};
