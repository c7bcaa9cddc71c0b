//! Graph builder for constructing the social graph from edge records.
//!
//! The builder owns the random source used to place new nodes, so a seeded
//! builder fed the same records always produces the same coordinates.

use crate::config::{validate_range, GraphConfig};
use crate::edge::EdgeRecord;
use crate::error::{GraphError, Result};
use crate::graph::SocialGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{debug, info, warn};

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Records turned into edges.
    pub accepted: usize,
    /// Records rejected as malformed.
    pub skipped: usize,
}

/// Builds a [`SocialGraph`] in a single additive pass.
///
/// There is no way to remove or re-weight an edge; call [`build`](Self::build)
/// once everything is in.
pub struct GraphBuilder<R: Rng = StdRng> {
    graph: SocialGraph,
    rng: R,
    range: Range<f64>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a builder seeded from OS entropy, using the default range.
    pub fn new() -> Self {
        Self::from_parts(StdRng::from_entropy(), GraphConfig::default().coordinate_range())
    }

    /// Creates a deterministic builder.
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(
            StdRng::seed_from_u64(seed),
            GraphConfig::default().coordinate_range(),
        )
    }

    /// Creates a builder from validated settings.
    pub fn from_config(config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::from_parts(rng, config.coordinate_range()))
    }
}

impl<R: Rng> GraphBuilder<R> {
    /// Creates a builder drawing coordinates from `rng` over `range`.
    ///
    /// Fails with `InvalidConfig` if `range` is empty or not finite.
    pub fn with_rng(rng: R, range: Range<f64>) -> Result<Self> {
        validate_range(&range)?;
        Ok(Self::from_parts(rng, range))
    }

    /// `range` must already be validated.
    fn from_parts(rng: R, range: Range<f64>) -> Self {
        Self {
            graph: SocialGraph::new(),
            rng,
            range,
        }
    }

    /// Adds an undirected edge between two named people.
    ///
    /// Unseen names are registered on the fly. An empty endpoint name is
    /// rejected and nothing is inserted.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) -> Result<()> {
        if source.is_empty() || target.is_empty() {
            return Err(GraphError::MalformedInput(format!(
                "empty endpoint in edge {:?} -> {:?}",
                source, target
            )));
        }

        let (from, to) =
            self.graph
                .insert_edge(source, target, weight, &mut self.rng, &self.range);
        debug!("edge {} ({}) -- {} ({}) w={}", source, from, target, to, weight);
        Ok(())
    }

    /// Adds one ingested record.
    pub fn add_record(&mut self, record: &EdgeRecord) -> Result<()> {
        self.add_edge(&record.source, &record.target, record.weight)
    }

    /// Feeds a whole record stream, skipping malformed records.
    pub fn add_records<I>(&mut self, records: I) -> LoadReport
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut report = LoadReport::default();
        for record in records {
            match self.add_record(&record) {
                Ok(()) => report.accepted += 1,
                Err(e) => {
                    warn!("Skipping record: {}", e);
                    report.skipped += 1;
                }
            }
        }
        info!(
            "Loaded {} edges ({} skipped), {} nodes",
            report.accepted,
            report.skipped,
            self.graph.node_count()
        );
        report
    }

    /// Number of nodes registered so far.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Finishes building and returns the read-only graph.
    pub fn build(self) -> SocialGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_adds_nodes() {
        let mut builder = GraphBuilder::seeded(1);
        builder.add_edge("foo", "bar", 1.0).unwrap();
        builder.add_edge("bar", "baz", 1.0).unwrap();

        let graph = builder.build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_first_seen_order() {
        let mut builder = GraphBuilder::seeded(1);
        builder.add_edge("c", "a", 1.0).unwrap();
        builder.add_edge("b", "a", 1.0).unwrap();

        let graph = builder.build();
        assert_eq!(graph.lookup("c"), Ok(0));
        assert_eq!(graph.lookup("a"), Ok(1));
        assert_eq!(graph.lookup("b"), Ok(2));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut builder = GraphBuilder::seeded(1);

        assert!(matches!(
            builder.add_edge("", "bar", 1.0),
            Err(GraphError::MalformedInput(_))
        ));
        assert!(builder.add_edge("foo", "", 1.0).is_err());
        assert_eq!(builder.node_count(), 0);
    }

    #[test]
    fn test_add_records_skips_malformed() {
        let mut builder = GraphBuilder::seeded(1);
        let report = builder.add_records(vec![
            EdgeRecord::new("a", "b", 1.0),
            EdgeRecord::new("", "b", 1.0),
            EdgeRecord::new("b", "c", 2.0),
        ]);

        assert_eq!(
            report,
            LoadReport {
                accepted: 2,
                skipped: 1
            }
        );
        assert_eq!(builder.build().node_count(), 3);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let run = |seed| {
            let mut builder = GraphBuilder::seeded(seed);
            builder.add_edge("a", "b", 1.0).unwrap();
            builder.add_edge("b", "c", 1.0).unwrap();
            builder.build().nodes().map(|n| n.loc).collect::<Vec<_>>()
        };

        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8));
    }

    #[test]
    fn test_from_config_range() {
        let config = GraphConfig {
            coordinate_min: -1.0,
            coordinate_max: 1.0,
            seed: Some(3),
        };
        let mut builder = GraphBuilder::from_config(&config).unwrap();
        for i in 0..50 {
            builder.add_edge(&format!("u{}", i), "hub", 1.0).unwrap();
        }

        let graph = builder.build();
        assert!(graph
            .nodes()
            .all(|n| (-1.0..1.0).contains(&n.loc.x) && (-1.0..1.0).contains(&n.loc.y)));
    }

    #[test]
    fn test_with_rng_custom_source() {
        let mut builder = GraphBuilder::with_rng(StdRng::seed_from_u64(5), 50.0..60.0).unwrap();
        builder.add_edge("a", "b", 1.0).unwrap();

        let graph = builder.build();
        assert!(graph
            .nodes()
            .all(|n| (50.0..60.0).contains(&n.loc.x) && (50.0..60.0).contains(&n.loc.y)));
    }

    #[test]
    fn test_with_rng_rejects_bad_range() {
        let empty = GraphBuilder::with_rng(StdRng::seed_from_u64(5), 1.0..1.0);
        assert!(matches!(empty, Err(GraphError::InvalidConfig(_))));

        let nan = GraphBuilder::with_rng(StdRng::seed_from_u64(5), f64::NAN..1.0);
        assert!(matches!(nan, Err(GraphError::InvalidConfig(_))));

        let infinite = GraphBuilder::with_rng(StdRng::seed_from_u64(5), 0.0..f64::INFINITY);
        assert!(infinite.is_err());
    }

    #[test]
    fn test_from_config_rejects_bad_range() {
        let config = GraphConfig {
            coordinate_min: 1.0,
            coordinate_max: 0.0,
            seed: None,
        };
        assert!(GraphBuilder::from_config(&config).is_err());
    }
}
