//! Degree ranking and population segmentation.
//!
//! Bands are cut purely by rank position: the first `n/5` are core, up to
//! `3n/5` are active, the rest are edge. Floor division means rounding
//! favors the earlier bands.

use crate::graph::SocialGraph;
use crate::query::{PersonStats, Segmentation};
use crate::registry::NodeId;
use tracing::debug;

/// Band boundaries `(core_end, active_end)` for a population of `n`.
pub fn band_bounds(n: usize) -> (usize, usize) {
    (n / 5, n * 3 / 5)
}

impl SocialGraph {
    /// All nodes as `(degree, id)`, highest degree first.
    ///
    /// Equal degrees are ordered by higher identity first. The key is
    /// unique per node so the order is fully determined.
    pub fn degree_ranking(&self) -> Vec<(usize, NodeId)> {
        let mut ranked: Vec<(usize, NodeId)> = (0..self.node_count())
            .map(|id| (self.degree(id), id))
            .collect();
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        ranked
    }

    /// Splits the population into core / active / edge bands by degree rank.
    pub fn degree_segmentation(&self) -> Segmentation {
        let ranked = self.degree_ranking();
        let (core_end, active_end) = band_bounds(ranked.len());
        debug!(
            "degree_segmentation: {} nodes, bands at {} / {}",
            ranked.len(),
            core_end,
            active_end
        );

        let to_stats = |&(degree, id): &(usize, NodeId)| PersonStats {
            name: self.name(id).to_string(),
            degree,
            weight_sum: self.neighbors(id).iter().map(|e| e.weight).sum(),
        };

        Segmentation {
            core: ranked[..core_end].iter().map(to_stats).collect(),
            active: ranked[core_end..active_end].iter().map(to_stats).collect(),
            edge: ranked[active_end..].iter().map(to_stats).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;

    fn make_star(leaves: usize) -> SocialGraph {
        let mut builder = GraphBuilder::seeded(0);
        for i in 1..=leaves {
            builder.add_edge("hub", &format!("leaf{}", i), 1.0).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_band_bounds() {
        assert_eq!(band_bounds(0), (0, 0));
        assert_eq!(band_bounds(4), (0, 2));
        assert_eq!(band_bounds(5), (1, 3));
        assert_eq!(band_bounds(10), (2, 6));
        assert_eq!(band_bounds(7), (1, 4));
    }

    #[test]
    fn test_band_sizes() {
        for n in 1..40 {
            let g = make_star(n);
            let total = g.node_count();
            let seg = g.degree_segmentation();
            let (core_end, active_end) = band_bounds(total);

            assert_eq!(seg.core.len(), core_end);
            assert_eq!(seg.active.len(), active_end - core_end);
            assert_eq!(seg.edge.len(), total - active_end);
            assert_eq!(seg.core.len() + seg.active.len() + seg.edge.len(), total);
        }
    }

    #[test]
    fn test_hub_is_core() {
        let g = make_star(9);
        let seg = g.degree_segmentation();
        assert_eq!(seg.core.len(), 2);
        assert_eq!(seg.core[0].name, "hub");
        assert_eq!(seg.core[0].degree, 9);
    }

    #[test]
    fn test_ties_broken_by_higher_identity() {
        let g = make_star(4);
        let ranked = g.degree_ranking();
        let ids: Vec<NodeId> = ranked.iter().map(|&(_, id)| id).collect();
        // hub = 0 (degree 4), leaves 1..=4 all degree 1.
        assert_eq!(ids, vec![0, 4, 3, 2, 1]);
    }

    #[test]
    fn test_parallel_and_self_loops_count() {
        let mut builder = GraphBuilder::seeded(0);
        builder.add_edge("a", "b", 1.0).unwrap();
        builder.add_edge("a", "b", 2.0).unwrap();
        builder.add_edge("c", "c", 4.0).unwrap();
        let g = builder.build();

        let ranked = g.degree_ranking();
        assert_eq!(ranked, vec![(2, 2), (2, 1), (2, 0)]);
    }

    #[test]
    fn test_weight_sum() {
        let mut builder = GraphBuilder::seeded(0);
        builder.add_edge("a", "b", 1.5).unwrap();
        builder.add_edge("a", "c", 2.5).unwrap();
        builder.add_edge("d", "e", 1.0).unwrap();
        builder.add_edge("d", "f", 1.0).unwrap();
        let g = builder.build();

        let seg = g.degree_segmentation();
        // 6 nodes: core 1, active 2, edge 3. "d" (id 3) outranks "a" (id 0).
        assert_eq!(seg.core[0].name, "d");
        assert_eq!(seg.active[0].name, "a");
        assert_eq!(seg.active[0].weight_sum, 4.0);
    }

    #[test]
    fn test_empty_graph() {
        let g = GraphBuilder::seeded(0).build();
        assert_eq!(g.degree_segmentation(), Segmentation::default());
    }
}
