//! Proximity search over node coordinates.

use crate::error::Result;
use crate::graph::SocialGraph;
use crate::query::NearbyPerson;
use tracing::debug;

impl SocialGraph {
    /// Finds everyone whose coordinate lies within `radius` of `person`.
    ///
    /// The boundary is inclusive. The origin itself is never reported.
    /// Results are sorted by ascending distance; equal distances keep
    /// identity order. This is a linear scan over all nodes.
    pub fn nearby(&self, person: &str, radius: f64) -> Result<Vec<NearbyPerson>> {
        let origin = self.person(person)?;
        debug!("nearby: {} (radius {})", person, radius);

        let mut result: Vec<NearbyPerson> = self
            .nodes()
            .filter(|n| n.id != origin.id)
            .filter_map(|n| {
                let distance = origin.loc.distance(&n.loc);
                (distance <= radius).then(|| NearbyPerson {
                    name: n.name.clone(),
                    distance,
                })
            })
            .collect();

        result.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphError;
    use crate::graph::SocialGraph;
    use crate::GraphBuilder;

    fn make_graph(n: usize) -> SocialGraph {
        let mut builder = GraphBuilder::seeded(11);
        for i in 1..n {
            builder.add_edge("p0", &format!("p{}", i), 1.0).unwrap();
        }
        builder.build()
    }

    fn distance_between(graph: &SocialGraph, a: &str, b: &str) -> f64 {
        let a = graph.node(graph.lookup(a).unwrap()).unwrap().loc;
        let b = graph.node(graph.lookup(b).unwrap()).unwrap().loc;
        a.distance(&b)
    }

    #[test]
    fn test_boundary_inclusive() {
        let graph = make_graph(5);
        let d = distance_between(&graph, "p0", "p3");

        let at = graph.nearby("p0", d).unwrap();
        assert!(at.iter().any(|p| p.name == "p3"));

        let below = graph.nearby("p0", d - 1e-9).unwrap();
        assert!(!below.iter().any(|p| p.name == "p3"));
    }

    #[test]
    fn test_excludes_origin() {
        let graph = make_graph(5);
        let result = graph.nearby("p0", 1_000.0).unwrap();
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|p| p.name != "p0"));
    }

    #[test]
    fn test_sorted_by_distance() {
        let graph = make_graph(30);
        let result = graph.nearby("p0", 1_000.0).unwrap();
        assert!(result.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_empty_when_radius_negative() {
        let graph = make_graph(5);
        assert!(graph.nearby("p0", -1.0).unwrap().is_empty());
        assert!(graph.nearby("p0", f64::NAN).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_person() {
        let graph = make_graph(3);
        assert_eq!(
            graph.nearby("ghost", 10.0),
            Err(GraphError::NotFound("ghost".to_string()))
        );
    }
}
