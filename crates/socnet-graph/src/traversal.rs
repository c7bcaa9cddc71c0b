//! Breadth-first traversals: shortest hop path and bounded reachability.
//!
//! Edge weights are ignored here; distance is the number of hops. Neighbors
//! are expanded in adjacency insertion order, so among equally short paths
//! the one discovered first wins.

use crate::error::{GraphError, Result};
use crate::graph::SocialGraph;
use crate::query::{PathResult, ReachablePerson};
use crate::registry::NodeId;
use std::collections::VecDeque;
use tracing::debug;

impl SocialGraph {
    /// Finds a minimum-hop path from `from` to `to`.
    ///
    /// Returns `NotFound` if either name is unknown and `NoPath` if `to` is
    /// unreachable. A node's path to itself is `[node]` with zero hops.
    pub fn shortest_hop_path(&self, from: &str, to: &str) -> Result<PathResult> {
        let start = self.lookup(from)?;
        let target = self.lookup(to)?;
        debug!("shortest_hop_path: {} -> {}", from, to);

        let n = self.node_count();
        let mut visited = vec![false; n];
        // First-discovered predecessor; `None` for the start and for
        // unvisited nodes.
        let mut parent: Vec<Option<NodeId>> = vec![None; n];
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == target {
                break;
            }
            for edge in self.neighbors(current) {
                if !visited[edge.target] {
                    visited[edge.target] = true;
                    parent[edge.target] = Some(current);
                    queue.push_back(edge.target);
                }
            }
        }

        if !visited[target] {
            return Err(GraphError::NoPath {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let mut ids = vec![target];
        let mut current = target;
        while let Some(prev) = parent[current] {
            ids.push(prev);
            current = prev;
        }
        ids.reverse();

        let hops = ids.len() - 1;
        let path = ids
            .into_iter()
            .map(|id| self.name(id).to_string())
            .collect();
        Ok(PathResult { path, hops })
    }

    /// Finds everyone within `max_hops` hops of `person`.
    ///
    /// Each node is reported once at its minimum hop count. Nodes at exactly
    /// `max_hops` are included but not expanded. The origin is excluded.
    /// Results are ordered by hop count, then identity.
    pub fn reachable_within_hops(
        &self,
        person: &str,
        max_hops: usize,
    ) -> Result<Vec<ReachablePerson>> {
        let start = self.lookup(person)?;
        debug!("reachable_within_hops: {} (max {})", person, max_hops);

        let mut dist: Vec<Option<usize>> = vec![None; self.node_count()];
        let mut queue = VecDeque::new();

        dist[start] = Some(0);
        queue.push_back((start, 0usize));

        while let Some((current, depth)) = queue.pop_front() {
            if depth >= max_hops {
                continue;
            }
            for edge in self.neighbors(current) {
                if dist[edge.target].is_none() {
                    dist[edge.target] = Some(depth + 1);
                    queue.push_back((edge.target, depth + 1));
                }
            }
        }

        let mut reached: Vec<(usize, NodeId)> = dist
            .iter()
            .enumerate()
            .filter(|&(id, _)| id != start)
            .filter_map(|(id, d)| d.map(|hops| (hops, id)))
            .collect();
        reached.sort_unstable();

        Ok(reached
            .into_iter()
            .map(|(hops, id)| ReachablePerson {
                name: self.name(id).to_string(),
                hops,
            })
            .collect())
    }
}
