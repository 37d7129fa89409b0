use super::interrupt::Interrupt;
use crate::error::AlgorithmError;
use crate::model::VertexId;
use crate::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A tree branch: `child` was discovered from `parent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexPair {
    pub parent: VertexId,
    pub child: VertexId,
}

impl VertexPair {
    pub const fn new(parent: VertexId, child: VertexId) -> Self {
        VertexPair { parent, child }
    }
    pub fn is_root(&self) -> bool {
        self.parent == self.child
    }
}

/// Iterative depth-first search from `start`.
///
/// Returns branches in discovery order, starting with the synthetic
/// `(start, start)` root pair. Only vertices reachable from `start` appear;
/// an unknown `start` yields an empty list.
pub fn depth_first_search(graph: &Graph, start: VertexId) -> Vec<VertexPair> {
    depth_first_search_with(graph, start, &()).unwrap_or_default()
}

pub fn depth_first_search_with(
    graph: &Graph,
    start: VertexId,
    stop: &impl Interrupt,
) -> Result<Vec<VertexPair>, AlgorithmError> {
    let mut tree = Vec::new();
    if !graph.has_vertex(start) {
        return Ok(tree);
    }
    let mut discovered: HashSet<VertexId> = HashSet::new();
    let mut stack = vec![VertexPair::new(start, start)];
    while let Some(pair) = stack.pop() {
        if stop.interrupted() {
            return Err(AlgorithmError::Cancelled);
        }
        if !discovered.insert(pair.child) {
            continue;
        }
        tree.push(pair);
        let v = pair.child;
        for e in graph.edges_of(v) {
            if let Some(next) = e.opposite(v) {
                if !discovered.contains(&next) {
                    stack.push(VertexPair::new(v, next));
                }
            }
        }
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(directed: bool) -> Graph {
        let mut g = Graph::new(directed);
        for v in 1..=4 {
            g.add_vertex(v);
        }
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);
        g.add_edge(4, 3, 1);
        g
    }

    #[test]
    fn root_pair_comes_first() {
        let tree = depth_first_search(&path(false), 1);
        assert_eq!(tree[0], VertexPair::new(1, 1));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn directed_search_follows_out_edges_only() {
        let tree = depth_first_search(&path(true), 1);
        let children: Vec<_> = tree.iter().map(|p| p.child).collect();
        assert_eq!(children, vec![1, 2, 3]);
    }

    #[test]
    fn unknown_start_is_empty() {
        assert!(depth_first_search(&path(false), 9).is_empty());
    }

    #[test]
    fn raised_interrupt_cancels() {
        let flag = std::sync::atomic::AtomicBool::new(true);
        assert_eq!(
            depth_first_search_with(&path(false), 1, &flag),
            Err(AlgorithmError::Cancelled)
        );
    }
}
