use super::forest::SpanningForest;
use super::interrupt::Interrupt;
use crate::disjoint_set::DisjointSetForest;
use crate::error::AlgorithmError;
use crate::model::{Edge, VertexId};
use crate::Graph;
use std::collections::{BTreeMap, HashSet};

/// Kruskal minimum spanning forest. Undirected graphs only.
///
/// Edges are stably sorted by weight, so ties fall back to the graph's
/// (tail, head) enumeration order.
/// The chosen edges are then rooted at the smallest vertex of each component
/// to produce the child -> parent map.
pub fn min_spanning_tree_kruskal(graph: &Graph) -> Result<SpanningForest, AlgorithmError> {
    min_spanning_tree_kruskal_with(graph, &())
}

pub fn min_spanning_tree_kruskal_with(
    graph: &Graph,
    stop: &impl Interrupt,
) -> Result<SpanningForest, AlgorithmError> {
    if graph.is_directed() {
        return Err(AlgorithmError::DirectedGraph {
            algorithm: "Kruskal's algorithm",
        });
    }
    let mut edges: Vec<Edge> = graph.edges().copied().collect();
    edges.sort_by_key(|e| e.weight);

    let mut sets = DisjointSetForest::new();
    for v in graph.vertices() {
        sets.make_set(v);
    }
    let mut chosen: BTreeMap<VertexId, Vec<Edge>> = BTreeMap::new();
    for e in edges {
        if stop.interrupted() {
            return Err(AlgorithmError::Cancelled);
        }
        if sets.union(&e.tail, &e.head) {
            chosen.entry(e.tail).or_default().push(e);
            chosen.entry(e.head).or_default().push(e);
        }
        if sets.component_count() == 1 {
            break;
        }
    }

    let mut forest = SpanningForest::default();
    let mut seen: HashSet<VertexId> = HashSet::new();
    for root in graph.vertices() {
        if !seen.insert(root) {
            continue;
        }
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            for e in chosen.get(&v).into_iter().flatten() {
                let Some(next) = e.opposite(v) else { continue };
                if seen.insert(next) {
                    forest.attach(next, v, *e);
                    stack.push(next);
                }
            }
        }
    }
    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        let mut g = Graph::new(false);
        for v in 1..=4 {
            g.add_vertex(v);
        }
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 2);
        g.add_edge(3, 4, 3);
        g.add_edge(4, 1, 4);
        g
    }

    #[test]
    fn picks_lightest_edges() {
        let f = min_spanning_tree_kruskal(&square()).unwrap();
        assert_eq!(f.len(), 3);
        assert_eq!(f.total_weight(), 6);
        assert!(f.edges().iter().all(|e| e.weight < 4));
    }

    #[test]
    fn every_non_root_has_one_parent() {
        let f = min_spanning_tree_kruskal(&square()).unwrap();
        assert_eq!(f.parents().len(), 3);
        assert_eq!(f.parent_of(1), None);
        for child in 2..=4 {
            assert!(f.parent_of(child).is_some());
        }
    }

    #[test]
    fn isolated_vertices_stay_roots() {
        let mut g = square();
        g.add_vertex(8);
        let f = min_spanning_tree_kruskal(&g).unwrap();
        assert_eq!(f.len(), 3);
        assert_eq!(f.parent_of(8), None);
    }

    #[test]
    fn rejects_directed_graph() {
        let mut g = square();
        g.set_directed(true);
        assert_eq!(
            min_spanning_tree_kruskal(&g),
            Err(AlgorithmError::DirectedGraph {
                algorithm: "Kruskal's algorithm"
            })
        );
    }
}
