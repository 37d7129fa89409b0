use super::forest::SpanningForest;
use super::interrupt::Interrupt;
use crate::error::AlgorithmError;
use crate::model::{Edge, VertexId};
use crate::Graph;
use std::collections::HashSet;

/// Prim-style growth that always takes the heaviest edge leaving the labeled
/// set, i.e. a maximum-weight spanning forest. Undirected graphs only.
///
/// Each component is seeded from its smallest unlabeled vertex; equal weights
/// keep the order in which edges became candidates.
pub fn max_spanning_tree_prim(graph: &Graph) -> Result<SpanningForest, AlgorithmError> {
    max_spanning_tree_prim_with(graph, &())
}

pub fn max_spanning_tree_prim_with(
    graph: &Graph,
    stop: &impl Interrupt,
) -> Result<SpanningForest, AlgorithmError> {
    if graph.is_directed() {
        return Err(AlgorithmError::DirectedGraph {
            algorithm: "Prim's algorithm",
        });
    }
    let mut forest = SpanningForest::default();
    let mut labeled: HashSet<VertexId> = HashSet::new();
    let mut candidates: Vec<Edge> = Vec::new();

    for seed in graph.vertices() {
        if stop.interrupted() {
            return Err(AlgorithmError::Cancelled);
        }
        if !labeled.insert(seed) {
            continue;
        }
        candidates.extend(graph.edges_of(seed).copied());
        while !candidates.is_empty() {
            if stop.interrupted() {
                return Err(AlgorithmError::Cancelled);
            }
            candidates.sort_by(|a, b| b.weight.cmp(&a.weight));
            let open = candidates
                .iter()
                .position(|e| !labeled.contains(&e.head) || !labeled.contains(&e.tail));
            let Some(i) = open else {
                candidates.clear();
                break;
            };
            // everything heavier than the pick is already inside the tree
            candidates.drain(..i);
            let e = candidates.remove(0);
            let (child, parent) = if labeled.contains(&e.head) {
                (e.tail, e.head)
            } else {
                (e.head, e.tail)
            };
            labeled.insert(child);
            forest.attach(child, parent, e);
            candidates.extend(graph.edges_of(child).copied());
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
    fn picks_heaviest_edges() {
        let f = max_spanning_tree_prim(&square()).unwrap();
        assert_eq!(f.len(), 3);
        assert_eq!(f.total_weight(), 9);
        assert_eq!(f.parent_of(4), Some(1));
        assert_eq!(f.parent_of(1), None);
    }

    #[test]
    fn disconnected_graph_gives_forest() {
        let mut g = square();
        g.add_vertex(5);
        g.add_vertex(6);
        g.add_edge(5, 6, 7);
        let f = max_spanning_tree_prim(&g).unwrap();
        assert_eq!(f.len(), 4);
        assert_eq!(f.parent_of(6), Some(5));
    }

    #[test]
    fn rejects_directed_graph() {
        let mut g = square();
        g.set_directed(true);
        assert!(matches!(
            max_spanning_tree_prim(&g),
            Err(AlgorithmError::DirectedGraph { .. })
        ));
    }
}
