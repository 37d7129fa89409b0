use super::dfs::depth_first_search_with;
use super::dijkstra::shortest_path_with;
use super::interrupt::Interrupt;
use super::kruskal::min_spanning_tree_kruskal_with;
use super::prim::max_spanning_tree_prim_with;
use crate::error::AlgorithmError;
use crate::model::{Markers, VertexId};
use crate::Graph;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Algorithm {
    Dfs { start: VertexId },
    Dijkstra { source: VertexId, destination: VertexId },
    Prim,
    Kruskal,
}

/// What a run leaves on screen: the edges to highlight and the summed weight
/// of those edges (path cost for Dijkstra).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub markers: Markers,
    pub total: i64,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dfs { .. } => "dfs",
            Algorithm::Dijkstra { .. } => "dijkstra",
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
        }
    }

    /// Vertices the run needs to exist before it makes sense to start it.
    pub fn endpoints(&self) -> Vec<VertexId> {
        match *self {
            Algorithm::Dfs { start } => vec![start],
            Algorithm::Dijkstra { source, destination } => vec![source, destination],
            Algorithm::Prim | Algorithm::Kruskal => Vec::new(),
        }
    }

    /// Runs against `graph` and converts the result to markers.
    ///
    /// `Ok(None)` means there is nothing to highlight: an unreachable
    /// destination, or a trivial path of a single vertex.
    pub fn compute(
        &self,
        graph: &Graph,
        stop: &impl Interrupt,
    ) -> Result<Option<RunOutcome>, AlgorithmError> {
        match *self {
            Algorithm::Dfs { start } => {
                let pairs = depth_first_search_with(graph, start, stop)?;
                let markers: Markers = pairs
                    .iter()
                    .filter(|p| !p.is_root())
                    .filter_map(|p| graph.find_edge(p.parent, p.child))
                    .collect();
                Ok(Some(outcome(markers)))
            }
            Algorithm::Dijkstra { source, destination } => {
                let Some(path) = shortest_path_with(graph, source, destination, stop)? else {
                    return Ok(None);
                };
                if path.vertices.len() < 2 {
                    return Ok(None);
                }
                let markers: Markers = path
                    .vertices
                    .windows(2)
                    .filter_map(|w| graph.find_edge(w[0], w[1]))
                    .collect();
                Ok(Some(RunOutcome { markers, total: path.cost }))
            }
            Algorithm::Prim => {
                let forest = max_spanning_tree_prim_with(graph, stop)?;
                Ok(Some(RunOutcome { markers: forest.edges().to_vec(), total: forest.total_weight() }))
            }
            Algorithm::Kruskal => {
                let forest = min_spanning_tree_kruskal_with(graph, stop)?;
                Ok(Some(RunOutcome { markers: forest.edges().to_vec(), total: forest.total_weight() }))
            }
        }
    }
}

fn outcome(markers: Markers) -> RunOutcome {
    let total = markers.iter().map(|e| i64::from(e.weight)).sum();
    RunOutcome { markers, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Edge;

    fn chain(directed: bool) -> Graph {
        let mut g = Graph::new(directed);
        for v in 1..=3 {
            g.add_vertex(v);
        }
        g.add_edge(1, 2, 2);
        g.add_edge(2, 3, 3);
        g
    }

    #[test]
    fn dfs_markers_skip_the_root() {
        let out = Algorithm::Dfs { start: 1 }.compute(&chain(true), &()).unwrap().unwrap();
        assert_eq!(out.markers, vec![Edge::new(1, 2, 2), Edge::new(2, 3, 3)]);
    }

    #[test]
    fn dijkstra_markers_use_stored_orientation() {
        let out = Algorithm::Dijkstra { source: 3, destination: 1 }
            .compute(&chain(false), &())
            .unwrap()
            .unwrap();
        assert_eq!(out.total, 5);
        assert_eq!(out.markers, vec![Edge::new(2, 3, 3), Edge::new(1, 2, 2)]);
    }

    #[test]
    fn trivial_and_unreachable_paths_highlight_nothing() {
        let g = chain(true);
        assert_eq!(Algorithm::Dijkstra { source: 2, destination: 2 }.compute(&g, &()), Ok(None));
        assert_eq!(Algorithm::Dijkstra { source: 3, destination: 1 }.compute(&g, &()), Ok(None));
    }

    #[test]
    fn serde_shape_is_tagged() {
        let v = serde_json::to_value(Algorithm::Dijkstra { source: 1, destination: 4 }).unwrap();
        assert_eq!(v, serde_json::json!({"kind": "dijkstra", "source": 1, "destination": 4}));
    }
}
