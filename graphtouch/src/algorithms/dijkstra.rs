use super::interrupt::Interrupt;
use crate::error::AlgorithmError;
use crate::model::VertexId;
use crate::Graph;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Vertices from source to destination inclusive.
    pub vertices: Vec<VertexId>,
    /// Sum of the traversed edge weights.
    pub cost: i64,
}

/// Dijkstra with an O(V^2) "closest unvisited vertex" scan.
///
/// Weights are expected to be non-negative; negative weights give undefined
/// paths. `None` when `destination` is unreachable or either endpoint is
/// unknown. `source == destination` is the trivial path of cost 0.
pub fn shortest_path(graph: &Graph, source: VertexId, destination: VertexId) -> Option<ShortestPath> {
    shortest_path_with(graph, source, destination, &()).unwrap_or_default()
}

pub fn shortest_path_with(
    graph: &Graph,
    source: VertexId,
    destination: VertexId,
    stop: &impl Interrupt,
) -> Result<Option<ShortestPath>, AlgorithmError> {
    if !graph.has_vertex(source) || !graph.has_vertex(destination) {
        return Ok(None);
    }
    let mut unvisited: BTreeSet<VertexId> = graph.vertices().collect();
    let mut dist: HashMap<VertexId, i64> = HashMap::new();
    let mut prev: HashMap<VertexId, VertexId> = HashMap::new();
    dist.insert(source, 0);

    loop {
        if stop.interrupted() {
            return Err(AlgorithmError::Cancelled);
        }
        let mut current: Option<(VertexId, i64)> = None;
        for v in &unvisited {
            if let Some(&d) = dist.get(v) {
                if current.map_or(true, |(_, best)| d < best) {
                    current = Some((*v, d));
                }
            }
        }
        let Some((v, d)) = current else { break };
        unvisited.remove(&v);
        if v == destination {
            break;
        }
        for e in graph.edges_of(v) {
            let Some(next) = e.opposite(v) else { continue };
            if !unvisited.contains(&next) {
                continue;
            }
            let alt = d + i64::from(e.weight);
            if dist.get(&next).map_or(true, |&known| alt < known) {
                dist.insert(next, alt);
                prev.insert(next, v);
            }
        }
    }

    let Some(&cost) = dist.get(&destination) else {
        return Ok(None);
    };
    let mut vertices = vec![destination];
    let mut node = destination;
    while node != source {
        match prev.get(&node) {
            Some(&p) => {
                vertices.push(p);
                node = p;
            }
            None => return Ok(None),
        }
    }
    vertices.reverse();
    Ok(Some(ShortestPath { vertices, cost }))
}
