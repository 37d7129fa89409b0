use crate::model::{Edge, VertexId, Weight};
use std::collections::BTreeMap;

// Every edge is recorded twice: in its tail's `out` list and its head's `inc`
// list. Removing a vertex or asking whether two vertices connect only ever
// touches the lists of the vertices involved.
//
// `out` is kept ordered by head and `inc` by tail, so a given edge set always
// enumerates the same way no matter in which order it was built or restored.
#[derive(Clone, Debug, Default, PartialEq)]
struct Adjacency {
    out: Vec<Edge>,
    inc: Vec<Edge>,
}

impl Adjacency {
    fn insert(&mut self, edge: Edge, outgoing: bool) {
        if outgoing {
            let i = self.out.partition_point(|x| x.head < edge.head);
            self.out.insert(i, edge);
        } else {
            let i = self.inc.partition_point(|x| x.tail < edge.tail);
            self.inc.insert(i, edge);
        }
    }

    fn reorder(&mut self) {
        self.out.sort_by_key(|e| e.head);
        self.inc.sort_by_key(|e| e.tail);
    }
}

/// Weighted graph keyed by vertex number with a dual (tail/head) adjacency index.
///
/// `directed` is a mode flag only: switching it never rewrites stored edges,
/// it changes how lookups and adjacency iteration treat them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    adj: BTreeMap<VertexId, Adjacency>,
    directed: bool,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Graph {
            adj: BTreeMap::new(),
            directed,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    // Vertices
    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        if self.adj.contains_key(&v) {
            return false;
        }
        self.adj.insert(v, Adjacency::default());
        true
    }
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.adj.contains_key(&v)
    }
    /// Largest vertex number, 0 for an empty graph.
    pub fn max_number(&self) -> VertexId {
        self.adj.keys().next_back().copied().unwrap_or(0)
    }
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adj.keys().copied()
    }

    /// Drops the vertex and scrubs every edge touching it from its neighbours' lists.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        let Some(own) = self.adj.remove(&v) else {
            return false;
        };
        for e in &own.out {
            if let Some(n) = self.adj.get_mut(&e.head) {
                n.inc.retain(|x| x != e);
            }
        }
        for e in &own.inc {
            if let Some(n) = self.adj.get_mut(&e.tail) {
                n.out.retain(|x| x != e);
            }
        }
        true
    }

    /// Re-keys `old` as `new`, keeping every incident edge and its weight.
    /// No-op (returns false) if `old` is missing or `new` is taken.
    pub fn change_vertex_number(&mut self, old: VertexId, new: VertexId) -> bool {
        if old == new || !self.adj.contains_key(&old) || self.adj.contains_key(&new) {
            return false;
        }
        let Some(mut own) = self.adj.remove(&old) else {
            return false;
        };
        let rename = |x: VertexId| if x == old { new } else { x };
        for e in own.out.iter_mut().chain(own.inc.iter_mut()) {
            let prev = *e;
            e.tail = rename(e.tail);
            e.head = rename(e.head);
            // mirror the rename in the neighbour's opposite list
            let neighbour = if prev.tail == old { prev.head } else { prev.tail };
            if let Some(n) = self.adj.get_mut(&neighbour) {
                for x in n.out.iter_mut().chain(n.inc.iter_mut()) {
                    if *x == prev {
                        x.tail = rename(x.tail);
                        x.head = rename(x.head);
                    }
                }
                n.reorder();
            }
        }
        self.adj.insert(new, own);
        true
    }

    // Edges
    /// Adds `tail -> head`. Fails if either endpoint is absent, for self loops,
    /// and for an existing connection: the exact edge when directed, either
    /// orientation when undirected.
    pub fn add_edge(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> bool {
        if tail == head || !self.has_vertex(tail) || !self.has_vertex(head) {
            return false;
        }
        if self.find_edge(tail, head).is_some() {
            return false;
        }
        self.insert(Edge::new(tail, head, weight));
        true
    }

    /// Re-inserts an edge exactly as it was stored, bypassing the duplicate
    /// rules. Undo uses this to restore states the current mode would reject
    /// (e.g. both orientations kept from directed mode).
    pub(crate) fn restore_edge(&mut self, edge: Edge) -> bool {
        if !self.has_vertex(edge.tail) || !self.has_vertex(edge.head) {
            return false;
        }
        if self.edge_exact(edge.tail, edge.head).is_some() {
            return false;
        }
        self.insert(edge);
        true
    }

    fn insert(&mut self, edge: Edge) {
        if let Some(a) = self.adj.get_mut(&edge.tail) {
            a.insert(edge, true);
        }
        if let Some(a) = self.adj.get_mut(&edge.head) {
            a.insert(edge, false);
        }
    }

    /// Removes the edge `find_edge` resolves to and returns it.
    pub fn remove_edge(&mut self, tail: VertexId, head: VertexId) -> Option<Edge> {
        let edge = self.find_edge(tail, head)?;
        self.detach(edge);
        Some(edge)
    }

    /// Removes exactly the stored `tail -> head` edge regardless of mode.
    pub(crate) fn remove_edge_exact(&mut self, tail: VertexId, head: VertexId) -> Option<Edge> {
        let edge = self.edge_exact(tail, head)?;
        self.detach(edge);
        Some(edge)
    }

    fn detach(&mut self, edge: Edge) {
        if let Some(a) = self.adj.get_mut(&edge.tail) {
            a.out.retain(|x| *x != edge);
        }
        if let Some(a) = self.adj.get_mut(&edge.head) {
            a.inc.retain(|x| *x != edge);
        }
    }

    /// The stored `tail -> head` edge, ignoring the mode.
    pub fn edge_exact(&self, tail: VertexId, head: VertexId) -> Option<Edge> {
        self.adj
            .get(&tail)?
            .out
            .iter()
            .find(|e| e.head == head)
            .copied()
    }

    /// Mode-aware lookup: the exact edge first, then (undirected only) the
    /// reverse orientation.
    pub fn find_edge(&self, tail: VertexId, head: VertexId) -> Option<Edge> {
        if let Some(e) = self.edge_exact(tail, head) {
            return Some(e);
        }
        if self.directed {
            return None;
        }
        self.adj
            .get(&tail)?
            .inc
            .iter()
            .find(|e| e.tail == head)
            .copied()
    }

    pub fn adjacent(&self, tail: VertexId, head: VertexId) -> bool {
        self.find_edge(tail, head).is_some()
    }

    /// Sets the weight of the stored `tail -> head` edge in both indices and
    /// returns the previous weight.
    pub fn set_edge_weight(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> Option<Weight> {
        let prev = self.edge_exact(tail, head)?;
        for v in [tail, head] {
            if let Some(a) = self.adj.get_mut(&v) {
                for e in a.out.iter_mut().chain(a.inc.iter_mut()) {
                    if *e == prev {
                        e.weight = weight;
                    }
                }
            }
        }
        Some(prev.weight)
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(|a| a.out.len()).sum()
    }

    /// Every stored edge once, ordered by (tail, head).
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adj.values().flat_map(|a| a.out.iter())
    }

    /// Edges traversable from `v`: its out-edges by head, then (undirected
    /// only) its in-edges by tail. Empty for an unknown vertex.
    pub fn edges_of(&self, v: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        let undirected = !self.directed;
        self.adj.get(&v).into_iter().flat_map(move |a| {
            let inc: &[Edge] = if undirected { &a.inc } else { &[] };
            a.out.iter().chain(inc.iter())
        })
    }

    /// Every edge touching `v` on either index side, regardless of mode.
    pub fn incident_edges(&self, v: VertexId) -> Vec<Edge> {
        match self.adj.get(&v) {
            Some(a) => a.out.iter().chain(a.inc.iter()).copied().collect(),
            None => Vec::new(),
        }
    }
}
