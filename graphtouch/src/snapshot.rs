use crate::error::SnapshotError;
use crate::geometry::limits;
use crate::model::{Edge, NodeView};
use crate::presentation::Presentation;
use crate::Graph;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable session state: the graph plus the vertex positions.
/// Markers, selection and history are not part of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub directed: bool,
    pub vertices: Vec<NodeView>,
    pub edges: Vec<Edge>,
}

impl Snapshot {
    /// Vertices in ascending number order, edges grouped by tail.
    pub fn capture(graph: &Graph, presentation: &impl Presentation) -> Self {
        let vertices = graph
            .vertices()
            .map(|id| presentation.node(id).unwrap_or(NodeView { id, x: 0.0, y: 0.0 }))
            .collect();
        Snapshot {
            version: SNAPSHOT_VERSION,
            directed: graph.is_directed(),
            vertices,
            edges: graph.edges().copied().collect(),
        }
    }

    /// Builds the graph the snapshot describes. Edges are checked in directed
    /// mode, so both orientations kept across a mode switch load back; exact
    /// duplicates and self loops are refused.
    pub fn to_graph(&self) -> Result<Graph, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }
        if self.vertices.len() > limits::MAX_VERTICES {
            return Err(SnapshotError::LimitExceeded {
                what: "vertices",
                max: limits::MAX_VERTICES,
                got: self.vertices.len(),
            });
        }
        if self.edges.len() > limits::MAX_EDGES {
            return Err(SnapshotError::LimitExceeded {
                what: "edges",
                max: limits::MAX_EDGES,
                got: self.edges.len(),
            });
        }
        let mut g = Graph::new(true);
        for n in &self.vertices {
            if !limits::in_coord_bounds(n.x) || !limits::in_coord_bounds(n.y) {
                return Err(SnapshotError::NonFinite { id: n.id });
            }
            if !g.add_vertex(n.id) {
                return Err(SnapshotError::DuplicateVertex(n.id));
            }
        }
        for e in &self.edges {
            if !g.has_vertex(e.tail) || !g.has_vertex(e.head) {
                return Err(SnapshotError::DanglingEdge { tail: e.tail, head: e.head });
            }
            if !g.add_edge(e.tail, e.head, e.weight) {
                return Err(SnapshotError::RejectedEdge { tail: e.tail, head: e.head });
            }
        }
        g.set_directed(self.directed);
        Ok(g)
    }
}

pub fn to_json(snapshot: &Snapshot) -> Value {
    serde_json::to_value(snapshot).unwrap_or(Value::Null)
}

/// Strict decode: the document must parse and describe a valid graph.
pub fn from_json(v: Value) -> Result<Snapshot, SnapshotError> {
    #[derive(Deserialize)]
    struct DocDe {
        version: Option<u32>,
        directed: Option<bool>,
        vertices: Vec<NodeView>,
        #[serde(default)]
        edges: Vec<Edge>,
    }
    let doc: DocDe = serde_json::from_value(v)?;
    let snapshot = Snapshot {
        version: doc.version.unwrap_or(SNAPSHOT_VERSION),
        directed: doc.directed.unwrap_or(true),
        vertices: doc.vertices,
        edges: doc.edges,
    };
    snapshot.to_graph()?;
    Ok(snapshot)
}

pub fn from_json_str(s: &str) -> Result<Snapshot, SnapshotError> {
    from_json(serde_json::from_str(s)?)
}
