use serde::{Deserialize, Serialize};

/// Unique integer identity of a vertex ("number").
pub type VertexId = u32;
/// Integer edge weight.
pub type Weight = i32;

pub const DEFAULT_WEIGHT: Weight = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

/// Ordered (tail, head) pair. A graph holds at most one edge per key, so the
/// key doubles as the reference to an edge view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    #[serde(rename = "out")]
    pub tail: VertexId,
    #[serde(rename = "in")]
    pub head: VertexId,
}

impl EdgeKey {
    pub const fn new(tail: VertexId, head: VertexId) -> Self {
        EdgeKey { tail, head }
    }
    pub fn touches(&self, v: VertexId) -> bool {
        self.tail == v || self.head == v
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    #[serde(rename = "out")]
    pub tail: VertexId,
    #[serde(rename = "in")]
    pub head: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub const fn new(tail: VertexId, head: VertexId, weight: Weight) -> Self {
        Edge { tail, head, weight }
    }
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.tail, self.head)
    }
    pub fn touches(&self, v: VertexId) -> bool {
        self.tail == v || self.head == v
    }
    /// Endpoint on the other side of `v`; `None` if `v` is not an endpoint.
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        if self.tail == v {
            Some(self.head)
        } else if self.head == v {
            Some(self.tail)
        } else {
            None
        }
    }
}

/// Highlighted output of the most recent algorithm run.
pub type Markers = Vec<Edge>;

/// Presentation-side vertex: position only, linked to the model by `id`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: VertexId,
    pub x: f32,
    pub y: f32,
}

/// Presentation-side edge with its derived, radius-trimmed segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    pub edge: Edge,
    pub from: Vec2,
    pub to: Vec2,
}
