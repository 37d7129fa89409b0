use crate::model::{EdgeKey, VertexId};
use crate::presentation::Presentation;
use crate::Graph;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Selection {
    Vertex { id: VertexId },
    Edge { key: EdgeKey },
}

impl Selection {
    pub fn touches(&self, v: VertexId) -> bool {
        match self {
            Selection::Vertex { id } => *id == v,
            Selection::Edge { key } => key.touches(v),
        }
    }
}

/// Everything an operation may touch. Owned by the controller and handed to
/// operations explicitly on apply and undo.
#[derive(Debug)]
pub struct Session<P> {
    pub(crate) graph: Graph,
    pub(crate) presentation: P,
    pub(crate) selection: Option<Selection>,
    pub(crate) computations: u64,
}

impl<P: Presentation> Session<P> {
    pub fn new(graph: Graph, presentation: P) -> Self {
        Session { graph, presentation, selection: None, computations: 0 }
    }

    pub(crate) fn forget_vertex(&mut self, v: VertexId) {
        if self.selection.is_some_and(|s| s.touches(v)) {
            self.selection = None;
        }
    }

    pub(crate) fn forget_edge(&mut self, key: EdgeKey) {
        if self.selection == Some(Selection::Edge { key }) {
            self.selection = None;
        }
    }

    pub(crate) fn rename_vertex(&mut self, old: VertexId, new: VertexId) {
        let swap = |v: VertexId| if v == old { new } else { v };
        self.selection = self.selection.map(|s| match s {
            Selection::Vertex { id } => Selection::Vertex { id: swap(id) },
            Selection::Edge { key } => Selection::Edge {
                key: EdgeKey::new(swap(key.tail), swap(key.head)),
            },
        });
    }
}
