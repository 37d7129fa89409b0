use crate::model::{Edge, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Spanning forest as a child -> parent map plus the tree edges in the order
/// they joined the forest. Roots have no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningForest {
    parents: BTreeMap<VertexId, VertexId>,
    edges: Vec<Edge>,
}

impl SpanningForest {
    pub(crate) fn attach(&mut self, child: VertexId, parent: VertexId, edge: Edge) {
        self.parents.insert(child, parent);
        self.edges.push(edge);
    }

    pub fn parent_of(&self, child: VertexId) -> Option<VertexId> {
        self.parents.get(&child).copied()
    }
    pub fn parents(&self) -> &BTreeMap<VertexId, VertexId> {
        &self.parents
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().map(|e| i64::from(e.weight)).sum()
    }
}
