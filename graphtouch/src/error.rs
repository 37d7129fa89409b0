use crate::model::VertexId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("{algorithm} works only for undirected graphs")]
    DirectedGraph { algorithm: &'static str },

    #[error("algorithm run cancelled")]
    Cancelled,
}

impl AlgorithmError {
    pub fn code(&self) -> &'static str {
        match self {
            AlgorithmError::DirectedGraph { .. } => "directed_graph",
            AlgorithmError::Cancelled => "cancelled",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexId),

    #[error("no vertex is selected")]
    NothingSelected,

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

impl ControllerError {
    pub fn code(&self) -> &'static str {
        match self {
            ControllerError::UnknownVertex(_) => "invalid_id",
            ControllerError::NothingSelected => "nothing_selected",
            ControllerError::Algorithm(e) => e.code(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    #[error("too many {what}: {got} exceeds {max}")]
    LimitExceeded {
        what: &'static str,
        max: usize,
        got: usize,
    },

    #[error("vertex {id} has a non-finite or out-of-range coordinate")]
    NonFinite { id: VertexId },

    #[error("duplicate vertex {0}")]
    DuplicateVertex(VertexId),

    #[error("edge {tail}->{head} references a missing vertex")]
    DanglingEdge { tail: VertexId, head: VertexId },

    #[error("edge {tail}->{head} is rejected by the graph")]
    RejectedEdge { tail: VertexId, head: VertexId },
}

impl SnapshotError {
    pub fn code(&self) -> &'static str {
        match self {
            SnapshotError::Json(_) => "bad_json",
            SnapshotError::UnsupportedVersion(_) => "bad_version",
            SnapshotError::LimitExceeded { .. } => "limit_exceeded",
            SnapshotError::NonFinite { .. } => "non_finite",
            SnapshotError::DuplicateVertex(_) => "duplicate_vertex",
            SnapshotError::DanglingEdge { .. } => "dangling_edge",
            SnapshotError::RejectedEdge { .. } => "rejected_edge",
        }
    }
}
