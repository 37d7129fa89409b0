pub mod model;
pub mod error;
pub mod config;
pub mod disjoint_set;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod dfs;
    pub mod dijkstra;
    pub mod forest;
    pub mod interrupt;
    pub mod kruskal;
    pub mod picking;
    pub mod prim;
    pub mod run;
}
pub mod presentation;
pub mod session;
pub mod operation;
pub mod history;
pub mod controller;
pub mod snapshot;
#[cfg(feature = "threads")]
pub mod worker;
mod graph;

pub use algorithms::dfs::{depth_first_search, VertexPair};
pub use algorithms::dijkstra::{shortest_path, ShortestPath};
pub use algorithms::forest::SpanningForest;
pub use algorithms::interrupt::{CancelToken, Interrupt};
pub use algorithms::kruskal::min_spanning_tree_kruskal;
pub use algorithms::prim::max_spanning_tree_prim;
pub use algorithms::run::{Algorithm, RunOutcome};
pub use config::{ControllerConfig, EdgeWeightPolicy};
pub use controller::{Controller, RunSummary};
pub use disjoint_set::DisjointSetForest;
pub use error::{AlgorithmError, ControllerError, SnapshotError};
pub use graph::Graph;
pub use model::{Edge, EdgeKey, EdgeView, Markers, NodeView, Vec2, VertexId, Weight};
pub use presentation::{Presentation, Scene};
pub use session::Selection;
pub use snapshot::Snapshot;
