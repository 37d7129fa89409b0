//! User intents on top of the session.
//!
//! Each intent either becomes one recorded [`Operation`] or leaves everything
//! as it was. The controller owns the graph, the presentation, the selection
//! and the history; callers reach them read-only.

use crate::algorithms::picking::{edge_at, node_at, pick, Pick};
use crate::algorithms::run::{Algorithm, RunOutcome};
use crate::config::ControllerConfig;
use crate::error::{ControllerError, SnapshotError};
use crate::history::History;
use crate::model::{Edge, EdgeKey, Vec2, VertexId, Weight};
use crate::operation::{AlgorithmRun, Operation};
use crate::presentation::Presentation;
use crate::session::{Selection, Session};
use crate::snapshot::Snapshot;
use crate::Graph;
#[cfg(feature = "threads")]
use crate::worker::{AlgorithmWorker, RunReport};

/// What an algorithm run put on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    /// Summed weight of the highlighted edges; `None` when nothing was highlighted.
    pub total: Option<i64>,
    pub highlighted: usize,
}

impl RunSummary {
    fn new(algorithm: Algorithm, outcome: Option<&RunOutcome>) -> Self {
        RunSummary {
            algorithm,
            total: outcome.map(|o| o.total),
            highlighted: outcome.map_or(0, |o| o.markers.len()),
        }
    }
}

pub struct Controller<P: Presentation> {
    session: Session<P>,
    history: History,
    config: ControllerConfig,
    edge_origin: Option<VertexId>,
    dragging: bool,
    #[cfg(feature = "threads")]
    worker: AlgorithmWorker,
}

impl<P: Presentation> Controller<P> {
    pub fn new(mut presentation: P, config: ControllerConfig) -> Self {
        presentation.set_directed_mode(config.directed);
        Controller {
            session: Session::new(Graph::new(config.directed), presentation),
            history: History::new(),
            config,
            edge_origin: None,
            dragging: false,
            #[cfg(feature = "threads")]
            worker: AlgorithmWorker::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.session.graph
    }
    pub fn presentation(&self) -> &P {
        &self.session.presentation
    }
    pub fn selection(&self) -> Option<Selection> {
        self.session.selection
    }
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
    /// Algorithm executions actually computed; memoized redo does not count.
    pub fn computations(&self) -> u64 {
        self.session.computations
    }

    fn execute(&mut self, mut op: Operation) -> Result<bool, ControllerError> {
        let applied = op.apply(&mut self.session)?;
        if applied {
            self.history.record(op);
        } else {
            tracing::debug!("{} rejected", op.name());
        }
        Ok(applied)
    }

    fn record(&mut self, op: Operation) -> bool {
        matches!(self.execute(op), Ok(true))
    }

    // Any change to graph or markers ends a drag and invalidates a background run.
    fn mutating(&mut self) {
        self.dragging = false;
        #[cfg(feature = "threads")]
        self.worker.cancel();
    }

    // Vertices
    /// Adds a vertex numbered one past the current maximum and selects it.
    pub fn add_vertex(&mut self, at: Vec2) -> Option<VertexId> {
        let id = self.session.graph.max_number().checked_add(1)?;
        self.add_vertex_numbered(id, at).then_some(id)
    }

    pub fn add_vertex_numbered(&mut self, id: VertexId, at: Vec2) -> bool {
        self.mutating();
        self.record(Operation::AddVertex { id, at, cascade: Vec::new() })
    }

    pub fn select_vertex(&mut self, id: VertexId) -> bool {
        self.dragging = false;
        if !self.session.graph.has_vertex(id) {
            return false;
        }
        self.session.selection = Some(Selection::Vertex { id });
        true
    }

    /// Moves the selected vertex by a delta. Consecutive moves of the same
    /// vertex collapse into a single history entry until another intent runs.
    pub fn move_selected(&mut self, dx: f32, dy: f32) -> bool {
        let Some(Selection::Vertex { id }) = self.session.selection else {
            return false;
        };
        if self.dragging {
            if let Some(last) = self.history.last_mut() {
                if last.absorb_move(id, dx, dy) {
                    self.session.presentation.move_node(id, dx, dy);
                    self.session.presentation.recompute_geometry(id);
                    return true;
                }
            }
        }
        self.dragging = self.record(Operation::MoveVertex { id, dx, dy });
        self.dragging
    }

    /// Closes the current drag so the next move starts a new history entry.
    pub fn finish_move(&mut self) {
        self.dragging = false;
    }

    pub fn remove_selected(&mut self) -> bool {
        let removed = match self.session.selection {
            Some(Selection::Vertex { id }) => self.remove_vertex(id),
            Some(Selection::Edge { key }) => self.remove_edge(key),
            None => false,
        };
        if removed {
            self.session.selection = None;
        }
        removed
    }

    fn remove_vertex(&mut self, id: VertexId) -> bool {
        let Some(node) = self.session.presentation.node(id) else {
            return false;
        };
        self.mutating();
        self.record(Operation::RemoveVertex {
            id,
            at: Vec2::new(node.x, node.y),
            cascade: Vec::new(),
        })
    }

    fn remove_edge(&mut self, key: EdgeKey) -> bool {
        let Some(edge) = self.session.graph.edge_exact(key.tail, key.head) else {
            return false;
        };
        self.mutating();
        self.record(Operation::RemoveEdge { edge })
    }

    // Edges
    /// Starts dragging a new edge from the vertex under `p` (extended radius).
    pub fn start_edge(&mut self, p: Vec2) -> bool {
        self.dragging = false;
        let nodes = self.session.presentation.nodes();
        let Some(id) = node_at(&nodes, p, self.config.extended_radius()) else {
            return false;
        };
        self.session.selection = Some(Selection::Vertex { id });
        self.session.presentation.create_transient_edge(id);
        self.edge_origin = Some(id);
        true
    }

    pub fn continue_edge(&mut self, dx: f32, dy: f32) -> bool {
        if self.edge_origin.is_none() {
            return false;
        }
        self.session.presentation.move_transient_edge(dx, dy);
        true
    }

    /// Drops the transient edge and, if `p` lands on another vertex, connects
    /// the two with a weight drawn from the configured policy.
    pub fn commit_edge(&mut self, p: Vec2) -> Option<Edge> {
        self.session.presentation.kill_transient_edge();
        let origin = self.edge_origin.take()?;
        let nodes = self.session.presentation.nodes();
        let target = node_at(&nodes, p, self.config.extended_radius())?;
        let edge = Edge::new(origin, target, self.config.edge_weight.draw());
        self.connect(edge.tail, edge.head, edge.weight).then_some(edge)
    }

    pub fn cancel_edge(&mut self) {
        self.session.presentation.kill_transient_edge();
        self.edge_origin = None;
    }

    pub fn connect(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> bool {
        self.mutating();
        self.record(Operation::AddEdge { edge: Edge::new(tail, head, weight) })
    }

    // Picking
    /// Removes the vertex under `p`, or failing that the edge under it.
    pub fn remove_at(&mut self, p: Vec2) -> bool {
        let nodes = self.session.presentation.nodes();
        if let Some(id) = node_at(&nodes, p, self.config.node_radius) {
            return self.remove_vertex(id);
        }
        let edges = self.session.presentation.edges();
        match edge_at(&edges, p, self.config.edge_selection_width) {
            Some((key, _)) => self.remove_edge(key),
            None => false,
        }
    }

    /// Selects the vertex under `p`, else the edge under it; clears the
    /// selection when nothing is hit.
    pub fn select_at(&mut self, p: Vec2) -> Option<Selection> {
        self.dragging = false;
        let nodes = self.session.presentation.nodes();
        let edges = self.session.presentation.edges();
        let hit = pick(&nodes, &edges, p, self.config.node_radius, self.config.edge_selection_width);
        self.session.selection = hit.map(|h| match h {
            Pick::Node { id } => Selection::Vertex { id },
            Pick::Edge { key, .. } => Selection::Edge { key },
        });
        self.session.selection
    }

    /// Renumbers the selected vertex or re-weights the selected edge.
    pub fn change_selected(&mut self, value: i64) -> Result<bool, ControllerError> {
        let selection = self.session.selection.ok_or(ControllerError::NothingSelected)?;
        let op = match selection {
            Selection::Vertex { id } => match VertexId::try_from(value) {
                Ok(to) => Operation::RenumberVertex { from: id, to },
                Err(_) => return Ok(false),
            },
            Selection::Edge { key } => match Weight::try_from(value) {
                Ok(next) => Operation::ChangeEdgeWeight { key, previous: next, next },
                Err(_) => return Ok(false),
            },
        };
        self.mutating();
        self.execute(op)
    }

    // Algorithms
    /// Runs `algorithm` synchronously and highlights its result.
    ///
    /// A run that highlights nothing (unreachable destination, trivial path)
    /// succeeds without touching markers or history.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<RunSummary, ControllerError> {
        self.check_endpoints(&algorithm)?;
        self.mutating();
        let mut op = Operation::RunAlgorithm(AlgorithmRun::new(algorithm));
        let applied = op.apply(&mut self.session)?;
        let summary = match &op {
            Operation::RunAlgorithm(run) => RunSummary::new(algorithm, run.outcome()),
            _ => RunSummary::new(algorithm, None),
        };
        if applied {
            self.history.record(op);
        }
        tracing::debug!("{} highlighted {} edges", algorithm.name(), summary.highlighted);
        Ok(summary)
    }

    /// Depth-first tree from `from`; returns the number of tree edges.
    pub fn run_dfs(&mut self, from: VertexId) -> Result<usize, ControllerError> {
        Ok(self.run(Algorithm::Dfs { start: from })?.highlighted)
    }

    /// Shortest path cost, `None` when `to` is unreachable.
    pub fn run_dijkstra(&mut self, from: VertexId, to: VertexId) -> Result<Option<i64>, ControllerError> {
        let summary = self.run(Algorithm::Dijkstra { source: from, destination: to })?;
        Ok(summary.total.or((from == to).then_some(0)))
    }

    /// Total weight of the maximum spanning forest.
    pub fn run_prim(&mut self) -> Result<i64, ControllerError> {
        Ok(self.run(Algorithm::Prim)?.total.unwrap_or(0))
    }

    /// Total weight of the minimum spanning forest.
    pub fn run_kruskal(&mut self) -> Result<i64, ControllerError> {
        Ok(self.run(Algorithm::Kruskal)?.total.unwrap_or(0))
    }

    fn check_endpoints(&self, algorithm: &Algorithm) -> Result<(), ControllerError> {
        match algorithm.endpoints().into_iter().find(|v| !self.session.graph.has_vertex(*v)) {
            Some(v) => Err(ControllerError::UnknownVertex(v)),
            None => Ok(()),
        }
    }

    /// Flips the graph mode; returns the new mode.
    pub fn toggle_directed(&mut self) -> bool {
        self.mutating();
        let previous = self.session.graph.is_directed();
        self.record(Operation::ToggleDirected { previous });
        self.session.graph.is_directed()
    }

    pub fn clear_highlights(&mut self) -> bool {
        self.mutating();
        self.record(Operation::ClearMarkers { captured: None })
    }

    // History
    pub fn undo(&mut self) -> bool {
        self.mutating();
        let Some(mut op) = self.history.pop_undo() else {
            return false;
        };
        op.undo(&mut self.session);
        self.history.push_undone(op);
        true
    }

    pub fn redo(&mut self) -> bool {
        self.mutating();
        let Some(mut op) = self.history.pop_redo() else {
            return false;
        };
        match op.apply(&mut self.session) {
            Ok(true) => {
                self.history.push_redone(op);
                true
            }
            other => {
                tracing::warn!("redo of {} did not apply: {:?}", op.name(), other);
                false
            }
        }
    }

    // Snapshots
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session.graph, &self.session.presentation)
    }

    /// Replaces the whole session with `snapshot` and clears the history.
    /// Nothing changes if the snapshot is invalid.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let graph = match snapshot.to_graph() {
            Ok(graph) => graph,
            Err(e) => {
                tracing::warn!("snapshot rejected: {}", e);
                return Err(e);
            }
        };
        self.mutating();
        let p = &mut self.session.presentation;
        p.kill_transient_edge();
        p.set_markers(None);
        for e in p.edges() {
            p.remove_edge(e.edge.key());
        }
        for n in p.nodes() {
            p.remove_node(n.id);
        }
        p.set_directed_mode(graph.is_directed());
        for n in &snapshot.vertices {
            p.add_node(n.id, n.x, n.y);
        }
        for e in graph.edges() {
            p.add_edge(*e);
        }
        tracing::debug!(
            "restored {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        self.session.graph = graph;
        self.session.selection = None;
        self.edge_origin = None;
        self.history.clear();
        Ok(())
    }
}

#[cfg(feature = "threads")]
impl<P: Presentation> Controller<P> {
    /// Starts `algorithm` on a copy of the current graph. Any later mutating
    /// intent cancels it.
    pub fn run_in_background(&mut self, algorithm: Algorithm) -> Result<u64, ControllerError> {
        self.check_endpoints(&algorithm)?;
        self.dragging = false;
        Ok(self.worker.start(self.session.graph.clone(), algorithm))
    }

    pub fn is_busy(&self) -> bool {
        self.worker.is_busy()
    }

    pub fn cancel_background(&mut self) -> bool {
        self.worker.cancel()
    }

    /// Applies the background result if it is ready.
    pub fn poll_background(&mut self) -> Option<Result<RunSummary, ControllerError>> {
        let report = self.worker.try_finish()?;
        Some(self.finish_background(report))
    }

    /// Blocks for the background result and applies it.
    pub fn wait_background(&mut self) -> Option<Result<RunSummary, ControllerError>> {
        let report = self.worker.wait()?;
        Some(self.finish_background(report))
    }

    fn finish_background(&mut self, report: RunReport) -> Result<RunSummary, ControllerError> {
        let outcome = report.result?;
        self.session.computations += 1;
        let Some(outcome) = outcome else {
            return Ok(RunSummary::new(report.algorithm, None));
        };
        let summary = RunSummary::new(report.algorithm, Some(&outcome));
        self.dragging = false;
        let op = Operation::RunAlgorithm(AlgorithmRun::computed(report.algorithm, outcome));
        self.execute(op)?;
        Ok(summary)
    }
}
