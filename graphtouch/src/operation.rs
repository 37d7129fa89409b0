//! Reversible edits.
//!
//! Every intent that changes the graph, the view or the markers becomes an
//! [`Operation`]. `apply` runs it forward (first execution and redo), `undo`
//! restores the exact prior state of everything the operation touched.

use crate::algorithms::interrupt::Interrupt;
use crate::algorithms::run::{Algorithm, RunOutcome};
use crate::error::AlgorithmError;
use crate::model::{Edge, EdgeKey, Markers, Vec2, VertexId, Weight};
use crate::presentation::Presentation;
use crate::session::{Selection, Session};

#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    /// `cascade` holds what undo had to tear down with the vertex (incident
    /// edges, marker pruning) so redo can put it back.
    AddVertex { id: VertexId, at: Vec2, cascade: Vec<Operation> },
    RemoveVertex { id: VertexId, at: Vec2, cascade: Vec<Operation> },
    MoveVertex { id: VertexId, dx: f32, dy: f32 },
    AddEdge { edge: Edge },
    RemoveEdge { edge: Edge },
    RenumberVertex { from: VertexId, to: VertexId },
    ChangeEdgeWeight { key: EdgeKey, previous: Weight, next: Weight },
    RunAlgorithm(AlgorithmRun),
    ToggleDirected { previous: bool },
    ClearMarkers { captured: Option<Markers> },
    PruneMarkers { vertex: VertexId, captured: Option<Markers> },
}

/// A memoized algorithm run. The outcome is computed once; redo replays it.
#[derive(Clone, Debug, PartialEq)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub(crate) outcome: Option<RunOutcome>,
    pub(crate) previous: Option<Markers>,
}

impl AlgorithmRun {
    pub fn new(algorithm: Algorithm) -> Self {
        AlgorithmRun { algorithm, outcome: None, previous: None }
    }

    /// A run whose result was computed elsewhere (a background worker).
    pub fn computed(algorithm: Algorithm, outcome: RunOutcome) -> Self {
        AlgorithmRun { algorithm, outcome: Some(outcome), previous: None }
    }

    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddVertex { .. } => "add_vertex",
            Operation::RemoveVertex { .. } => "remove_vertex",
            Operation::MoveVertex { .. } => "move_vertex",
            Operation::AddEdge { .. } => "add_edge",
            Operation::RemoveEdge { .. } => "remove_edge",
            Operation::RenumberVertex { .. } => "renumber_vertex",
            Operation::ChangeEdgeWeight { .. } => "change_edge_weight",
            Operation::RunAlgorithm(_) => "run_algorithm",
            Operation::ToggleDirected { .. } => "toggle_directed",
            Operation::ClearMarkers { .. } => "clear_markers",
            Operation::PruneMarkers { .. } => "prune_markers",
        }
    }

    /// Runs the operation forward.
    ///
    /// `Ok(false)` means the edit was rejected and nothing changed; such an
    /// operation must not be recorded. Errors only come from algorithm
    /// preconditions and likewise leave the state untouched.
    pub fn apply<P: Presentation>(&mut self, s: &mut Session<P>) -> Result<bool, AlgorithmError> {
        self.apply_with(s, &())
    }

    pub fn apply_with<P: Presentation>(
        &mut self,
        s: &mut Session<P>,
        stop: &impl Interrupt,
    ) -> Result<bool, AlgorithmError> {
        tracing::debug!("apply {}", self.name());
        match self {
            Operation::AddVertex { id, at, cascade } => {
                if !s.graph.add_vertex(*id) {
                    return Ok(false);
                }
                s.presentation.add_node(*id, at.x, at.y);
                s.selection = Some(Selection::Vertex { id: *id });
                for child in cascade.iter_mut().rev() {
                    child.undo(s);
                }
            }
            Operation::RemoveVertex { id, cascade, .. } => {
                if !s.graph.has_vertex(*id) {
                    return Ok(false);
                }
                *cascade = detach_vertex(s, *id);
            }
            Operation::MoveVertex { id, dx, dy } => {
                if !s.graph.has_vertex(*id) {
                    return Ok(false);
                }
                s.presentation.move_node(*id, *dx, *dy);
                s.presentation.recompute_geometry(*id);
            }
            Operation::AddEdge { edge } => {
                if !s.graph.add_edge(edge.tail, edge.head, edge.weight) {
                    return Ok(false);
                }
                s.presentation.add_edge(*edge);
            }
            Operation::RemoveEdge { edge } => {
                let Some(stored) = s.graph.remove_edge_exact(edge.tail, edge.head) else {
                    return Ok(false);
                };
                *edge = stored;
                s.presentation.remove_edge(edge.key());
                s.forget_edge(edge.key());
            }
            Operation::RenumberVertex { from, to } => {
                if !s.graph.change_vertex_number(*from, *to) {
                    return Ok(false);
                }
                s.presentation.renumber_node(*from, *to);
                s.rename_vertex(*from, *to);
            }
            Operation::ChangeEdgeWeight { key, previous, next } => {
                let Some(old) = s.graph.set_edge_weight(key.tail, key.head, *next) else {
                    return Ok(false);
                };
                *previous = old;
                s.presentation.set_edge_weight(*key, *next);
            }
            Operation::RunAlgorithm(run) => {
                if run.outcome.is_none() {
                    let computed = run.algorithm.compute(&s.graph, stop)?;
                    s.computations += 1;
                    let Some(outcome) = computed else {
                        return Ok(false);
                    };
                    run.outcome = Some(outcome);
                }
                let markers = run.outcome.as_ref().map(|o| o.markers.clone());
                run.previous = s.presentation.clear_markers();
                s.presentation.set_markers(markers);
            }
            Operation::ToggleDirected { previous } => {
                s.graph.set_directed(!*previous);
                s.presentation.set_directed_mode(!*previous);
            }
            Operation::ClearMarkers { captured } => {
                *captured = s.presentation.clear_markers();
                if captured.is_none() {
                    return Ok(false);
                }
            }
            Operation::PruneMarkers { vertex, captured } => {
                *captured = s.presentation.clear_markers();
                if let Some(markers) = captured.as_ref() {
                    let kept: Markers = markers.iter().filter(|m| !m.touches(*vertex)).copied().collect();
                    s.presentation.set_markers(Some(kept));
                }
            }
        }
        Ok(true)
    }

    /// Reverts an applied operation. Always succeeds on the state `apply` left.
    pub fn undo<P: Presentation>(&mut self, s: &mut Session<P>) {
        tracing::debug!("undo {}", self.name());
        match self {
            Operation::AddVertex { id, cascade, .. } => {
                *cascade = detach_vertex(s, *id);
            }
            Operation::RemoveVertex { id, at, cascade } => {
                s.graph.add_vertex(*id);
                s.presentation.add_node(*id, at.x, at.y);
                s.selection = Some(Selection::Vertex { id: *id });
                for child in cascade.iter_mut().rev() {
                    child.undo(s);
                }
            }
            Operation::MoveVertex { id, dx, dy } => {
                s.presentation.move_node(*id, -*dx, -*dy);
                s.presentation.recompute_geometry(*id);
            }
            Operation::AddEdge { edge } => {
                s.graph.remove_edge_exact(edge.tail, edge.head);
                s.presentation.remove_edge(edge.key());
                s.forget_edge(edge.key());
            }
            Operation::RemoveEdge { edge } => {
                s.graph.restore_edge(*edge);
                s.presentation.add_edge(*edge);
            }
            Operation::RenumberVertex { from, to } => {
                s.graph.change_vertex_number(*to, *from);
                s.presentation.renumber_node(*to, *from);
                s.rename_vertex(*to, *from);
            }
            Operation::ChangeEdgeWeight { key, previous, .. } => {
                s.graph.set_edge_weight(key.tail, key.head, *previous);
                s.presentation.set_edge_weight(*key, *previous);
            }
            Operation::RunAlgorithm(run) => {
                s.presentation.set_markers(run.previous.take());
            }
            Operation::ToggleDirected { previous } => {
                s.graph.set_directed(*previous);
                s.presentation.set_directed_mode(*previous);
            }
            Operation::ClearMarkers { captured } | Operation::PruneMarkers { captured, .. } => {
                s.presentation.set_markers(captured.take());
            }
        }
    }

    /// Folds a follow-up drag of the same vertex into this move.
    pub(crate) fn absorb_move(&mut self, vertex: VertexId, ddx: f32, ddy: f32) -> bool {
        match self {
            Operation::MoveVertex { id, dx, dy } if *id == vertex => {
                *dx += ddx;
                *dy += ddy;
                true
            }
            _ => false,
        }
    }
}

/// Tears `id` down together with its incident edges and the markers touching
/// it. Returns the child operations, already applied, in application order.
fn detach_vertex<P: Presentation>(s: &mut Session<P>, id: VertexId) -> Vec<Operation> {
    let mut cascade: Vec<Operation> = s
        .graph
        .incident_edges(id)
        .into_iter()
        .map(|edge| Operation::RemoveEdge { edge })
        .collect();
    cascade.push(Operation::PruneMarkers { vertex: id, captured: None });
    for child in cascade.iter_mut() {
        if !matches!(child.apply(s), Ok(true)) {
            tracing::warn!("cascade step {} for vertex {} did not apply", child.name(), id);
        }
    }
    s.forget_vertex(id);
    s.graph.remove_vertex(id);
    s.presentation.remove_node(id);
    cascade
}
