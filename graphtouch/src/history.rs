use crate::operation::Operation;

/// Linear undo/redo stacks. Recording a new operation drops the redo branch.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo_stack: Vec<Operation>,
    redo_stack: Vec<Operation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, op: Operation) {
        self.undo_stack.push(op);
        self.redo_stack.clear();
    }

    pub(crate) fn pop_undo(&mut self) -> Option<Operation> {
        self.undo_stack.pop()
    }
    pub(crate) fn pop_redo(&mut self) -> Option<Operation> {
        self.redo_stack.pop()
    }
    pub(crate) fn push_undone(&mut self, op: Operation) {
        self.redo_stack.push(op);
    }
    pub(crate) fn push_redone(&mut self, op: Operation) {
        self.undo_stack.push(op);
    }

    /// Most recent operation, for coalescing. `None` once anything sits on the
    /// redo stack, since folding into it would silently keep that branch alive.
    pub(crate) fn last_mut(&mut self) -> Option<&mut Operation> {
        if !self.redo_stack.is_empty() {
            return None;
        }
        self.undo_stack.last_mut()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(dx: f32) -> Operation {
        Operation::MoveVertex { id: 1, dx, dy: 0.0 }
    }

    #[test]
    fn recording_drops_redo() {
        let mut h = History::new();
        h.record(mv(1.0));
        let op = h.pop_undo().unwrap();
        h.push_undone(op);
        assert!(h.can_redo());
        h.record(mv(2.0));
        assert!(!h.can_redo());
        assert_eq!(h.undo_depth(), 1);
    }

    #[test]
    fn no_coalescing_target_while_redo_pending() {
        let mut h = History::new();
        h.record(mv(1.0));
        h.record(mv(2.0));
        let op = h.pop_undo().unwrap();
        h.push_undone(op);
        assert!(h.last_mut().is_none());
    }
}
