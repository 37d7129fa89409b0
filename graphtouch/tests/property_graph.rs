use graphtouch::{Controller, ControllerConfig, EdgeView, Graph, Markers, NodeView, Presentation, Scene, Vec2};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    AddVertex { x: i8, y: i8 },
    Select { idx: u16 },
    Move { dx: i8, dy: i8 },
    Connect { a: u16, b: u16, w: u8 },
    RemoveSelected,
    Renumber { to: u8 },
    ToggleDirected,
    Dfs { idx: u16 },
    Dijkstra { a: u16, b: u16 },
    Kruskal,
    Prim,
    ClearHighlights,
    Undo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<i8>(), any::<i8>()).prop_map(|(x, y)| Op::AddVertex { x, y }),
        any::<u16>().prop_map(|idx| Op::Select { idx }),
        (any::<i8>(), any::<i8>()).prop_map(|(dx, dy)| Op::Move { dx, dy }),
        (any::<u16>(), any::<u16>(), any::<u8>()).prop_map(|(a, b, w)| Op::Connect { a, b, w }),
        Just(Op::RemoveSelected),
        any::<u8>().prop_map(|to| Op::Renumber { to }),
        Just(Op::ToggleDirected),
        any::<u16>().prop_map(|idx| Op::Dfs { idx }),
        (any::<u16>(), any::<u16>()).prop_map(|(a, b)| Op::Dijkstra { a, b }),
        Just(Op::Kruskal),
        Just(Op::Prim),
        Just(Op::ClearHighlights),
        Just(Op::Undo),
    ]
}

fn vertex(g: &Graph, idx: u16) -> Option<u32> {
    let ids: Vec<u32> = g.vertices().collect();
    if ids.is_empty() {
        return None;
    }
    Some(ids[(idx as usize) % ids.len()])
}

fn apply_op(c: &mut Controller<Scene>, op: Op) {
    match op {
        // integer positions keep undo of moves exact
        Op::AddVertex { x, y } => {
            let _ = c.add_vertex(Vec2::new(f32::from(x) * 10.0, f32::from(y) * 10.0));
        }
        Op::Select { idx } => {
            if let Some(v) = vertex(c.graph(), idx) {
                c.select_vertex(v);
            }
        }
        Op::Move { dx, dy } => {
            c.move_selected(f32::from(dx), f32::from(dy));
        }
        Op::Connect { a, b, w } => {
            if let (Some(a), Some(b)) = (vertex(c.graph(), a), vertex(c.graph(), b)) {
                c.connect(a, b, i32::from(w));
            }
        }
        Op::RemoveSelected => {
            c.remove_selected();
        }
        Op::Renumber { to } => {
            let _ = c.change_selected(i64::from(to));
        }
        Op::ToggleDirected => {
            c.toggle_directed();
        }
        Op::Dfs { idx } => {
            if let Some(v) = vertex(c.graph(), idx) {
                let _ = c.run_dfs(v);
            }
        }
        Op::Dijkstra { a, b } => {
            if let (Some(a), Some(b)) = (vertex(c.graph(), a), vertex(c.graph(), b)) {
                let _ = c.run_dijkstra(a, b);
            }
        }
        Op::Kruskal => {
            let _ = c.run_kruskal();
        }
        Op::Prim => {
            let _ = c.run_prim();
        }
        Op::ClearHighlights => {
            c.clear_highlights();
        }
        Op::Undo => {
            c.undo();
        }
    }
}

// compared as stored: list order feeds tie-breaks and hit testing
#[derive(Debug, PartialEq)]
struct State {
    graph: Graph,
    nodes: Vec<NodeView>,
    edges: Vec<EdgeView>,
    markers: Option<Markers>,
}

fn state(c: &Controller<Scene>) -> State {
    let scene = c.presentation();
    State {
        graph: c.graph().clone(),
        nodes: scene.nodes(),
        edges: scene.edges(),
        markers: scene.markers().cloned(),
    }
}

fn assert_consistent(c: &Controller<Scene>) {
    let g = c.graph();
    for e in g.edges() {
        assert!(g.has_vertex(e.tail) && g.has_vertex(e.head), "dangling edge {:?}", e);
        assert_ne!(e.tail, e.head, "self loop {:?}", e);
        assert!(g.incident_edges(e.head).contains(e), "{:?} missing from head index", e);
    }
    let scene = c.presentation();
    assert_eq!(scene.nodes().len(), g.vertex_count());
    assert_eq!(scene.edges().len(), g.edge_count());
    for n in scene.nodes() {
        assert!(g.has_vertex(n.id));
    }
}

fn sequence_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 5..40)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 512, .. ProptestConfig::default() })]
    #[test]
    fn edit_sequences_keep_views_in_sync(seq in sequence_strategy()) {
        let mut c = Controller::new(Scene::default(), ControllerConfig::default());
        for op in seq {
            apply_op(&mut c, op);
            assert_consistent(&c);
        }
    }

    #[test]
    fn undoing_a_vertex_removal_keeps_spanning_trees(seq in sequence_strategy(), idx in any::<u16>()) {
        let config = ControllerConfig { directed: false, ..Default::default() };
        let mut c = Controller::new(Scene::default(), config);
        for op in seq {
            apply_op(&mut c, op);
        }
        if c.graph().is_directed() {
            c.toggle_directed();
        }
        let Some(v) = vertex(c.graph(), idx) else { return Ok(()) };
        let before = c.graph().clone();
        let kruskal = c.run_kruskal().ok().map(|_| c.presentation().markers().cloned());
        let prim = c.run_prim().ok().map(|_| c.presentation().markers().cloned());
        c.select_vertex(v);
        prop_assert!(c.remove_selected());
        prop_assert!(c.undo());
        prop_assert_eq!(c.graph(), &before);
        prop_assert_eq!(c.run_kruskal().ok().map(|_| c.presentation().markers().cloned()), kruskal);
        prop_assert_eq!(c.run_prim().ok().map(|_| c.presentation().markers().cloned()), prim);
    }

    #[test]
    fn full_undo_and_redo_round_trip(seq in sequence_strategy()) {
        let mut c = Controller::new(Scene::default(), ControllerConfig::default());
        let initial = state(&c);
        for op in seq {
            apply_op(&mut c, op);
        }
        let edited = state(&c);
        let computed = c.computations();
        while c.undo() {
            assert_consistent(&c);
        }
        prop_assert_eq!(state(&c), initial);
        while c.redo() {}
        prop_assert_eq!(state(&c), edited);
        prop_assert_eq!(c.computations(), computed);
    }
}
