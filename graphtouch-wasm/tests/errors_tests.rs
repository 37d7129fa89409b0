use graphtouch_wasm::Editor;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

#[wasm_bindgen_test]
fn invalid_ids_and_values_return_typed_errors() {
    let mut g = Editor::new();
    assert!(is_err(&g.add_vertex_res(f32::NAN, 0.0), "non_finite"));
    assert_eq!(g.vertex_count(), 0, "state mutated on error");

    assert!(is_err(&g.connect_res(1, 2, 1), "invalid_id"));
    let a = g.add_vertex(0.0, 0.0).unwrap();
    let b = g.add_vertex(200.0, 0.0).unwrap();
    assert!(is_err(&g.connect_res(a, a, 1), "invalid_edge"));
    assert!(!is_err(&g.connect_res(a, b, 1), "invalid_edge"));
    assert!(is_err(&g.connect_res(a, b, 1), "invalid_edge"));
    assert_eq!(g.edge_count(), 1);

    g.select_at(1000.0, 1000.0);
    assert!(is_err(&g.change_selected_res(3.0), "nothing_selected"));
    g.select_vertex(a);
    assert!(is_err(&g.change_selected_res(2.5), "not_integer"));
    assert!(is_err(&g.run_dfs_res(404), "invalid_id"));
}

#[wasm_bindgen_test]
fn spanning_trees_on_directed_graph_are_usage_errors() {
    let mut g = Editor::new();
    let a = g.add_vertex(0.0, 0.0).unwrap();
    let b = g.add_vertex(200.0, 0.0).unwrap();
    g.connect(a, b, 3);
    assert!(g.is_directed());
    assert!(is_err(&g.run_prim_res(), "directed_graph"));
    assert!(is_err(&g.run_kruskal_res(), "directed_graph"));
    assert!(g.get_markers().is_null());
}

#[wasm_bindgen_test]
fn bad_snapshots_report_codes() {
    let mut g = Editor::new();
    let v = js_sys::JSON::parse(r#"{"vertices":[{"id":1,"x":0,"y":0},{"id":1,"x":5,"y":5}]}"#).unwrap();
    assert!(is_err(&g.from_json_res(v), "duplicate_vertex"));
    let v = js_sys::JSON::parse(r#"{"vertices":[{"id":1,"x":0,"y":0}],"edges":[{"out":1,"in":2,"weight":1}]}"#).unwrap();
    assert!(is_err(&g.from_json_res(v), "dangling_edge"));
    let v = js_sys::JSON::parse(r#"{"vertices":"nope"}"#).unwrap();
    assert!(is_err(&g.from_json_res(v), "bad_json"));
    assert_eq!(g.vertex_count(), 0);
}
