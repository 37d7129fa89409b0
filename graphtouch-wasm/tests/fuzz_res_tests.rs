use wasm_bindgen_test::*;
use graphtouch_wasm::Editor;
use wasm_bindgen::JsValue;
use js_sys::Reflect;

wasm_bindgen_test_configure!(run_in_browser);

fn is_ok(v: &JsValue) -> bool { Reflect::get(v, &JsValue::from_str("ok")).ok().and_then(|x| x.as_bool()).unwrap_or(false) }

#[wasm_bindgen_test]
fn fuzz_strict_methods_no_abort() {
    let mut g = Editor::new();
    let a = g.add_vertex(0.0, 0.0).unwrap(); let b = g.add_vertex(200.0, 0.0).unwrap();
    g.connect(a, b, 2);

    // Simple LCG
    let mut seed: u64 = 0x1234_5678_ABCD_EF01;
    let mut rnd = || { seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1); (seed >> 16) as u32 };

    for _ in 0..500u32 {
        let op = rnd() % 9;
        let counts_before = (g.vertex_count(), g.edge_count());
        let res = match op {
            0 => g.add_vertex_res(f32::from_bits(rnd()), f32::from_bits(rnd())),
            1 => g.move_selected_res(f32::from_bits(rnd()), f32::from_bits(rnd())),
            2 => g.connect_res(rnd() % 8, rnd() % 8, (rnd() % 40) as i32 - 20),
            3 => g.change_selected_res(f64::from_bits(u64::from(rnd()) << 32 | u64::from(rnd()))),
            4 => g.run_dfs_res(rnd() % 8),
            5 => g.run_dijkstra_res(rnd() % 8, rnd() % 8),
            6 => g.run_prim_res(),
            7 => g.run_kruskal_res(),
            8 => { g.select_at((rnd() % 400) as f32, 0.0); JsValue::NULL }
            _ => unreachable!()
        };
        // No aborts and no structural change on error paths
        if !res.is_null() && !is_ok(&res) { assert_eq!((g.vertex_count(), g.edge_count()), counts_before); }
    }

    // history still rewinds to the seed graph
    while g.undo() {}
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
}
