use crate::Editor;
use graphtouch::snapshot;
use graphtouch::{ControllerConfig, Presentation, Vec2};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// plain objects rather than Maps, so snapshots read back as regular JSON
fn to_js<T: serde::Serialize>(v: &T) -> JsValue {
    let ser = serde_wasm_bindgen::Serializer::json_compatible();
    serde::Serialize::serialize(v, &ser).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        crate::Editor::rs_new(ControllerConfig::default())
    }
    /// Editor configured from a JSON string; throws on malformed config.
    pub fn with_config(json: &str) -> Result<Editor, JsValue> {
        ControllerConfig::from_json_str(json)
            .map(crate::Editor::rs_new)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // Vertices
    pub fn add_vertex(&mut self, x: f32, y: f32) -> Option<u32> {
        self.inner.add_vertex(Vec2::new(x, y))
    }
    pub fn add_vertex_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        match self.inner.add_vertex(Vec2::new(x, y)) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::err("exhausted", "no vertex number left", None),
        }
    }
    pub fn add_vertex_numbered(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.inner.add_vertex_numbered(id, Vec2::new(x, y))
    }
    pub fn select_vertex(&mut self, id: u32) -> bool {
        self.inner.select_vertex(id)
    }
    pub fn move_selected(&mut self, dx: f32, dy: f32) -> bool {
        self.inner.move_selected(dx, dy)
    }
    pub fn move_selected_res(&mut self, dx: f32, dy: f32) -> JsValue {
        if !dx.is_finite() {
            return error::non_finite("dx");
        }
        if !dy.is_finite() {
            return error::non_finite("dy");
        }
        if self.inner.selection().is_none() {
            return error::err("nothing_selected", "no vertex is selected", None);
        }
        error::ok(JsValue::from_bool(self.inner.move_selected(dx, dy)))
    }
    pub fn finish_move(&mut self) {
        self.inner.finish_move();
    }
    pub fn remove_selected(&mut self) -> bool {
        self.inner.remove_selected()
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.graph().vertex_count() as u32
    }

    // Edges
    pub fn start_edge(&mut self, x: f32, y: f32) -> bool {
        self.inner.start_edge(Vec2::new(x, y))
    }
    pub fn continue_edge(&mut self, dx: f32, dy: f32) -> bool {
        self.inner.continue_edge(dx, dy)
    }
    pub fn commit_edge(&mut self, x: f32, y: f32) -> JsValue {
        match self.inner.commit_edge(Vec2::new(x, y)) {
            Some(e) => to_js(&e),
            None => JsValue::NULL,
        }
    }
    pub fn cancel_edge(&mut self) {
        self.inner.cancel_edge();
    }
    pub fn connect(&mut self, out: u32, inc: u32, weight: i32) -> bool {
        self.inner.connect(out, inc, weight)
    }
    pub fn connect_res(&mut self, out: u32, inc: u32, weight: i32) -> JsValue {
        for id in [out, inc] {
            if !self.inner.graph().has_vertex(id) {
                return error::invalid_id("vertex", id);
            }
        }
        if out == inc {
            return error::err("invalid_edge", "edge endpoints cannot be the same vertex", None);
        }
        if self.inner.connect(out, inc, weight) {
            error::ok(JsValue::TRUE)
        } else {
            error::err("invalid_edge", "vertices are already adjacent", None)
        }
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.graph().edge_count() as u32
    }

    // Picking
    pub fn select_at(&mut self, x: f32, y: f32) -> JsValue {
        to_js(&self.inner.select_at(Vec2::new(x, y)))
    }
    pub fn selection(&self) -> JsValue {
        to_js(&self.inner.selection())
    }
    pub fn remove_at(&mut self, x: f32, y: f32) -> bool {
        self.inner.remove_at(Vec2::new(x, y))
    }
    pub fn change_selected_res(&mut self, value: f64) -> JsValue {
        if !value.is_finite() {
            return error::non_finite("value");
        }
        if value.fract() != 0.0 {
            return error::err("not_integer", "value must be a whole number", None);
        }
        if value < i64::MIN as f64 || value > i64::MAX as f64 {
            return error::out_of_range("value", i64::MIN as f64, i64::MAX as f64, value);
        }
        match self.inner.change_selected(value as i64) {
            Ok(changed) => error::ok(JsValue::from_bool(changed)),
            Err(e) => error::controller(&e),
        }
    }

    // Algorithms
    pub fn run_dfs_res(&mut self, from: u32) -> JsValue {
        match self.inner.run_dfs(from) {
            Ok(n) => error::ok(JsValue::from_f64(n as f64)),
            Err(e) => error::controller(&e),
        }
    }
    /// `value` is the path cost, or null when `to` is unreachable.
    pub fn run_dijkstra_res(&mut self, from: u32, to: u32) -> JsValue {
        match self.inner.run_dijkstra(from, to) {
            Ok(Some(cost)) => error::ok(JsValue::from_f64(cost as f64)),
            Ok(None) => error::ok(JsValue::NULL),
            Err(e) => error::controller(&e),
        }
    }
    pub fn run_prim_res(&mut self) -> JsValue {
        match self.inner.run_prim() {
            Ok(total) => error::ok(JsValue::from_f64(total as f64)),
            Err(e) => error::controller(&e),
        }
    }
    pub fn run_kruskal_res(&mut self) -> JsValue {
        match self.inner.run_kruskal() {
            Ok(total) => error::ok(JsValue::from_f64(total as f64)),
            Err(e) => error::controller(&e),
        }
    }
    pub fn computations(&self) -> u64 {
        self.inner.computations()
    }
    pub fn toggle_directed(&mut self) -> bool {
        self.inner.toggle_directed()
    }
    pub fn is_directed(&self) -> bool {
        self.inner.graph().is_directed()
    }
    pub fn clear_highlights(&mut self) -> bool {
        self.inner.clear_highlights()
    }

    // History
    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }
    pub fn redo(&mut self) -> bool {
        self.inner.redo()
    }
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    // Typed arrays getters
    pub fn get_node_data(&self) -> JsValue {
        let nodes = self.inner.presentation().nodes();
        let ids: Vec<u32> = nodes.iter().map(|n| n.id).collect();
        let pos: Vec<f32> = nodes.iter().flat_map(|n| [n.x, n.y]).collect();
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "ids", &crate::interop::arr_u32(&ids).into());
        crate::interop::set_kv(&obj, "positions", &crate::interop::arr_f32(&pos).into());
        obj.into()
    }
    pub fn get_edge_data(&self) -> JsValue {
        let edges = self.inner.presentation().edges();
        let endpoints: Vec<u32> = edges.iter().flat_map(|e| [e.edge.tail, e.edge.head]).collect();
        let weights: Vec<i32> = edges.iter().map(|e| e.edge.weight).collect();
        let segments: Vec<f32> = edges
            .iter()
            .flat_map(|e| [e.from.x, e.from.y, e.to.x, e.to.y])
            .collect();
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "endpoints", &crate::interop::arr_u32(&endpoints).into());
        crate::interop::set_kv(&obj, "weights", &crate::interop::arr_i32(&weights).into());
        crate::interop::set_kv(&obj, "segments", &crate::interop::arr_f32(&segments).into());
        obj.into()
    }
    /// Highlighted edges as flat (out, in) pairs, or null when nothing is shown.
    pub fn get_markers(&self) -> JsValue {
        match self.inner.presentation().markers() {
            Some(m) => {
                let pairs: Vec<u32> = m.iter().flat_map(|e| [e.tail, e.head]).collect();
                crate::interop::arr_u32(&pairs).into()
            }
            None => JsValue::NULL,
        }
    }
    pub fn get_transient(&self) -> JsValue {
        let Some(t) = self.inner.presentation().transient() else {
            return JsValue::NULL;
        };
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "from", &JsValue::from_f64(t.from as f64));
        crate::interop::set_kv(&obj, "x", &JsValue::from_f64(t.tip.x as f64));
        crate::interop::set_kv(&obj, "y", &JsValue::from_f64(t.tip.y as f64));
        obj.into()
    }

    // JSON
    pub fn to_json(&self) -> JsValue {
        to_js(&snapshot::to_json(&self.inner.snapshot()))
    }
    pub fn from_json(&mut self, v: JsValue) -> bool {
        let res = self.from_json_res(v);
        let ok = js_sys::Reflect::get(&res, &JsValue::from_str("ok"))
            .ok()
            .and_then(|x| x.as_bool())
            .unwrap_or(false);
        if !ok {
            web_sys::console::warn_1(&JsValue::from_str("graphtouch: snapshot rejected"));
        }
        ok
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        let val = match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(val) => val,
            Err(e) => return error::err("bad_json", format!("{}", e), None),
        };
        let restored = snapshot::from_json(val).and_then(|s| self.inner.restore(&s));
        match restored {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::snapshot(&e),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new()
    }
}
