use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Editor { pub(crate) inner: graphtouch::Controller<graphtouch::Scene> }

impl Editor {
    pub fn rs_new(config: graphtouch::ControllerConfig) -> Editor {
        let scene = graphtouch::Scene::new(config.node_radius);
        Editor { inner: graphtouch::Controller::new(scene, config) }
    }
}
