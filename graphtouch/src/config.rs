use crate::geometry::tolerance::{DEFAULT_EDGE_SELECTION_WIDTH, DEFAULT_NODE_RADIUS};
use crate::model::{Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};

/// How edges committed by dragging get their weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum EdgeWeightPolicy {
    Fixed { weight: Weight },
    /// Uniform in `[min, max)`; collapses to `min` for an empty range.
    Random { min: Weight, max: Weight },
}

impl Default for EdgeWeightPolicy {
    fn default() -> Self {
        EdgeWeightPolicy::Fixed { weight: DEFAULT_WEIGHT }
    }
}

impl EdgeWeightPolicy {
    pub fn draw(&self) -> Weight {
        match *self {
            EdgeWeightPolicy::Fixed { weight } => weight,
            EdgeWeightPolicy::Random { min, max } if min < max => fastrand::i32(min..max),
            EdgeWeightPolicy::Random { min, .. } => min,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Half width of a vertex hit box; dragging an edge uses twice this.
    pub node_radius: f32,
    pub edge_selection_width: f32,
    pub directed: bool,
    pub edge_weight: EdgeWeightPolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            node_radius: DEFAULT_NODE_RADIUS,
            edge_selection_width: DEFAULT_EDGE_SELECTION_WIDTH,
            directed: true,
            edge_weight: EdgeWeightPolicy::default(),
        }
    }
}

impl ControllerConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn extended_radius(&self) -> f32 {
        self.node_radius * 2.0
    }
}
