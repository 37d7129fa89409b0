use crate::geometry::math::seg_project;
use crate::model::{EdgeKey, EdgeView, NodeView, Vec2, VertexId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pick {
    #[serde(rename = "node")]
    Node { id: VertexId },
    #[serde(rename = "edge")]
    Edge { key: EdgeKey, t: f32 },
}

/// First node whose axis-aligned box of half width `half` contains `p`.
/// Nodes are scanned in presentation order.
pub fn node_at(nodes: &[NodeView], p: Vec2, half: f32) -> Option<VertexId> {
    nodes.iter().find(|n| (n.x-p.x).abs() < half && (n.y-p.y).abs() < half).map(|n| n.id)
}

/// Edge whose segment passes within `band` of `p` on both axes: the point is
/// projected onto the segment and both the horizontal and vertical offsets to
/// the projection must fall inside the band. Among several hits the closest wins.
pub fn edge_at(edges: &[EdgeView], p: Vec2, band: f32) -> Option<(EdgeKey, f32)> {
    let mut best: Option<(EdgeKey, f32, f32)> = None;
    for e in edges {
        let (qx, qy, t) = seg_project(p.x, p.y, e.from.x, e.from.y, e.to.x, e.to.y);
        let dx = (p.x-qx).abs(); let dy = (p.y-qy).abs();
        if dx < band && dy < band {
            let d2 = dx*dx + dy*dy;
            if best.map_or(true, |(_,bd,_)| d2 < bd) { best = Some((e.edge.key(), d2, t)); }
        }
    }
    best.map(|(key,_,t)| (key,t))
}

/// Nodes first, then edges.
pub fn pick(nodes: &[NodeView], edges: &[EdgeView], p: Vec2, half: f32, band: f32) -> Option<Pick> {
    if let Some(id) = node_at(nodes, p, half) { return Some(Pick::Node { id }); }
    edge_at(edges, p, band).map(|(key,t)| Pick::Edge { key, t })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Edge;

    fn scene() -> (Vec<NodeView>, Vec<EdgeView>) {
        let nodes = vec![NodeView { id: 1, x: 0.0, y: 0.0 }, NodeView { id: 2, x: 100.0, y: 0.0 }];
        let edges = vec![EdgeView { edge: Edge::new(1, 2, 1), from: Vec2::new(10.0, 0.0), to: Vec2::new(90.0, 0.0) }];
        (nodes, edges)
    }

    #[test]
    fn node_box_is_axis_aligned() {
        let (nodes, _) = scene();
        assert_eq!(node_at(&nodes, Vec2::new(9.0, -9.0), 10.0), Some(1));
        assert_eq!(node_at(&nodes, Vec2::new(10.0, 0.0), 10.0), None);
        assert_eq!(node_at(&nodes, Vec2::new(115.0, 0.0), 20.0), Some(2));
    }

    #[test]
    fn horizontal_edge_is_pickable() {
        let (nodes, edges) = scene();
        match pick(&nodes, &edges, Vec2::new(50.0, 4.0), 10.0, 5.0) {
            Some(Pick::Edge { key, t }) => { assert_eq!(key, EdgeKey::new(1, 2)); assert!((t-0.5).abs() < 1e-6); }
            other => panic!("expected edge, got {:?}", other),
        }
        assert!(pick(&nodes, &edges, Vec2::new(50.0, 6.0), 10.0, 5.0).is_none());
    }

    #[test]
    fn nodes_win_over_edges() {
        let (nodes, edges) = scene();
        assert_eq!(pick(&nodes, &edges, Vec2::new(5.0, 0.0), 10.0, 5.0), Some(Pick::Node { id: 1 }));
    }
}
