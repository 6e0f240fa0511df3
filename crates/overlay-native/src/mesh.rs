use overlay_core::{DrawList, Quad, RibbonEdge};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

fn push_quad(out: &mut Vec<Vertex>, q: &Quad) {
    let (a, b) = (q.min, q.max);
    let corners = [[a.x, a.y], [b.x, a.y], [b.x, b.y], [a.x, a.y], [b.x, b.y], [a.x, b.y]];
    out.extend(corners.into_iter().map(|pos| Vertex { pos, color: q.color }));
}

fn push_segment(out: &mut Vec<Vertex>, e0: &RibbonEdge, e1: &RibbonEdge, rgb: [f32; 3]) {
    let [r, g, b] = rgb;
    let v = |p: glam::Vec2, alpha: f32| Vertex {
        pos: p.to_array(),
        color: [r, g, b, alpha],
    };
    out.extend([
        v(e0.left, e0.alpha),
        v(e0.right, e0.alpha),
        v(e1.right, e1.alpha),
        v(e0.left, e0.alpha),
        v(e1.right, e1.alpha),
        v(e1.left, e1.alpha),
    ]);
}

/// Flatten a draw list into a triangle list, quads first then the trail on top.
pub fn build_vertices(list: &DrawList, out: &mut Vec<Vertex>) {
    out.clear();
    for q in &list.quads {
        push_quad(out, q);
    }
    for pair in list.ribbon.windows(2) {
        push_segment(out, &pair[0], &pair[1], list.ribbon_color);
    }
}
