use overlay_core::{DrawList, RibbonEdge};
use web_sys as web;

const CLEAR_COLOR: &str = "#000";

/// `[r, g, b, a]` in 0..1 to a CSS `rgba()` string.
pub fn css_rgba(c: [f32; 4]) -> String {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.3})",
        byte(c[0]),
        byte(c[1]),
        byte(c[2]),
        c[3].clamp(0.0, 1.0)
    )
}

fn fill_segment(ctx: &web::CanvasRenderingContext2d, e0: &RibbonEdge, e1: &RibbonEdge) {
    ctx.begin_path();
    ctx.move_to(e0.left.x as f64, e0.left.y as f64);
    ctx.line_to(e1.left.x as f64, e1.left.y as f64);
    ctx.line_to(e1.right.x as f64, e1.right.y as f64);
    ctx.line_to(e0.right.x as f64, e0.right.y as f64);
    ctx.close_path();
    ctx.fill();
}

/// Paint one frame: clear, quads back to front, then the trail on top.
pub fn draw(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64, list: &DrawList) {
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(CLEAR_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);

    for q in &list.quads {
        let size = q.max - q.min;
        ctx.set_fill_style_str(&css_rgba(q.color));
        ctx.fill_rect(q.min.x as f64, q.min.y as f64, size.x as f64, size.y as f64);
    }

    let [r, g, b] = list.ribbon_color;
    ctx.set_fill_style_str(&css_rgba([r, g, b, 1.0]));
    for pair in list.ribbon.windows(2) {
        // Fade per segment; canvas 2D has no per-vertex colour
        ctx.set_global_alpha(((pair[0].alpha + pair[1].alpha) * 0.5) as f64);
        fill_segment(ctx, &pair[0], &pair[1]);
    }
    ctx.set_global_alpha(1.0);
}
