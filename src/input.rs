use glam::Vec2;
use web_sys as web;

/// Map a CSS-pixel offset inside an element onto its backing store.
#[inline]
pub fn css_to_backing(css: Vec2, css_size: Vec2, backing: Vec2) -> Vec2 {
    if css_size.x <= 0.0 || css_size.y <= 0.0 {
        return css;
    }
    css / css_size * backing
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    let css_size = Vec2::new(rect.width() as f32, rect.height() as f32);
    let backing = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    css_to_backing(css, css_size, backing)
}

/// Milliseconds since the previous frame, clamped to `[0, max_ms]`.
#[inline]
pub fn clamp_frame_ms(ms: f32, max_ms: f32) -> f32 {
    if ms.is_finite() {
        ms.clamp(0.0, max_ms)
    } else {
        0.0
    }
}
