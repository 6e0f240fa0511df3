use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Backing-store size of the canvas in device pixels.
#[inline]
pub fn canvas_size(canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    glam::Vec2::new(canvas.width() as f32, canvas.height() as f32)
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    if let Err(e) = canvas.style().set_property("cursor", cursor) {
        log::warn!("[dom] cursor not applied: {:?}", e);
    }
}
