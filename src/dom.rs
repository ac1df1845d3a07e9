use crate::core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn find_canvas(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("query_selector({selector}) failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{selector} is not a canvas: {:?}", e)))
}

/// Current inner window size and display density.
pub fn read_viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::new(width, height, window.device_pixel_ratio())
}

#[inline]
pub fn read_scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn read_query(window: &web::Window) -> String {
    window.location().search().unwrap_or_default()
}

/// Size the canvas like a drawing surface: CSS box in CSS pixels, backing
/// store in device pixels (pixel ratio capped).
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.drawing_buffer_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}
