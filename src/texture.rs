use crate::core::gradient::GradientImage;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(what: &str, e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{what}: {:?}", e)
}

/// Fetch and decode an image, then read its pixels back through a 2D canvas.
pub async fn load_gradient(document: &web::Document, url: &str) -> anyhow::Result<GradientImage> {
    let img = web::HtmlImageElement::new().map_err(|e| js_err("create img", e))?;
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| js_err(&format!("decode {url}"), e))?;
    let (w, h) = (img.natural_width(), img.natural_height());

    let scratch: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| js_err("create canvas", e))?
        .dyn_into()
        .map_err(|e| js_err("canvas cast", e.into()))?;
    scratch.set_width(w);
    scratch.set_height(h);
    let ctx: web::CanvasRenderingContext2d = scratch
        .get_context("2d")
        .map_err(|e| js_err("get_context", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| js_err("2d context cast", e.into()))?;
    ctx.draw_image_with_html_image_element(&img, 0.0, 0.0)
        .map_err(|e| js_err("draw_image", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| js_err("get_image_data", e))?;
    GradientImage::from_rgba(w, h, data.data().0)
}

/// Load the gradient, falling back to the built-in bands on any failure.
pub async fn load_gradient_or_fallback(document: &web::Document, url: &str) -> GradientImage {
    match load_gradient(document, url).await {
        Ok(img) => {
            log::info!("[texture] loaded {url} ({}x{})", img.width, img.height);
            img
        }
        Err(e) => {
            log::warn!("[texture] {e:#}; using built-in gradient");
            GradientImage::fallback()
        }
    }
}
