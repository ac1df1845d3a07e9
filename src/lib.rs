#![cfg(target_arch = "wasm32")]
use crate::core::scene::Scene;
use crate::core::{AppState, SceneParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod render;
mod texture;

const CANVAS_SELECTOR: &str = "canvas.webgl";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("toon-scroll starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, CANVAS_SELECTOR)?;

    let params = SceneParams::from_query(&dom::read_query(&window));
    log::info!(
        "[params] distance={} particles={} gradient={}",
        params.distance,
        params.particle_count,
        params.gradient_url
    );

    let viewport = dom::read_viewport(&window);
    dom::apply_canvas_size(&canvas, &viewport);

    let mut rng = StdRng::from_entropy();
    let scene = Scene::build(&params, &mut rng);
    let gradient = texture::load_gradient_or_fallback(&document, &params.gradient_url).await;
    let state = AppState::new(
        params,
        scene,
        viewport,
        dom::read_scroll_offset(&window),
    );

    // The surface borrows the canvas for the life of the page
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas, &state, &gradient).await?;

    let inbox: events::Inbox = Rc::new(RefCell::new(Vec::new()));
    events::wire_all(&inbox);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        inbox,
        canvas,
        gpu,
        last_instant: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
