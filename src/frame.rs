use crate::core::AppState;
use crate::dom;
use crate::events::Inbox;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::mem;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: AppState,
    pub inbox: Inbox,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    /// `None` until the first tick, which therefore advances by zero.
    pub last_instant: Option<Instant>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = self
            .last_instant
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last_instant = Some(now);

        // Take the queue first so listeners firing mid-frame land in the next one
        let events = mem::take(&mut *self.inbox.borrow_mut());
        let fx = self.state.handle_all(events);
        if fx.viewport_changed {
            dom::apply_canvas_size(&self.canvas, &self.state.viewport);
            self.gpu.resize(&self.state.viewport);
        }

        self.state.advance(dt_sec);

        match self.gpu.render(&self.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost or outdated; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
