use super::Inbox;
use crate::core::InputEvent;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resize(inbox: Inbox) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            let vp = dom::read_viewport(&w);
            inbox.borrow_mut().push(InputEvent::Resize {
                width: vp.width,
                height: vp.height,
                device_pixel_ratio: vp.device_pixel_ratio,
            });
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_scroll(inbox: Inbox) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            let offset = dom::read_scroll_offset(&w);
            inbox.borrow_mut().push(InputEvent::Scroll { offset });
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
