use super::Inbox;
use crate::core::InputEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in client (viewport) coordinates; normalization against
/// the viewport happens when the frame loop applies the event.
pub fn wire_mousemove(inbox: Inbox) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        inbox.borrow_mut().push(InputEvent::PointerMove {
            client_x: ev.client_x() as f64,
            client_y: ev.client_y() as f64,
        });
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
