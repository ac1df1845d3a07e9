pub mod pointer;
pub mod window;

use crate::core::InputEvent;
use std::cell::RefCell;
use std::rc::Rc;

/// Events queued by the listeners since the last frame, oldest first.
pub type Inbox = Rc<RefCell<Vec<InputEvent>>>;

pub use pointer::wire_mousemove;
pub use window::{wire_resize, wire_scroll};

/// Register every listener that feeds the frame loop.
pub fn wire_all(inbox: &Inbox) {
    wire_resize(inbox.clone());
    wire_scroll(inbox.clone());
    wire_mousemove(inbox.clone());
}
