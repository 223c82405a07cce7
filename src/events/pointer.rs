use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CURSOR_ID;
use crate::input::MouseState;

/// Track the pointer document-wide. The frame tick queries the shared
/// `MouseState`; nothing here mutates anything else.
pub fn wire_pointer_tracking(document: &web::Document, mouse: Rc<RefCell<MouseState>>) {
    {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let mut m = mouse.borrow_mut();
            m.x = ev.client_x() as f32;
            m.y = ev.client_y() as f32;
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            set_cursor_active(&doc, true);
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            set_cursor_active(&doc, false);
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn set_cursor_active(document: &web::Document, active: bool) {
    if let Some(el) = document.get_element_by_id(CURSOR_ID) {
        let cl = el.class_list();
        if active {
            let _ = cl.add_1("active");
        } else {
            let _ = cl.remove_1("active");
        }
    }
}
