use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Ctrl/Cmd+K jumps straight through the portal while the main screen is
/// not yet visible.
pub fn wire_transition_shortcut(
    main_visible: Rc<Cell<bool>>,
    mut on_trigger: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key().eq_ignore_ascii_case("k") {
            ev.prevent_default();
            if !main_visible.get() {
                log::info!("[keyboard] transition shortcut");
                on_trigger();
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
