use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::frame::RafLoop;

/// Cancel the frame loop while the tab is hidden and re-arm it when it
/// comes back. Progress is wall-clock-derived everywhere, so the hidden
/// interval is absorbed without any catch-up ticks.
pub fn wire_visibility_suspend(document: &web::Document, raf_loop: RafLoop) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if doc.hidden() {
            log::info!("[visibility] hidden, frame loop paused");
            raf_loop.pause();
        } else {
            log::info!("[visibility] visible, frame loop resumed");
            raf_loop.resume();
        }
    }) as Box<dyn FnMut()>);
    let _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
