//! Scroll-triggered stat counters: elements carrying a `data-target`
//! attribute count up once they enter the viewport. The observer hands
//! them to the frame loop, which animates the text until the target lands.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::core::counter::CounterAnimation;
use crate::frame::ActiveCounter;

pub fn wire_stat_counters(
    document: &web::Document,
    counters: Rc<RefCell<Vec<ActiveCounter>>>,
    epoch: Instant,
) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(attr) = target.get_attribute("data-target") else {
                    continue;
                };
                let Ok(value) = attr.parse::<f64>() else {
                    log::warn!("[counters] bad data-target {:?}", attr);
                    continue;
                };
                let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
                counters.borrow_mut().push(ActiveCounter {
                    element: target,
                    anim: CounterAnimation::new(value, now_ms),
                });
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.5));
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {:?}", e))?;
    callback.forget();

    let nodes = document
        .query_selector_all("[data-target]")
        .map_err(|e| anyhow::anyhow!("query error: {:?}", e))?;
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(el) = node.dyn_into::<web::Element>() {
                observer.observe(&el);
            }
        }
    }
    Ok(())
}
