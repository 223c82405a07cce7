#![cfg(target_arch = "wasm32")]
//! Wasm shell for the portal landing experience: binds the DOM, builds the
//! renderer when the environment allows it, and runs the frame loop. All
//! behavior with real state lives in `core` and is tested natively.

use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod counters;
mod dom;
mod events;
mod form;
mod frame;
mod input;
mod overlay;
mod render;

use crate::constants::{CANVAS_ID, PORTAL_BUTTON_ID};
use crate::core::constants::MOBILE_BREAKPOINT_PX;
use crate::core::loading::LoadingModel;
use crate::core::PortalTransition;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Fade the portal screen and kick the transition. Safe to call from any
/// trigger; the controller ignores it while a transition is running.
pub(crate) fn begin_portal_transition(
    document: &web::Document,
    portal: &Rc<RefCell<PortalTransition>>,
    epoch: Instant,
) {
    if portal.borrow().is_active() {
        return;
    }
    overlay::fade_portal_screen(document);
    let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
    if portal.borrow_mut().start(now_ms) {
        log::info!("portal transition started");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let epoch = Instant::now();

    let (viewport_w, _) = dom::viewport_size();
    let narrow = (viewport_w as u32) <= MOBILE_BREAKPOINT_PX;

    // Renderer, unless the environment rules it out; everything else keeps
    // working on the degraded path.
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .filter(|_| !narrow);
    let gpu = match &canvas {
        Some(canvas) => {
            dom::sync_canvas_backing_size(canvas);
            wire_canvas_resize(canvas);
            frame::init_gpu(canvas).await
        }
        None => None,
    };
    let visuals = gpu.is_some();
    if !visuals {
        log::warn!("running without visuals (no canvas, narrow viewport, or no WebGPU)");
    }

    // Portal controller with its DOM collaborators.
    let flashes = Rc::new(RefCell::new(Vec::new()));
    let main_visible = Rc::new(Cell::new(false));
    let flash = Box::new(overlay::DomFlash::new(
        document.clone(),
        flashes.clone(),
        epoch,
    ));
    let screens = Box::new(overlay::DomScreens::new(
        document.clone(),
        main_visible.clone(),
    ));
    let portal = Rc::new(RefCell::new(PortalTransition::new(visuals, flash, screens)));

    // Pointer tracking and the custom cursor.
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    events::pointer::wire_pointer_tracking(&document, mouse.clone());
    let cursor = if narrow {
        overlay::hide_cursor(&document);
        None
    } else {
        frame::CursorState::lookup(&document)
    };

    // Stat counters armed via the intersection observer.
    let counters = Rc::new(RefCell::new(Vec::new()));
    counters::wire_stat_counters(&document, counters.clone(), epoch)?;

    // Transition triggers: button, keyboard shortcut, form success.
    {
        let doc_for_click = document.clone();
        let portal = portal.clone();
        dom::add_click_listener(&document, PORTAL_BUTTON_ID, move || {
            begin_portal_transition(&doc_for_click, &portal, epoch);
        });
    }
    {
        let doc_for_key = document.clone();
        let portal = portal.clone();
        events::keyboard::wire_transition_shortcut(main_visible.clone(), move || {
            begin_portal_transition(&doc_for_key, &portal, epoch);
        });
    }
    form::wire_access_form(form::FormWiring {
        document: document.clone(),
        portal: portal.clone(),
        epoch,
    });

    // Frame loop, suspended while the tab is hidden.
    let loading = LoadingModel::new(epoch.elapsed().as_secs_f64() * 1000.0);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document: document.clone(),
        portal,
        mouse,
        loading: Some(loading),
        cursor,
        counters,
        flashes,
        canvas,
        gpu,
        smooth_scroll: Box::new(frame::NoopSmoothScroll),
        epoch,
        last_now_ms: 0.0,
        distortion_applied: false,
    }));
    let raf_loop = frame::start_loop(frame_ctx);
    events::visibility::wire_visibility_suspend(&document, raf_loop);

    Ok(())
}
