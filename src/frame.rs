//! The per-frame tick: one `FrameContext::frame()` call per
//! requestAnimationFrame, driving the loading splash, the portal
//! transition, the renderer, the cursor follower, the stat counters, and
//! the flash overlays. The loop is cancelable and restartable; all timing
//! is wall-clock-derived, so a suspended loop resumes without rewinding.

use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::counter::CounterAnimation;
use crate::core::cursor::CursorFollower;
use crate::core::loading::LoadingModel;
use crate::core::PortalTransition;
use crate::dom;
use crate::input;
use crate::overlay;
use crate::render;

/// Optional smooth-scroll capability; the default build carries the no-op.
pub trait SmoothScroll {
    fn raf(&mut self, now_ms: f64);
}

#[derive(Default)]
pub struct NoopSmoothScroll;

impl SmoothScroll for NoopSmoothScroll {
    fn raf(&mut self, _now_ms: f64) {}
}

/// Custom cursor wiring: the follower state plus the two elements it moves.
pub struct CursorState {
    pub follower: CursorFollower,
    pub dot: web::HtmlElement,
    pub ring: web::HtmlElement,
}

impl CursorState {
    pub fn lookup(document: &web::Document) -> Option<Self> {
        let dot = document
            .get_element_by_id(CURSOR_DOT_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let ring = document
            .get_element_by_id(CURSOR_RING_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(Self {
            follower: CursorFollower::new(),
            dot,
            ring,
        })
    }
}

/// A counter that has entered the viewport and is counting up.
pub struct ActiveCounter {
    pub element: web::Element,
    pub anim: CounterAnimation,
}

pub struct FrameContext {
    pub document: web::Document,
    pub portal: Rc<RefCell<PortalTransition>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub loading: Option<LoadingModel>,
    pub cursor: Option<CursorState>,
    pub counters: Rc<RefCell<Vec<ActiveCounter>>>,
    pub flashes: Rc<RefCell<Vec<overlay::ActiveFlash>>>,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub gpu: Option<render::GpuState<'static>>,
    pub smooth_scroll: Box<dyn SmoothScroll>,

    pub epoch: Instant,
    pub last_now_ms: f64,
    pub distortion_applied: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        let dt_sec = ((now_ms - self.last_now_ms) / 1000.0).max(0.0) as f32;
        self.last_now_ms = now_ms;

        // Loading splash until it is done, then drop the model for good.
        if let Some(model) = &mut self.loading {
            let view = model.tick(now_ms);
            overlay::apply_loading(&self.document, &view);
            if model.is_done() {
                overlay::hide_loading(&self.document);
                self.loading = None;
                log::info!("loading splash finished");
            }
        }

        // Portal transition tick; distortion and camera fall out of it.
        let (viewport_w, viewport_h) = dom::viewport_size();
        let pointer_ndc = input::pointer_ndc(&self.mouse.borrow(), viewport_w, viewport_h);
        let out = self.portal.borrow_mut().tick(now_ms, pointer_ndc);

        match &out.distortion {
            Some(d) => {
                overlay::apply_distortion(&self.document, self.canvas.as_ref(), d);
                self.distortion_applied = true;
            }
            None if self.distortion_applied => {
                overlay::clear_distortion(&self.document, self.canvas.as_ref());
                self.distortion_applied = false;
            }
            None => {}
        }

        // Render whatever field the scene currently holds. Failures are
        // logged and swallowed; the next tick starts clean.
        if let (Some(gpu), Some(canvas)) = (&mut self.gpu, &self.canvas) {
            gpu.set_camera(out.camera);
            gpu.resize_if_needed(canvas.width(), canvas.height());
            if let Some(scene) = self.portal.borrow().scene() {
                let instances = render::field_instances(scene);
                if let Err(e) = gpu.render(dt_sec, &instances) {
                    log::error!("render error: {:?}", e);
                }
            }
        }

        // Cursor follower.
        if let Some(cursor) = &mut self.cursor {
            let (x, y) = {
                let m = self.mouse.borrow();
                (m.x, m.y)
            };
            cursor.follower.update(glam::Vec2::new(x, y));
            let _ = cursor.dot.style().set_property(
                "transform",
                &format!(
                    "translate({:.1}px, {:.1}px)",
                    cursor.follower.dot.x, cursor.follower.dot.y
                ),
            );
            let _ = cursor.ring.style().set_property(
                "transform",
                &format!(
                    "translate({:.1}px, {:.1}px)",
                    cursor.follower.ring.x, cursor.follower.ring.y
                ),
            );
        }

        // Stat counters currently animating.
        self.counters.borrow_mut().retain(|counter| {
            let (text, done) = counter.anim.text_at(now_ms);
            counter.element.set_text_content(Some(&text));
            !done
        });

        overlay::update_flashes(&self.flashes, now_ms);
        self.smooth_scroll.raf(now_ms);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Cancelable requestAnimationFrame loop. `pause` drops the pending frame
/// request; `resume` re-arms it. State lives in the shared `FrameContext`,
/// so nothing is lost across a pause.
#[derive(Clone)]
pub struct RafLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafLoop {
    pub fn pause(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn resume(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                self.raf_id.set(Some(id));
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> RafLoop {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_for_tick.set(None);
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                raf_for_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    let raf_loop = RafLoop { raf_id, tick };
    raf_loop.resume();
    raf_loop
}
