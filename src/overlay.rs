//! DOM-side overlays: the loading splash, the portal/main screen toggles,
//! full-screen flashes, the screen distortion applied during the
//! transition, and transient toasts.

use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::flash::{FlashKind, FlashTimeline};
use crate::core::loading::{LoadingStage, LoadingView, LOADING_MESSAGES};
use crate::core::transition::{Distortion, FlashOverlay, Screen, ScreenVisibility};
use crate::dom;

// ---------------- Loading splash ----------------

pub fn apply_loading(document: &web::Document, view: &LoadingView) {
    if let Some(bar) = document.get_element_by_id(LOADING_BAR_ID) {
        if let Ok(bar) = bar.dyn_into::<web::HtmlElement>() {
            let _ = bar
                .style()
                .set_property("width", &format!("{:.2}%", view.bar_fraction * 100.0));
        }
    }
    if let Some(status) = document.get_element_by_id(LOADING_STATUS_ID) {
        let message = LOADING_MESSAGES[view.message_index.min(LOADING_MESSAGES.len() - 1)];
        if status.text_content().as_deref() != Some(message) {
            status.set_text_content(Some(message));
        }
    }
    if view.stage == LoadingStage::FadingOut {
        if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
            if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                let _ = el
                    .style()
                    .set_property("opacity", &format!("{:.3}", view.overlay_opacity));
            }
        }
    }
}

pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
        let cl = el.class_list();
        let _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        let _ = el.set_attribute("style", "display:none");
    }
}

// ---------------- Screen visibility ----------------

/// DOM implementation of the screen toggles. Both operations are
/// idempotent: applying the same toggle twice leaves the DOM unchanged.
pub struct DomScreens {
    document: web::Document,
    main_visible: Rc<Cell<bool>>,
}

impl DomScreens {
    pub fn new(document: web::Document, main_visible: Rc<Cell<bool>>) -> Self {
        Self {
            document,
            main_visible,
        }
    }

    fn screen_element(&self, screen: Screen) -> Option<web::HtmlElement> {
        let id = match screen {
            Screen::Portal => PORTAL_SCREEN_ID,
            Screen::Main => MAIN_APP_ID,
        };
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }
}

impl ScreenVisibility for DomScreens {
    fn hide(&mut self, screen: Screen) {
        if let Some(el) = self.screen_element(screen) {
            match screen {
                Screen::Portal => {
                    let _ = el.style().set_property("display", "none");
                }
                Screen::Main => {
                    let _ = el.class_list().remove_1("visible");
                    self.main_visible.set(false);
                }
            }
        }
    }

    fn show(&mut self, screen: Screen) {
        if let Some(el) = self.screen_element(screen) {
            match screen {
                Screen::Portal => {
                    let _ = el.style().remove_property("display");
                    let _ = el.style().remove_property("opacity");
                }
                Screen::Main => {
                    let _ = el.class_list().add_1("visible");
                    self.main_visible.set(true);
                }
            }
        }
    }
}

/// Fade the portal screen out under the starting transition; the actual
/// hide happens at the completion swap.
pub fn fade_portal_screen(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PORTAL_SCREEN_ID) {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            let _ = el.style().set_property("opacity", "0");
        }
    }
}

pub fn hide_cursor(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CURSOR_ID) {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            let _ = el.style().set_property("display", "none");
        }
    }
}

// ---------------- Full-screen flash ----------------

pub struct ActiveFlash {
    pub element: web::HtmlElement,
    pub timeline: FlashTimeline,
    pub shown_at_ms: f64,
}

/// DOM implementation of the flash capability: creates a fixed overlay div
/// per request and hands it to the frame loop, which drives its opacity
/// from the timeline and removes it when the timeline ends.
pub struct DomFlash {
    document: web::Document,
    flashes: Rc<RefCell<Vec<ActiveFlash>>>,
    epoch: Instant,
}

impl DomFlash {
    pub fn new(
        document: web::Document,
        flashes: Rc<RefCell<Vec<ActiveFlash>>>,
        epoch: Instant,
    ) -> Self {
        Self {
            document,
            flashes,
            epoch,
        }
    }
}

impl FlashOverlay for DomFlash {
    fn show(&mut self, timeline: FlashTimeline) {
        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        let style = match timeline.kind {
            FlashKind::Entry => {
                "position:fixed;inset:0;z-index:9998;opacity:0;pointer-events:none;\
                 mix-blend-mode:screen;\
                 background:radial-gradient(circle, rgba(0,212,255,0.9) 0%, transparent 70%)"
            }
            FlashKind::Exit => {
                "position:fixed;inset:0;z-index:9999;opacity:1;pointer-events:none;\
                 background:radial-gradient(circle, rgba(255,255,255,0.95) 0%, \
                 rgba(0,212,255,0.3) 70%, transparent 100%)"
            }
        };
        let _ = el.set_attribute("style", style);
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            return;
        };
        if body.append_child(&el).is_err() {
            return;
        }
        self.flashes.borrow_mut().push(ActiveFlash {
            element: el,
            timeline,
            shown_at_ms: self.epoch.elapsed().as_secs_f64() * 1000.0,
        });
    }
}

/// Per-tick flash update: opacity follows the timeline; finished overlays
/// are detached.
pub fn update_flashes(flashes: &Rc<RefCell<Vec<ActiveFlash>>>, now_ms: f64) {
    flashes.borrow_mut().retain(|flash| {
        let elapsed = now_ms - flash.shown_at_ms;
        if flash.timeline.is_finished(elapsed) {
            flash.element.remove();
            return false;
        }
        let opacity = flash.timeline.opacity_at(elapsed);
        let _ = flash
            .element
            .style()
            .set_property("opacity", &format!("{:.3}", opacity));
        true
    });
}

// ---------------- Screen distortion ----------------

pub fn apply_distortion(
    document: &web::Document,
    canvas: Option<&web::HtmlCanvasElement>,
    distortion: &Distortion,
) {
    if let Some(canvas) = canvas {
        let style = canvas.style();
        let _ = style.set_property(
            "transform",
            &format!(
                "scale({:.4}) rotate({:.3}deg)",
                distortion.scale, distortion.rotate_deg
            ),
        );
        let _ = style.set_property(
            "filter",
            &format!(
                "hue-rotate({:.1}deg) saturate({:.3}) brightness({:.3}) blur({:.3}px)",
                distortion.hue_deg, distortion.saturate, distortion.brightness, distortion.blur_px
            ),
        );
    }
    if let Some(body) = document.body() {
        let _ = body.style().set_property(
            "transform",
            &format!(
                "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg)",
                distortion.tilt_x_deg, distortion.tilt_y_deg
            ),
        );
    }
}

pub fn clear_distortion(document: &web::Document, canvas: Option<&web::HtmlCanvasElement>) {
    if let Some(canvas) = canvas {
        let style = canvas.style();
        let _ = style.set_property("transform", "none");
        let _ = style.set_property("filter", "none");
    }
    if let Some(body) = document.body() {
        let _ = body.style().set_property("transform", "none");
    }
}

// ---------------- Toasts ----------------

#[derive(Clone, Copy, Debug)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class_suffix(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "#1976D2",
            ToastKind::Success => "#00C853",
            ToastKind::Warning => "#FFA000",
            ToastKind::Error => "#D32F2F",
        }
    }
}

/// Transient notification in the lower-right corner; slides in, then
/// removes itself.
pub fn toast(document: &web::Document, message: &str, kind: ToastKind) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(&format!("toast toast-{}", kind.class_suffix()));
    el.set_text_content(Some(message));
    let _ = el.set_attribute(
        "style",
        &format!(
            "position:fixed;bottom:24px;right:24px;padding:12px 16px;\
             background:{};color:#fff;border-radius:8px;\
             box-shadow:0 8px 24px rgba(0,0,0,0.25);z-index:10000;\
             opacity:0;transform:translateY(8px);transition:all .25s ease",
            kind.background()
        ),
    );
    let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    if body.append_child(&el).is_err() {
        return;
    }

    let el_in = el.clone();
    dom::set_timeout(16, move || {
        let _ = el_in.style().set_property("opacity", "1");
        let _ = el_in.style().set_property("transform", "translateY(0)");
    });
    let el_out = el;
    dom::set_timeout(TOAST_VISIBLE_MS, move || {
        let _ = el_out.style().set_property("opacity", "0");
        let _ = el_out.style().set_property("transform", "translateY(8px)");
        dom::set_timeout(TOAST_FADE_MS, move || el_out.remove());
    });
}
