//! Lead-capture form: validate, POST, and keep the experience moving even
//! when the endpoint is unreachable. A failed submission warns, then runs
//! the same success path as a 2xx — the fallback is deliberate product
//! behavior, not error hiding by accident.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::*;
use crate::core::lead::{is_valid_email, LeadPayload, EARLY_ACCESS_ENDPOINT, STORAGE_KEY_EMAIL};
use crate::core::PortalTransition;
use crate::dom;
use crate::overlay::{self, ToastKind};

pub struct FormWiring {
    pub document: web::Document,
    pub portal: Rc<RefCell<PortalTransition>>,
    pub epoch: Instant,
}

pub fn wire_access_form(w: FormWiring) {
    let Some(form) = w.document.get_element_by_id(ACCESS_FORM_ID) else {
        return;
    };
    let form_el = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let email = form_el
            .query_selector("input[type=\"email\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        if email.is_empty() {
            return;
        }
        handle_submission(&w.document, &w.portal, w.epoch, email);
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn handle_submission(
    document: &web::Document,
    portal: &Rc<RefCell<PortalTransition>>,
    epoch: Instant,
    email: String,
) {
    let Some(button) = document
        .query_selector(".access-submit")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        return;
    };
    let original_text = button.text_content().unwrap_or_default();
    button.set_disabled(true);
    let _ = button.class_list().add_1("is-loading");
    button.set_text_content(Some("Connecting…"));

    if !is_valid_email(&email) {
        overlay::toast(document, "Please enter a valid email address.", ToastKind::Error);
        button.set_disabled(false);
        let _ = button.class_list().remove_1("is-loading");
        button.set_text_content(Some(&original_text));
        return;
    }

    let payload = LeadPayload {
        email: email.clone(),
        ts: js_sys::Date::now(),
        ua: web::window()
            .map(|w| w.navigator().user_agent().unwrap_or_default())
            .unwrap_or_default(),
    };
    let body = match serde_json::to_string(&payload) {
        Ok(b) => b,
        Err(e) => {
            log::error!("[form] payload encode error: {}", e);
            apply_success(document, portal, epoch, &button, original_text, &email);
            return;
        }
    };

    let document = document.clone();
    let portal = portal.clone();
    spawn_local(async move {
        match submit_lead(&body).await {
            Ok(()) => {
                apply_success(&document, &portal, epoch, &button, original_text, &email);
            }
            Err(e) => {
                // Deliberate fallback: the visitor still gets through.
                log::warn!("[form] submission failed, going offline: {}", e);
                overlay::toast(
                    &document,
                    "Could not reach the server. Continuing offline.",
                    ToastKind::Warning,
                );
                apply_success(&document, &portal, epoch, &button, original_text, &email);
            }
        }
    });
}

async fn submit_lead(body: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_credentials(web::RequestCredentials::SameOrigin);
    opts.set_body(&JsValue::from_str(body));
    let request = web::Request::new_with_str_and_init(EARLY_ACCESS_ENDPOINT, &opts)
        .map_err(|e| anyhow::anyhow!("request error: {:?}", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| anyhow::anyhow!("header error: {:?}", e))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("fetch error: {:?}", e))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("response cast error: {:?}", e))?;
    if !response.ok() {
        anyhow::bail!("HTTP {}", response.status());
    }
    Ok(())
}

fn apply_success(
    document: &web::Document,
    portal: &Rc<RefCell<PortalTransition>>,
    epoch: Instant,
    button: &web::HtmlButtonElement,
    original_text: String,
    email: &str,
) {
    if let Some(storage) = web::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY_EMAIL, email);
    }

    let _ = button.class_list().remove_1("is-loading");
    button.set_text_content(Some("Welcome!"));
    overlay::toast(
        document,
        "Access granted. Preparing the interface…",
        ToastKind::Success,
    );

    let document = document.clone();
    let portal = portal.clone();
    let button = button.clone();
    dom::set_timeout(TRANSITION_KICKOFF_DELAY_MS, move || {
        crate::begin_portal_transition(&document, &portal, epoch);
        dom::set_timeout(BUTTON_RESTORE_DELAY_MS, move || {
            button.set_disabled(false);
            button.set_text_content(Some(&original_text));
        });
    });
}
