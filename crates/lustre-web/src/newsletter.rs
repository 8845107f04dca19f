//! Footer newsletter form stub: no backend, no validation beyond presence.
//! Submission is logged and the form cleared.

use crate::dom;
use crate::subscription::EventSubscription;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn mount(document: &web::Document) -> Vec<EventSubscription> {
    let Ok(form_el) = dom::html_element_by_id(document, "newsletter-form") else {
        log::debug!("[newsletter] form not present; skipping");
        return Vec::new();
    };
    let Ok(form) = form_el.dyn_into::<web::HtmlFormElement>() else {
        return Vec::new();
    };

    let input = document
        .get_element_by_id("newsletter-email")
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());

    let target: web::EventTarget = form.clone().into();
    let sub = EventSubscription::listen(&target, "submit", move |ev| {
        ev.prevent_default();
        let Some(input) = &input else {
            return;
        };
        let email = input.value();
        if email.is_empty() {
            return;
        }
        log::info!("subscribe: {}", email);
        form.reset();
    });
    vec![sub]
}
