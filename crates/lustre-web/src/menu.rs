//! Header mobile-menu dismissal: Escape and mousedown-outside both close it.

use crate::dom;
use crate::subscription::EventSubscription;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn mount(document: &web::Document) -> Vec<EventSubscription> {
    let (Ok(toggle), Ok(panel)) = (
        dom::html_element_by_id(document, "menu-toggle"),
        dom::html_element_by_id(document, "mobile-menu"),
    ) else {
        log::debug!("[menu] header menu not present; skipping");
        return Vec::new();
    };

    let mut subs = Vec::new();
    let doc_target: web::EventTarget = document.clone().into();

    {
        let panel = panel.clone();
        let toggle_target: web::EventTarget = toggle.clone().into();
        subs.push(EventSubscription::listen(&toggle_target, "click", move |_| {
            let _ = panel.class_list().toggle("open");
        }));
    }

    {
        let panel = panel.clone();
        subs.push(EventSubscription::listen(&doc_target, "keydown", move |ev| {
            let Ok(ev) = ev.dyn_into::<web::KeyboardEvent>() else {
                return;
            };
            if ev.key() == "Escape" {
                let _ = panel.class_list().remove_1("open");
            }
        }));
    }

    {
        subs.push(EventSubscription::listen(&doc_target, "mousedown", move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Node>().ok())
                .map(|n| panel.contains(Some(&n)) || toggle.contains(Some(&n)))
                .unwrap_or(false);
            if !inside {
                let _ = panel.class_list().remove_1("open");
            }
        }));
    }

    subs
}
