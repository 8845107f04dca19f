//! DOM lookup and media-query helpers shared by the widget views.

use anyhow::{anyhow, Context, Result};
use lustre_core::{ViewportClass, MOBILE_BREAK_PX};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window() -> Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

pub fn document() -> Result<web::Document> {
    window()?.document().ok_or_else(|| anyhow!("no document"))
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{id} is not an HtmlElement: {:?}", e))
}

/// HtmlElement children of a container, in DOM order.
pub fn child_elements(el: &web::HtmlElement) -> Vec<web::HtmlElement> {
    let children = el.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|c| c.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Classify the viewport from the current window width.
pub fn viewport_class() -> ViewportClass {
    let width = window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::from(MOBILE_BREAK_PX));
    if (width as f32) < MOBILE_BREAK_PX {
        ViewportClass::Mobile
    } else {
        ViewportClass::Desktop
    }
}

pub fn reduced_motion_query() -> Result<Option<web::MediaQueryList>> {
    window()?
        .match_media("(prefers-reduced-motion: reduce)")
        .map_err(|e| anyhow!("matchMedia failed: {:?}", e))
        .context("querying prefers-reduced-motion")
}

/// Whether the platform supports `scroll-behavior: smooth`, probed the same
/// way as `"scrollBehavior" in document.documentElement.style`.
pub fn smooth_scroll_supported(document: &web::Document) -> bool {
    let Some(root) = document.document_element() else {
        return false;
    };
    let Some(root) = root.dyn_ref::<web::HtmlElement>() else {
        return false;
    };
    js_sys::Reflect::has(root.style().as_ref(), &"scrollBehavior".into()).unwrap_or(false)
}

/// Wall-clock milliseconds, used for tap windows and glide timing.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
