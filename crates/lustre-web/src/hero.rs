//! Hero section: best-effort video autoplay. Playback rejection (autoplay
//! policy, missing codec) is swallowed; the poster frame stays up.

use wasm_bindgen::JsCast;
use web_sys as web;

pub fn start_video(document: &web::Document) {
    let Some(el) = document.get_element_by_id("hero-video") else {
        log::debug!("[hero] no video element; skipping");
        return;
    };
    let Ok(video) = el.dyn_into::<web::HtmlVideoElement>() else {
        return;
    };
    video.set_muted(true);
    if let Ok(promise) = video.play() {
        let noop = js_sys::Function::new_no_args("");
        let _ = promise.catch(&noop);
    }
}
