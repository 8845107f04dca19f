#![cfg(target_arch = "wasm32")]
//! WASM entry point: mounts the interactive widgets onto the static landing
//! page and drives them from one requestAnimationFrame loop.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod flow_view;
mod frame;
mod hero;
mod menu;
mod newsletter;
mod strip_view;
mod subscription;

pub use flow_view::FlowView;
pub use strip_view::StripView;

use subscription::EventSubscription;

/// Everything mounted on the page. Dropping this unregisters every listener
/// the widgets own.
pub struct App {
    pub flow: Rc<RefCell<FlowView>>,
    pub strip: Rc<RefCell<StripView>>,
    _subs: Vec<EventSubscription>,
}

impl App {
    pub fn mount(document: &web::Document) -> anyhow::Result<App> {
        let (flow, mut subs) = FlowView::mount(document)?;
        let (strip, strip_subs) = StripView::mount(document)?;
        subs.extend(strip_subs);
        subs.extend(menu::mount(document));
        subs.extend(newsletter::mount(document));
        hero::start_video(document);

        // reduced motion: apply the current preference and track changes
        if let Some(query) = dom::reduced_motion_query()? {
            let reduced = query.matches();
            flow.borrow_mut().set_reduced_motion(reduced);
            strip.borrow_mut().set_reduced_motion(reduced);
            let flow_q = flow.clone();
            let strip_q = strip.clone();
            let target: web::EventTarget = query.clone().into();
            subs.push(EventSubscription::listen(&target, "change", move |ev| {
                let Ok(ev) = ev.dyn_into::<web::MediaQueryListEvent>() else {
                    return;
                };
                log::info!("[motion] prefers-reduced-motion: {}", ev.matches());
                flow_q.borrow_mut().set_reduced_motion(ev.matches());
                strip_q.borrow_mut().set_reduced_motion(ev.matches());
            }));
        }

        Ok(App {
            flow,
            strip,
            _subs: subs,
        })
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lustre-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::document()?;
    let app = App::mount(&document)?;
    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(app)));
    frame::start_loop(ctx);
    Ok(())
}
