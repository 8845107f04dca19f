//! Cover-flow widget: binds a [`CoverFlow`] engine to the explore stage and
//! paints the computed card transforms as inline CSS.

use crate::dom;
use crate::subscription::EventSubscription;
use lustre_core::{AutoplayClock, CoverFlow, TickOutcome, ViewportClass};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct StageDrag {
    start_x: f32,
    last_x: f32,
    moved: bool,
}

pub struct FlowView {
    stage: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    play_button: Option<web::HtmlElement>,
    pub flow: CoverFlow,
    autoplay_clock: AutoplayClock,
    drag: Option<StageDrag>,
    // set when a drag just released so the trailing click does not refocus
    suppress_click: bool,
}

impl FlowView {
    pub fn mount(
        document: &web::Document,
    ) -> anyhow::Result<(Rc<RefCell<FlowView>>, Vec<EventSubscription>)> {
        let stage = dom::html_element_by_id(document, "explore-stage")?;
        let cards = dom::child_elements(&stage);
        let play_button = dom::html_element_by_id(document, "explore-autoplay").ok();
        let flow = CoverFlow::new(cards.len(), dom::viewport_class());
        log::info!("[flow] mounted with {} cards", cards.len());

        let view = Rc::new(RefCell::new(FlowView {
            stage,
            cards,
            play_button,
            flow,
            autoplay_clock: AutoplayClock::default(),
            drag: None,
            suppress_click: false,
        }));
        view.borrow().apply();

        let mut subs = Vec::new();
        let window: web::EventTarget = dom::window()?.into();

        // arrow-key navigation, global while the widget is mounted
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(&window, "keydown", move |ev| {
                let Ok(ev) = ev.dyn_into::<web::KeyboardEvent>() else {
                    return;
                };
                let mut v = view.borrow_mut();
                match ev.key().as_str() {
                    "ArrowRight" => v.flow.advance(1),
                    "ArrowLeft" => v.flow.advance(-1),
                    _ => return,
                }
                v.apply();
            }));
        }

        // click-to-focus and double-tap-to-center, per card
        for (i, card) in view.borrow().cards.iter().enumerate() {
            let target: web::EventTarget = card.clone().into();
            {
                let view = view.clone();
                subs.push(EventSubscription::listen(&target, "click", move |_| {
                    let mut v = view.borrow_mut();
                    if v.suppress_click {
                        v.suppress_click = false;
                        return;
                    }
                    if v.flow.viewport() == ViewportClass::Desktop {
                        v.flow.set_active(i);
                        v.apply();
                    }
                }));
            }
            {
                let view = view.clone();
                subs.push(EventSubscription::listen(&target, "touchend", move |_| {
                    let mut v = view.borrow_mut();
                    if v.flow.tap(i, dom::now_ms()) {
                        v.apply();
                    }
                }));
            }
        }

        // drag-to-navigate (desktop): pointer down on the stage, move/up on
        // the window so a fast drag that leaves the stage still releases
        {
            let view = view.clone();
            let stage_target: web::EventTarget = view.borrow().stage.clone().into();
            subs.push(EventSubscription::listen(
                &stage_target,
                "pointerdown",
                move |ev| {
                    let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
                        return;
                    };
                    let mut v = view.borrow_mut();
                    if v.flow.viewport() != ViewportClass::Desktop {
                        return;
                    }
                    let x = ev.client_x() as f32;
                    v.drag = Some(StageDrag {
                        start_x: x,
                        last_x: x,
                        moved: false,
                    });
                    v.flow.set_dragging(true);
                },
            ));
        }
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(&window, "pointermove", move |ev| {
                let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
                    return;
                };
                let mut v = view.borrow_mut();
                let x = ev.client_x() as f32;
                if let Some(drag) = v.drag.as_mut() {
                    drag.last_x = x;
                    if (x - drag.start_x).abs() > 4.0 {
                        drag.moved = true;
                    }
                }
            }));
        }
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(&window, "pointerup", move |ev| {
                let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
                    return;
                };
                let mut v = view.borrow_mut();
                let Some(drag) = v.drag.take() else {
                    return;
                };
                v.flow.set_dragging(false);
                let offset = ev.client_x() as f32 - drag.start_x;
                if drag.moved {
                    v.suppress_click = true;
                    v.flow.drag_release(offset);
                    v.apply();
                }
            }));
        }

        // play/pause affordance
        if let Some(btn) = view.borrow().play_button.clone() {
            let view = view.clone();
            let target: web::EventTarget = btn.into();
            subs.push(EventSubscription::listen(&target, "click", move |_| {
                let mut v = view.borrow_mut();
                v.flow.toggle_autoplay();
                v.autoplay_clock.reset();
                v.apply();
            }));
        }

        // viewport reclassification on resize
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(&window, "resize", move |_| {
                let mut v = view.borrow_mut();
                let class = dom::viewport_class();
                if class != v.flow.viewport() {
                    v.flow.set_viewport(class);
                    v.apply();
                }
            }));
        }

        Ok((view, subs))
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.flow.set_reduced_motion(reduced);
    }

    /// Advance the autoplay clock by one frame delta. The clock releases at
    /// most one tick per frame; the engine itself decides whether a tick is
    /// currently allowed.
    pub fn frame(&mut self, dt_ms: f64) {
        if self.autoplay_clock.advance(dt_ms)
            && self.flow.autoplay_tick() != TickOutcome::Suppressed
        {
            self.apply();
        }
    }

    /// Paint the current engine state: transforms on desktop, a flat scroll
    /// list on mobile (inline transforms cleared, CSS takes over).
    pub fn apply(&self) {
        let mobile = self.flow.viewport() == ViewportClass::Mobile;
        let class_list = self.stage.class_list();
        if mobile {
            let _ = class_list.add_1("flow-mobile");
        } else {
            let _ = class_list.remove_1("flow-mobile");
        }

        for (i, card) in self.cards.iter().enumerate() {
            let style = card.style();
            if mobile {
                for prop in ["transform", "opacity", "filter", "z-index", "border-radius"] {
                    let _ = style.remove_property(prop);
                }
                continue;
            }
            let t = self.flow.transform_for(i);
            let _ = style.set_property(
                "transform",
                &format!(
                    "translate(-50%, -50%) translateX({}px) translateY({}px) translateZ({}px) rotateY({}deg) scale({})",
                    t.translate.x, t.translate.y, t.translate.z, t.rotate_y, t.scale
                ),
            );
            let _ = style.set_property("opacity", &t.opacity.to_string());
            let _ = style.set_property(
                "filter",
                &format!("saturate({}) blur({}px)", 1.0 - t.desaturation, t.blur),
            );
            let _ = style.set_property("z-index", &t.stack_order.to_string());
            let _ = style.set_property("border-radius", &format!("{}px", t.border_radius));
        }

        if let Some(btn) = &self.play_button {
            btn.set_text_content(Some(if self.flow.autoplay_running() {
                "Pause"
            } else {
                "Play"
            }));
        }
    }
}
