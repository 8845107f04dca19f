//! Momentum strip widget: binds a [`MomentumStrip`] engine to the horizontally
//! scrolling collections strip and mirrors the engine offset into
//! `scrollLeft` every frame.

use crate::dom;
use crate::subscription::EventSubscription;
use lustre_core::{FrameOutcome, ItemBounds, MomentumStrip, RESIZE_SNAP_DELAY_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct StripView {
    container: web::HtmlElement,
    children: Vec<web::HtmlElement>,
    pub engine: MomentumStrip,
    smooth_scroll: bool,
    resize_snap_at: Option<f64>,
}

impl StripView {
    pub fn mount(
        document: &web::Document,
    ) -> anyhow::Result<(Rc<RefCell<StripView>>, Vec<EventSubscription>)> {
        let container = dom::html_element_by_id(document, "collections-strip")?;
        let children = dom::child_elements(&container);
        let smooth_scroll = dom::smooth_scroll_supported(document);
        log::info!(
            "[strip] mounted with {} items (native smooth scroll: {})",
            children.len(),
            smooth_scroll
        );

        let view = Rc::new(RefCell::new(StripView {
            container,
            children,
            engine: MomentumStrip::new(),
            smooth_scroll,
            resize_snap_at: None,
        }));
        view.borrow_mut().refresh_metrics();

        let mut subs = Vec::new();
        let window: web::EventTarget = dom::window()?.into();
        let container_target: web::EventTarget = view.borrow().container.clone().into();

        // wheel remapped to horizontal; non-passive so we can preventDefault
        {
            let view = view.clone();
            subs.push(EventSubscription::listen_active(
                &container_target,
                "wheel",
                move |ev| {
                    let Ok(ev) = ev.dyn_into::<web::WheelEvent>() else {
                        return;
                    };
                    let mut v = view.borrow_mut();
                    if v.engine.wheel(ev.delta_y() as f32, ev.shift_key()) {
                        ev.prevent_default();
                        v.write_offset();
                    }
                },
            ));
        }

        // mouse drag: down on the strip, move/up on the window
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(
                &container_target,
                "mousedown",
                move |ev| {
                    let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else {
                        return;
                    };
                    let mut v = view.borrow_mut();
                    v.refresh_metrics();
                    v.engine.begin_drag(ev.client_x() as f32, dom::now_ms());
                    ev.prevent_default();
                },
            ));
        }
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(&window, "mousemove", move |ev| {
                let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else {
                    return;
                };
                let mut v = view.borrow_mut();
                if v.engine.drag_active() {
                    v.engine.drag_move(ev.client_x() as f32, dom::now_ms());
                    v.write_offset();
                }
            }));
        }
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(&window, "mouseup", move |_| {
                view.borrow_mut().engine.end_drag(dom::now_ms());
            }));
        }

        // touch drag
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(
                &container_target,
                "touchstart",
                move |ev| {
                    let Ok(ev) = ev.dyn_into::<web::TouchEvent>() else {
                        return;
                    };
                    let Some(touch) = ev.touches().item(0) else {
                        return;
                    };
                    let mut v = view.borrow_mut();
                    v.refresh_metrics();
                    v.engine.begin_drag(touch.client_x() as f32, dom::now_ms());
                },
            ));
        }
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(
                &container_target,
                "touchmove",
                move |ev| {
                    let Ok(ev) = ev.dyn_into::<web::TouchEvent>() else {
                        return;
                    };
                    let Some(touch) = ev.touches().item(0) else {
                        return;
                    };
                    let mut v = view.borrow_mut();
                    if v.engine.drag_active() {
                        v.engine.drag_move(touch.client_x() as f32, dom::now_ms());
                        v.write_offset();
                    }
                },
            ));
        }
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(
                &container_target,
                "touchend",
                move |_| {
                    view.borrow_mut().engine.end_drag(dom::now_ms());
                },
            ));
        }

        // hover pauses autoplay; leaving the strip mid-drag releases it
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(
                &container_target,
                "mouseenter",
                move |_| view.borrow_mut().engine.set_paused(true),
            ));
        }
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(
                &container_target,
                "mouseleave",
                move |_| {
                    let mut v = view.borrow_mut();
                    if v.engine.drag_active() {
                        v.engine.end_drag(dom::now_ms());
                    }
                    // the hover pause must clear even when the pointer left
                    // mid-drag, or autoplay never resumes
                    v.engine.set_paused(false);
                },
            ));
        }

        // focus entering the strip pauses autoplay and centers the focused item
        {
            let view = view.clone();
            let document = document.clone();
            subs.push(EventSubscription::listen(
                &container_target,
                "focusin",
                move |_| {
                    let mut v = view.borrow_mut();
                    v.engine.set_focus_within(true);
                    if let Some(i) = v.focused_child_index(&document) {
                        v.refresh_metrics();
                        v.scroll_to_index(i, dom::now_ms());
                    }
                },
            ));
        }
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(
                &container_target,
                "focusout",
                move |ev| {
                    let Ok(ev) = ev.dyn_into::<web::FocusEvent>() else {
                        return;
                    };
                    let mut v = view.borrow_mut();
                    let still_inside = ev
                        .related_target()
                        .and_then(|t| t.dyn_into::<web::Node>().ok())
                        .map(|n| v.container.contains(Some(&n)))
                        .unwrap_or(false);
                    if !still_inside {
                        v.engine.set_focus_within(false);
                    }
                },
            ));
        }

        // arrow keys move focus between items while focus is inside the strip
        {
            let view = view.clone();
            let document = document.clone();
            subs.push(EventSubscription::listen(&window, "keydown", move |ev| {
                let Ok(ev) = ev.dyn_into::<web::KeyboardEvent>() else {
                    return;
                };
                let step: i32 = match ev.key().as_str() {
                    "ArrowRight" => 1,
                    "ArrowLeft" => -1,
                    _ => return,
                };
                let mut v = view.borrow_mut();
                let Some(current) = v.focused_child_index(&document) else {
                    return;
                };
                ev.prevent_default();
                let next = (current as i32 + step).clamp(0, v.children.len() as i32 - 1) as usize;
                let _ = v.children[next].focus();
                v.refresh_metrics();
                v.scroll_to_index(next, dom::now_ms());
            }));
        }

        // re-snap shortly after a resize settles
        {
            let view = view.clone();
            subs.push(EventSubscription::listen(&window, "resize", move |_| {
                view.borrow_mut().resize_snap_at = Some(dom::now_ms() + RESIZE_SNAP_DELAY_MS);
            }));
        }

        Ok((view, subs))
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.engine.set_reduced_motion(reduced);
    }

    /// Pull layout out of the DOM and into the engine.
    fn refresh_metrics(&mut self) {
        self.engine.set_metrics(
            self.container.scroll_width() as f32,
            self.container.client_width() as f32,
        );
        let items = self
            .children
            .iter()
            .map(|c| ItemBounds {
                left: c.offset_left() as f32,
                width: c.offset_width() as f32,
            })
            .collect();
        self.engine.set_items(items);
    }

    fn write_offset(&self) {
        self.container
            .set_scroll_left(self.engine.offset().round() as i32);
    }

    fn focused_child_index(&self, document: &web::Document) -> Option<usize> {
        let active = document.active_element()?;
        let node: &web::Node = active.as_ref();
        self.children.iter().position(|c| c.contains(Some(node)))
    }

    fn scroll_to_index(&mut self, i: usize, now_ms: f64) {
        let Some(target) = self.engine.snap_target(i) else {
            return;
        };
        if self.smooth_scroll {
            let opts = web::ScrollToOptions::new();
            opts.set_left(f64::from(target));
            opts.set_behavior(web::ScrollBehavior::Smooth);
            self.container.scroll_to_with_scroll_to_options(&opts);
        } else {
            self.engine.start_glide(target, now_ms);
        }
    }

    fn snap_to_nearest(&mut self, now_ms: f64) {
        self.refresh_metrics();
        if let Some(i) = self.engine.nearest_index() {
            self.scroll_to_index(i, now_ms);
        }
    }

    /// One animation-frame step: run any pending resize snap, advance the
    /// engine, and mirror the offset into the DOM when it moved.
    pub fn frame(&mut self, now_ms: f64) {
        if let Some(deadline) = self.resize_snap_at {
            if now_ms >= deadline {
                self.resize_snap_at = None;
                self.snap_to_nearest(now_ms);
            }
        }
        match self.engine.frame(now_ms) {
            FrameOutcome::Autoplay | FrameOutcome::Gliding => self.write_offset(),
            FrameOutcome::Settled { snap } => {
                self.write_offset();
                if snap {
                    self.snap_to_nearest(now_ms);
                }
            }
            FrameOutcome::Idle => {
                // native smooth scrolling (or plain user scrolling) may have
                // moved the element; adopt its offset while we are idle
                if !self.engine.drag_active() {
                    self.engine.sync_offset(self.container.scroll_left() as f32);
                }
            }
        }
    }
}
