//! Drag-to-compare before/after images.

use anyhow::Result;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, HtmlElement, MouseEvent, TouchEvent};

use super::{js_err, listen, select_all};
use crate::constants::slider::{
    AFTER_IMAGE_SELECTOR, CLICK_ANIMATION_MS, CURSOR_DRAGGING, CURSOR_IDLE, HANDLE_SELECTOR,
    SLIDER_SELECTOR,
};
use crate::debug::{self, cat};
use crate::widgets::slider::{after_clip, handle_left, position_percent};

fn client_x(ev: &Event) -> Option<f64> {
    if ev.type_().starts_with("touch") {
        let touch = ev.unchecked_ref::<TouchEvent>().touches().get(0)?;
        return Some(touch.client_x() as f64);
    }
    ev.dyn_ref::<MouseEvent>().map(|m| m.client_x() as f64)
}

#[derive(Clone)]
struct Parts {
    slider: Element,
    handle: HtmlElement,
    after: HtmlElement,
}

impl Parts {
    fn find(slider: Element) -> Option<Self> {
        let handle = slider
            .query_selector(HANDLE_SELECTOR)
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()?;
        let after = slider
            .query_selector(AFTER_IMAGE_SELECTOR)
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self {
            slider,
            handle,
            after,
        })
    }

    fn percent_at(&self, client_x: f64) -> Option<f64> {
        let rect = self.slider.get_bounding_client_rect();
        position_percent(client_x, rect.left(), rect.width())
    }

    fn move_to(&self, percent: f64) {
        let _ = self.handle.style().set_property("left", &handle_left(percent));
        let _ = self.after.style().set_property("clip-path", &after_clip(percent));
    }

    fn set_transitions(&self, handle: &str, after: &str) {
        let _ = self.handle.style().set_property("transition", handle);
        let _ = self.after.style().set_property("transition", after);
    }

    fn set_cursor(&self, cursor: &str) {
        let _ = self.handle.style().set_property("cursor", cursor);
    }
}

/// Listen without the passive default so `preventDefault` can stop page
/// scrolling during a touch drag.
fn listen_active(
    target: &web_sys::EventTarget,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            cb.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| js_err(event_type, e))?;
    cb.forget();
    Ok(())
}

fn wire(document: &Document, parts: Parts) -> Result<()> {
    let dragging = Rc::new(Cell::new(false));

    for ty in ["mousedown", "touchstart"] {
        let (parts, dragging) = (parts.clone(), dragging.clone());
        listen_active(&parts.handle.clone(), ty, move |ev| {
            dragging.set(true);
            parts.set_cursor(CURSOR_DRAGGING);
            ev.prevent_default();
        })?;
    }

    for ty in ["mousemove", "touchmove"] {
        let (parts, dragging) = (parts.clone(), dragging.clone());
        listen_active(document, ty, move |ev| {
            if !dragging.get() {
                return;
            }
            if let Some(pct) = client_x(&ev).and_then(|x| parts.percent_at(x)) {
                parts.move_to(pct);
            }
            ev.prevent_default();
        })?;
    }

    for ty in ["mouseup", "touchend"] {
        let (parts, dragging) = (parts.clone(), dragging.clone());
        listen(document, ty, move |_| {
            dragging.set(false);
            parts.set_cursor(CURSOR_IDLE);
        })?;
    }

    let slider = parts.slider.clone();
    listen(&slider, "click", move |ev| {
        let on_handle = ev
            .target()
            .map(|t| JsValue::from(t) == JsValue::from(parts.handle.clone()))
            .unwrap_or(false);
        if on_handle {
            return;
        }
        let Some(pct) = client_x(&ev).and_then(|x| parts.percent_at(x)) else {
            return;
        };

        parts.set_transitions("left 0.3s ease", "clip-path 0.3s ease");
        parts.move_to(pct);
        debug::log(cat::SLIDER, format!("click -> {pct:.1}%"));

        let parts = parts.clone();
        Timeout::new(CLICK_ANIMATION_MS, move || parts.set_transitions("", "")).forget();
    })
}

pub fn install(document: &Document) -> Result<()> {
    for slider in select_all(document, SLIDER_SELECTOR) {
        let Some(parts) = Parts::find(slider) else {
            continue;
        };
        wire(document, parts)?;
    }
    Ok(())
}
