//! Fade-in on first intersection.

use anyhow::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{js_err, select_all};
use crate::constants::reveal::{ROOT_MARGIN, SELECTOR, THRESHOLD, VISIBLE_CLASS};
use crate::debug::{self, cat};

pub fn install(document: &Document) -> Result<()> {
    let elements = select_all(document, SELECTOR);
    if elements.is_empty() {
        return Ok(());
    }

    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(THRESHOLD));
    init.set_root_margin(ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
        .map_err(|e| js_err("IntersectionObserver", e))?;
    cb.forget();

    for el in &elements {
        observer.observe(el);
    }
    debug::log(cat::REVEAL, format!("observing {} elements", elements.len()));
    Ok(())
}
