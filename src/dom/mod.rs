//! Browser wiring (wasm32 + `dom-web` only).
//!
//! Each submodule attaches one page behavior. They share the helpers below
//! and never fail the page: a behavior that cannot be wired logs a warning
//! and the rest still run.

use anyhow::{anyhow, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::flags::SiteFlags;
use crate::scheme::ClassList;

pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod scroll;
pub mod slider;
pub mod video;

pub(crate) fn js_err(context: &str, e: JsValue) -> anyhow::Error {
    anyhow!(
        "{context}: {}",
        e.as_string().unwrap_or_else(|| format!("{e:?}"))
    )
}

fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// `document.querySelectorAll`, as elements. Invalid selectors yield nothing.
pub(crate) fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

/// `element.querySelectorAll`, as elements.
pub(crate) fn select_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub(crate) fn class_list_of(el: &Element) -> ClassList {
    ClassList::parse(&el.get_attribute("class").unwrap_or_default())
}

/// Edit an element's classes through [`ClassList`], touching only the
/// classes that actually change.
pub(crate) fn sync_classes(el: &Element, edit: impl FnOnce(&mut ClassList)) {
    let before = class_list_of(el);
    let mut after = before.clone();
    edit(&mut after);

    let list = el.class_list();
    for class in before.iter().filter(|c| !after.contains(c)) {
        let _ = list.remove_1(class);
    }
    for class in after.iter().filter(|c| !before.contains(c)) {
        let _ = list.add_1(class);
    }
}

/// Attach a listener for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event_type, cb.as_ref().unchecked_ref())
        .map_err(|e| js_err(event_type, e))?;
    cb.forget();
    Ok(())
}

fn step(name: &str, enabled: bool, install: impl FnOnce() -> Result<()>) {
    if !enabled {
        log::info!("[site] {name} disabled by flags");
        return;
    }
    if let Err(e) = install() {
        log::warn!("[site] {name} not wired: {e:#}");
    }
}

fn wire(window: &Window, document: &Document, flags: SiteFlags) {
    step("mobile menu", flags.mobile_menu, || menu::install_mobile_menu(document));
    step("navbar contrast", flags.navbar_contrast, || navbar::install(window, document));
    step("services dropdown", flags.services_dropdown, || menu::install_dropdowns(document));
    step("smooth scroll", flags.smooth_scroll, || scroll::install(window, document));
    step("fade-in", flags.fade_in, || reveal::install(document));
    step("lazy video", flags.lazy_video, || video::install(document));
    step("before/after", flags.before_after, || slider::install(document));
}

/// Wire every enabled behavior once the document is parsed.
pub fn init(flags: SiteFlags) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;

    if document.ready_state() == "loading" {
        let (win, doc) = (window.clone(), document.clone());
        let mut pending = Some(flags);
        listen(&document, "DOMContentLoaded", move |_| {
            if let Some(flags) = pending.take() {
                wire(&win, &doc, flags);
            }
        })?;
    } else {
        wire(&window, &document, flags);
    }
    Ok(())
}
