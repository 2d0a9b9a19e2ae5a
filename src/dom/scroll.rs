//! Smooth scrolling for in-page anchors.

use anyhow::Result;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{listen, menu, select_all};
use crate::constants::dom::ANCHOR_SELECTOR;
use crate::debug::{self, cat};
use crate::widgets::anchor::fragment_id;

pub fn install(window: &Window, document: &Document) -> Result<()> {
    for link in select_all(document, ANCHOR_SELECTOR) {
        let (window, document, anchor) = (window.clone(), document.clone(), link.clone());
        listen(&link, "click", move |ev| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(id) = fragment_id(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            ev.prevent_default();

            let top = target
                .dyn_ref::<HtmlElement>()
                .map(|el| el.offset_top())
                .unwrap_or(0);
            let opts = ScrollToOptions::new();
            opts.set_top(top as f64);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
            debug::log(cat::SCROLL, format!("#{id} -> {top}px"));

            menu::close_mobile_menu(&document);
        })?;
    }
    Ok(())
}
