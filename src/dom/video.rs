//! Lazy Vimeo thumbnails and click-to-load players.

use anyhow::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlImageElement};

use super::{js_err, select_all};
use crate::constants::video::{
    CLICK_TO_PLAY, ID_ATTR, LOADING_TEXT_SELECTOR, PLACEHOLDER_SELECTOR, PLAYER_ALLOW,
    PLAYER_CLASSES,
};
use crate::debug::{self, cat};
use crate::widgets::video::{thumbnail_markup, VimeoId};

fn load_thumbnail(id: &VimeoId, placeholder: &Element) -> Result<()> {
    let probe = HtmlImageElement::new().map_err(|e| js_err("Image", e))?;
    let url = id.thumbnail_url();

    let onload = {
        let (placeholder, url) = (placeholder.clone(), url.clone());
        Closure::once_into_js(move || {
            placeholder.set_inner_html(&thumbnail_markup(&url));
            let _ = placeholder.class_list().add_1("group");
        })
    };
    let onerror = {
        let placeholder = placeholder.clone();
        Closure::once_into_js(move || {
            if let Ok(Some(text)) = placeholder.query_selector(LOADING_TEXT_SELECTOR) {
                text.set_text_content(Some(CLICK_TO_PLAY));
            }
        })
    };

    probe.set_onload(Some(onload.unchecked_ref()));
    probe.set_onerror(Some(onerror.unchecked_ref()));
    probe.set_src(&url);
    Ok(())
}

fn build_player(document: &Document, id: &VimeoId) -> Result<Element> {
    let iframe = document
        .create_element("iframe")
        .map_err(|e| js_err("create iframe", e))?;
    for (name, value) in [
        ("src", id.player_url()),
        ("frameborder", "0".to_string()),
        ("allow", PLAYER_ALLOW.to_string()),
        ("class", PLAYER_CLASSES.to_string()),
        ("style", "background: #000".to_string()),
        ("title", id.player_title()),
    ] {
        iframe
            .set_attribute(name, &value)
            .map_err(|e| js_err(name, e))?;
    }
    Ok(iframe)
}

pub fn install(document: &Document) -> Result<()> {
    for placeholder in select_all(document, PLACEHOLDER_SELECTOR) {
        let Some(id) = placeholder
            .get_attribute(ID_ATTR)
            .and_then(|raw| VimeoId::parse(&raw))
        else {
            continue;
        };

        if let Err(e) = load_thumbnail(&id, &placeholder) {
            log::warn!("[video] thumbnail {}: {e:#}", id.as_str());
        }

        let on_click = {
            let (document, placeholder, id) = (document.clone(), placeholder.clone(), id.clone());
            Closure::<dyn FnMut()>::new(move || match build_player(&document, &id) {
                Ok(iframe) => {
                    placeholder.set_inner_html("");
                    if let Err(e) = placeholder.append_child(&iframe) {
                        log::warn!("[video] {}", js_err("append player", e));
                        return;
                    }
                    let list = placeholder.class_list();
                    let _ = list.remove_1("cursor-pointer");
                    let _ = list.remove_1("group");
                    debug::log(cat::VIDEO, format!("player {} loaded", id.as_str()));
                }
                Err(e) => log::warn!("[video] player {}: {e:#}", id.as_str()),
            })
        };

        let opts = AddEventListenerOptions::new();
        opts.set_once(true);
        placeholder
            .add_event_listener_with_callback_and_add_event_listener_options(
                "click",
                on_click.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| js_err("click", e))?;
        on_click.forget();
    }
    Ok(())
}
