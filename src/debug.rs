//! Filterable debug tracing for the site scripts
//!
//! Categories: CONTRAST, MENU, SCROLL, REVEAL, VIDEO, SLIDER
//! Enable via: ?sitedebug=all or localStorage.setItem('folio.debug','contrast,menu')
//! Native (nav-contrast): SITE_DEBUG=contrast

use std::sync::atomic::{AtomicU32, Ordering};

pub mod cat {
    pub const CONTRAST: u32 = 1 << 0;
    pub const MENU: u32 = 1 << 1;
    pub const SCROLL: u32 = 1 << 2;
    pub const REVEAL: u32 = 1 << 3;
    pub const VIDEO: u32 = 1 << 4;
    pub const SLIDER: u32 = 1 << 5;
    pub const ALL: u32 = 0xffff_ffff;
}

static MASK: AtomicU32 = AtomicU32::new(0);

#[inline]
pub fn set(mask: u32) {
    MASK.store(mask, Ordering::Relaxed)
}

#[inline]
pub fn enable(bits: u32) {
    MASK.fetch_or(bits, Ordering::Relaxed);
}

#[inline]
pub fn is(cat: u32) -> bool {
    (MASK.load(Ordering::Relaxed) & cat) != 0
}

#[inline]
pub fn cat_name(cat: u32) -> &'static str {
    match cat {
        c if c == cat::CONTRAST => "contrast",
        c if c == cat::MENU => "menu",
        c if c == cat::SCROLL => "scroll",
        c if c == cat::REVEAL => "reveal",
        c if c == cat::VIDEO => "video",
        c if c == cat::SLIDER => "slider",
        _ => "misc",
    }
}

/// Parse a comma list like `contrast,menu` or `all` into a mask.
pub fn parse_list(list: &str) -> u32 {
    let mut m: u32 = 0;
    for tok in list.split(',').map(|s| s.trim().to_ascii_lowercase()) {
        match tok.as_str() {
            "" | "none" => m = 0,
            "all" => m = cat::ALL,
            "contrast" => m |= cat::CONTRAST,
            "menu" => m |= cat::MENU,
            "scroll" => m |= cat::SCROLL,
            "reveal" => m |= cat::REVEAL,
            "video" => m |= cat::VIDEO,
            "slider" => m |= cat::SLIDER,
            _ => {}
        }
    }
    m
}

#[inline]
pub fn set_from_list(list: &str) {
    set(parse_list(list));
}

/// Value of `key` in a `?a=b&c=d` query string (case-insensitive key).
pub fn query_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|part| part.split_once('=').or(Some((part, ""))))
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

#[cfg(target_arch = "wasm32")]
pub fn init_from_url_and_storage_once() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use web_sys::window;
        if let Some(win) = window() {
            // URL query: ?sitedebug=contrast,menu  OR  ?sitedebug=all
            if let Ok(search) = win.location().search() {
                if let Some(val) = query_param(&search, "sitedebug") {
                    if let Ok(decoded_js) = js_sys::decode_uri_component(val) {
                        let decoded = decoded_js.as_string().unwrap_or_default();
                        enable(parse_list(&decoded));
                    }
                }
            }
            // localStorage: folio.debug = "contrast,menu"
            if let Ok(Some(storage)) = win.local_storage() {
                if let Ok(Some(v)) = storage.get_item("folio.debug") {
                    enable(parse_list(&v));
                }
            }
        }
        log(cat::CONTRAST, "debug init (wasm) complete");
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_from_url_and_storage_once() {
    if let Ok(v) = std::env::var("SITE_DEBUG") {
        set_from_list(&v);
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn log(cat: u32, msg: impl AsRef<str>) {
    if !is(cat) {
        return;
    }
    let s = format!("[folio][{}] {}", cat_name(cat), msg.as_ref());
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&s));
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn log(cat: u32, msg: impl AsRef<str>) {
    if !is(cat) {
        return;
    }
    eprintln!("[folio][{}] {}", cat_name(cat), msg.as_ref());
}
