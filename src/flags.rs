//! Site feature toggles
//!
//! Every page behavior can be switched off individually, e.g. while
//! debugging markup: `?sitefeatures=-lazy_video,-fade_in`. All behaviors are
//! on by default.

/// Per-behavior switches read once at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteFlags {
    /// Re-color the navbar from what scrolls beneath it.
    pub navbar_contrast: bool,
    /// Hamburger toggles the mobile menu; its links close it.
    pub mobile_menu: bool,
    /// Click-to-open services dropdowns (desktop and mobile).
    pub services_dropdown: bool,
    /// Smooth scrolling for in-page `#anchor` links.
    pub smooth_scroll: bool,
    /// Reveal `.fade-in*` elements as they enter the viewport.
    pub fade_in: bool,
    /// Vimeo thumbnails with a click-to-load player.
    pub lazy_video: bool,
    /// Draggable before/after image comparison.
    pub before_after: bool,
}

impl Default for SiteFlags {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl SiteFlags {
    pub fn all_enabled() -> Self {
        SiteFlags {
            navbar_contrast: true,
            mobile_menu: true,
            services_dropdown: true,
            smooth_scroll: true,
            fade_in: true,
            lazy_video: true,
            before_after: true,
        }
    }

    pub fn all_disabled() -> Self {
        SiteFlags {
            navbar_contrast: false,
            mobile_menu: false,
            services_dropdown: false,
            smooth_scroll: false,
            fade_in: false,
            lazy_video: false,
            before_after: false,
        }
    }

    fn slot(&mut self, name: &str) -> Option<&mut bool> {
        Some(match name {
            "navbar_contrast" | "contrast" => &mut self.navbar_contrast,
            "mobile_menu" | "menu" => &mut self.mobile_menu,
            "services_dropdown" | "dropdown" => &mut self.services_dropdown,
            "smooth_scroll" | "scroll" => &mut self.smooth_scroll,
            "fade_in" | "reveal" => &mut self.fade_in,
            "lazy_video" | "video" => &mut self.lazy_video,
            "before_after" | "slider" => &mut self.before_after,
            _ => return None,
        })
    }

    /// Apply a comma list of `name` / `-name` / `none` / `all` to these
    /// flags. Unknown names are ignored.
    pub fn with_overrides(mut self, list: &str) -> Self {
        for tok in list.split(',').map(|s| s.trim().to_ascii_lowercase()) {
            match tok.as_str() {
                "" => {}
                "all" => self = Self::all_enabled(),
                "none" => self = Self::all_disabled(),
                t => {
                    let (name, on) = match t.strip_prefix('-') {
                        Some(rest) => (rest, false),
                        None => (t, true),
                    };
                    match self.slot(name) {
                        Some(flag) => *flag = on,
                        None => log::warn!("[flags] unknown site feature '{name}'"),
                    }
                }
            }
        }
        self
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_url() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match crate::debug::query_param(&search, "sitefeatures") {
            Some(raw) => {
                let decoded = js_sys::decode_uri_component(raw)
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                Self::default().with_overrides(&decoded)
            }
            None => Self::default(),
        }
    }
}
