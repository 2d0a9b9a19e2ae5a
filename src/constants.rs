//! Site constants
//!
//! Centralized constants for the navbar contrast classifier, DOM hooks, and
//! the small page widgets. `ContrastConfig::default()` is built from the
//! `contrast` group so tuning overrides start from the same numbers.

/// Navbar contrast classifier defaults
pub mod contrast {
    /// Brightness assumed behind a point over a dark brand-rose surface
    pub const DARK_BRAND_BRIGHTNESS: f64 = 20.0;

    /// Brightness assumed behind a point over an embedded video or 16:9 video box
    pub const VIDEO_BRIGHTNESS: f64 = 25.0;

    /// Brightness of surfaces tagged white / near-white
    pub const WHITE_BRIGHTNESS: f64 = 255.0;

    /// Brightness used when the computed background color cannot be resolved
    pub const UNRESOLVED_BRIGHTNESS: f64 = 240.0;

    /// Brightness used when nothing was found under a sample point
    pub const MISSING_PROBE_BRIGHTNESS: f64 = 255.0;

    /// Opacity of the navbar glass panel (0.0..=1.0)
    pub const PANEL_OPACITY: f64 = 0.2;

    /// Brightness of the navbar glass panel (white)
    pub const PANEL_BRIGHTNESS: f64 = 255.0;

    /// Share of residual glow left by the backdrop blur
    pub const BLUR_GLOW: f64 = 0.05;

    /// Attenuation applied to the blur glow brightness
    pub const GLOW_ATTENUATION: f64 = 0.95;

    /// A sample point is dark when its effective brightness is strictly below this
    pub const DARK_POINT_THRESHOLD: f64 = 90.0;

    /// Light-on-dark wins when at least this percentage of points is dark
    pub const DARK_SHARE_PERCENT: f64 = 65.0;

    /// Light-on-dark also wins when the mean effective brightness is below this
    pub const AVERAGE_FLOOR: f64 = 60.0;

    /// Surface classes painted with the dark brand rose
    pub const DARK_BRAND_CLASSES: &[&str] = &["bg-rose-700", "bg-rose-800"];

    /// Container classes marking a 16:9 video box
    pub const VIDEO_CLASSES: &[&str] = &["aspect-video"];

    /// Element tags that are embedded video frames
    pub const VIDEO_TAGS: &[&str] = &["IFRAME"];

    /// Surface classes painted white or near-white
    pub const WHITE_CLASSES: &[&str] = &["bg-white", "bg-gray-50"];
}

/// Element ids, selectors and marker classes shared with the page markup
pub mod dom {
    pub const NAVBAR_ID: &str = "navbar";
    pub const MOBILE_MENU_ID: &str = "mobile-menu";
    pub const HAMBURGER_ID: &str = "hamburger";

    /// Brand/logo text inside the navbar
    pub const BRAND_SELECTOR: &str = ".font-bold";

    /// Desktop nav links plus services dropdown toggles (mobile links excluded)
    pub const NAV_LINK_SELECTOR: &str =
        "#nav-links > li > a, #nav-links .services-dropdown-toggle";

    /// Bars of the hamburger icon
    pub const HAMBURGER_BAR_SELECTOR: &str = "#hamburger span";

    /// Mobile menu links that close the menu (dropdown entries excluded)
    pub const MOBILE_LINK_SELECTOR: &str = "a:not(.services-dropdown-menu a)";

    pub const DROPDOWN_TOGGLE_SELECTOR: &str = ".services-dropdown-toggle";
    pub const DROPDOWN_MENU_SELECTOR: &str = ".services-dropdown-menu";

    /// In-page anchors eligible for smooth scrolling
    pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

    /// Optional JSON overrides for the contrast classifier, set on the navbar
    pub const CONTRAST_OVERRIDE_ATTR: &str = "data-nav-contrast";

    pub const HIDDEN_CLASS: &str = "hidden";
    pub const FLEX_CLASS: &str = "flex";
    pub const ACTIVE_CLASS: &str = "active";
}

/// Fade-in reveal settings
pub mod reveal {
    pub const SELECTOR: &str = ".fade-in, .fade-in-left, .fade-in-right";
    pub const VISIBLE_CLASS: &str = "visible";
    pub const THRESHOLD: f64 = 0.1;
    pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
}

/// Lazy Vimeo embeds
pub mod video {
    pub const PLACEHOLDER_SELECTOR: &str = ".video-placeholder";
    pub const ID_ATTR: &str = "data-vimeo-id";
    pub const LOADING_TEXT_SELECTOR: &str = ".loading-placeholder p";
    pub const CLICK_TO_PLAY: &str = "Click to Play";
    pub const THUMBNAIL_BASE: &str = "https://vumbnail.com/";
    pub const PLAYER_BASE: &str = "https://player.vimeo.com/video/";
    pub const PLAYER_QUERY: &str = "badge=0&autopause=0&autoplay=1&player_id=0&app_id=58479";
    pub const PLAYER_ALLOW: &str =
        "autoplay; fullscreen; picture-in-picture; clipboard-write; encrypted-media; web-share";
    pub const PLAYER_CLASSES: &str = "absolute inset-0 w-full h-full object-contain";
}

/// Before/after comparison slider
pub mod slider {
    pub const SLIDER_SELECTOR: &str = ".before-after-slider";
    pub const HANDLE_SELECTOR: &str = ".slider-handle";
    pub const AFTER_IMAGE_SELECTOR: &str = ".after-image";

    /// Click-to-move animation length (ms)
    pub const CLICK_ANIMATION_MS: u32 = 300;

    pub const CURSOR_DRAGGING: &str = "grabbing";
    pub const CURSOR_IDLE: &str = "ew-resize";
}
