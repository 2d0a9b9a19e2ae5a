//! What lies beneath a navbar sample point, and how bright it is.

use serde::{Deserialize, Serialize};

use crate::color::{parse_css_color, Rgb};
use crate::config::ContrastConfig;

/// One element in a hit-test lineage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceNode {
    /// Tag name as the DOM reports it (`DIV`, `IFRAME`, ...)
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
}

impl SurfaceNode {
    pub fn new(tag: &str, classes: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn has_any_class(&self, wanted: &[String]) -> bool {
        self.classes.iter().any(|c| wanted.iter().any(|w| w == c))
    }

    fn has_any_tag(&self, wanted: &[String]) -> bool {
        wanted.iter().any(|t| t.eq_ignore_ascii_case(&self.tag))
    }
}

/// The element found under a sample point with the navbar excluded.
///
/// `lineage[0]` is the hit element itself, followed by its ancestors up to
/// the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceDescriptor {
    pub lineage: Vec<SurfaceNode>,
    /// Resolved `background-color` of the hit element, if any
    #[serde(default)]
    pub background_color: Option<String>,
}

impl SurfaceDescriptor {
    /// "Is, or is nested within, an element carrying one of these classes."
    pub fn within_class(&self, classes: &[String]) -> bool {
        self.lineage.iter().any(|n| n.has_any_class(classes))
    }

    /// "Is, or is nested within, an element with one of these tags."
    pub fn within_tag(&self, tags: &[String]) -> bool {
        self.lineage.iter().any(|n| n.has_any_tag(tags))
    }
}

/// Background category, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceKind {
    DarkBrand,
    Video,
    White,
    Painted(Rgb),
    Unresolved,
}

impl SurfaceKind {
    /// First matching rule wins, even if markup tags an element with two
    /// conflicting categories.
    pub fn classify(surface: &SurfaceDescriptor, cfg: &ContrastConfig) -> Self {
        if surface.within_class(&cfg.dark_brand_classes) {
            SurfaceKind::DarkBrand
        } else if surface.within_tag(&cfg.video_tags) || surface.within_class(&cfg.video_classes) {
            SurfaceKind::Video
        } else if surface.within_class(&cfg.white_classes) {
            SurfaceKind::White
        } else {
            match surface.background_color.as_deref().and_then(parse_css_color) {
                Some(rgb) => SurfaceKind::Painted(rgb),
                None => SurfaceKind::Unresolved,
            }
        }
    }

    pub fn brightness(self, cfg: &ContrastConfig) -> f64 {
        match self {
            SurfaceKind::DarkBrand => cfg.dark_brand_brightness,
            SurfaceKind::Video => cfg.video_brightness,
            SurfaceKind::White => cfg.white_brightness,
            SurfaceKind::Painted(rgb) => rgb.luma(),
            SurfaceKind::Unresolved => cfg.unresolved_brightness,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SurfaceKind::DarkBrand => "dark-brand",
            SurfaceKind::Video => "video",
            SurfaceKind::White => "white",
            SurfaceKind::Painted(_) => "painted",
            SurfaceKind::Unresolved => "unresolved",
        }
    }
}

/// Background brightness (0..=255) behind a sample point.
///
/// A failed probe (nothing under the point) counts as light.
pub fn background_brightness(surface: Option<&SurfaceDescriptor>, cfg: &ContrastConfig) -> f64 {
    match surface {
        Some(s) => SurfaceKind::classify(s, cfg).brightness(cfg),
        None => cfg.missing_probe_brightness,
    }
}
