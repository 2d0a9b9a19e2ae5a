//! Navbar dynamic contrast.
//!
//! The navbar is a 20% white glass panel with a backdrop blur. On every
//! trigger we probe what sits behind each visible navbar text/icon element,
//! estimate how bright the glass looks over it, and pick one of two color
//! schemes for the whole navbar.
//!
//! Each pass is computed from scratch: the only thing carried between passes
//! is the scheme currently applied, and it is consulted only when there is
//! nothing to sample.

use serde::Serialize;

use crate::config::ContrastConfig;
use crate::debug::{self, cat};
use crate::scheme::{NavRole, Scheme};
use crate::surface::{background_brightness, SurfaceDescriptor, SurfaceKind};

/// A rendered navbar element that drives and receives the color decision.
#[derive(Debug, Clone, PartialEq)]
pub struct NavTarget {
    pub role: NavRole,
    /// Visual center in viewport coordinates
    pub center: (f64, f64),
    /// Short human label for traces (link text, "brand", "bar 2")
    pub label: String,
}

/// DOM access the classifier needs, injected so it can run without a layout
/// engine.
pub trait Navbar {
    /// Rendered brand, desktop links, dropdown toggles and hamburger bars.
    /// Collapsed (`display:none`) elements are left out; mobile-menu links
    /// never appear here.
    fn targets(&self) -> Vec<NavTarget>;

    /// What is visually under `(x, y)` with the navbar itself excluded from
    /// hit testing. Any temporary change made to exclude the navbar is undone
    /// before this returns.
    fn probe(&self, x: f64, y: f64) -> Option<SurfaceDescriptor>;

    /// Put `scheme`'s marker classes on every navbar element at once.
    fn apply(&mut self, scheme: Scheme);
}

/// Perceived brightness of the glass panel composited over `background`.
pub fn effective_brightness(background: f64, cfg: &ContrastConfig) -> f64 {
    cfg.panel_opacity * cfg.panel_brightness
        + (1.0 - cfg.panel_opacity) * background * (1.0 - cfg.blur_glow)
        + cfg.blur_glow * cfg.panel_brightness * cfg.glow_attenuation
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePoint {
    pub role: NavRole,
    pub label: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip)]
    pub surface: Option<SurfaceDescriptor>,
    /// Background category label, `None` when nothing was hit
    pub surface_kind: Option<&'static str>,
    pub background: f64,
    pub effective: f64,
    pub is_dark: bool,
}

impl SamplePoint {
    pub fn measure(target: NavTarget, surface: Option<SurfaceDescriptor>, cfg: &ContrastConfig) -> Self {
        let background = background_brightness(surface.as_ref(), cfg);
        let effective = effective_brightness(background, cfg);
        let surface_kind = surface
            .as_ref()
            .map(|s| SurfaceKind::classify(s, cfg).label());
        let (x, y) = target.center;
        Self {
            role: target.role,
            label: target.label,
            x,
            y,
            surface,
            surface_kind,
            background,
            effective,
            is_dark: effective < cfg.dark_point_threshold,
        }
    }
}

/// Aggregate verdict over one pass's sample points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub dark_count: usize,
    pub total: usize,
    pub dark_percent: f64,
    pub average: f64,
    pub scheme: Scheme,
    /// The points this verdict was computed from
    #[serde(skip)]
    pub points: Vec<SamplePoint>,
}

impl Decision {
    /// `None` when there are no points; callers decide what that means.
    pub fn from_points(points: Vec<SamplePoint>, cfg: &ContrastConfig) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let total = points.len();
        let dark_count = points.iter().filter(|p| p.is_dark).count();
        let dark_percent = 100.0 * dark_count as f64 / total as f64;
        let average = points.iter().map(|p| p.effective).sum::<f64>() / total as f64;

        let light_text = dark_percent >= cfg.dark_share_percent || average < cfg.average_floor;
        Some(Self {
            dark_count,
            total,
            dark_percent,
            average,
            scheme: if light_text {
                Scheme::LightOnDark
            } else {
                Scheme::DarkOnLight
            },
            points,
        })
    }
}

/// Result of one trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Navbar or mobile menu missing; nothing was touched.
    Skipped,
    /// Nothing to sample; the current scheme was re-applied unchanged.
    Kept(Scheme),
    Decided(Decision),
}

impl Outcome {
    pub fn scheme(&self) -> Option<Scheme> {
        match self {
            Outcome::Skipped => None,
            Outcome::Kept(s) => Some(*s),
            Outcome::Decided(d) => Some(d.scheme),
        }
    }
}

/// Probe every target. Targets are visited in order; a probe that finds
/// nothing becomes a light point rather than aborting the pass.
pub fn sample<N: Navbar + ?Sized>(nav: &N, cfg: &ContrastConfig) -> Vec<SamplePoint> {
    nav.targets()
        .into_iter()
        .map(|target| {
            let (x, y) = target.center;
            let surface = nav.probe(x, y);
            SamplePoint::measure(target, surface, cfg)
        })
        .collect()
}

/// The contrast component: classifier constants plus the scheme it last put
/// on the navbar.
#[derive(Debug, Clone)]
pub struct NavContrast {
    cfg: ContrastConfig,
    current: Scheme,
}

impl Default for NavContrast {
    fn default() -> Self {
        Self::new(ContrastConfig::default())
    }
}

impl NavContrast {
    pub fn new(cfg: ContrastConfig) -> Self {
        Self {
            cfg,
            current: Scheme::default(),
        }
    }

    pub fn current(&self) -> Scheme {
        self.current
    }

    /// Scroll/startup entry point. `None` means the navbar or mobile menu is
    /// not in the document.
    pub fn trigger<N: Navbar + ?Sized>(&mut self, nav: Option<&mut N>) -> Outcome {
        match nav {
            Some(nav) => self.evaluate(nav),
            None => Outcome::Skipped,
        }
    }

    /// One full synchronous pass: sample, decide, apply.
    pub fn evaluate<N: Navbar + ?Sized>(&mut self, nav: &mut N) -> Outcome {
        let points = sample(&*nav, &self.cfg);
        if debug::is(cat::CONTRAST) {
            for p in &points {
                debug::log(
                    cat::CONTRAST,
                    format!(
                        "{:?} '{}' @({:.0},{:.0}) {} bg={:.1} eff={:.1}{}",
                        p.role,
                        p.label,
                        p.x,
                        p.y,
                        p.surface_kind.unwrap_or("none"),
                        p.background,
                        p.effective,
                        if p.is_dark { " dark" } else { "" }
                    ),
                );
            }
        }

        let outcome = match Decision::from_points(points, &self.cfg) {
            Some(decision) => {
                if debug::is(cat::CONTRAST) {
                    debug::log(
                        cat::CONTRAST,
                        format!(
                            "{}/{} dark ({:.0}%), avg {:.1} -> {}",
                            decision.dark_count,
                            decision.total,
                            decision.dark_percent,
                            decision.average,
                            decision.scheme
                        ),
                    );
                }
                self.current = decision.scheme;
                Outcome::Decided(decision)
            }
            None => {
                log::debug!("[contrast] no visible navbar targets, keeping {}", self.current);
                Outcome::Kept(self.current)
            }
        };

        nav.apply(self.current);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceNode;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn compositing_constants() {
        let cfg = ContrastConfig::default();
        assert!(close(effective_brightness(0.0, &cfg), 63.1125));
        assert!(close(effective_brightness(20.0, &cfg), 78.3125));
        assert!(close(effective_brightness(25.0, &cfg), 82.1125));
        assert!(close(effective_brightness(255.0, &cfg), 256.9125));
        assert!(close(effective_brightness(240.0, &cfg), 245.5125));
    }

    fn point(effective: f64, cfg: &ContrastConfig) -> SamplePoint {
        SamplePoint {
            role: NavRole::Link,
            label: String::new(),
            x: 0.0,
            y: 0.0,
            surface: None,
            surface_kind: None,
            background: 0.0,
            effective,
            is_dark: effective < cfg.dark_point_threshold,
        }
    }

    fn dark_rose() -> SurfaceDescriptor {
        SurfaceDescriptor {
            lineage: vec![SurfaceNode::new("SECTION", &["bg-rose-800"])],
            background_color: None,
        }
    }

    fn target() -> NavTarget {
        NavTarget {
            role: NavRole::Brand,
            center: (10.0, 10.0),
            label: "brand".into(),
        }
    }

    #[test]
    fn threshold_is_strict() {
        // Put the threshold exactly on the dark-rose effective brightness.
        let mut cfg = ContrastConfig::default();
        cfg.dark_point_threshold = effective_brightness(cfg.dark_brand_brightness, &cfg);

        let at = SamplePoint::measure(target(), Some(dark_rose()), &cfg);
        assert_eq!(at.effective, cfg.dark_point_threshold);
        assert!(!at.is_dark);
        let d = Decision::from_points(vec![at], &cfg).unwrap();
        assert_eq!(d.dark_count, 0);
        assert_eq!(d.scheme, Scheme::DarkOnLight);

        cfg.dark_point_threshold += 1e-9;
        let below = SamplePoint::measure(target(), Some(dark_rose()), &cfg);
        assert!(below.is_dark);
    }

    #[test]
    fn decision_keeps_the_measured_points() {
        let cfg = ContrastConfig::default();
        let p = SamplePoint::measure(target(), Some(dark_rose()), &cfg);
        let d = Decision::from_points(vec![p.clone()], &cfg).unwrap();
        assert_eq!(d.points, vec![p]);
    }

    #[test]
    fn empty_points_have_no_decision() {
        assert_eq!(Decision::from_points(Vec::new(), &ContrastConfig::default()), None);
    }

    #[test]
    fn dark_share_boundary_is_inclusive() {
        // 13 of 20 points dark = exactly 65%
        let cfg = ContrastConfig::default();
        let mut pts: Vec<SamplePoint> = (0..13).map(|_| point(80.0, &cfg)).collect();
        pts.extend((0..7).map(|_| point(250.0, &cfg)));
        let d = Decision::from_points(pts.clone(), &cfg).unwrap();
        assert!(close(d.dark_percent, 65.0));
        assert_eq!(d.scheme, Scheme::LightOnDark);

        // 12 of 20 = 60% and a bright average stays dark-on-light
        pts[12] = point(250.0, &cfg);
        let d = Decision::from_points(pts.clone(), &cfg).unwrap();
        assert_eq!(d.scheme, Scheme::DarkOnLight);
    }

    #[test]
    fn low_average_alone_flips_to_light_text() {
        // A tuned config where points are never "dark" but the mean is low.
        let cfg = ContrastConfig {
            dark_point_threshold: 0.0,
            ..ContrastConfig::default()
        };
        let pts = vec![point(50.0, &cfg), point(55.0, &cfg)];
        let d = Decision::from_points(pts, &cfg).unwrap();
        assert_eq!(d.dark_count, 0);
        assert!(d.average < cfg.average_floor);
        assert_eq!(d.scheme, Scheme::LightOnDark);
    }
}
