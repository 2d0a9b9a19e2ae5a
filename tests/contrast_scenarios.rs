//! Navbar contrast classifier against recorded scenes
//!
//! Each scene pins what the hit test finds under every navbar element, so
//! these exercise the whole pass (sample, composite, aggregate, apply)
//! without a browser.

use folio_site::contrast::{effective_brightness, sample, Outcome};
use folio_site::scene::{Scene, SceneMobileMenu, SceneNavbar, SceneTarget};
use folio_site::{ClassList, ContrastConfig, NavContrast, NavRole, Navbar, Scheme};
use folio_site::{SurfaceDescriptor, SurfaceNode};

const HERO_DARK_ROSE: &str = include_str!("../fixtures/hero-dark-rose.json");
const WHITE_SECTION: &str = include_str!("../fixtures/white-section.json");
const MIXED_VIDEO: &str = include_str!("../fixtures/mixed-video.json");

fn scene(json: &str) -> Scene {
    Scene::from_json(json).expect("fixture parses")
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// A one-target scene over a single surface.
fn single(beneath: Option<SurfaceDescriptor>) -> Scene {
    Scene {
        name: "single".into(),
        navbar: Some(SceneNavbar {
            targets: vec![SceneTarget {
                role: NavRole::Link,
                label: "Home".into(),
                center: (100.0, 30.0),
                rendered: true,
                classes: ClassList::parse("text-gray-800 hover:text-rose-600"),
                beneath,
            }],
        }),
        mobile_menu: Some(SceneMobileMenu::default()),
    }
}

fn surface(tag: &str, classes: &[&str], bg: Option<&str>) -> SurfaceDescriptor {
    SurfaceDescriptor {
        lineage: vec![SurfaceNode::new(tag, classes)],
        background_color: bg.map(str::to_string),
    }
}

fn assert_exclusive(scene: &Scene, scheme: Scheme) {
    let nav = scene.navbar.as_ref().unwrap();
    for t in &nav.targets {
        assert_eq!(
            t.classes.scheme_for(t.role),
            Some(scheme),
            "{:?} '{}' has classes '{}'",
            t.role,
            t.label,
            t.classes
        );
    }
}

#[test]
fn dark_rose_surface_switches_to_light_text() {
    let mut s = single(Some(surface("SECTION", &["bg-rose-700"], None)));
    let mut contrast = NavContrast::default();

    let Outcome::Decided(d) = contrast.trigger(s.locate()) else {
        panic!("expected a decision");
    };
    assert_eq!(d.total, 1);
    assert_eq!(d.dark_count, 1);
    assert!(close(d.average, 78.3125));
    assert_eq!(d.scheme, Scheme::LightOnDark);
    assert_eq!(contrast.current(), Scheme::LightOnDark);
    assert_exclusive(&s, Scheme::LightOnDark);
}

#[test]
fn white_surface_keeps_dark_text() {
    let mut s = single(Some(surface("SECTION", &["bg-white"], None)));
    let outcome = NavContrast::default().trigger(s.locate());

    let Outcome::Decided(d) = outcome else {
        panic!("expected a decision");
    };
    assert_eq!(d.dark_count, 0);
    assert!(close(d.average, 256.9125));
    assert_eq!(d.scheme, Scheme::DarkOnLight);
    assert_exclusive(&s, Scheme::DarkOnLight);
}

#[test]
fn black_painted_surface_is_dark_by_share() {
    let mut s = single(Some(surface("DIV", &[], Some("rgb(0, 0, 0)"))));
    let Outcome::Decided(d) = NavContrast::default().trigger(s.locate()) else {
        panic!("expected a decision");
    };
    // 63.11 is above the average floor; the 100% dark share decides.
    assert!(close(d.average, 63.1125));
    assert!(d.average >= ContrastConfig::default().average_floor);
    assert_eq!(d.dark_percent, 100.0);
    assert_eq!(d.scheme, Scheme::LightOnDark);
}

#[test]
fn failed_probe_counts_as_light() {
    let mut s = single(None);
    let Outcome::Decided(d) = NavContrast::default().trigger(s.locate()) else {
        panic!("expected a decision");
    };
    assert_eq!(d.dark_count, 0);
    assert_eq!(d.scheme, Scheme::DarkOnLight);
}

#[test]
fn transparent_surface_assumes_light() {
    let mut s = single(Some(surface("DIV", &[], Some("rgba(0, 0, 0, 0)"))));
    let nav = s.locate().unwrap();
    let points = sample(&*nav, &ContrastConfig::default());
    assert_eq!(points[0].background, 240.0);
    assert_eq!(points[0].surface_kind, Some("unresolved"));
    assert!(!points[0].is_dark);
}

#[test]
fn hero_fixture_goes_light_on_dark() {
    let mut s = scene(HERO_DARK_ROSE);
    let mobile_before = s.mobile_menu.clone();
    let outcome = NavContrast::default().trigger(s.locate());

    let Outcome::Decided(d) = outcome else {
        panic!("expected a decision");
    };
    // Hidden hamburger bars are not sampled...
    assert_eq!(d.total, 4);
    assert_eq!(d.dark_count, 4);
    assert_eq!(d.scheme, Scheme::LightOnDark);
    // ...but they are restyled with the rest of the navbar.
    assert_exclusive(&s, Scheme::LightOnDark);

    let nav = s.navbar.as_ref().unwrap();
    assert!(nav.targets[0].classes.contains("font-bold"));
    assert!(nav.targets[1].classes.contains("services-dropdown-toggle"));
    assert_eq!(s.mobile_menu, mobile_before);
}

#[test]
fn white_fixture_with_open_mobile_menu() {
    let mut s = scene(WHITE_SECTION);
    let mobile_before = s.mobile_menu.clone();
    assert!(s.mobile_menu.as_ref().unwrap().open);

    let outcome = NavContrast::default().trigger(s.locate());
    assert_eq!(outcome.scheme(), Some(Scheme::DarkOnLight));
    assert_exclusive(&s, Scheme::DarkOnLight);
    // Overlay links keep their static styling.
    assert_eq!(s.mobile_menu, mobile_before);
}

#[test]
fn three_of_four_dark_points_win() {
    let mut s = scene(MIXED_VIDEO);
    let Outcome::Decided(d) = NavContrast::default().trigger(s.locate()) else {
        panic!("expected a decision");
    };
    let kinds: Vec<_> = d.points.iter().map(|p| p.surface_kind.unwrap()).collect();
    assert_eq!(kinds, ["video", "video", "painted", "white"]);
    let flagged: Vec<_> = d.points.iter().map(|p| p.is_dark).collect();
    assert_eq!(flagged, [true, true, true, false]);
    assert_eq!(d.dark_count, 3);
    assert!(close(d.dark_percent, 75.0));
    assert!(close(d.average, 121.0625));
    assert_eq!(d.scheme, Scheme::LightOnDark);
}

#[test]
fn empty_sample_set_keeps_current_scheme() {
    // Every target collapsed out of layout.
    let mut s = scene(HERO_DARK_ROSE);
    for t in &mut s.navbar.as_mut().unwrap().targets {
        t.rendered = false;
    }

    let mut contrast = NavContrast::default();
    assert_eq!(contrast.trigger(s.locate()), Outcome::Kept(Scheme::DarkOnLight));
    assert_exclusive(&s, Scheme::DarkOnLight);

    // After a light-on-dark decision, an empty pass holds that scheme.
    let mut dark = scene(HERO_DARK_ROSE);
    contrast.trigger(dark.locate());
    assert_eq!(contrast.current(), Scheme::LightOnDark);
    assert_eq!(contrast.trigger(s.locate()), Outcome::Kept(Scheme::LightOnDark));
    assert_exclusive(&s, Scheme::LightOnDark);
}

#[test]
fn missing_anchors_skip_all_work() {
    let mut s = scene(HERO_DARK_ROSE);
    s.mobile_menu = None;
    let before = s.clone();
    assert_eq!(NavContrast::default().trigger(s.locate()), Outcome::Skipped);
    assert_eq!(s, before);

    let mut no_nav = Scene::default();
    let none: Option<&mut SceneNavbar> = no_nav.locate();
    assert!(none.is_none());
    assert_eq!(NavContrast::default().trigger(none), Outcome::Skipped);
}

#[test]
fn repeated_passes_are_deterministic() {
    let mut a = scene(MIXED_VIDEO);
    let mut contrast = NavContrast::default();
    let first = contrast.trigger(a.locate());
    let after_first = a.clone();
    let second = contrast.trigger(a.locate());
    assert_eq!(first, second);
    assert_eq!(a, after_first);
}

#[test]
fn scroll_from_dark_to_light_flips_back() {
    let mut contrast = NavContrast::default();
    let mut hero = scene(HERO_DARK_ROSE);
    assert_eq!(contrast.trigger(hero.locate()).scheme(), Some(Scheme::LightOnDark));

    // Same navbar, now scrolled over a white section.
    let nav = hero.navbar.as_mut().unwrap();
    for t in &mut nav.targets {
        t.beneath = Some(surface("SECTION", &["bg-white"], None));
    }
    assert_eq!(contrast.trigger(hero.locate()).scheme(), Some(Scheme::DarkOnLight));
    assert_exclusive(&hero, Scheme::DarkOnLight);
}

#[test]
fn point_exactly_at_threshold_is_light() {
    let mut cfg = ContrastConfig::default();
    cfg.dark_point_threshold = effective_brightness(cfg.dark_brand_brightness, &cfg);

    let mut s = single(Some(surface("SECTION", &["bg-rose-800"], None)));
    let Outcome::Decided(d) = NavContrast::new(cfg.clone()).trigger(s.locate()) else {
        panic!("expected a decision");
    };
    assert_eq!(d.points[0].effective, cfg.dark_point_threshold);
    assert!(!d.points[0].is_dark);
    assert_eq!(d.dark_count, 0);
    assert_eq!(d.scheme, Scheme::DarkOnLight);
    assert_exclusive(&s, Scheme::DarkOnLight);
}

#[test]
fn tuned_threshold_changes_verdict() {
    // A dimmer white (245.5 effective) under a 255 threshold reads as dark.
    let cfg = ContrastConfig::from_toml_str("dark_point_threshold = 255.0\nwhite_brightness = 240.0\n")
        .unwrap();
    let mut s = single(Some(surface("SECTION", &["bg-white"], None)));
    let outcome = NavContrast::new(cfg).trigger(s.locate());
    assert_eq!(outcome.scheme(), Some(Scheme::LightOnDark));
}

#[test]
fn navbar_trait_object_works() {
    let mut s = scene(WHITE_SECTION);
    let nav: &mut dyn Navbar = s.locate().unwrap();
    assert_eq!(nav.targets().len(), 4);
    let outcome = NavContrast::default().evaluate(nav);
    assert_eq!(outcome.scheme(), Some(Scheme::DarkOnLight));
}
