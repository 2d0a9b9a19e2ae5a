//! DOM side of the navbar contrast classifier.

use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Window};

use super::{listen, select_all_in, sync_classes};
use crate::config::ContrastConfig;
use crate::constants::dom::{
    BRAND_SELECTOR, CONTRAST_OVERRIDE_ATTR, HAMBURGER_BAR_SELECTOR, MOBILE_MENU_ID, NAVBAR_ID,
    NAV_LINK_SELECTOR,
};
use crate::contrast::{NavContrast, NavTarget, Navbar};
use crate::debug::{self, cat};
use crate::scheme::{NavRole, Scheme};
use crate::surface::{SurfaceDescriptor, SurfaceNode};

const LABEL_MAX: usize = 24;

/// Keeps the navbar out of hit testing while alive; restores the previous
/// inline `pointer-events` on drop.
struct HitTestSuspended {
    style: CssStyleDeclaration,
    previous: String,
}

impl HitTestSuspended {
    fn new(navbar: &HtmlElement) -> Self {
        let style = navbar.style();
        let previous = style.get_property_value("pointer-events").unwrap_or_default();
        if style.set_property("pointer-events", "none").is_err() {
            log::warn!("[contrast] failed to suspend navbar pointer-events; probes may hit the navbar");
        }
        Self { style, previous }
    }
}

impl Drop for HitTestSuspended {
    fn drop(&mut self) {
        let restored = if self.previous.is_empty() {
            self.style.remove_property("pointer-events").map(|_| ())
        } else {
            self.style.set_property("pointer-events", &self.previous)
        };
        if restored.is_err() {
            log::warn!("[contrast] failed to restore navbar pointer-events");
        }
    }
}

/// The live navbar, re-located on every trigger.
pub struct DomNavbar {
    window: Window,
    document: Document,
    navbar: HtmlElement,
    elements: Vec<(NavRole, Element)>,
}

impl DomNavbar {
    /// `None` unless both the navbar and the mobile menu are in the document.
    pub fn locate(window: &Window, document: &Document) -> Option<Self> {
        let navbar = document
            .get_element_by_id(NAVBAR_ID)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        document.get_element_by_id(MOBILE_MENU_ID)?;

        let mut elements = Vec::new();
        if let Ok(Some(brand)) = navbar.query_selector(BRAND_SELECTOR) {
            elements.push((NavRole::Brand, brand));
        }
        elements.extend(
            select_all_in(&navbar, NAV_LINK_SELECTOR)
                .into_iter()
                .map(|e| (NavRole::Link, e)),
        );
        elements.extend(
            select_all_in(&navbar, HAMBURGER_BAR_SELECTOR)
                .into_iter()
                .map(|e| (NavRole::HamburgerBar, e)),
        );

        Some(Self {
            window: window.clone(),
            document: document.clone(),
            navbar,
            elements,
        })
    }

    fn describe(&self, hit: &Element) -> SurfaceDescriptor {
        let mut lineage = Vec::new();
        let mut node = Some(hit.clone());
        while let Some(el) = node {
            let classes = el.get_attribute("class").unwrap_or_default();
            lineage.push(SurfaceNode {
                tag: el.tag_name(),
                classes: classes.split_whitespace().map(str::to_string).collect(),
            });
            node = el.parent_element();
        }

        let background_color = self
            .window
            .get_computed_style(hit)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("background-color").ok());

        SurfaceDescriptor {
            lineage,
            background_color,
        }
    }
}

/// Laid out at all, i.e. not collapsed by `display:none` on itself or an
/// ancestor.
fn is_rendered(el: &Element) -> bool {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.offset_parent().is_some(),
        None => el.get_client_rects().length() > 0,
    }
}

fn label_of(role: NavRole, el: &Element, idx: usize) -> String {
    let text = el.text_content().unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        format!("{role:?} {idx}")
    } else {
        text.chars().take(LABEL_MAX).collect()
    }
}

impl Navbar for DomNavbar {
    fn targets(&self) -> Vec<NavTarget> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, (_, el))| is_rendered(el))
            .map(|(idx, (role, el))| {
                let rect = el.get_bounding_client_rect();
                NavTarget {
                    role: *role,
                    center: (
                        rect.left() + rect.width() / 2.0,
                        rect.top() + rect.height() / 2.0,
                    ),
                    label: label_of(*role, el, idx),
                }
            })
            .collect()
    }

    fn probe(&self, x: f64, y: f64) -> Option<SurfaceDescriptor> {
        let hit = {
            let _suspended = HitTestSuspended::new(&self.navbar);
            self.document.element_from_point(x as f32, y as f32)
        };
        hit.map(|el| self.describe(&el))
    }

    fn apply(&mut self, scheme: Scheme) {
        for (role, el) in &self.elements {
            sync_classes(el, |cl| scheme.apply_to(*role, cl));
        }
    }
}

/// Classifier constants, with overrides from the navbar's
/// `data-nav-contrast` JSON when present and valid.
fn config_from_markup(document: &Document) -> ContrastConfig {
    let raw = document
        .get_element_by_id(NAVBAR_ID)
        .and_then(|nav| nav.get_attribute(CONTRAST_OVERRIDE_ATTR));
    match raw {
        Some(json) => ContrastConfig::from_json_str(&json).unwrap_or_else(|e| {
            log::warn!("[contrast] ignoring {CONTRAST_OVERRIDE_ATTR}: {e:#}");
            ContrastConfig::default()
        }),
        None => ContrastConfig::default(),
    }
}

/// Classify once now, then on every scroll.
pub fn install(window: &Window, document: &Document) -> Result<()> {
    if document.get_element_by_id(NAVBAR_ID).is_none() {
        log::debug!("[contrast] no #{NAVBAR_ID}; nothing to do");
        return Ok(());
    }

    let contrast = Rc::new(RefCell::new(NavContrast::new(config_from_markup(document))));

    let run = {
        let contrast = contrast.clone();
        let (window, document) = (window.clone(), document.clone());
        move || {
            let Ok(mut state) = contrast.try_borrow_mut() else {
                return;
            };
            let mut nav = DomNavbar::locate(&window, &document);
            let outcome = state.trigger(nav.as_mut());
            if debug::is(cat::CONTRAST) {
                debug::log(cat::CONTRAST, format!("{outcome:?}"));
            }
        }
    };

    run();
    listen(window, "scroll", move |_| run())
}
