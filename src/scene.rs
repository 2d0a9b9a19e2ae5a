//! Recorded navbar scenes.
//!
//! A scene is a JSON snapshot of the navbar elements, their class lists and
//! whatever the page shows beneath each one. It implements [`Navbar`] in
//! memory, which is what the `nav-contrast` tool and the integration tests
//! run the classifier against.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::contrast::{NavTarget, Navbar};
use crate::scheme::{ClassList, NavRole, Scheme};
use crate::surface::SurfaceDescriptor;

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTarget {
    pub role: NavRole,
    #[serde(default)]
    pub label: String,
    pub center: (f64, f64),
    /// `false` for elements collapsed out of layout (`display:none`)
    #[serde(default = "yes")]
    pub rendered: bool,
    #[serde(default)]
    pub classes: ClassList,
    /// What the hit test finds at `center`; `None` = nothing there
    #[serde(default)]
    pub beneath: Option<SurfaceDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneNavbar {
    #[serde(default)]
    pub targets: Vec<SceneTarget>,
}

impl Navbar for SceneNavbar {
    fn targets(&self) -> Vec<NavTarget> {
        self.targets
            .iter()
            .filter(|t| t.rendered)
            .map(|t| NavTarget {
                role: t.role,
                center: t.center,
                label: t.label.clone(),
            })
            .collect()
    }

    fn probe(&self, x: f64, y: f64) -> Option<SurfaceDescriptor> {
        self.targets
            .iter()
            .find(|t| t.center == (x, y))
            .and_then(|t| t.beneath.clone())
    }

    /// Restyles every target, rendered or not, like the page does.
    fn apply(&mut self, scheme: Scheme) {
        for t in &mut self.targets {
            scheme.apply_to(t.role, &mut t.classes);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneMobileMenu {
    #[serde(default)]
    pub open: bool,
    /// Overlay links; they keep their static dark-on-light styling.
    #[serde(default)]
    pub links: Vec<ClassList>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub navbar: Option<SceneNavbar>,
    #[serde(default)]
    pub mobile_menu: Option<SceneMobileMenu>,
}

impl Scene {
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("invalid scene JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// The navbar, if both it and the mobile menu are present.
    pub fn locate(&mut self) -> Option<&mut SceneNavbar> {
        if self.mobile_menu.is_none() {
            return None;
        }
        self.navbar.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "name": "minimal",
        "navbar": { "targets": [
            { "role": "brand", "label": "logo", "center": [40, 20],
              "classes": ["font-bold", "text-rose-800"],
              "beneath": { "lineage": [{ "tag": "SECTION", "classes": ["bg-white"] }] } },
            { "role": "hamburger-bar", "center": [300, 20], "rendered": false }
        ]},
        "mobile_menu": { "open": false }
    }"#;

    #[test]
    fn parses_and_filters_unrendered() {
        let mut scene = Scene::from_json(MINIMAL).unwrap();
        let nav = scene.locate().unwrap();
        let targets = nav.targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].role, NavRole::Brand);
        assert!(nav.probe(40.0, 20.0).is_some());
        assert!(nav.probe(1.0, 1.0).is_none());
    }

    #[test]
    fn missing_mobile_menu_hides_navbar() {
        let mut scene = Scene::from_json(MINIMAL).unwrap();
        scene.mobile_menu = None;
        assert!(scene.locate().is_none());
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(Scene::from_json("{\"navbar\": 3}").is_err());
    }
}
