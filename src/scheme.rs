//! Navbar color schemes and the marker classes that express them.
//!
//! Exactly two schemes exist. Applying one removes every marker of the other
//! and adds its own, so a role's class set after `apply` depends only on the
//! scheme, never on what was there before.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// White text and icons for dark content behind the glass
    LightOnDark,
    /// Brand-rose / dark-gray text for light content behind the glass
    DarkOnLight,
}

impl Default for Scheme {
    /// The markup ships dark-on-light; the classifier starts from it.
    fn default() -> Self {
        Scheme::DarkOnLight
    }
}

impl Scheme {
    pub fn opposite(self) -> Scheme {
        match self {
            Scheme::LightOnDark => Scheme::DarkOnLight,
            Scheme::DarkOnLight => Scheme::LightOnDark,
        }
    }

    /// Marker classes this scheme puts on an element of `role`.
    pub fn markers(self, role: NavRole) -> &'static [&'static str] {
        match (self, role) {
            (Scheme::LightOnDark, NavRole::Brand) => &["text-white"],
            (Scheme::DarkOnLight, NavRole::Brand) => &["text-rose-800"],
            (Scheme::LightOnDark, NavRole::Link) => &["text-white", "hover:text-rose-200"],
            (Scheme::DarkOnLight, NavRole::Link) => &["text-gray-800", "hover:text-rose-600"],
            (Scheme::LightOnDark, NavRole::HamburgerBar) => &["bg-white"],
            (Scheme::DarkOnLight, NavRole::HamburgerBar) => &["bg-rose-800"],
        }
    }

    /// Bring one element's class list in line with this scheme.
    pub fn apply_to(self, role: NavRole, classes: &mut ClassList) {
        for class in self.opposite().markers(role) {
            classes.remove(class);
        }
        for class in self.markers(role) {
            classes.add(class);
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::LightOnDark => write!(f, "light-on-dark"),
            Scheme::DarkOnLight => write!(f, "dark-on-light"),
        }
    }
}

/// What a navbar element is, for sampling and restyling purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavRole {
    /// Brand/logo text
    Brand,
    /// Desktop nav link or services dropdown toggle
    Link,
    /// One bar of the hamburger icon
    HamburgerBar,
}

impl NavRole {
    pub const ALL: [NavRole; 3] = [NavRole::Brand, NavRole::Link, NavRole::HamburgerBar];
}

/// Ordered set of CSS class names, mirroring an element's `classList`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
    pub fn parse(class_attr: &str) -> Self {
        Self(class_attr.split_whitespace().map(str::to_string).collect())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Which scheme's markers are present: `Some` only when exactly one
    /// scheme is fully present and none of the other's markers are.
    pub fn scheme_for(&self, role: NavRole) -> Option<Scheme> {
        let has_all = |s: Scheme| s.markers(role).iter().all(|c| self.contains(c));
        let has_any = |s: Scheme| s.markers(role).iter().any(|c| self.contains(c));
        match (has_all(Scheme::LightOnDark), has_all(Scheme::DarkOnLight)) {
            (true, false) if !has_any(Scheme::DarkOnLight) => Some(Scheme::LightOnDark),
            (false, true) if !has_any(Scheme::LightOnDark) => Some(Scheme::DarkOnLight),
            _ => None,
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(" "))
    }
}
