//! Mobile menu and services dropdown state.

use crate::constants::dom::{ACTIVE_CLASS, FLEX_CLASS, HIDDEN_CLASS};
use crate::scheme::ClassList;

/// Open/closed state of the mobile overlay, as expressed by classes on the
/// menu (`hidden` / `flex`) and the hamburger (`active`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    pub open: bool,
}

impl MobileMenu {
    /// The menu is open whenever it is not `hidden`.
    pub fn read(menu_classes: &ClassList) -> Self {
        Self {
            open: !menu_classes.contains(HIDDEN_CLASS),
        }
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn write_menu(self, menu: &mut ClassList) {
        if self.open {
            menu.remove(HIDDEN_CLASS);
            menu.add(FLEX_CLASS);
        } else {
            menu.add(HIDDEN_CLASS);
            menu.remove(FLEX_CLASS);
        }
    }

    pub fn write_hamburger(self, hamburger: &mut ClassList) {
        if self.open {
            hamburger.add(ACTIVE_CLASS);
        } else {
            hamburger.remove(ACTIVE_CLASS);
        }
    }
}

/// Services dropdown menus, paired with their toggles by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownSet {
    open: Vec<bool>,
}

impl DropdownSet {
    pub fn new(open: Vec<bool>) -> Self {
        Self { open }
    }

    pub fn read<'a>(menus: impl IntoIterator<Item = &'a ClassList>) -> Self {
        Self::new(menus.into_iter().map(|m| !m.contains(HIDDEN_CLASS)).collect())
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.open.get(idx).copied().unwrap_or(false)
    }

    /// Toggle menu `idx` and close every other one. Out-of-range indexes
    /// (a toggle without a matching menu) just close everything.
    pub fn toggle(&mut self, idx: usize) {
        for (i, open) in self.open.iter_mut().enumerate() {
            *open = if i == idx { !*open } else { false };
        }
    }

    pub fn close(&mut self, idx: usize) {
        if let Some(open) = self.open.get_mut(idx) {
            *open = false;
        }
    }

    pub fn close_all(&mut self) {
        self.open.iter_mut().for_each(|o| *o = false);
    }

    /// Write menu `idx`'s state into its class list.
    pub fn write(&self, idx: usize, menu: &mut ClassList) {
        if self.is_open(idx) {
            menu.remove(HIDDEN_CLASS);
        } else {
            menu.add(HIDDEN_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_round_trip() {
        let mut menu = ClassList::parse("hidden fixed inset-0");
        let mut burger = ClassList::parse("md:hidden");

        let state = MobileMenu::read(&menu).toggled();
        state.write_menu(&mut menu);
        state.write_hamburger(&mut burger);
        assert!(menu.contains("flex") && !menu.contains("hidden"));
        assert!(burger.contains("active"));

        let state = MobileMenu::read(&menu).toggled();
        state.write_menu(&mut menu);
        state.write_hamburger(&mut burger);
        assert!(menu.contains("hidden") && !menu.contains("flex"));
        assert!(!burger.contains("active"));
        assert!(burger.contains("md:hidden"));
    }

    #[test]
    fn dropdown_toggle_is_exclusive() {
        let mut set = DropdownSet::new(vec![false, true, false]);
        set.toggle(0);
        assert!(set.is_open(0));
        assert!(!set.is_open(1));
        set.toggle(0);
        assert!(!set.is_open(0));
    }

    #[test]
    fn unmatched_toggle_closes_all() {
        let mut set = DropdownSet::new(vec![true, true]);
        set.toggle(5);
        assert!(!set.is_open(0) && !set.is_open(1));
    }

    #[test]
    fn write_back() {
        let lists = [ClassList::parse("hidden"), ClassList::parse("absolute")];
        let mut set = DropdownSet::read(lists.iter());
        assert!(!set.is_open(0) && set.is_open(1));
        set.close_all();
        let mut second = lists[1].clone();
        set.write(1, &mut second);
        assert!(second.contains("hidden"));
    }
}
