//! Hamburger / mobile overlay and services dropdowns.

use anyhow::Result;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use super::{class_list_of, listen, select_all, select_all_in, sync_classes};
use crate::constants::dom::{
    DROPDOWN_MENU_SELECTOR, DROPDOWN_TOGGLE_SELECTOR, HAMBURGER_ID, MOBILE_LINK_SELECTOR,
    MOBILE_MENU_ID,
};
use crate::debug::{self, cat};
use crate::widgets::menu::{DropdownSet, MobileMenu};

fn write_mobile_menu(state: MobileMenu, menu: &Element, hamburger: Option<&Element>) {
    sync_classes(menu, |cl| state.write_menu(cl));
    if let Some(h) = hamburger {
        sync_classes(h, |cl| state.write_hamburger(cl));
    }
}

/// Close the mobile overlay if it is open (used after anchor navigation).
pub fn close_mobile_menu(document: &Document) {
    let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) else {
        return;
    };
    if MobileMenu::read(&class_list_of(&menu)).open {
        let hamburger = document.get_element_by_id(HAMBURGER_ID);
        write_mobile_menu(MobileMenu::closed(), &menu, hamburger.as_ref());
    }
}

pub fn install_mobile_menu(document: &Document) -> Result<()> {
    let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) else {
        return Ok(());
    };
    let hamburger = document.get_element_by_id(HAMBURGER_ID);

    if let Some(h) = &hamburger {
        let (menu, h2) = (menu.clone(), h.clone());
        listen(h, "click", move |_| {
            let state = MobileMenu::read(&class_list_of(&menu)).toggled();
            write_mobile_menu(state, &menu, Some(&h2));
            debug::log(cat::MENU, format!("mobile menu open={}", state.open));
        })?;
    }

    for link in select_all_in(&menu, MOBILE_LINK_SELECTOR) {
        let (menu, hamburger) = (menu.clone(), hamburger.clone());
        listen(&link, "click", move |_| {
            write_mobile_menu(MobileMenu::closed(), &menu, hamburger.as_ref());
        })?;
    }
    Ok(())
}

fn read_dropdowns(menus: &[Element]) -> DropdownSet {
    let lists: Vec<_> = menus.iter().map(class_list_of).collect();
    DropdownSet::read(lists.iter())
}

fn write_dropdowns(set: &DropdownSet, menus: &[Element]) {
    for (idx, menu) in menus.iter().enumerate() {
        sync_classes(menu, |cl| set.write(idx, cl));
    }
}

fn contains_node(roots: &[Element], node: &Node) -> bool {
    roots.iter().any(|r| r.contains(Some(node)))
}

pub fn install_dropdowns(document: &Document) -> Result<()> {
    let toggles = Rc::new(select_all(document, DROPDOWN_TOGGLE_SELECTOR));
    let menus = Rc::new(select_all(document, DROPDOWN_MENU_SELECTOR));
    if toggles.is_empty() && menus.is_empty() {
        return Ok(());
    }

    for (idx, toggle) in toggles.iter().enumerate() {
        let menus = menus.clone();
        listen(toggle, "click", move |ev| {
            ev.prevent_default();
            let mut set = read_dropdowns(&menus);
            set.toggle(idx);
            write_dropdowns(&set, &menus);
            debug::log(cat::MENU, format!("dropdown {idx} open={}", set.is_open(idx)));
        })?;
    }

    // Clicks anywhere outside the toggles and menus close every dropdown.
    {
        let (toggles, menus) = (toggles.clone(), menus.clone());
        listen(document, "click", move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .map(|n| contains_node(&toggles, &n) || contains_node(&menus, &n))
                .unwrap_or(false);
            if !inside {
                let mut set = read_dropdowns(&menus);
                set.close_all();
                write_dropdowns(&set, &menus);
            }
        })?;
    }

    for (idx, menu) in menus.iter().enumerate() {
        for link in select_all_in(menu, "a") {
            let menus = menus.clone();
            listen(&link, "click", move |_| {
                let mut set = read_dropdowns(&menus);
                set.close(idx);
                write_dropdowns(&set, &menus);
            })?;
        }
    }
    Ok(())
}
