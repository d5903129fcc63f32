//! Mobile navigation open/close state, held as a class on the nav element.

use crate::config::SiteConfig;
use crate::page::ClassList;

pub struct MobileMenu<N> {
    nav: N,
    open_class: String,
}

impl<N: ClassList> MobileMenu<N> {
    pub fn new(nav: N, config: &SiteConfig) -> Self {
        Self {
            nav,
            open_class: config.nav_open_class.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.nav.has_class(&self.open_class)
    }

    /// Menu button pressed. Returns whether the menu is now open.
    pub fn toggle(&self) -> bool {
        self.nav.toggle_class(&self.open_class)
    }

    /// A navigation link was followed. Closes the menu if it is open and
    /// reports whether anything changed.
    pub fn close_for_link(&self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.nav.remove_class(&self.open_class);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryClassList;

    #[test]
    fn toggle_opens_and_closes() {
        let nav = MemoryClassList::new();
        let menu = MobileMenu::new(nav.clone(), &SiteConfig::default());
        assert!(menu.toggle());
        assert!(nav.has_class("nav-open"));
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn link_click_closes_open_menu_once() {
        let nav = MemoryClassList::with_classes(["desktop-nav", "nav-open"]);
        let menu = MobileMenu::new(nav.clone(), &SiteConfig::default());
        assert!(menu.close_for_link());
        assert_eq!(nav.writes(), 1);
        assert!(!menu.close_for_link());
        assert_eq!(nav.writes(), 1);
        assert_eq!(nav.classes(), vec!["desktop-nav".to_string()]);
    }
}
