//! Capability traits over the page.
//!
//! The behaviors only need a handful of operations from the document: class
//! membership on a few elements, the scroll offset, and the current path.
//! Browser hosts implement these over the DOM; tests use the in-memory types.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Class membership on a single element.
///
/// Mutation goes through `&self` because DOM handles are shared references to
/// live nodes.
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Flip `class` and report whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

/// Read-only view of the browsing viewport.
pub trait Viewport {
    /// Vertical scroll offset in CSS pixels, read at call time.
    fn scroll_y(&self) -> f64;

    /// Raw `location.pathname`.
    fn pathname(&self) -> String;
}

/// A page region with a stable identifier and its document offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGeometry {
    pub id: String,
    pub offset_top: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

/// In-memory class list, cheap to clone and shared between clones.
///
/// Counts mutations so callers can assert how many writes a pass performed.
#[derive(Debug, Clone, Default)]
pub struct MemoryClassList {
    inner: Rc<RefCell<MemoryClasses>>,
}

#[derive(Debug, Default)]
struct MemoryClasses {
    classes: BTreeSet<String>,
    writes: usize,
}

impl MemoryClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let list = Self::new();
        list.inner
            .borrow_mut()
            .classes
            .extend(classes.into_iter().map(str::to_string));
        list
    }

    /// Number of add/remove calls observed so far.
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.iter().cloned().collect()
    }
}

impl ClassList for MemoryClassList {
    fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.writes += 1;
        inner.classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.writes += 1;
        inner.classes.remove(class);
    }
}

/// Fixed viewport for hosts without a rendering environment.
#[derive(Debug, Clone, Default)]
pub struct StaticViewport {
    pub scroll_y: f64,
    pub pathname: String,
}

impl StaticViewport {
    pub fn new(scroll_y: f64, pathname: impl Into<String>) -> Self {
        Self {
            scroll_y,
            pathname: pathname.into(),
        }
    }
}

impl Viewport for StaticViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn pathname(&self) -> String {
        self.pathname.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership_and_reports_state() {
        let list = MemoryClassList::new();
        assert!(list.toggle_class("nav-open"));
        assert!(list.has_class("nav-open"));
        assert!(!list.toggle_class("nav-open"));
        assert!(!list.has_class("nav-open"));
        assert_eq!(list.writes(), 2);
    }

    #[test]
    fn clones_share_state() {
        let list = MemoryClassList::with_classes(["a", "b"]);
        let alias = list.clone();
        alias.remove_class("a");
        assert_eq!(list.classes(), vec!["b".to_string()]);
    }
}
