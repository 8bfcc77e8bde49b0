//! The page surface the storefront paints onto.
//!
//! In the browser this is the live DOM (see `web::DomSurface`). Missing
//! elements are skipped silently: a page without a cart badge simply has no
//! badge to update.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::dom::{Region, Target};

pub trait Surface {
    /// Replace the markup inside `region`.
    fn set_html(&mut self, region: Region, html: &str);

    /// Replace the text content of `region`.
    fn set_text(&mut self, region: Region, text: &str);

    /// Show or hide `region`.
    fn set_visible(&mut self, region: Region, visible: bool);

    /// Add (`on == true`) or remove `class` on every element matching `target`.
    fn set_class(&mut self, target: Target<'_>, class: &str, on: bool);

    /// Add `class` to `region` and remove it again after `millis`.
    fn flash_class(&mut self, region: Region, class: &str, millis: u32);

    /// Suppress or restore page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);
}

#[derive(Debug, Default)]
struct MemoryPage {
    html: BTreeMap<Region, String>,
    text: BTreeMap<Region, String>,
    visible: BTreeMap<Region, bool>,
    classes: BTreeMap<String, BTreeSet<String>>,
    flashes: Vec<(Region, String, u32)>,
    scroll_locked: bool,
}

/// In-memory surface recording the last state painted to each region.
///
/// Clones share the same page, so a caller can hand one clone to a
/// [`crate::Storefront`] and inspect the page through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    page: Rc<RefCell<MemoryPage>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self, region: Region) -> Option<String> {
        self.page.borrow().html.get(&region).cloned()
    }

    pub fn text(&self, region: Region) -> Option<String> {
        self.page.borrow().text.get(&region).cloned()
    }

    /// `None` until the region's visibility has been set.
    pub fn is_visible(&self, region: Region) -> Option<bool> {
        self.page.borrow().visible.get(&region).copied()
    }

    pub fn has_class(&self, target: Target<'_>, class: &str) -> bool {
        self.page
            .borrow()
            .classes
            .get(&target.selector())
            .is_some_and(|classes| classes.contains(class))
    }

    /// Every `(region, class, millis)` flash requested so far.
    pub fn flashes(&self) -> Vec<(Region, String, u32)> {
        self.page.borrow().flashes.clone()
    }

    pub fn scroll_locked(&self) -> bool {
        self.page.borrow().scroll_locked
    }
}

impl Surface for MemorySurface {
    fn set_html(&mut self, region: Region, html: &str) {
        self.page.borrow_mut().html.insert(region, html.to_string());
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.page.borrow_mut().text.insert(region, text.to_string());
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        self.page.borrow_mut().visible.insert(region, visible);
    }

    fn set_class(&mut self, target: Target<'_>, class: &str, on: bool) {
        let mut page = self.page.borrow_mut();
        let selector = target.selector();

        // A group selector applies to every recorded member of the group.
        let keys: Vec<String> = if target == Target::SortItems {
            page.classes
                .keys()
                .filter(|key| key.starts_with(&selector))
                .cloned()
                .collect()
        } else {
            vec![selector]
        };

        for key in keys {
            let classes = page.classes.entry(key).or_default();
            if on {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
        }
    }

    fn flash_class(&mut self, region: Region, class: &str, millis: u32) {
        self.page
            .borrow_mut()
            .flashes
            .push((region, class.to_string(), millis));
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.page.borrow_mut().scroll_locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::IS_ACTIVE;

    #[test]
    fn clones_share_the_page() {
        let observer = MemorySurface::new();
        let mut painter = observer.clone();
        painter.set_html(Region::ProductGrid, "<p>hi</p>");
        painter.set_visible(Region::LoadMoreButton, false);
        assert_eq!(observer.html(Region::ProductGrid).as_deref(), Some("<p>hi</p>"));
        assert_eq!(observer.is_visible(Region::LoadMoreButton), Some(false));
        assert_eq!(observer.is_visible(Region::CartBadge), None);
    }

    #[test]
    fn group_target_clears_members() {
        let mut surface = MemorySurface::new();
        surface.set_class(Target::SortItem("menor-preco"), IS_ACTIVE, true);
        surface.set_class(Target::SortItems, IS_ACTIVE, false);
        assert!(!surface.has_class(Target::SortItem("menor-preco"), IS_ACTIVE));
    }
}
