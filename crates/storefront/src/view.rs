//! Presentation state that sits beside the listing state.
//!
//! None of this affects which products are shown; it tracks what the
//! shopper has opened, expanded or ticked so repaints can restore it.

use std::collections::BTreeSet;

use crate::dom::Region;

/// One of the two filter panels. Both are rendered from the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    Desktop,
    Mobile,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Desktop, Panel::Mobile];

    pub fn region(&self) -> Region {
        match self {
            Panel::Desktop => Region::DesktopFilters,
            Panel::Mobile => Region::MobileFilters,
        }
    }

    pub fn from_region(region: Region) -> Option<Panel> {
        match region {
            Region::DesktopFilters => Some(Panel::Desktop),
            Region::MobileFilters => Some(Panel::Mobile),
            _ => None,
        }
    }

    /// Prefix keeping element ids unique when both panels are on the page.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Panel::Desktop => "",
            Panel::Mobile => "mobile-",
        }
    }
}

/// A collapsible section of a filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Colors,
    Sizes,
    Prices,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Colors, Section::Sizes, Section::Prices];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Colors => "colors",
            Section::Sizes => "sizes",
            Section::Prices => "prices",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Full-screen overlays used on small screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    Filter,
    Sort,
}

impl Overlay {
    pub fn region(&self) -> Region {
        match self {
            Overlay::Filter => Region::FilterOverlay,
            Overlay::Sort => Region::SortOverlay,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    filter_overlay: OverlayState,
    sort_overlay: OverlayState,
    sort_dropdown_open: bool,
    open_sections: BTreeSet<(Panel, Section)>,
    checked_prices: BTreeSet<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay(&self, overlay: Overlay) -> OverlayState {
        match overlay {
            Overlay::Filter => self.filter_overlay,
            Overlay::Sort => self.sort_overlay,
        }
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.overlay(overlay) == OverlayState::Open
    }

    /// Move an overlay to `state`. Returns `false` when it was already there.
    pub fn set_overlay(&mut self, overlay: Overlay, state: OverlayState) -> bool {
        let slot = match overlay {
            Overlay::Filter => &mut self.filter_overlay,
            Overlay::Sort => &mut self.sort_overlay,
        };
        let changed = *slot != state;
        *slot = state;
        changed
    }

    /// Page scroll is suppressed while any overlay is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open(Overlay::Filter) || self.is_open(Overlay::Sort)
    }

    pub fn sort_dropdown_open(&self) -> bool {
        self.sort_dropdown_open
    }

    pub fn set_sort_dropdown_open(&mut self, open: bool) {
        self.sort_dropdown_open = open;
    }

    pub fn section_open(&self, panel: Panel, section: Section) -> bool {
        self.open_sections.contains(&(panel, section))
    }

    pub fn toggle_section(&mut self, panel: Panel, section: Section) -> bool {
        if self.open_sections.remove(&(panel, section)) {
            false
        } else {
            self.open_sections.insert((panel, section));
            true
        }
    }

    /// Price checkboxes currently ticked. More than one may be ticked; the
    /// price filter only ever holds the most recent one.
    pub fn checked_prices(&self) -> &BTreeSet<String> {
        &self.checked_prices
    }

    pub fn set_price_checked(&mut self, token: &str, checked: bool) {
        if checked {
            self.checked_prices.insert(token.to_string());
        } else {
            self.checked_prices.remove(token);
        }
    }
}
