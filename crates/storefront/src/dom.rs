//! The markup contract: element ids and classes the page reads and writes.
//!
//! These names are shared with the stylesheet and the static HTML, so they
//! must not change independently of them.

use crate::intent::EventKind;

pub const IS_OPEN: &str = "is-open";
pub const IS_ACTIVE: &str = "is-active";
pub const IS_SELECTED: &str = "is-selected";
pub const ANIMATE: &str = "animate";

/// Class of the "add to cart" button on each product card.
pub const CARD_BUTTON: &str = "product-card__button";
pub const SIZE_BUTTON: &str = "size-btn";
pub const SECTION_TITLE: &str = "filter-section__title";
pub const SORT_DROPDOWN_ITEM: &str = "sort-dropdown__item";
pub const SORT_OPTION_BUTTON: &str = "sort-option-btn";
pub const CLOSE_OVERLAY_BUTTON: &str = "close-overlay-btn";

/// Cart badge flash duration.
pub const BADGE_FLASH_MILLIS: u32 = 300;

/// A designated display or input region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Whole document; receives every bubbling click.
    Document,
    ProductGrid,
    LoadMoreButton,
    CartBadge,
    DesktopFilters,
    MobileFilters,
    SortDropdown,
    SortDropdownList,
    FilterOverlay,
    SortOverlay,
    MobileFilterButton,
    CloseFilterOverlayButton,
    ApplyFiltersButton,
    MobileSortButton,
}

impl Region {
    /// Regions that carry event listeners, in binding order.
    pub const INTERACTIVE: [Region; 12] = [
        Region::DesktopFilters,
        Region::MobileFilters,
        Region::ProductGrid,
        Region::LoadMoreButton,
        Region::SortDropdown,
        Region::SortDropdownList,
        Region::Document,
        Region::MobileSortButton,
        Region::SortOverlay,
        Region::MobileFilterButton,
        Region::CloseFilterOverlayButton,
        Region::ApplyFiltersButton,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            Region::Document => ":root",
            Region::ProductGrid => "#product-grid",
            Region::LoadMoreButton => "#load-more-btn",
            Region::CartBadge => ".header__cart-badge",
            Region::DesktopFilters => "#desktop-filters",
            Region::MobileFilters => "#mobile-filters-content",
            Region::SortDropdown => "#sort-dropdown",
            Region::SortDropdownList => "#sort-dropdown-list",
            Region::FilterOverlay => ".overlay#filter-overlay",
            Region::SortOverlay => "#sort-overlay",
            Region::MobileFilterButton => "#mobile-filter-btn",
            Region::CloseFilterOverlayButton => "#close-overlay-btn",
            Region::ApplyFiltersButton => "#apply-mobile-filters-btn",
            Region::MobileSortButton => "#mobile-sort-btn",
        }
    }

    /// Event kinds a region listens to. Filter panels also need `change` to
    /// see checkbox state.
    pub fn events(&self) -> &'static [EventKind] {
        match self {
            Region::DesktopFilters | Region::MobileFilters => &[EventKind::Click, EventKind::Change],
            Region::ProductGrid
            | Region::LoadMoreButton
            | Region::SortDropdown
            | Region::SortDropdownList
            | Region::Document
            | Region::SortOverlay
            | Region::MobileFilterButton
            | Region::CloseFilterOverlayButton
            | Region::ApplyFiltersButton
            | Region::MobileSortButton => &[EventKind::Click],
            Region::CartBadge | Region::FilterOverlay => &[],
        }
    }
}

/// Something whose classes can be toggled: a region, or elements inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Region(Region),
    /// Every option of the inline sort dropdown.
    SortItems,
    /// The inline sort dropdown option with the given token.
    SortItem(&'a str),
}

impl Target<'_> {
    pub fn selector(&self) -> String {
        match self {
            Target::Region(region) => region.selector().to_string(),
            Target::SortItems => format!("{} .{SORT_DROPDOWN_ITEM}", Region::SortDropdownList.selector()),
            Target::SortItem(token) => format!(
                "{} .{SORT_DROPDOWN_ITEM}[data-value=\"{}\"]",
                Region::SortDropdownList.selector(),
                token.replace('\\', "\\\\").replace('"', "\\\"")
            ),
        }
    }
}

impl From<Region> for Target<'_> {
    fn from(region: Region) -> Self {
        Target::Region(region)
    }
}
