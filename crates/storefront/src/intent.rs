//! Raw input events and the intents they translate into.
//!
//! Each interactive region has one delegated listener. The listener takes a
//! snapshot of the element the event came from ([`EventSource`]) and
//! [`interpret`] matches it against the known control types of that region.

use storefront_catalog::SortOrder;
use storefront_core::ProductId;

use crate::dom::{
    CARD_BUTTON, CLOSE_OVERLAY_BUTTON, Region, SIZE_BUTTON, SORT_DROPDOWN_ITEM, SORT_OPTION_BUTTON,
};
use crate::view::{Overlay, Panel, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
}

impl EventKind {
    /// DOM event type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
        }
    }
}

/// What the listener could see of the event's target element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSource {
    /// Lower-case tag name.
    pub tag: String,
    /// `type` attribute of an `<input>`.
    pub input_type: Option<String>,
    pub classes: Vec<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub checked: bool,
    /// `data-value` attribute.
    pub data_value: Option<String>,
    /// `data-product-id` attribute.
    pub product_id: Option<String>,
    /// `data-section` of the closest filter section title, if inside one.
    pub section: Option<String>,
    /// Whether the element sits inside the inline sort dropdown.
    pub in_sort_dropdown: bool,
}

impl EventSource {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn checkbox(name: &str, value: &str, checked: bool) -> Self {
        Self {
            input_type: Some("checkbox".into()),
            name: Some(name.into()),
            value: Some(value.into()),
            checked,
            ..Self::new("input")
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_data_value(mut self, value: &str) -> Self {
        self.data_value = Some(value.to_string());
        self
    }

    pub fn with_product_id(mut self, id: &str) -> Self {
        self.product_id = Some(id.to_string());
        self
    }

    pub fn within_section(mut self, key: &str) -> Self {
        self.section = Some(key.to_string());
        self
    }

    pub fn within_sort_dropdown(mut self) -> Self {
        self.in_sort_dropdown = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_checkbox(&self) -> bool {
        self.tag == "input" && self.input_type.as_deref() == Some("checkbox")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub kind: EventKind,
    pub source: EventSource,
}

impl UiEvent {
    pub fn click(source: EventSource) -> Self {
        Self {
            kind: EventKind::Click,
            source,
        }
    }

    pub fn change(source: EventSource) -> Self {
        Self {
            kind: EventKind::Change,
            source,
        }
    }
}

/// Which control picked a sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSurface {
    Dropdown,
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetColor { color: String, selected: bool },
    SetPriceBracket { token: String, checked: bool },
    ToggleSize(String),
    ToggleSection { panel: Panel, section: Section },
    ToggleSortDropdown,
    CloseSortDropdown,
    SelectSort { order: SortOrder, from: SortSurface },
    LoadMore,
    AddToCart(ProductId),
    OpenOverlay(Overlay),
    CloseOverlay(Overlay),
}

/// Translate an event delivered to `region`'s listener into an intent.
/// Events on elements that are not controls yield `None`.
pub fn interpret(region: Region, event: &UiEvent) -> Option<Intent> {
    let source = &event.source;
    let click = event.kind == EventKind::Click;

    match region {
        Region::DesktopFilters | Region::MobileFilters => {
            let panel = Panel::from_region(region)?;
            filter_intent(panel, event)
        }
        Region::ProductGrid if click && source.has_class(CARD_BUTTON) => source
            .product_id
            .as_deref()
            .and_then(|id| id.parse::<ProductId>().ok())
            .map(Intent::AddToCart),
        Region::LoadMoreButton if click => Some(Intent::LoadMore),
        Region::SortDropdown if click && !source.has_class(SORT_DROPDOWN_ITEM) => {
            Some(Intent::ToggleSortDropdown)
        }
        Region::SortDropdownList if click && source.has_class(SORT_DROPDOWN_ITEM) => {
            Some(Intent::SelectSort {
                order: SortOrder::from_token_or_default(source.data_value.as_deref()),
                from: SortSurface::Dropdown,
            })
        }
        Region::Document if click && !source.in_sort_dropdown => Some(Intent::CloseSortDropdown),
        Region::MobileSortButton if click => Some(Intent::OpenOverlay(Overlay::Sort)),
        Region::SortOverlay if click && source.has_class(CLOSE_OVERLAY_BUTTON) => {
            Some(Intent::CloseOverlay(Overlay::Sort))
        }
        Region::SortOverlay if click && source.has_class(SORT_OPTION_BUTTON) => {
            Some(Intent::SelectSort {
                order: SortOrder::from_token_or_default(source.data_value.as_deref()),
                from: SortSurface::Overlay,
            })
        }
        Region::MobileFilterButton if click => Some(Intent::OpenOverlay(Overlay::Filter)),
        Region::CloseFilterOverlayButton | Region::ApplyFiltersButton if click => {
            Some(Intent::CloseOverlay(Overlay::Filter))
        }
        _ => None,
    }
}

fn filter_intent(panel: Panel, event: &UiEvent) -> Option<Intent> {
    let source = &event.source;
    match event.kind {
        EventKind::Click => {
            if let Some(section) = source.section.as_deref().and_then(Section::from_key) {
                return Some(Intent::ToggleSection { panel, section });
            }
            if source.has_class(SIZE_BUTTON) {
                return source.value.clone().map(Intent::ToggleSize);
            }
            None
        }
        // Checkbox state is only trustworthy once `change` fires.
        EventKind::Change if source.is_checkbox() => {
            let value = source.value.clone()?;
            match source.name.as_deref() {
                Some("color") => Some(Intent::SetColor {
                    color: value,
                    selected: source.checked,
                }),
                Some("price") => Some(Intent::SetPriceBracket {
                    token: value,
                    checked: source.checked,
                }),
                _ => None,
            }
        }
        EventKind::Change => None,
    }
}
