//! The storefront application: listing state, view state and the surface
//! they are painted onto.
//!
//! ```text
//! UiEvent ──interpret──▶ Intent ──dispatch──▶ Listing / ViewState ──paint──▶ Surface
//! ```
//!
//! All state lives in one [`Storefront`] value owned by whoever delivers the
//! events; there is no process-wide mutable state.

use storefront_catalog::{Listing, Product};
use storefront_core::{DomainError, ProductId};

use crate::client::{CatalogError, CatalogSource};
use crate::config::StorefrontConfig;
use crate::dom::{ANIMATE, BADGE_FLASH_MILLIS, IS_ACTIVE, IS_OPEN, Region, Target};
use crate::intent::{Intent, SortSurface, UiEvent, interpret};
use crate::render::Renderer;
use crate::surface::Surface;
use crate::view::{Overlay, OverlayState, Panel, ViewState};

pub struct Storefront<S: Surface> {
    listing: Listing,
    view: ViewState,
    renderer: Renderer,
    surface: S,
}

impl<S: Surface> Storefront<S> {
    /// Fetch the catalog and paint the initial page.
    ///
    /// On failure the product grid is replaced by the load-error message and
    /// the error is returned; nothing else is painted and there is no retry.
    pub async fn start<C>(source: &C, config: &StorefrontConfig, mut surface: S) -> Result<Self, CatalogError>
    where
        C: CatalogSource + ?Sized,
    {
        match source.fetch_products().await {
            Ok(products) => Ok(Self::new(products, config, surface)),
            Err(err) => {
                tracing::error!(error = %err, "failed to initialize storefront");
                surface.set_html(Region::ProductGrid, &Renderer::new(config).load_error());
                Err(err)
            }
        }
    }

    /// Build the page over an already loaded catalog and paint it.
    pub fn new(products: Vec<Product>, config: &StorefrontConfig, surface: S) -> Self {
        tracing::info!(products = products.len(), "catalog loaded");
        let mut storefront = Self {
            listing: Listing::new(products, config.page_size),
            view: ViewState::new(),
            renderer: Renderer::new(config),
            surface,
        };
        storefront.paint_filters();
        storefront.paint_results();
        storefront.paint_sort();
        storefront
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Route a raw event delivered to `region`'s listener.
    pub fn handle(&mut self, region: Region, event: &UiEvent) {
        if let Some(intent) = interpret(region, event) {
            self.dispatch(intent);
        }
    }

    pub fn dispatch(&mut self, intent: Intent) {
        tracing::debug!(?intent, "dispatching intent");
        match intent {
            Intent::SetColor { color, selected } => {
                self.listing.set_color(&color, selected);
                self.paint_filters();
                self.paint_results();
            }
            Intent::SetPriceBracket { token, checked } => {
                // One token, last writer wins; unticking any bracket clears it.
                self.view.set_price_checked(&token, checked);
                self.listing
                    .set_price_token(checked.then_some(token.as_str()));
                self.paint_filters();
                self.paint_results();
            }
            Intent::ToggleSize(size) => {
                self.listing.toggle_size(&size);
                self.paint_filters();
                self.paint_results();
            }
            Intent::ToggleSection { panel, section } => {
                self.view.toggle_section(panel, section);
                self.paint_panel(panel);
            }
            Intent::ToggleSortDropdown => {
                let open = !self.view.sort_dropdown_open();
                self.set_sort_dropdown(open);
            }
            Intent::CloseSortDropdown => {
                if self.view.sort_dropdown_open() {
                    self.set_sort_dropdown(false);
                }
            }
            Intent::SelectSort { order, from } => {
                self.listing.set_sort_order(order);
                self.paint_sort();
                self.paint_results();
                match from {
                    SortSurface::Dropdown => self.set_sort_dropdown(false),
                    SortSurface::Overlay => self.set_overlay(Overlay::Sort, OverlayState::Closed),
                }
            }
            Intent::LoadMore => {
                self.listing.load_more();
                self.paint_results();
            }
            Intent::AddToCart(id) => self.add_to_cart(&id),
            Intent::OpenOverlay(overlay) => self.set_overlay(overlay, OverlayState::Open),
            Intent::CloseOverlay(overlay) => self.set_overlay(overlay, OverlayState::Closed),
        }
    }

    fn add_to_cart(&mut self, id: &ProductId) {
        match self.listing.add_to_cart(id) {
            Ok(count) => {
                self.surface.set_text(Region::CartBadge, &count.to_string());
                self.surface
                    .flash_class(Region::CartBadge, ANIMATE, BADGE_FLASH_MILLIS);
            }
            Err(DomainError::NotFound(_)) => {
                tracing::debug!(product_id = %id, "ignoring add to cart for unknown product");
            }
            Err(err) => {
                tracing::warn!(product_id = %id, error = %err, "add to cart failed");
            }
        }
    }

    fn set_sort_dropdown(&mut self, open: bool) {
        self.view.set_sort_dropdown_open(open);
        self.surface
            .set_class(Target::Region(Region::SortDropdown), IS_OPEN, open);
    }

    fn set_overlay(&mut self, overlay: Overlay, state: OverlayState) {
        if self.view.set_overlay(overlay, state) {
            tracing::debug!(?overlay, ?state, "overlay transition");
        }
        let open = state == OverlayState::Open;
        self.surface
            .set_class(Target::Region(overlay.region()), IS_OPEN, open);
        self.surface.set_scroll_locked(self.view.scroll_locked());
    }

    fn paint_results(&mut self) {
        let html = self.renderer.product_grid(self.listing.visible());
        self.surface.set_html(Region::ProductGrid, &html);
        self.surface
            .set_visible(Region::LoadMoreButton, self.listing.has_more());
    }

    fn paint_filters(&mut self) {
        for panel in Panel::ALL {
            self.paint_panel(panel);
        }
    }

    fn paint_panel(&mut self, panel: Panel) {
        let html = self.renderer.filter_panel(
            panel,
            self.listing.facets(),
            self.listing.filters(),
            &self.view,
        );
        self.surface.set_html(panel.region(), &html);
    }

    fn paint_sort(&mut self) {
        self.surface.set_class(Target::SortItems, IS_ACTIVE, false);
        self.surface.set_class(
            Target::SortItem(self.listing.sort_order().token()),
            IS_ACTIVE,
            true,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn products() -> Vec<Product> {
        (0..4)
            .map(|i| Product::new(ProductId::new(i.to_string()), format!("Item {i}"), 10.0 * i as f64))
            .collect()
    }

    #[test]
    fn initial_paint_marks_default_sort_active() {
        let surface = MemorySurface::new();
        let storefront = Storefront::new(products(), &StorefrontConfig::default(), surface.clone());
        assert!(surface.has_class(Target::SortItem("mais-recentes"), IS_ACTIVE));
        assert_eq!(storefront.listing().visible().len(), 4);
        assert_eq!(surface.is_visible(Region::LoadMoreButton), Some(false));
    }

    #[test]
    fn price_bracket_uncheck_clears_token_even_with_another_checked() {
        let surface = MemorySurface::new();
        let mut storefront = Storefront::new(products(), &StorefrontConfig::default(), surface);
        storefront.dispatch(Intent::SetPriceBracket {
            token: "0-50".into(),
            checked: true,
        });
        storefront.dispatch(Intent::SetPriceBracket {
            token: "500-".into(),
            checked: true,
        });
        assert_eq!(
            storefront.listing().filters().price_range().map(|r| r.token()),
            Some("500-")
        );
        assert_eq!(storefront.view().checked_prices().len(), 2);

        storefront.dispatch(Intent::SetPriceBracket {
            token: "0-50".into(),
            checked: false,
        });
        assert!(storefront.listing().filters().price_range().is_none());
        assert_eq!(storefront.view().checked_prices().len(), 1);
    }

    #[test]
    fn dropdown_toggle_and_outside_close() {
        let surface = MemorySurface::new();
        let mut storefront = Storefront::new(products(), &StorefrontConfig::default(), surface.clone());
        let dropdown = Target::Region(Region::SortDropdown);

        storefront.dispatch(Intent::ToggleSortDropdown);
        assert!(surface.has_class(dropdown, IS_OPEN));

        storefront.dispatch(Intent::CloseSortDropdown);
        assert!(!surface.has_class(dropdown, IS_OPEN));
        assert!(!storefront.view().sort_dropdown_open());
    }
}
