//! Markup rendering for the product grid and the filter panels.
//!
//! Rendering is pure: it maps products and state to HTML strings. Writing the
//! strings into the page is the surface's job.

use storefront_catalog::{Facets, FilterState, Installments, Product};
use storefront_core::Entity;

use crate::config::{CurrencyFormat, PriceBracket, StorefrontConfig};
use crate::dom::{CARD_BUTTON, IS_OPEN, IS_SELECTED, SECTION_TITLE, SIZE_BUTTON};
use crate::view::{Panel, Section, ViewState};

pub const NO_RESULTS_MESSAGE: &str = "Nenhum produto encontrado com os filtros selecionados.";
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar produtos. Tente novamente mais tarde.";
pub const BUY_LABEL: &str = "Comprar";

#[derive(Debug, Clone)]
pub struct Renderer {
    currency: CurrencyFormat,
    price_brackets: Vec<PriceBracket>,
}

impl Renderer {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            currency: config.currency.clone(),
            price_brackets: config.price_brackets.clone(),
        }
    }

    /// Card price, e.g. `"R$ 129,90"`.
    pub fn price(&self, value: f64) -> String {
        format!("{} {}", self.currency.symbol, self.currency.amount(value))
    }

    /// Installment line, e.g. `"até 3x de R$43,30"`.
    pub fn installments(&self, plan: Installments) -> String {
        format!(
            "até {}x de {}{}",
            plan.count,
            self.currency.symbol,
            self.currency.amount(plan.amount)
        )
    }

    pub fn product_card(&self, product: &Product) -> String {
        format!(
            r#"<div class="product-card">
  <img src="{image}" alt="{name}" class="product-card__image">
  <h3 class="product-card__name">{name}</h3>
  <p class="product-card__price">{price}</p>
  <p class="product-card__installments">{installments}</p>
  <button class="btn btn--primary {CARD_BUTTON}" data-product-id="{id}">{BUY_LABEL}</button>
</div>"#,
            image = escape(product.image()),
            name = escape(product.name()),
            price = escape(&self.price(product.price())),
            installments = escape(&self.installments(product.installments())),
            id = escape(product.id().as_str()),
        )
    }

    /// Cards for `products`, or the no-results message when there are none.
    pub fn product_grid(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return format!("<p>{NO_RESULTS_MESSAGE}</p>");
        }
        products
            .iter()
            .map(|p| self.product_card(p))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn load_error(&self) -> String {
        format!("<p>{LOAD_ERROR_MESSAGE}</p>")
    }

    /// Full markup of one filter panel. Both panels come from here so they
    /// can never drift apart.
    pub fn filter_panel(
        &self,
        panel: Panel,
        facets: &Facets,
        filters: &FilterState,
        view: &ViewState,
    ) -> String {
        Section::ALL
            .iter()
            .map(|section| {
                let body = match section {
                    Section::Colors => self.color_options(panel, facets, filters),
                    Section::Sizes => self.size_options(panel, facets, filters),
                    Section::Prices => self.price_options(panel, view),
                };
                self.section(panel, *section, view.section_open(panel, *section), &body)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn section(&self, panel: Panel, section: Section, open: bool, body: &str) -> String {
        let class = if open {
            format!("filter-section {IS_OPEN}")
        } else {
            "filter-section".to_string()
        };
        let arrow = match panel {
            Panel::Desktop => "",
            Panel::Mobile => r#" <span class="icon-arrow"></span>"#,
        };
        format!(
            r#"<div class="{class}" data-section="{key}">
  <h3 class="{SECTION_TITLE}" data-section="{key}">{title}{arrow}</h3>
{body}
</div>"#,
            key = section.key(),
            title = section_title(section),
        )
    }

    fn color_options(&self, panel: Panel, facets: &Facets, filters: &FilterState) -> String {
        let prefix = panel.id_prefix();
        let items: Vec<String> = facets
            .colors
            .iter()
            .map(|color| {
                let id = format!("{prefix}color-{}", id_fragment(color));
                checkbox_item(&id, "color", color, color, filters.colors().contains(color))
            })
            .collect();
        format!(
            r#"  <ul class="filter-section__list" id="{prefix}filter-colors">
{}
  </ul>"#,
            items.join("\n")
        )
    }

    fn size_options(&self, panel: Panel, facets: &Facets, filters: &FilterState) -> String {
        let prefix = panel.id_prefix();
        let buttons: Vec<String> = facets
            .sizes
            .iter()
            .map(|size| {
                let class = if filters.sizes().contains(size) {
                    format!("{SIZE_BUTTON} {IS_SELECTED}")
                } else {
                    SIZE_BUTTON.to_string()
                };
                let size = escape(size);
                format!(r#"    <button class="{class}" value="{size}">{size}</button>"#)
            })
            .collect();
        format!(
            r#"  <div class="filter-section__sizes" id="{prefix}filter-sizes">
{}
  </div>"#,
            buttons.join("\n")
        )
    }

    fn price_options(&self, panel: Panel, view: &ViewState) -> String {
        let prefix = panel.id_prefix();
        let items: Vec<String> = self
            .price_brackets
            .iter()
            .map(|bracket| {
                let id = format!("{prefix}price-{}", id_fragment(&bracket.token));
                let checked = view.checked_prices().contains(&bracket.token);
                checkbox_item(&id, "price", &bracket.token, &bracket.label, checked)
            })
            .collect();
        format!(
            r#"  <ul class="filter-section__list" id="{prefix}filter-prices">
{}
  </ul>"#,
            items.join("\n")
        )
    }
}

fn section_title(section: Section) -> &'static str {
    match section {
        Section::Colors => "CORES",
        Section::Sizes => "TAMANHOS",
        Section::Prices => "FAIXA DE PREÇO",
    }
}

fn checkbox_item(id: &str, name: &str, value: &str, label: &str, checked: bool) -> String {
    let checked = if checked { " checked" } else { "" };
    let id = escape(id);
    format!(
        r#"    <li>
      <input type="checkbox" id="{id}" name="{name}" value="{value}" class="filter-checkbox"{checked}>
      <label for="{id}">{label}</label>
    </li>"#,
        value = escape(value),
        label = escape(label),
    )
}

/// Element id fragment: whitespace collapsed to `-`.
fn id_fragment(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    fn renderer() -> Renderer {
        Renderer::new(&StorefrontConfig::default())
    }

    fn shirt() -> Product {
        Product::new(ProductId::new("1"), "CAMISETA MESCLA", 28.0)
            .with_color("Cinza")
            .with_image("img/img_2.png")
            .with_installments(Installments {
                count: 3,
                amount: 9.33,
            })
    }

    #[test]
    fn price_uses_two_decimals_and_comma() {
        let r = renderer();
        assert_eq!(r.price(28.0), "R$ 28,00");
        assert_eq!(r.price(129.9), "R$ 129,90");
    }

    #[test]
    fn installment_text() {
        let r = renderer();
        assert_eq!(
            r.installments(Installments {
                count: 3,
                amount: 9.33
            }),
            "até 3x de R$9,33"
        );
    }

    #[test]
    fn card_carries_product_data() {
        let card = renderer().product_card(&shirt());
        assert!(card.contains(r#"<img src="img/img_2.png" alt="CAMISETA MESCLA""#));
        assert!(card.contains(r#"<p class="product-card__price">R$ 28,00</p>"#));
        assert!(card.contains("até 3x de R$9,33"));
        assert!(card.contains(r#"data-product-id="1">Comprar</button>"#));
    }

    #[test]
    fn card_escapes_product_text() {
        let product = Product::new(ProductId::new("x\"1"), "<b>Bold</b> & \"quoted\"", 1.0);
        let card = renderer().product_card(&product);
        assert!(card.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; &quot;quoted&quot;"));
        assert!(card.contains(r#"data-product-id="x&quot;1""#));
        assert!(!card.contains("<b>"));
    }

    #[test]
    fn empty_grid_renders_no_results_message() {
        assert_eq!(
            renderer().product_grid(&[]),
            "<p>Nenhum produto encontrado com os filtros selecionados.</p>"
        );
    }

    #[test]
    fn grid_renders_one_card_per_product() {
        let grid = renderer().product_grid(&[shirt(), shirt()]);
        assert_eq!(grid.matches(r#"<div class="product-card">"#).count(), 2);
    }

    #[test]
    fn filter_panel_reflects_selection_state() {
        let facets = Facets {
            colors: vec!["Azul".into(), "Verde Musgo".into()],
            sizes: vec!["G".into(), "P".into()],
        };
        let filters = FilterState::new().with_color("Azul").with_size("P");
        let mut view = ViewState::new();
        view.set_price_checked("0-50", true);
        view.toggle_section(Panel::Desktop, Section::Colors);

        let html = renderer().filter_panel(Panel::Desktop, &facets, &filters, &view);
        assert!(html.contains(r#"<div class="filter-section is-open" data-section="colors">"#));
        assert!(html.contains(r#"<div class="filter-section" data-section="sizes">"#));
        assert!(html.contains(r#"id="color-Azul" name="color" value="Azul" class="filter-checkbox" checked>"#));
        assert!(html.contains(r#"id="color-Verde-Musgo" name="color" value="Verde Musgo" class="filter-checkbox">"#));
        assert!(html.contains(r#"<button class="size-btn is-selected" value="P">P</button>"#));
        assert!(html.contains(r#"<button class="size-btn" value="G">G</button>"#));
        assert!(html.contains(r#"id="price-0-50" name="price" value="0-50" class="filter-checkbox" checked>"#));
        assert!(html.contains(r#"id="filter-colors""#));
        assert!(!html.contains("icon-arrow"));
    }

    #[test]
    fn mobile_panel_prefixes_ids_and_adds_arrows() {
        let facets = Facets {
            colors: vec!["Azul".into()],
            sizes: vec!["P".into()],
        };
        let html = renderer().filter_panel(Panel::Mobile, &facets, &FilterState::new(), &ViewState::new());
        assert_eq!(html.matches(r#"<span class="icon-arrow"></span>"#).count(), 3);
        assert!(html.contains(r#"id="mobile-filter-colors""#));
        assert!(html.contains(r#"<label for="mobile-color-Azul">Azul</label>"#));
        assert!(html.contains(r#"id="mobile-price-500-""#));
    }
}
