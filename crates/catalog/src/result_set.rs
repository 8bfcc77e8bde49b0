//! Result-set derivation: filter the catalog, then order it.

use crate::filter::FilterState;
use crate::product::Product;
use crate::sort::SortOrder;

/// Derive the result set for the given filters and sort order.
///
/// Filters apply in order (color, size, price) and the survivors are
/// stable-sorted. The catalog is never mutated; the result is a new vector,
/// possibly empty.
pub fn derive_result_set(
    catalog: &[Product],
    filters: &FilterState,
    order: SortOrder,
) -> Vec<Product> {
    let mut result: Vec<Product> = catalog
        .iter()
        .filter(|p| filters.matches_color(p))
        .filter(|p| filters.matches_size(p))
        .filter(|p| filters.matches_price(p))
        .cloned()
        .collect();

    result.sort_by(|a, b| order.compare(a, b));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use storefront_core::{Entity, ProductId};

    fn catalog() -> Vec<Product> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let colors = ["Vermelho", "Azul", "Vermelho", "Preto", "Azul", "Vermelho", "Preto", "Azul", "Branco", "Branco"];
        colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                Product::new(ProductId::new(i.to_string()), format!("Item {i}"), 20.0 + 15.0 * i as f64)
                    .with_color(*color)
                    .with_sizes(if i % 2 == 0 { vec!["P", "M"] } else { vec!["G"] })
                    .with_date(base + Duration::days(i as i64))
            })
            .collect()
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id().as_str()).collect()
    }

    #[test]
    fn color_filter_keeps_matching_products() {
        let catalog = catalog();
        let filters = FilterState::new().with_color("Vermelho");
        let result = derive_result_set(&catalog, &filters, SortOrder::MostRecent);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|p| p.color() == "Vermelho"));
    }

    #[test]
    fn bounded_price_filter_is_inclusive() {
        let catalog = catalog();
        let filters = FilterState::new().with_price_token("50-95");
        let result = derive_result_set(&catalog, &filters, SortOrder::PriceAscending);
        // prices: 20, 35, 50, 65, 80, 95, 110, ...
        assert_eq!(ids(&result), ["2", "3", "4", "5"]);
    }

    #[test]
    fn open_price_filter_has_no_upper_bound() {
        let catalog = catalog();
        let filters = FilterState::new().with_price_token("110-");
        let result = derive_result_set(&catalog, &filters, SortOrder::PriceAscending);
        assert_eq!(ids(&result), ["6", "7", "8", "9"]);
    }

    #[test]
    fn size_filter_matches_any_overlap() {
        let catalog = catalog();
        let filters = FilterState::new().with_size("M").with_size("XG");
        let result = derive_result_set(&catalog, &filters, SortOrder::MostRecent);
        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|p| p.sizes().iter().any(|s| s == "M")));
    }

    #[test]
    fn most_recent_orders_by_date_descending() {
        let catalog = catalog();
        let result = derive_result_set(&catalog, &FilterState::new(), SortOrder::MostRecent);
        assert_eq!(ids(&result), ["9", "8", "7", "6", "5", "4", "3", "2", "1", "0"]);
    }

    #[test]
    fn price_descending_orders_by_price() {
        let catalog = catalog();
        let result = derive_result_set(&catalog, &FilterState::new(), SortOrder::PriceDescending);
        assert!(result.windows(2).all(|w| w[0].price() >= w[1].price()));
    }

    #[test]
    fn equal_keys_keep_catalog_order() {
        let catalog = vec![
            Product::new(ProductId::new("a"), "A", 10.0),
            Product::new(ProductId::new("b"), "B", 10.0),
            Product::new(ProductId::new("c"), "C", 5.0),
        ];
        let result = derive_result_set(&catalog, &FilterState::new(), SortOrder::PriceAscending);
        assert_eq!(ids(&result), ["c", "a", "b"]);
    }

    #[test]
    fn catalog_is_left_untouched() {
        let catalog = catalog();
        let before = catalog.clone();
        let _ = derive_result_set(&catalog, &FilterState::new().with_color("Azul"), SortOrder::PriceDescending);
        assert_eq!(catalog, before);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let catalog = catalog();
        let filters = FilterState::new().with_color("Rosa");
        assert!(derive_result_set(&catalog, &filters, SortOrder::MostRecent).is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product(index: usize) -> impl Strategy<Value = Product> {
            (
                0u32..100_000,
                prop::sample::select(vec!["Azul", "Preto", "Branco", "Vermelho"]),
                prop::collection::btree_set(prop::sample::select(vec!["P", "M", "G", "GG"]), 0..4),
                0i64..3650,
            )
                .prop_map(move |(cents, color, sizes, days)| {
                    let base = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
                    Product::new(ProductId::new(index.to_string()), format!("Item {index}"), cents as f64 / 100.0)
                        .with_color(color)
                        .with_sizes(sizes)
                        .with_date(base + Duration::days(days))
                })
        }

        fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
            (0usize..30).prop_flat_map(|len| (0..len).map(arb_product).collect::<Vec<_>>())
        }

        fn arb_filters() -> impl Strategy<Value = FilterState> {
            (
                prop::collection::btree_set(prop::sample::select(vec!["Azul", "Preto", "Rosa"]), 0..3),
                prop::collection::btree_set(prop::sample::select(vec!["P", "G", "XG"]), 0..3),
                prop::option::of(prop::sample::select(vec!["0-50", "51-150", "151-300", "301-500", "500-"])),
            )
                .prop_map(|(colors, sizes, price)| {
                    let mut filters = FilterState::new();
                    for c in colors {
                        filters.set_color(c, true);
                    }
                    for s in sizes {
                        filters.toggle_size(s);
                    }
                    filters.set_price_token(price);
                    filters
                })
        }

        fn arb_order() -> impl Strategy<Value = SortOrder> {
            prop::sample::select(SortOrder::ALL.to_vec())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the result set only contains catalog products.
            #[test]
            fn result_is_subset_of_catalog(
                catalog in arb_catalog(),
                filters in arb_filters(),
                order in arb_order()
            ) {
                let result = derive_result_set(&catalog, &filters, order);
                prop_assert!(result.len() <= catalog.len());
                for product in &result {
                    prop_assert!(catalog.contains(product));
                    prop_assert!(filters.matches(product));
                }
            }

            /// Property: filtering an already filtered set changes nothing.
            #[test]
            fn filtering_is_idempotent(
                catalog in arb_catalog(),
                filters in arb_filters(),
                order in arb_order()
            ) {
                let once = derive_result_set(&catalog, &filters, order);
                let twice = derive_result_set(&once, &filters, order);
                prop_assert_eq!(once, twice);
            }

            /// Property: sort order changes positions, never membership.
            #[test]
            fn sort_order_preserves_membership(
                catalog in arb_catalog(),
                filters in arb_filters(),
                a in arb_order(),
                b in arb_order()
            ) {
                let mut left: Vec<String> = derive_result_set(&catalog, &filters, a)
                    .iter()
                    .map(|p| p.id().to_string())
                    .collect();
                let mut right: Vec<String> = derive_result_set(&catalog, &filters, b)
                    .iter()
                    .map(|p| p.id().to_string())
                    .collect();
                left.sort();
                right.sort();
                prop_assert_eq!(left, right);
            }

            /// Property: with unique prices, ascending reversed is descending.
            #[test]
            fn ascending_reversed_is_descending(
                prices in prop::collection::btree_set(0u32..100_000, 0..30)
            ) {
                let catalog: Vec<Product> = prices
                    .into_iter()
                    .enumerate()
                    .map(|(i, cents)| Product::new(ProductId::new(i.to_string()), "Item", cents as f64 / 100.0))
                    .collect();

                let mut ascending = derive_result_set(&catalog, &FilterState::new(), SortOrder::PriceAscending);
                ascending.reverse();
                let descending = derive_result_set(&catalog, &FilterState::new(), SortOrder::PriceDescending);
                prop_assert_eq!(ascending, descending);
            }
        }
    }
}
