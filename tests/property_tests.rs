//! Property-based tests for the filter/sort transform.
//!
//! These verify the transform invariants across generated product sets:
//! filter identity, match soundness, null placement, ordering consistency,
//! and tie stability.

use proptest::collection::vec;
use proptest::prelude::*;
use rust_decimal::Decimal;
use stockview_api::entities::product;
use stockview_api::screen::transform::{apply, numeric_rank, SortDirection, SortKey};
use uuid::Uuid;

fn opt_label() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9 ]{0,12}")
}

fn opt_stock() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((-100_000i64..100_000).prop_map(Decimal::from))
}

fn product_strategy() -> impl Strategy<Value = product::Model> {
    (opt_label(), opt_label(), opt_label(), opt_stock()).prop_map(
        |(name, code, category, stock)| product::Model {
            id: Uuid::new_v4(),
            name,
            code,
            category,
            stock,
            promo_price: None,
            regular_price: None,
            cost_usd: None,
            cost_mxn: None,
            image_url: None,
            created_at: None,
        },
    )
}

fn products_strategy() -> impl Strategy<Value = Vec<product::Model>> {
    vec(product_strategy(), 0..24)
}

fn stock_rank(p: &product::Model) -> Option<f64> {
    p.stock.as_ref().map(numeric_rank)
}

proptest! {
    #[test]
    fn empty_search_is_the_identity_filter(products in products_strategy()) {
        let out = apply(&products, "", SortKey::Name, SortDirection::Asc);
        prop_assert_eq!(out.len(), products.len());
        let mut input_ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
        let mut output_ids: Vec<Uuid> = out.iter().map(|p| p.id).collect();
        input_ids.sort();
        output_ids.sort();
        prop_assert_eq!(input_ids, output_ids);
    }

    #[test]
    fn every_filtered_row_matches_on_some_field(
        products in products_strategy(),
        search in "[a-zA-Z ]{1,4}",
    ) {
        let needle = search.to_lowercase();
        let out = apply(&products, &search, SortKey::Name, SortDirection::Asc);
        for p in &out {
            let hit = [&p.name, &p.code, &p.category]
                .into_iter()
                .any(|f| f.as_deref().unwrap_or("").to_lowercase().contains(&needle));
            prop_assert!(hit, "row {:?} retained without a matching field", p.id);
        }
    }

    #[test]
    fn filtering_never_invents_rows(
        products in products_strategy(),
        search in "[a-zA-Z ]{0,4}",
    ) {
        let out = apply(&products, &search, SortKey::Stock, SortDirection::Desc);
        for p in &out {
            prop_assert!(products.iter().any(|q| q.id == p.id));
        }
    }

    #[test]
    fn numeric_ascending_order_is_consistent(products in products_strategy()) {
        let out = apply(&products, "", SortKey::Stock, SortDirection::Asc);
        let ranks: Vec<_> = out.iter().filter_map(stock_rank).collect();
        for pair in ranks.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn nulls_sort_last_in_both_directions(products in products_strategy()) {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let out = apply(&products, "", SortKey::Stock, direction);
            let first_null = out.iter().position(|p| p.stock.is_none());
            if let Some(boundary) = first_null {
                prop_assert!(
                    out[boundary..].iter().all(|p| p.stock.is_none()),
                    "non-null value after a null in {:?} order",
                    direction
                );
            }
        }
    }

    #[test]
    fn reversing_direction_reverses_rank_order(products in products_strategy()) {
        let asc = apply(&products, "", SortKey::Stock, SortDirection::Asc);
        let desc = apply(&products, "", SortKey::Stock, SortDirection::Desc);

        let asc_ranks: Vec<_> = asc.iter().filter_map(stock_rank).collect();
        let mut desc_ranks: Vec<_> = desc.iter().filter_map(stock_rank).collect();
        desc_ranks.reverse();
        prop_assert_eq!(asc_ranks, desc_ranks);
    }

    #[test]
    fn ties_preserve_input_order(products in products_strategy()) {
        let out = apply(&products, "", SortKey::Stock, SortDirection::Asc);
        let input_pos = |id: Uuid| products.iter().position(|p| p.id == id).unwrap();
        for pair in out.windows(2) {
            if stock_rank(&pair[0]) == stock_rank(&pair[1]) {
                prop_assert!(input_pos(pair[0].id) < input_pos(pair[1].id));
            }
        }
    }
}
