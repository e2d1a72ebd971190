//! Property tests for view derivation, paging and selection.

#![allow(clippy::unwrap_used)]

use std::cmp::Ordering;

use proptest::prelude::*;

use outreach_table::{
    CellValue, FilterSet, PageControl, PageItem, Row, RowId, SortState, ViewQuery, derive_view,
    matches_search, page_items, toggle_all_visible, total_pages,
};

fn arb_value() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        1 => Just(CellValue::Null),
        3 => (0i32..20).prop_map(CellValue::from),
        3 => "[a-cA-C]{0,3}".prop_map(CellValue::from),
    ]
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((arb_value(), arb_value()), 0..40).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (a, b))| Row::new(i.to_string()).with("a", a).with("b", b))
            .collect()
    })
}

fn query<'a>(filters: &'a FilterSet, keys: &'a [String]) -> ViewQuery<'a> {
    ViewQuery {
        search: "",
        search_keys: keys,
        filters,
        sort: None,
        paginated: false,
        page_size: 10,
        page: PageControl::default(),
    }
}

proptest! {
    #[test]
    fn search_keeps_exactly_matching_rows(rows in arb_rows(), needle in "[a-c]{1,2}") {
        let keys = vec!["a".to_string(), "b".to_string()];
        let filters = FilterSet::new();
        let view = derive_view(&rows, &ViewQuery { search: &needle, ..query(&filters, &keys) });

        for (index, row) in rows.iter().enumerate() {
            let expected = keys.iter().any(|k| {
                row.get(k).key().is_some_and(|s| s.to_lowercase().contains(&needle))
            });
            prop_assert_eq!(view.matched.contains(&index), expected);
            prop_assert_eq!(matches_search(row, &needle, &keys), expected);
        }
    }

    #[test]
    fn filters_and_across_columns(rows in arb_rows(), a in "[a-c]", b in 0i32..20) {
        let filters = FilterSet::from_pairs([("a", vec![a.clone()]), ("b", vec![b.to_string()])]);
        let view = derive_view(&rows, &query(&filters, &[]));

        let expected: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                row.get("a").key().as_deref() == Some(a.as_str())
                    && row.get("b").key() == Some(b.to_string())
            })
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(view.matched, expected);
    }

    #[test]
    fn sort_is_stable_with_nulls_last(rows in arb_rows(), descending in any::<bool>()) {
        let sort = if descending { SortState::descending("a") } else { SortState::ascending("a") };
        let filters = FilterSet::new();
        let view = derive_view(&rows, &ViewQuery { sort: Some(&sort), ..query(&filters, &[]) });

        prop_assert_eq!(view.matched.len(), rows.len());
        let mut seen_null = false;
        for pair in view.matched.windows(2) {
            let (x, y) = (rows[pair[0]].get("a"), rows[pair[1]].get("a"));
            let ordering = sort.compare(x, y);
            prop_assert_ne!(ordering, Ordering::Greater);
            if ordering == Ordering::Equal {
                prop_assert!(pair[0] < pair[1]);
            }
            if x.is_null() {
                seen_null = true;
            }
            prop_assert!(!seen_null || y.is_null());
        }
    }

    #[test]
    fn pages_cover_the_filtered_rows(rows in arb_rows(), page_size in 1usize..8) {
        let filters = FilterSet::new();
        let base = ViewQuery { paginated: true, page_size, ..query(&filters, &[]) };
        let pages = total_pages(rows.len(), page_size);

        let mut seen = Vec::new();
        for page in 1..=pages {
            let view = derive_view(
                &rows,
                &ViewQuery { page: PageControl::SelfManaged { current_page: page }, ..base },
            );
            prop_assert!(!view.visible().is_empty());
            prop_assert!(view.visible().len() <= page_size);
            seen.extend_from_slice(view.visible());
        }
        prop_assert_eq!(seen, (0..rows.len()).collect::<Vec<_>>());
    }

    #[test]
    fn page_strip_is_bounded(total in 1usize..200, current in 1usize..200) {
        let current = current.min(total);
        let items = page_items(current, total);
        prop_assert!(items.len() <= 7);
        prop_assert_eq!(items.first(), Some(&PageItem::Page(1)));
        prop_assert_eq!(items.last(), Some(&PageItem::Page(total)));
        prop_assert!(items.contains(&PageItem::Page(current)));
    }

    #[test]
    fn select_all_twice_restores_other_pages(
        other in prop::collection::btree_set(0u32..50, 0..10),
        visible in prop::collection::btree_set(50u32..100, 1..10),
    ) {
        let selected: Vec<RowId> = other.iter().map(|i| RowId::from(i.to_string())).collect();
        let visible: Vec<RowId> = visible.iter().map(|i| RowId::from(i.to_string())).collect();

        let once = toggle_all_visible(&selected, &visible);
        prop_assert!(visible.iter().all(|id| once.contains(id)));
        prop_assert_eq!(toggle_all_visible(&once, &visible), selected);
    }
}
