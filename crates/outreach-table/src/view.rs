//! Pure view derivation: search, filter, sort, paginate.

use std::ops::Range;

use crate::filter::{FilterSet, matches_search};
use crate::pagination::{PageControl, page_range, total_pages};
use crate::row::Row;
use crate::sort::SortState;

/// Every input the derived view depends on, besides the data itself.
#[derive(Debug, Clone, Copy)]
pub struct ViewQuery<'a> {
    /// Free-text query.
    pub search: &'a str,
    /// Fields searched by the query.
    pub search_keys: &'a [String],
    /// Facet restrictions.
    pub filters: &'a FilterSet,
    /// Active sort.
    pub sort: Option<&'a SortState>,
    /// Whether to slice to a page at all.
    pub paginated: bool,
    /// Rows per page.
    pub page_size: usize,
    /// Page ownership and current page.
    pub page: PageControl,
}

/// The filtered, sorted and paginated view of a dataset.
///
/// Holds indices into the source slice, so it stays valid only as long as
/// the data it was derived from is unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedView {
    /// Indices of rows that passed search and filters, in sorted order.
    pub matched: Vec<usize>,
    /// Window of `matched` shown on the current page.
    pub page: Range<usize>,
    /// Row count used for page math.
    pub total_count: usize,
    /// Number of pages.
    pub total_pages: usize,
}

impl DerivedView {
    /// Indices of the rows visible on the current page.
    #[must_use]
    pub fn visible(&self) -> &[usize] {
        &self.matched[self.page.clone()]
    }

    /// Number of rows that passed search and filters.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.matched.len()
    }
}

/// Derives the visible view of `data`.
///
/// A pure function of its inputs; `data` is never reordered. In externally
/// driven mode `data` already holds a single server page that the server
/// searched and filtered, so rows are neither matched nor sliced away and
/// the page count comes from the caller's total.
#[must_use]
pub fn derive_view(data: &[Row], query: &ViewQuery<'_>) -> DerivedView {
    let server_side = matches!(query.page, PageControl::ExternallyDriven { .. });
    let mut matched: Vec<usize> = data
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            server_side
                || (matches_search(row, query.search, query.search_keys)
                    && query.filters.accepts(row))
        })
        .map(|(index, _)| index)
        .collect();

    if let Some(sort) = query.sort {
        // Vec::sort_by is stable
        matched.sort_by(|&a, &b| sort.compare(data[a].get(&sort.key), data[b].get(&sort.key)));
    }

    let total_count = query.page.total_count(matched.len());

    if !query.paginated {
        let len = matched.len();
        return DerivedView {
            matched,
            page: 0..len,
            total_count,
            total_pages: 1.min(total_count),
        };
    }

    let page = match query.page {
        PageControl::SelfManaged { current_page } => {
            page_range(current_page, query.page_size, matched.len())
        }
        PageControl::ExternallyDriven { .. } => 0..matched.len(),
    };

    DerivedView {
        matched,
        page,
        total_count,
        total_pages: total_pages(total_count, query.page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Row> {
        vec![
            Row::new("1").with("name", "Bob").with("age", 30),
            Row::new("2").with("name", "Alice").with("age", 25),
            Row::new("3").with("name", "Carol"),
        ]
    }

    fn query<'a>(filters: &'a FilterSet, keys: &'a [String]) -> ViewQuery<'a> {
        ViewQuery {
            search: "",
            search_keys: keys,
            filters,
            sort: None,
            paginated: true,
            page_size: 10,
            page: PageControl::default(),
        }
    }

    fn ids(data: &[Row], view: &DerivedView) -> Vec<String> {
        view.visible()
            .iter()
            .map(|&i| data[i].id().to_string())
            .collect()
    }

    #[test]
    fn unfiltered_keeps_source_order() {
        let data = people();
        let filters = FilterSet::new();
        let view = derive_view(&data, &query(&filters, &[]));
        assert_eq!(ids(&data, &view), vec!["1", "2", "3"]);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn search_then_sort() {
        let data = people();
        let filters = FilterSet::new();
        let keys = vec!["name".to_string()];
        let sort = SortState::ascending("name");
        let view = derive_view(
            &data,
            &ViewQuery {
                search: "o",
                sort: Some(&sort),
                ..query(&filters, &keys)
            },
        );
        assert_eq!(ids(&data, &view), vec!["1", "3"]);
    }

    #[test]
    fn nulls_sort_last_descending() {
        let data = people();
        let filters = FilterSet::new();
        let sort = SortState::descending("age");
        let view = derive_view(
            &data,
            &ViewQuery {
                sort: Some(&sort),
                ..query(&filters, &[])
            },
        );
        assert_eq!(ids(&data, &view), vec!["1", "2", "3"]);
    }

    #[test]
    fn external_mode_does_not_slice() {
        let data = people();
        let filters = FilterSet::new();
        let view = derive_view(
            &data,
            &ViewQuery {
                page_size: 1,
                page: PageControl::ExternallyDriven {
                    current_page: 2,
                    total_items: 30,
                },
                ..query(&filters, &[])
            },
        );
        assert_eq!(view.visible().len(), 3);
        assert_eq!(view.total_count, 30);
        assert_eq!(view.total_pages, 30);
    }

    #[test]
    fn external_mode_leaves_matching_to_the_server() {
        let data = people();
        let filters = FilterSet::from_pairs([("name", ["Bob"])]);
        let keys = vec!["name".to_string()];
        let view = derive_view(
            &data,
            &ViewQuery {
                search: "carol",
                page: PageControl::ExternallyDriven {
                    current_page: 1,
                    total_items: 3,
                },
                ..query(&filters, &keys)
            },
        );
        assert_eq!(view.filtered_count(), 3);
        assert_eq!(view.visible().len(), 3);
    }

    #[test]
    fn unpaginated_shows_everything() {
        let data = people();
        let filters = FilterSet::new();
        let view = derive_view(
            &data,
            &ViewQuery {
                paginated: false,
                page_size: 1,
                ..query(&filters, &[])
            },
        );
        assert_eq!(view.visible().len(), 3);
    }
}
