use std::cmp::Ordering;

use super::product::Product;

/// Field the display list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Price,
}

impl SortKey {
    /// Ascending comparison on the field's natural ordering.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Price => a.price.cmp(&b.price),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Price => "Price",
        }
    }
}

/// Glyph shown next to a sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn from_state(sorted: bool, reversed: bool) -> Self {
        match (sorted, reversed) {
            (false, _) => SortIndicator::Unsorted,
            (true, false) => SortIndicator::Ascending,
            (true, true) => SortIndicator::Descending,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "↕",
            SortIndicator::Ascending => "▾",
            SortIndicator::Descending => "▴",
        }
    }
}

/// Products whose name contains `search`, ignoring case and surrounding
/// whitespace in the query. Dataset order is preserved.
pub fn filter_products(products: &[Product], search: &str) -> Vec<Product> {
    let query = search.trim().to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&query))
        .copied()
        .collect()
}

/// Filters, then orders by `sort_by` if set.
///
/// The sort is stable in both directions: equal keys keep dataset order
/// even when `reversed` is set.
pub fn query_products(
    products: &[Product],
    search: &str,
    sort_by: Option<SortKey>,
    reversed: bool,
) -> Vec<Product> {
    let mut matches = filter_products(products, search);
    if let Some(key) = sort_by {
        if reversed {
            matches.sort_by(|a, b| key.compare(b, a));
        } else {
            matches.sort_by(|a, b| key.compare(a, b));
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PRODUCTS;

    fn names(products: &[Product]) -> Vec<&'static str> {
        products.iter().map(|p| p.name).collect()
    }

    fn tied(name: &'static str, price: u32) -> Product {
        Product {
            name,
            description: "",
            price,
            labels: &[],
        }
    }

    #[test]
    fn search_e_keeps_dataset_order() {
        let result = query_products(&PRODUCTS, "e", None, false);
        assert_eq!(names(&result), vec!["Decorus", "Eager", "Electric Zap"]);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let result = filter_products(&PRODUCTS, "  POPPY ");
        assert_eq!(names(&result), vec!["Poppy Petals"]);
    }

    #[test]
    fn empty_search_matches_everything() {
        assert_eq!(filter_products(&PRODUCTS, ""), PRODUCTS.to_vec());
        assert_eq!(filter_products(&PRODUCTS, "   "), PRODUCTS.to_vec());
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(query_products(&PRODUCTS, "zzz", Some(SortKey::Price), false).is_empty());
    }

    #[test]
    fn results_match_and_exclusions_do_not() {
        for search in ["e", "p", "ZAP", "r", "x", "ea"] {
            let result = filter_products(&PRODUCTS, search);
            let needle = search.to_lowercase();
            for product in &PRODUCTS {
                let contains = product.name.to_lowercase().contains(&needle);
                assert_eq!(result.contains(product), contains, "{search} / {}", product.name);
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_products(&PRODUCTS, "e");
        let twice = filter_products(&once, "e");
        assert_eq!(once, twice);
    }

    #[test]
    fn price_sort_ascending_and_descending() {
        let asc = query_products(&PRODUCTS, "", Some(SortKey::Price), false);
        assert_eq!(
            names(&asc),
            vec!["Decorus", "Eager", "Poppy Petals", "Electric Zap"]
        );

        let desc = query_products(&PRODUCTS, "", Some(SortKey::Price), true);
        assert_eq!(
            names(&desc),
            vec!["Electric Zap", "Poppy Petals", "Eager", "Decorus"]
        );
    }

    #[test]
    fn descending_is_exact_reverse_of_ascending() {
        for search in ["", "e", "a", "petals"] {
            let mut asc = query_products(&PRODUCTS, search, Some(SortKey::Price), false);
            let desc = query_products(&PRODUCTS, search, Some(SortKey::Price), true);
            asc.reverse();
            assert_eq!(asc, desc);
        }
    }

    #[test]
    fn ties_keep_dataset_order_in_both_directions() {
        let products = [tied("b", 5), tied("a", 5), tied("c", 1)];
        let asc = query_products(&products, "", Some(SortKey::Price), false);
        assert_eq!(names(&asc), vec!["c", "b", "a"]);
        let desc = query_products(&products, "", Some(SortKey::Price), true);
        assert_eq!(names(&desc), vec!["b", "a", "c"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let products = PRODUCTS;
        let _ = query_products(&products, "", Some(SortKey::Price), true);
        assert_eq!(products, PRODUCTS);
    }

    #[test]
    fn indicator_maps_sort_state() {
        assert_eq!(SortIndicator::from_state(false, true), SortIndicator::Unsorted);
        assert_eq!(SortIndicator::from_state(true, false), SortIndicator::Ascending);
        assert_eq!(SortIndicator::from_state(true, true), SortIndicator::Descending);
    }
}
