use crate::catalog::{query_products, Product, SortIndicator, SortKey, PRODUCTS};
use crate::ui::mvi::UiState;

/// Search and sort state of the catalog screen plus the derived display list.
///
/// `display` is only ever produced by [`query_products`] over `dataset`,
/// so it stays a filtered, ordered subset of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViewState {
    dataset: &'static [Product],
    search: String,
    sort_by: Option<SortKey>,
    reversed: bool,
    display: Vec<Product>,
}

impl Default for CatalogViewState {
    fn default() -> Self {
        Self::new(&PRODUCTS)
    }
}

impl UiState for CatalogViewState {}

impl CatalogViewState {
    /// Initial state over `dataset`: no search, no sort, everything shown.
    pub fn new(dataset: &'static [Product]) -> Self {
        Self {
            dataset,
            search: String::new(),
            sort_by: None,
            reversed: false,
            display: dataset.to_vec(),
        }
    }

    pub fn dataset(&self) -> &'static [Product] {
        self.dataset
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_by(&self) -> Option<SortKey> {
        self.sort_by
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn display(&self) -> &[Product] {
        &self.display
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn indicator(&self, field: SortKey) -> SortIndicator {
        SortIndicator::from_state(self.sort_by == Some(field), self.reversed)
    }

    pub(super) fn recompute(
        self,
        search: String,
        sort_by: Option<SortKey>,
        reversed: bool,
    ) -> Self {
        let display = query_products(self.dataset, &search, sort_by, reversed);
        Self {
            dataset: self.dataset,
            search,
            sort_by,
            reversed,
            display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_full_catalog_unsorted() {
        let state = CatalogViewState::default();
        assert_eq!(state.search(), "");
        assert_eq!(state.sort_by(), None);
        assert!(!state.is_reversed());
        assert_eq!(state.display(), &PRODUCTS[..]);
    }

    #[test]
    fn indicator_is_unsorted_for_inactive_field() {
        let state = CatalogViewState::default();
        assert_eq!(state.indicator(SortKey::Price), SortIndicator::Unsorted);
    }
}
