use crate::catalog::SortKey;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIntent {
    /// The search box now holds this text.
    SearchChanged(String),
    /// Sort control for this field was activated. Re-activating the
    /// current field flips the direction.
    ToggleSort(SortKey),
}

impl Intent for CatalogIntent {}
