use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::CatalogViewState;
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogViewState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::SearchChanged(search) => {
                let sort_by = state.sort_by();
                let reversed = state.is_reversed();
                state.recompute(search, sort_by, reversed)
            }
            CatalogIntent::ToggleSort(field) => {
                let reversed = if state.sort_by() == Some(field) {
                    !state.is_reversed()
                } else {
                    false
                };
                let search = state.search().to_string();
                state.recompute(search, Some(field), reversed)
            }
        }
    }
}
