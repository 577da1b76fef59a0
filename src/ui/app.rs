use crate::catalog::SortKey;
use crate::config::DisplayConfig;
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogViewState};
use crate::ui::layout::{GridGeometry, ScreenLayout};
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Focus {
    #[default]
    Search,
    SortControl,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::SortControl,
            Focus::SortControl => Focus::Search,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Full terminal size in columns and rows.
    size: Option<(u16, u16)>,
    /// Search/sort state of the catalog (MVI pattern).
    catalog: CatalogViewState,
    /// First visible card row.
    scroll_row: usize,
    display: DisplayConfig,
}

impl App {
    pub fn new(display: DisplayConfig) -> Self {
        Self::with_catalog(display, CatalogViewState::default())
    }

    pub fn with_catalog(display: DisplayConfig, catalog: CatalogViewState) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            size: None,
            catalog,
            scroll_row: 0,
            display,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &CatalogViewState {
        &self.catalog
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn dispatch(&mut self, intent: CatalogIntent) {
        tracing::debug!(?intent, "catalog intent");
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
        self.clamp_scroll();
        tracing::debug!(
            shown = self.catalog.display().len(),
            total = self.catalog.dataset().len(),
            "display list recomputed"
        );
    }

    pub fn set_search(&mut self, search: String) {
        if search != self.catalog.search() {
            self.dispatch(CatalogIntent::SearchChanged(search));
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        let mut search = self.catalog.search().to_string();
        search.extend(text.chars().filter(|ch| !ch.is_control()));
        self.set_search(search);
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut search = self.catalog.search().to_string();
        search.push(ch);
        self.set_search(search);
    }

    pub fn delete_char(&mut self) {
        let mut search = self.catalog.search().to_string();
        if search.pop().is_some() {
            self.set_search(search);
        }
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn toggle_sort(&mut self, field: SortKey) {
        self.dispatch(CatalogIntent::ToggleSort(field));
    }

    pub fn scroll_by(&mut self, rows: isize) {
        self.scroll_row = self.scroll_row.saturating_add_signed(rows);
        self.clamp_scroll();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_row = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_row = usize::MAX;
        self.clamp_scroll();
    }

    /// Card rows per screen, for paging.
    pub fn page_rows(&self) -> usize {
        self.grid().map_or(1, |grid| grid.visible_rows)
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.clamp_scroll();
    }

    /// Regions of the last known terminal size.
    pub fn layout(&self) -> Option<ScreenLayout> {
        self.size.map(|(width, height)| ScreenLayout::new(Rect::new(0, 0, width, height)))
    }

    pub fn grid(&self) -> Option<GridGeometry> {
        self.layout()
            .map(|layout| GridGeometry::new(layout.body, self.display.card_width))
    }

    fn clamp_scroll(&mut self) {
        let max = self
            .grid()
            .map_or(0, |grid| grid.max_scroll(self.catalog.display().len()));
        self.scroll_row = self.scroll_row.min(max);
    }
}
