use crate::catalog::SortKey;
use crate::ui::app::{App, Focus};
use crate::ui::card::ProductCard;
use crate::ui::footer::Footer;
use crate::ui::header::{SearchBox, SortControl};
use crate::ui::layout::{GridGeometry, ScreenLayout};
use crate::ui::theme::DIMMED;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub const NOTHING_FOUND: &str = "Nothing found";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let catalog = app.catalog();

    let search = SearchBox::new(catalog.search(), app.focus() == Focus::Search);
    frame.render_widget(search.widget(), layout.search);
    if app.focus() == Focus::Search && layout.search.width > 2 && layout.search.height > 2 {
        let max_x = layout.search.x + layout.search.width - 2;
        let x = layout
            .search
            .x
            .saturating_add(1)
            .saturating_add(search.cursor_offset())
            .min(max_x);
        frame.set_cursor_position((x, layout.search.y + 1));
    }

    let sort = SortControl::new(
        SortKey::Price,
        catalog.indicator(SortKey::Price),
        app.focus() == Focus::SortControl,
    );
    frame.render_widget(sort.widget(), layout.sort_control);

    frame.render_widget(Clear, layout.body);
    draw_grid(frame, app, layout.body);

    let footer = Footer::new(catalog.display().len(), catalog.dataset().len());
    frame.render_widget(footer.widget(layout.footer), layout.footer);
}

fn draw_grid(frame: &mut Frame<'_>, app: &App, body: Rect) {
    if body.width == 0 || body.height == 0 {
        return;
    }

    let products = app.catalog().display();
    if products.is_empty() {
        let placeholder = Rect {
            y: body.y + body.height / 2,
            height: 1,
            ..body
        };
        frame.render_widget(
            Paragraph::new(NOTHING_FOUND)
                .style(Style::default().fg(DIMMED))
                .alignment(Alignment::Center),
            placeholder,
        );
        return;
    }

    let grid = GridGeometry::new(body, app.display_config().card_width);
    let scroll_row = app.scroll_row().min(grid.max_scroll(products.len()));
    for (index, product) in products.iter().enumerate() {
        if let Some(area) = grid.card_rect(body, index, scroll_row) {
            frame.render_widget(ProductCard::new(product, app.display_config()), area);
        }
    }
}
