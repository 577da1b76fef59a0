mod common;

use catalog_view::catalog::SortKey;
use catalog_view::config::DisplayConfig;
use catalog_view::ui::app::App;
use catalog_view::ui::catalog::{CatalogIntent, CatalogReducer, CatalogViewState};
use catalog_view::ui::mvi::Reducer;
use catalog_view::ui::input::handle_paste;
use common::{render_cursor, render_rows, render_text, sized_app};

#[test]
fn renders_toolbar_with_placeholder_and_neutral_indicator() {
    let app = sized_app(100, 40);
    let text = render_text(&app, 100, 40);
    assert!(text.contains("Search by item name"));
    assert!(text.contains("Price ↕"));
}

#[test]
fn renders_one_card_per_product() {
    let app = sized_app(100, 40);
    let text = render_text(&app, 100, 40);
    for name in ["Decorus", "Eager", "Poppy Petals", "Electric Zap"] {
        assert!(text.contains(name), "missing {name}");
    }
    for price in ["₱1000", "₱2000", "₱3000", "₱4000"] {
        assert!(text.contains(price), "missing {price}");
    }
    assert_eq!(text.matches("25% off").count(), 4);
    assert_eq!(text.matches("[ Add to cart ]").count(), 4);
    assert_eq!(text.matches("LABEL").count(), 4);
    assert!(text.contains("Label 1  Label 2  Label 3"));
    assert!(text.contains("consectetur adipiscing elit."));
}

#[test]
fn empty_result_renders_nothing_found() {
    let mut app = sized_app(100, 40);
    app.insert_str("zzz");
    let text = render_text(&app, 100, 40);
    assert!(text.contains("Nothing found"));
    assert!(!text.contains("Add to cart"));
    assert!(text.contains("zzz"));
}

#[test]
fn indicator_follows_sort_direction() {
    let mut app = sized_app(100, 40);
    app.toggle_sort(SortKey::Price);
    assert!(render_text(&app, 100, 40).contains("Price ▾"));
    app.toggle_sort(SortKey::Price);
    assert!(render_text(&app, 100, 40).contains("Price ▴"));
}

#[test]
fn descending_sort_puts_most_expensive_first() {
    let state = CatalogReducer::reduce(
        CatalogViewState::default(),
        CatalogIntent::ToggleSort(SortKey::Price),
    );
    let state = CatalogReducer::reduce(state, CatalogIntent::ToggleSort(SortKey::Price));
    let mut app = App::with_catalog(DisplayConfig::default(), state);
    app.on_resize(100, 40);

    let rows = render_rows(&app, 100, 40);
    let first_price_row = rows
        .iter()
        .find(|row| row.contains('₱'))
        .expect("a price row");
    let zap = first_price_row.find("₱4000").expect("Electric Zap first");
    let poppy = first_price_row.find("₱3000").expect("Poppy Petals second");
    assert!(zap < poppy);
}

#[test]
fn scrolled_grid_hides_earlier_rows() {
    let mut app = sized_app(34, 20);
    app.scroll_by(1);
    let text = render_text(&app, 34, 20);
    assert!(text.contains("Eager"));
    assert!(!text.contains("Decorus"));
}

#[test]
fn footer_counts_shown_products() {
    let mut app = sized_app(160, 40);
    app.insert_str("poppy");
    let text = render_text(&app, 160, 40);
    assert!(text.contains("1 of 4 products"));
    assert!(text.contains(concat!("v", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn custom_currency_and_badge() {
    let display = DisplayConfig {
        currency_symbol: "$".to_string(),
        discount_label: "SALE".to_string(),
        ..DisplayConfig::default()
    };
    let mut app = App::new(display);
    app.on_resize(100, 40);
    let text = render_text(&app, 100, 40);
    assert!(text.contains("$1000"));
    assert!(text.contains(" SALE "));
    assert!(!text.contains("25% off"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = sized_app(5, 4);
    let _ = render_text(&app, 5, 4);
    let app = sized_app(1, 1);
    let _ = render_text(&app, 1, 1);
}

#[test]
fn cursor_follows_typed_text() {
    let mut app = sized_app(100, 40);
    // Border, then the two-column search icon.
    assert_eq!(render_cursor(&app, 100, 40), (3, 1));
    app.insert_str("ab");
    assert_eq!(render_cursor(&app, 100, 40), (5, 1));
}

#[test]
fn cursor_counts_display_columns_of_wide_characters() {
    let mut app = sized_app(100, 40);
    app.insert_str("漢字");
    assert_eq!(render_cursor(&app, 100, 40), (7, 1));
}

#[test]
fn search_wider_than_u16_renders_with_cursor_at_box_edge() {
    let mut app = sized_app(100, 40);
    handle_paste(&mut app, &"a".repeat(usize::from(u16::MAX) + 10));
    assert!(render_text(&app, 100, 40).contains("Nothing found"));
    // Search box is 44 columns wide; the last inner column is 42.
    assert_eq!(render_cursor(&app, 100, 40), (42, 1));

    let mut app = sized_app(100, 40);
    handle_paste(&mut app, &"a".repeat(65533));
    assert_eq!(render_cursor(&app, 100, 40), (42, 1));
}

#[test]
fn wide_discount_label_is_not_clipped() {
    let display = DisplayConfig {
        discount_label: "セール".to_string(),
        ..DisplayConfig::default()
    };
    let mut app = App::new(display);
    app.on_resize(100, 40);
    let rows = render_rows(&app, 100, 40);
    let badge_row = rows
        .iter()
        .find(|row| row.contains("Decorus") && row.contains('セ'))
        .expect("name row with badge");
    assert!(badge_row.contains('ー'));
    assert!(badge_row.contains('ル'));
}
