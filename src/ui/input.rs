use crate::catalog::SortKey;
use crate::ui::app::{App, Focus};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.toggle_sort(SortKey::Price);
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.clear_search();
        return;
    }

    match key.code {
        KeyCode::Esc => {
            if app.catalog().search().is_empty() {
                app.request_quit();
            } else {
                app.clear_search();
            }
        }
        KeyCode::Tab | KeyCode::BackTab => app.cycle_focus(),
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Down => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-(app.page_rows() as isize)),
        KeyCode::PageDown => app.scroll_by(app.page_rows() as isize),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_end(),
        _ => handle_focused_key(app, key),
    }
}

fn handle_focused_key(app: &mut App, key: KeyEvent) {
    match app.focus() {
        Focus::Search => match key.code {
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Char(ch) if is_plain(key) => app.insert_char(ch),
            _ => {}
        },
        Focus::SortControl => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_sort(SortKey::Price),
            // Typing anywhere else goes to the search box.
            KeyCode::Char(ch) if is_plain(key) => {
                app.set_focus(Focus::Search);
                app.insert_char(ch);
            }
            KeyCode::Backspace => {
                app.set_focus(Focus::Search);
                app.delete_char();
            }
            _ => {}
        },
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(layout) = app.layout() else {
                return;
            };
            let position = Position::new(mouse.column, mouse.row);
            if layout.sort_control.contains(position) {
                app.set_focus(Focus::SortControl);
                app.toggle_sort(SortKey::Price);
            } else if layout.search.contains(position) {
                app.set_focus(Focus::Search);
            }
        }
        MouseEventKind::ScrollDown => app.scroll_by(1),
        MouseEventKind::ScrollUp => app.scroll_by(-1),
        _ => {}
    }
}

/// Bracketed paste: appended to the search, line breaks dropped.
pub fn handle_paste(app: &mut App, text: &str) {
    app.set_focus(Focus::Search);
    app.insert_str(text);
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
