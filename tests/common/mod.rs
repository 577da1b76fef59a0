//! Shared test utilities.

#![allow(dead_code)]

use catalog_view::config::DisplayConfig;
use catalog_view::ui::app::App;
use catalog_view::ui::render::draw;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use tempfile::TempDir;

/// App sized as if the terminal were `width` x `height`.
pub fn sized_app(width: u16, height: u16) -> App {
    let mut app = App::new(DisplayConfig::default());
    app.on_resize(width, height);
    app
}

/// Draw one frame and return the screen as text, one string per row.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

/// Draw one frame and return where the terminal cursor was left.
pub fn render_cursor(app: &App, width: u16, height: u16) -> (u16, u16) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let position = terminal.get_cursor_position().expect("cursor position");
    (position.x, position.y)
}

pub fn render_text(app: &App, width: u16, height: u16) -> String {
    render_rows(app, width, height).join("\n")
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn names(app: &App) -> Vec<&'static str> {
    app.catalog().display().iter().map(|p| p.name).collect()
}

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
