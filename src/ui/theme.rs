use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIMMED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BADGE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const BUTTON_BG: Color = Color::Rgb(0x22, 0x8b, 0xe6);
pub const CARD_BG: Color = Color::Rgb(0x1a, 0x1b, 0x1e);
