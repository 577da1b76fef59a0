use crate::catalog::{SortIndicator, SortKey};
use crate::ui::theme::{ACCENT, DIMMED, FOCUS_BORDER, GLOBAL_BORDER, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const SEARCH_PLACEHOLDER: &str = "Search by item name";
const SEARCH_ICON: &str = "⌕ ";

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}

/// Text input for the name search.
pub struct SearchBox<'a> {
    text: &'a str,
    focused: bool,
}

impl<'a> SearchBox<'a> {
    pub fn new(text: &'a str, focused: bool) -> Self {
        Self { text, focused }
    }

    /// Display columns between the left border and the cursor, saturating
    /// at `u16::MAX` for text wider than any terminal.
    pub fn cursor_offset(&self) -> u16 {
        let width = Span::raw(SEARCH_ICON).width() + Span::raw(self.text).width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let icon = Span::styled(SEARCH_ICON, Style::default().fg(DIMMED));
        let content = if self.text.is_empty() {
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(DIMMED))
        } else {
            Span::styled(self.text, Style::default().fg(TEXT))
        };

        Paragraph::new(Line::from(vec![icon, content])).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(self.focused)),
        )
    }
}

/// Clickable sort toggle for one field.
pub struct SortControl {
    field: SortKey,
    indicator: SortIndicator,
    focused: bool,
}

impl SortControl {
    pub fn new(field: SortKey, indicator: SortIndicator, focused: bool) -> Self {
        Self {
            field,
            indicator,
            focused,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let mut label_style = Style::default().fg(TEXT);
        if self.focused {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        let indicator_style = match self.indicator {
            SortIndicator::Unsorted => Style::default().fg(DIMMED),
            SortIndicator::Ascending | SortIndicator::Descending => Style::default().fg(ACCENT),
        };
        let line = Line::from(vec![
            Span::styled(self.field.label(), label_style),
            Span::raw(" "),
            Span::styled(self.indicator.glyph(), indicator_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(self.focused)),
        )
    }
}
