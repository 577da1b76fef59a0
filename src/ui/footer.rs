use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str =
    " Tab: Focus │ Ctrl+P: Sort price │ Ctrl+U: Clear │ ↑/↓: Scroll │ Ctrl+Q: Quit";

pub struct Footer {
    shown: usize,
    total: usize,
}

impl Footer {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let right = format!("{} of {} products │ v{} ", self.shown, self.total, VERSION);

        // Padding in display columns, not chars
        let hints_width = Span::raw(HINTS).width();
        let right_width = Span::raw(right.as_str()).width();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
