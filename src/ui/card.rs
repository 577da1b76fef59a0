use crate::catalog::Product;
use crate::config::DisplayConfig;
use crate::ui::theme::{BADGE, BUTTON_BG, CARD_BG, DIMMED, GLOBAL_BORDER, TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

const ADD_TO_CART: &str = "[ Add to cart ]";

/// One product drawn as a bordered card.
///
/// Top to bottom: image placeholder, name with discount badge,
/// description, label list, price with the (inert) cart button.
pub struct ProductCard<'a> {
    product: &'a Product,
    display: &'a DisplayConfig,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, display: &'a DisplayConfig) -> Self {
        Self { product, display }
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .style(Style::default().bg(CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let dimmed = Style::default().fg(DIMMED);
        let divider = Line::styled(
            "─".repeat(usize::from(inner.width)),
            Style::default().fg(GLOBAL_BORDER),
        );

        // Image placeholder; the product name doubles as alt text.
        Paragraph::new(vec![
            Line::default(),
            Line::styled(
                format!("▣ {}", self.product.name),
                dimmed.add_modifier(Modifier::ITALIC),
            ),
            Line::default(),
        ])
        .alignment(Alignment::Center)
        .render(rows[0], buf);
        Paragraph::new(divider.clone()).render(rows[1], buf);

        let badge = format!(" {} ", self.display.discount_label);
        let badge = Span::styled(badge, Style::default().fg(BADGE).add_modifier(Modifier::BOLD));
        let badge_width = u16::try_from(badge.width()).unwrap_or(u16::MAX);
        let [name_area, badge_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(badge_width)])
                .areas(rows[2]);
        Paragraph::new(Span::styled(
            self.product.name,
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
        .render(name_area, buf);
        Paragraph::new(badge).render(badge_area, buf);

        Paragraph::new(Span::styled(self.product.description, dimmed))
            .wrap(Wrap { trim: true })
            .render(rows[3], buf);
        Paragraph::new(divider.clone()).render(rows[4], buf);

        Paragraph::new(Span::styled(
            "LABEL",
            dimmed.add_modifier(Modifier::BOLD),
        ))
        .render(rows[5], buf);
        let labels: Vec<Span> = self
            .product
            .labels
            .iter()
            .enumerate()
            .flat_map(|(idx, label)| {
                let gap = if idx == 0 { "" } else { "  " };
                [Span::raw(gap), Span::styled(*label, Style::default().fg(TEXT))]
            })
            .collect();
        Paragraph::new(Line::from(labels)).render(rows[6], buf);
        Paragraph::new(divider).render(rows[7], buf);

        let button_width = Span::raw(ADD_TO_CART).width() as u16;
        let [price_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)])
                .areas(rows[8]);
        Paragraph::new(Span::styled(
            self.display.format_price(self.product.price),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ))
        .render(price_area, buf);
        Paragraph::new(Span::styled(
            ADD_TO_CART,
            Style::default().fg(TEXT).bg(BUTTON_BG),
        ))
        .render(button_area, buf);
    }
}
