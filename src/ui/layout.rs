use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const SEARCH_WIDTH: u16 = 44;
const SORT_CONTROL_WIDTH: u16 = 12;

/// Rows taken by one product card, borders included.
pub const CARD_HEIGHT: u16 = 14;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Every region the renderer draws into and the mouse handler hit-tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub search: Rect,
    pub sort_control: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let (header, body, footer) = layout_regions(area);
        let search = Rect {
            width: header.width.min(SEARCH_WIDTH),
            ..header
        };
        let sort_x = search.x + search.width + 1;
        let sort_control = Rect {
            x: sort_x.min(header.x + header.width),
            width: SORT_CONTROL_WIDTH.min((header.x + header.width).saturating_sub(sort_x)),
            ..header
        };
        Self {
            search,
            sort_control,
            body,
            footer,
        }
    }
}

/// Card grid placement inside the body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub columns: usize,
    pub visible_rows: usize,
    pub card_width: u16,
}

impl GridGeometry {
    pub fn new(body: Rect, card_width: u16) -> Self {
        let card_width = card_width.min(body.width).max(1);
        Self {
            columns: usize::from((body.width / card_width).max(1)),
            visible_rows: usize::from((body.height / CARD_HEIGHT).max(1)),
            card_width,
        }
    }

    pub fn total_rows(&self, cards: usize) -> usize {
        cards.div_ceil(self.columns)
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self, cards: usize) -> usize {
        self.total_rows(cards).saturating_sub(self.visible_rows)
    }

    /// Area of the card at `index` once `scroll_row` rows are scrolled off,
    /// or `None` if it lies outside the viewport.
    pub fn card_rect(&self, body: Rect, index: usize, scroll_row: usize) -> Option<Rect> {
        let row = (index / self.columns).checked_sub(scroll_row)?;
        if row >= self.visible_rows {
            return None;
        }
        let column = (index % self.columns) as u16;
        let y = body.y + row as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min((body.y + body.height).saturating_sub(y));
        if height == 0 {
            return None;
        }
        Some(Rect {
            x: body.x + column * self.card_width,
            y,
            width: self.card_width,
            height,
        })
    }
}
