//! Collapsible menu shown on narrow terminals

use crate::layout::Section;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const MENU_WIDTH: u16 = 22;

/// Dropdown with one entry per section
pub struct MenuOverlay<'a> {
    theme: &'a Theme,
    current: Section,
}

impl<'a> MenuOverlay<'a> {
    pub fn new(theme: &'a Theme, current: Section) -> Self {
        Self { theme, current }
    }

    /// Placement below the nav bar, right-aligned in `area`
    pub fn area(area: Rect) -> Rect {
        let width = MENU_WIDTH.min(area.width);
        let height = (Section::ALL.len() as u16 + 2).min(area.height.saturating_sub(1));
        Rect::new(area.right() - width, area.y + 1, width, height)
    }
}

impl Widget for MenuOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::area(area);
        if popup.height < 3 {
            return;
        }

        Clear.render(popup, buf);

        let lines: Vec<Line> = Section::ALL
            .into_iter()
            .enumerate()
            .map(|(index, section)| {
                let style = if section == self.current {
                    self.theme.highlight()
                } else {
                    self.theme.normal()
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", index + 1), self.theme.dim()),
                    Span::styled(section.label(), style),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_active())
            .style(self.theme.nav_solid());

        Paragraph::new(lines).block(block).render(popup, buf);
    }
}
