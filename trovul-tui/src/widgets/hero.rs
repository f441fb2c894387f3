//! Hero section - product name, tagline, call to action and a product window

use super::shadow::{clear_inner, render_tilt_shadow};
use crate::layout::{hero_mockup, HERO_COPY_ROWS};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use trovul_page::Tilt;

const MOCKUP_TASKS: [(&str, &str); 3] = [
    ("✓", "Lançar landing page"),
    ("◐", "Revisar automações do time"),
    ("○", "Convidar a equipe de design"),
];

/// Spacing of the decorative dot grid
const GRID_COLS: u16 = 6;
const GRID_ROWS: u16 = 3;

/// Widget for the page hero
pub struct HeroWidget<'a> {
    theme: &'a Theme,
    parallax_rows: u16,
    mockup_tilt: Option<Tilt>,
}

impl<'a> HeroWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            parallax_rows: 0,
            mockup_tilt: None,
        }
    }

    /// Tilt of the product window, if hovered
    pub fn mockup_tilt(mut self, tilt: Option<Tilt>) -> Self {
        self.mockup_tilt = tilt;
        self
    }

    fn render_mockup(&self, window: Rect, buf: &mut Buffer) {
        if let Some(tilt) = self.mockup_tilt {
            render_tilt_shadow(window, tilt, self.theme.dim(), buf);
        }

        let border = match self.mockup_tilt {
            Some(_) => self.theme.border_active().add_modifier(Modifier::BOLD),
            None => self.theme.border(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" ● ● ●  trovul.app ", self.theme.dim()));

        let lines: Vec<Line> = MOCKUP_TASKS
            .iter()
            .map(|(mark, task)| {
                Line::from(vec![
                    Span::styled(format!(" {mark} "), self.theme.border_active()),
                    Span::styled(*task, self.theme.normal()),
                ])
            })
            .collect();

        clear_inner(block.inner(window), buf);
        Paragraph::new(lines).block(block).render(window, buf);
    }

    /// Background offset, scrolling slower than the page
    pub fn parallax(mut self, rows: u16) -> Self {
        self.parallax_rows = rows;
        self
    }

    fn render_backdrop(&self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            if (row + self.parallax_rows) % GRID_ROWS != 0 {
                continue;
            }
            for col in (GRID_COLS / 2..area.width).step_by(GRID_COLS as usize) {
                buf[(area.x + col, area.y + row)]
                    .set_char('·')
                    .set_style(self.theme.dim());
            }
        }
    }
}

impl Widget for HeroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 8 {
            return;
        }

        self.render_backdrop(area, buf);

        let lines = vec![
            Line::from(Span::styled("▚▞  T R O V U L  ▚▞", self.theme.title())),
            Line::from(""),
            Line::from(Span::styled(
                "Seu time, seus projetos, um só lugar.",
                self.theme.normal(),
            )),
            Line::from(Span::styled(
                "Organize tarefas, automatize o repetitivo e colabore sem fricção.",
                self.theme.dim(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Entrar na waitlist → ", self.theme.highlight()),
                Span::styled("  tecle 5", self.theme.dim()),
            ]),
        ];

        let content_height = lines.len() as u16;
        let mockup = hero_mockup(area);
        let top = match mockup {
            Some(window) => window.y - HERO_COPY_ROWS - 1,
            None => area.y + area.height.saturating_sub(content_height) / 2,
        };
        let content = Rect::new(area.x, top, area.width, content_height.min(area.height));

        if let Some(window) = mockup {
            self.render_mockup(window, buf);
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::NIGHT;

    fn render(parallax: u16) -> Buffer {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        HeroWidget::new(&NIGHT).parallax(parallax).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_backdrop_shifts_with_parallax() {
        let still = render(0);
        assert_eq!(still[(3, 0)].symbol(), "·");
        assert_eq!(still[(3, 2)].symbol(), " ");

        let shifted = render(1);
        assert_eq!(shifted[(3, 0)].symbol(), " ");
        assert_eq!(shifted[(3, 2)].symbol(), "·");
    }

    #[test]
    fn test_mockup_window_tilts() {
        let area = Rect::new(0, 0, 100, 30);
        let window = hero_mockup(area).unwrap();

        let mut buf = Buffer::empty(area);
        HeroWidget::new(&NIGHT).render(area, &mut buf);
        let title: String = (window.x..window.right())
            .map(|x| buf[(x, window.y)].symbol().to_string())
            .collect();
        assert!(title.contains("trovul.app"));
        assert_ne!(buf[(window.right(), window.y + 2)].symbol(), "░");

        let tilt = Tilt {
            rotate_x: 0.0,
            rotate_y: 2.0,
        };
        let mut buf = Buffer::empty(area);
        HeroWidget::new(&NIGHT)
            .mockup_tilt(Some(tilt))
            .render(area, &mut buf);
        assert_eq!(buf[(window.right(), window.y + 2)].symbol(), "░");
    }

    #[test]
    fn test_too_small_renders_nothing() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        HeroWidget::new(&NIGHT).render(area, &mut buf);
        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }
}
