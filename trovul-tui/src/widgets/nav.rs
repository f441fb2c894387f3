//! Fixed nav bar - logo, section links and the menu button

use crate::layout::Section;
use crate::theme::{to_color, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    text::{Line, Span},
    widgets::Widget,
};
use trovul_field::{Rgb, Rgba};
use trovul_page::NavStyle;

/// Darkening applied to the row under a solid nav bar
const SHADOW: Rgba = Rgba {
    rgb: Rgb::new(0, 0, 0),
    alpha: 0.35,
};

/// Blend a veil over a cell color, keeping non-RGB colors as `fallback`
fn veil(color: Color, over: Rgba, fallback: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => to_color(Rgb::new(r, g, b).blend(over.rgb, over.alpha)),
        _ => fallback,
    }
}

/// Widget for the nav bar
pub struct NavBar<'a> {
    theme: &'a Theme,
    style: NavStyle,
    current: Section,
    compact: bool,
    menu_open: bool,
}

impl<'a> NavBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            style: NavStyle::default(),
            current: Section::Hero,
            compact: false,
            menu_open: false,
        }
    }

    pub fn style(mut self, style: NavStyle) -> Self {
        self.style = style;
        self
    }

    /// Section whose link is highlighted
    pub fn current(mut self, section: Section) -> Self {
        self.current = section;
        self
    }

    /// Collapse the links into a menu button
    pub fn compact(mut self, compact: bool, menu_open: bool) -> Self {
        self.compact = compact;
        self.menu_open = menu_open;
        self
    }

    fn links(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, section) in Section::ALL.into_iter().enumerate() {
            let style = if section == self.current {
                self.theme.highlight()
            } else {
                self.theme.normal()
            };
            spans.push(Span::styled(format!("{}", index + 1), self.theme.dim()));
            spans.push(Span::styled(format!(" {} ", section.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn menu_button(&self) -> Line<'static> {
        let icon = if self.menu_open { "✕" } else { "☰" };
        Line::from(vec![
            Span::styled(icon, self.theme.title()),
            Span::styled(" m ", self.theme.dim()),
        ])
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 12 {
            return;
        }

        let background = self.style.background();
        let fallback = match self.style {
            NavStyle::Solid => self.theme.nav_solid,
            NavStyle::Translucent => Color::Reset,
        };

        let bar = Rect::new(area.x, area.y, area.width, 1);
        for x in bar.left()..bar.right() {
            let cell = &mut buf[(x, bar.y)];
            let fg = veil(cell.fg, background, fallback);
            let bg = veil(cell.bg, background, fallback);
            cell.set_fg(fg).set_bg(bg);
        }

        if self.style.has_shadow() && area.height > 1 {
            let y = bar.y + 1;
            for x in bar.left()..bar.right() {
                let cell = &mut buf[(x, y)];
                let fg = veil(cell.fg, SHADOW, cell.fg);
                let bg = veil(cell.bg, SHADOW, cell.bg);
                cell.set_fg(fg).set_bg(bg);
            }
        }

        let logo = Line::from(vec![
            Span::styled(" ◆ ", self.theme.border_active()),
            Span::styled("Trovul", self.theme.title()),
        ]);
        buf.set_line(bar.x, bar.y, &logo, bar.width);

        let right = if self.compact {
            self.menu_button()
        } else {
            self.links()
        };
        let width = right.width() as u16;
        let logo_width = logo.width() as u16;
        if width + logo_width < bar.width {
            buf.set_line(bar.right() - width, bar.y, &right, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::NIGHT;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn backdrop(area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)]
                    .set_char('▀')
                    .set_fg(Color::Rgb(200, 200, 200))
                    .set_bg(Color::Rgb(100, 100, 100));
            }
        }
        buf
    }

    #[test]
    fn test_links_and_current() {
        let area = Rect::new(0, 0, 100, 2);
        let mut buf = backdrop(area);
        NavBar::new(&NIGHT)
            .current(Section::Pricing)
            .render(area, &mut buf);

        let text = row_text(&buf, 0);
        assert!(text.contains("Trovul"));
        assert!(text.contains("4 Preços"));

        let start = text.chars().position(|c| c == 'P').unwrap() as u16;
        assert_eq!(buf[(start, 0)].bg, NIGHT.highlight);
    }

    #[test]
    fn test_compact_shows_menu_button() {
        let area = Rect::new(0, 0, 50, 2);
        let mut buf = backdrop(area);
        NavBar::new(&NIGHT).compact(true, false).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains('☰'));

        let mut buf = backdrop(area);
        NavBar::new(&NIGHT).compact(true, true).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains('✕'));
    }

    #[test]
    fn test_solid_bar_darker_with_shadow() {
        let area = Rect::new(0, 0, 100, 3);

        let mut translucent = backdrop(area);
        NavBar::new(&NIGHT).render(area, &mut translucent);
        let mut solid = backdrop(area);
        NavBar::new(&NIGHT)
            .style(NavStyle::Solid)
            .render(area, &mut solid);

        let shade = |buf: &Buffer, y: u16| match buf[(99, y)].bg {
            Color::Rgb(r, _, _) => r,
            _ => 255,
        };
        assert!(shade(&solid, 0) < shade(&translucent, 0));
        assert!(shade(&translucent, 0) < 100);

        // Shadow only under the solid bar
        assert_eq!(shade(&translucent, 1), 100);
        assert!(shade(&solid, 1) < 100);
        assert_eq!(shade(&solid, 2), 100);
    }
}
