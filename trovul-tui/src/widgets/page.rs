//! Scrolling page composited over the particle canvas
//!
//! Every section is rendered into an off-screen buffer as tall as the whole
//! page. The rows in view are then copied onto the screen, skipping blank
//! cells so the canvas underneath stays visible.

use crate::app::{AppState, Focus};
use crate::layout::Section;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use super::{FeaturesWidget, HeroWidget, PricingWidget, StatsWidget, WaitlistWidget};

/// Widget for the page content below the nav bar
pub struct PageWidget<'a> {
    state: &'a AppState,
}

impl<'a> PageWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_page(&self) -> Buffer {
        let state = self.state;
        let layout = &state.layout;
        let mut page = Buffer::empty(layout.page_area());

        HeroWidget::new(&state.theme)
            .parallax(state.parallax_rows())
            .mockup_tilt(state.mockup_tilt.tilt())
            .render(layout.section(Section::Hero), &mut page);
        FeaturesWidget::new(&state.theme).render(layout.section(Section::Features), &mut page);
        StatsWidget::new(&state.counters, &state.theme)
            .render(layout.section(Section::Proof), &mut page);
        PricingWidget::new(&state.theme)
            .tilt(state.featured_tilt.tilt())
            .render(layout.section(Section::Pricing), &mut page);
        WaitlistWidget::new(&state.form, &state.theme)
            .focused(state.focus == Focus::Email)
            .render(layout.section(Section::Waitlist), &mut page);

        page
    }
}

/// Copy `src` rows starting at `first_row` onto `area`, keeping blank cells transparent
fn blit_transparent(src: &Buffer, first_row: u16, area: Rect, buf: &mut Buffer) {
    let width = area.width.min(src.area.width);
    for row in 0..area.height {
        let src_y = first_row.saturating_add(row);
        if src_y >= src.area.bottom() {
            break;
        }
        for col in 0..width {
            let cell = &src[(src.area.x + col, src_y)];
            if cell.symbol() == " " && cell.bg == Color::Reset {
                continue;
            }

            let target = &mut buf[(area.x + col, area.y + row)];
            target.set_symbol(cell.symbol());
            if cell.fg != Color::Reset {
                target.set_fg(cell.fg);
            }
            if cell.bg != Color::Reset {
                target.set_bg(cell.bg);
            }
            target.modifier = cell.modifier;
        }
    }
}

impl Widget for PageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let page = self.render_page();
        blit_transparent(&page, self.state.scroll_rows(), area, buf);
    }
}
