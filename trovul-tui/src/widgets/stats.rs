//! Social proof section - counters that count up when revealed

use crate::app::STAT_LABELS;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use trovul_page::Counter;

/// Widget for the stat counters
pub struct StatsWidget<'a> {
    counters: &'a [Counter],
    theme: &'a Theme,
}

impl<'a> StatsWidget<'a> {
    pub fn new(counters: &'a [Counter], theme: &'a Theme) -> Self {
        Self { counters, theme }
    }
}

impl Widget for StatsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 30 || area.height < 4 {
            return;
        }

        let [title_area, _, figures_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Line::from(Span::styled("  Números", self.theme.title())).render(title_area, buf);

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(figures_area);

        for ((counter, (_, caption)), column) in self
            .counters
            .iter()
            .zip(STAT_LABELS.iter())
            .zip(columns.iter())
        {
            let lines = vec![
                Line::from(Span::styled(counter.display(), self.theme.figure())),
                Line::from(Span::styled(*caption, self.theme.dim())),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(*column, buf);
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

    #[test]
    fn test_shows_labels_before_reveal() {
        let counters: Vec<Counter> = STAT_LABELS
            .iter()
            .filter_map(|(label, _)| Counter::parse(label))
            .collect();
        let area = Rect::new(0, 0, 90, 7);
        let mut buf = Buffer::empty(area);
        StatsWidget::new(&counters, &NIGHT).render(area, &mut buf);

        let figures = row_text(&buf, 2);
        assert!(figures.contains("10K+"));
        assert!(figures.contains("500+"));
    }

    #[test]
    fn test_shows_count_after_start() {
        let mut counter = Counter::parse("500+").unwrap();
        counter.start();
        counter.tick();
        let counters = vec![counter];
        let area = Rect::new(0, 0, 90, 7);
        let mut buf = Buffer::empty(area);
        StatsWidget::new(&counters, &NIGHT).render(area, &mut buf);

        assert!(row_text(&buf, 2).contains("4+"));
    }
}
