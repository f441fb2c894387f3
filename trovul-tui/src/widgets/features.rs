//! Features section - three feature cards

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const FEATURES: [(&str, &str); 3] = [
    (
        "▲ Automação",
        "Regras simples disparam tarefas, lembretes e relatórios sem ninguém precisar lembrar.",
    ),
    (
        "◆ Projetos",
        "Quadros, listas e linhas do tempo sobre os mesmos dados, sempre em sincronia.",
    ),
    (
        "● Colaboração",
        "Comentários, menções e revisões no lugar onde o trabalho acontece.",
    ),
];

/// Widget for the feature cards
pub struct FeaturesWidget<'a> {
    theme: &'a Theme,
}

impl<'a> FeaturesWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for FeaturesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 30 || area.height < 4 {
            return;
        }

        let [title_area, cards_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        Line::from(Span::styled("  Recursos", self.theme.title())).render(title_area, buf);

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .horizontal_margin(1)
            .spacing(1)
            .split(cards_area);

        for ((title, body), card) in FEATURES.iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title(Span::styled(format!(" {title} "), self.theme.title()));

            Paragraph::new(Line::from(Span::styled(*body, self.theme.normal())))
                .wrap(Wrap { trim: true })
                .block(block)
                .render(*card, buf);
        }
    }
}
