//! Status bar widget - focus indicator, messages and key hints

use crate::app::{Focus, MessageType};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Widget for displaying the bottom status line
pub struct StatusBarWidget<'a> {
    focus: Focus,
    message: Option<&'a str>,
    message_type: MessageType,
    theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(focus: Focus, theme: &'a Theme) -> Self {
        Self {
            focus,
            message: None,
            message_type: MessageType::Info,
            theme,
        }
    }

    pub fn message(mut self, msg: Option<&'a str>, msg_type: MessageType) -> Self {
        self.message = msg;
        self.message_type = msg_type;
        self
    }

    fn focus_string(&self) -> (&'static str, Style) {
        match self.focus {
            Focus::Page => ("PÁGINA", self.theme.highlight()),
            Focus::Email => ("E-MAIL", Style::default().fg(self.theme.accent)),
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let chunks = Layout::horizontal([
            Constraint::Length(10), // Focus indicator
            Constraint::Min(20),    // Message area
            Constraint::Length(30), // Key hints
        ])
        .split(area);

        let (focus_text, focus_style) = self.focus_string();
        let focus_line = Line::from(vec![
            Span::raw("["),
            Span::styled(focus_text, focus_style),
            Span::raw("]"),
        ]);
        Paragraph::new(focus_line).render(chunks[0], buf);

        let content = match self.message {
            Some(msg) => {
                let msg_style = match self.message_type {
                    MessageType::Info => self.theme.dim(),
                    MessageType::Success => self.theme.success(),
                    MessageType::Error => self.theme.danger(),
                };
                Line::from(Span::styled(msg, msg_style))
            }
            None => Line::from(Span::styled(
                "Tab/1-5 seções  ↑↓ rolar  m menu",
                self.theme.dim(),
            )),
        };
        Paragraph::new(content).render(chunks[1], buf);

        let help = match self.focus {
            Focus::Page => "Enter:waitlist  q:sair",
            Focus::Email => "Enter:enviar  Esc:voltar",
        };
        Paragraph::new(Line::from(Span::styled(help, self.theme.dim()))).render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::NIGHT;

    fn row_text(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_focus_and_hints() {
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Focus::Email, &NIGHT).render(area, &mut buf);
        let text = row_text(&buf);
        assert!(text.starts_with("[E-MAIL]"));
        assert!(text.contains("Esc:voltar"));
    }

    #[test]
    fn test_error_message_colored() {
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(Focus::Page, &NIGHT)
            .message(Some("Falhou"), MessageType::Error)
            .render(area, &mut buf);
        assert!(row_text(&buf).contains("Falhou"));
        assert_eq!(buf[(10, 0)].fg, NIGHT.danger);
    }
}
