//! Waitlist section - email input, submit button and footer

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use trovul_waitlist::WaitlistForm;

const PLACEHOLDER: &str = "seu@email.com";
const INPUT_WIDTH: u16 = 44;

/// Widget for the waitlist form
pub struct WaitlistWidget<'a> {
    form: &'a WaitlistForm,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> WaitlistWidget<'a> {
    pub fn new(form: &'a WaitlistForm, theme: &'a Theme) -> Self {
        Self {
            form,
            theme,
            focused: false,
        }
    }

    /// Whether typing goes into the email input
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn centered(area: Rect, y: u16, width: u16) -> Rect {
        let width = width.min(area.width);
        Rect::new(area.x + (area.width - width) / 2, y, width, 1)
    }

    fn input_line(&self) -> Line<'a> {
        let email = self.form.email();
        let mut spans = Vec::new();
        if email.is_empty() && !self.focused {
            spans.push(Span::styled(PLACEHOLDER, self.theme.dim()));
        } else {
            spans.push(Span::styled(email, self.theme.normal()));
        }
        if self.focused && self.form.is_submit_enabled() {
            spans.push(Span::styled("█", self.theme.border_active()));
        }
        Line::from(spans)
    }
}

impl Widget for WaitlistWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 24 || area.height < 8 {
            return;
        }

        let lines = [
            Line::from(Span::styled("Entre na waitlist", self.theme.title())),
            Line::from(Span::styled(
                "Seja avisado quando abrirmos as portas.",
                self.theme.dim(),
            )),
        ];
        for (offset, line) in lines.into_iter().enumerate() {
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .render(Rect::new(area.x, area.y + offset as u16, area.width, 1), buf);
        }

        let input = Rect {
            height: 3,
            ..Self::centered(area, area.y + 2, INPUT_WIDTH)
        };
        let border = if self.focused {
            self.theme.border_active()
        } else {
            self.theme.border()
        };
        Paragraph::new(self.input_line())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(Span::styled(" e-mail ", self.theme.dim())),
            )
            .render(input, buf);

        let label = format!(" {} ", self.form.button_label());
        let button_width = label.chars().count() as u16;
        let button = Self::centered(area, area.y + 5, button_width);
        Paragraph::new(Line::from(Span::styled(
            label,
            self.theme.button(self.form.state()),
        )))
        .render(button, buf);

        if let Some(hint) = self.form.hint() {
            Paragraph::new(Line::from(Span::styled(hint, self.theme.danger())))
                .alignment(Alignment::Center)
                .render(Rect::new(area.x, area.y + 6, area.width, 1), buf);
        }

        let footer = Line::from(Span::styled(
            "Trovul · feito para times que constroem",
            self.theme.dim(),
        ));
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, area.bottom() - 1, area.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::NIGHT;
    use trovul_waitlist::FormState;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(form: &WaitlistForm, focused: bool) -> Buffer {
        let area = Rect::new(0, 0, 80, 10);
        let mut buf = Buffer::empty(area);
        WaitlistWidget::new(form, &NIGHT)
            .focused(focused)
            .render(area, &mut buf);
        buf
    }

    #[test]
    fn test_placeholder_until_focused() {
        let form = WaitlistForm::new();
        assert!(row_text(&render(&form, false), 3).contains(PLACEHOLDER));

        let focused = row_text(&render(&form, true), 3);
        assert!(!focused.contains(PLACEHOLDER));
        assert!(focused.contains('█'));
    }

    #[test]
    fn test_button_follows_state() {
        let mut form = WaitlistForm::new();
        "ana@trovul.app".chars().for_each(|c| form.push_char(c));
        assert!(row_text(&render(&form, true), 5).contains("Entrar na lista"));

        form.begin_submit().unwrap();
        assert_eq!(form.state(), FormState::Sending);
        let buf = render(&form, true);
        assert!(row_text(&buf, 5).contains("Enviando..."));
        // No cursor while the request is in flight
        assert!(!row_text(&buf, 3).contains('█'));
    }

    #[test]
    fn test_hint_shown_for_invalid_email() {
        let mut form = WaitlistForm::new();
        "ana".chars().for_each(|c| form.push_char(c));
        assert!(form.begin_submit().is_err());
        assert!(row_text(&render(&form, true), 6).contains("e-mail válido"));
    }
}
