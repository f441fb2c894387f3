//! Pricing section - three plans, the middle one tilting under the pointer

use super::shadow::{clear_inner, render_tilt_shadow};
use crate::layout::pricing_cards;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use trovul_page::Tilt;

struct Plan {
    name: &'static str,
    price: &'static str,
    perks: [&'static str; 3],
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Grátis",
        price: "R$ 0",
        perks: ["3 projetos", "2 pessoas", "Automações básicas"],
    },
    Plan {
        name: "Pro",
        price: "R$ 29/mês",
        perks: ["Projetos ilimitados", "10 pessoas", "Automações avançadas"],
    },
    Plan {
        name: "Equipe",
        price: "R$ 79/mês",
        perks: ["Tudo do Pro", "Pessoas ilimitadas", "Suporte prioritário"],
    },
];

/// Widget for the pricing cards
pub struct PricingWidget<'a> {
    theme: &'a Theme,
    tilt: Option<Tilt>,
}

impl<'a> PricingWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme, tilt: None }
    }

    /// Tilt of the featured card, if hovered
    pub fn tilt(mut self, tilt: Option<Tilt>) -> Self {
        self.tilt = tilt;
        self
    }
}

impl Widget for PricingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 36 || area.height < 8 {
            return;
        }

        Line::from(Span::styled("  Preços", self.theme.title()))
            .render(Rect::new(area.x, area.y, area.width, 1), buf);

        let cards = pricing_cards(area);

        if let Some(tilt) = self.tilt {
            render_tilt_shadow(cards[1], tilt, self.theme.dim(), buf);
        }

        for (index, (plan, card)) in PLANS.iter().zip(cards.iter()).enumerate() {
            let featured = index == 1;
            let border = if featured {
                self.theme.border_active()
            } else {
                self.theme.border()
            };
            let border = match (featured, self.tilt) {
                (true, Some(_)) => border.add_modifier(Modifier::BOLD),
                _ => border,
            };

            let name = if featured {
                format!(" {} ★ ", plan.name)
            } else {
                format!(" {} ", plan.name)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(name, self.theme.title()));

            let mut lines = vec![
                Line::from(Span::styled(plan.price, self.theme.figure())),
                Line::from(""),
            ];
            lines.extend(
                plan.perks
                    .iter()
                    .map(|perk| Line::from(Span::styled(format!("✓ {perk}"), self.theme.normal()))),
            );

            clear_inner(block.inner(*card), buf);

            Paragraph::new(lines).block(block).render(*card, buf);
        }
    }
}
