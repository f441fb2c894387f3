//! Confetti overlay after a successful signup

use crate::layout::CELL_HEIGHT;
use crate::theme::{to_color, Theme};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use trovul_page::{ConfettiBurst, ConfettiShape};

/// Pieces fainter than this are not drawn
const MIN_OPACITY: f32 = 0.05;

pub struct ConfettiWidget<'a> {
    burst: &'a ConfettiBurst,
    theme: &'a Theme,
}

impl<'a> ConfettiWidget<'a> {
    pub fn new(burst: &'a ConfettiBurst, theme: &'a Theme) -> Self {
        Self { burst, theme }
    }
}

impl Widget for ConfettiWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let age = self.burst.age();
        let height = area.height as f32 * CELL_HEIGHT;

        for piece in self.burst.pieces() {
            let opacity = piece.opacity(age);
            if opacity < MIN_OPACITY {
                continue;
            }

            let y = piece.y(age, height);
            if y < 0.0 {
                continue;
            }
            let row = (y / CELL_HEIGHT) as u16;
            let col = (piece.x_percent / 100.0 * area.width as f32) as u16;
            if row >= area.height || col >= area.width {
                continue;
            }

            let symbol = match piece.shape {
                ConfettiShape::Round => '●',
                // Squares turn into diamonds halfway through each quarter turn
                ConfettiShape::Square if piece.rotation(age) % 90.0 < 45.0 => '■',
                ConfettiShape::Square => '◆',
            };
            let color = self.theme.canvas.blend(piece.color, opacity);

            buf[(area.x + col, area.y + row)]
                .set_char(symbol)
                .set_fg(to_color(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::NIGHT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn count_pieces(buf: &Buffer) -> usize {
        buf.content()
            .iter()
            .filter(|cell| matches!(cell.symbol(), "●" | "■" | "◆"))
            .count()
    }

    #[test]
    fn test_pieces_fall_into_view() {
        let mut burst = ConfettiBurst::new(&mut StdRng::seed_from_u64(9));
        let area = Rect::new(0, 0, 120, 40);

        let mut buf = Buffer::empty(area);
        ConfettiWidget::new(&burst, &NIGHT).render(area, &mut buf);
        assert_eq!(count_pieces(&buf), 0);

        burst.advance(Duration::from_millis(1000));
        let mut buf = Buffer::empty(area);
        ConfettiWidget::new(&burst, &NIGHT).render(area, &mut buf);
        assert!(count_pieces(&buf) > 0);
    }

    #[test]
    fn test_finished_burst_draws_nothing() {
        let mut burst = ConfettiBurst::new(&mut StdRng::seed_from_u64(9));
        burst.advance(Duration::from_secs(4));
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        ConfettiWidget::new(&burst, &NIGHT).render(area, &mut buf);
        assert_eq!(count_pieces(&buf), 0);
    }
}
