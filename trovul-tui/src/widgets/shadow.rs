//! Offset shadow behind a tilted card

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use trovul_page::Tilt;

/// Degrees of tilt before the shadow shifts
const SHADOW_THRESHOLD: f32 = 0.5;

/// Shadow offset opposite the side the pointer presses down
pub(crate) fn shadow_offset(tilt: Tilt) -> (i32, i32) {
    let axis = |degrees: f32| {
        if degrees > SHADOW_THRESHOLD {
            1
        } else if degrees < -SHADOW_THRESHOLD {
            -1
        } else {
            0
        }
    };
    (axis(tilt.rotate_y), -axis(tilt.rotate_x))
}

/// Shade the cells the card would cover if shifted by its shadow offset
pub(crate) fn render_tilt_shadow(card: Rect, tilt: Tilt, style: Style, buf: &mut Buffer) {
    let (dx, dy) = shadow_offset(tilt);
    if dx == 0 && dy == 0 {
        return;
    }

    let area = buf.area;
    for row in 0..card.height {
        for col in 0..card.width {
            let x = card.x as i32 + col as i32 + dx;
            let y = card.y as i32 + row as i32 + dy;
            if x < area.left() as i32
                || y < area.top() as i32
                || x >= area.right() as i32
                || y >= area.bottom() as i32
            {
                continue;
            }
            buf[(x as u16, y as u16)].set_char('░').set_style(style);
        }
    }
}

/// Blank a card's interior so a shadow never shows through it
pub(crate) fn clear_inner(inner: Rect, buf: &mut Buffer) {
    let inner = inner.intersection(buf.area);
    for y in inner.top()..inner.bottom() {
        for x in inner.left()..inner.right() {
            buf[(x, y)].set_char(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_direction() {
        let pointer_left_below = Tilt {
            rotate_x: 2.0,
            rotate_y: 1.5,
        };
        assert_eq!(shadow_offset(pointer_left_below), (1, -1));
        assert_eq!(shadow_offset(Tilt::default()), (0, 0));
    }

    #[test]
    fn test_shadow_clipped_to_buffer() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 4));
        let tilt = Tilt {
            rotate_x: -2.0,
            rotate_y: -2.0,
        };
        render_tilt_shadow(Rect::new(0, 0, 6, 4), tilt, Style::default(), &mut buf);
        // Shifted left and down, the overflow is dropped
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(0, 1)].symbol(), "░");
        assert_eq!(buf[(4, 3)].symbol(), "░");
        assert_eq!(buf[(5, 1)].symbol(), " ");
    }
}
