use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub const DIGIT_WIDTH: u16 = 3;
pub const DIGIT_HEIGHT: u16 = 5;
const DIGIT_GAP: u16 = 1;

const GLYPHS: [[&str; DIGIT_HEIGHT as usize]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" ██", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// A number drawn in 3x5 block digits, centered in its area.
/// Falls back to plain text when the area is too short.
pub struct BigNumberWidget {
    pub value: usize,
    pub style: Style,
}

impl BigNumberWidget {
    pub fn new(value: usize) -> Self {
        Self {
            value,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn width(&self) -> u16 {
        let n = self.value.to_string().len() as u16;
        n * DIGIT_WIDTH + (n - 1) * DIGIT_GAP
    }
}

impl Widget for BigNumberWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.value.to_string();
        let width = self.width();

        if area.height < DIGIT_HEIGHT || area.width < width {
            let x = area.x + area.width.saturating_sub(text.len() as u16) / 2;
            let y = area.y + area.height / 2;
            if area.height > 0 {
                buf.set_string(x, y, &text, self.style);
            }
            return;
        }

        let x0 = area.x + (area.width - width) / 2;
        let y0 = area.y + (area.height - DIGIT_HEIGHT) / 2;

        for (i, ch) in text.chars().enumerate() {
            let Some(d) = ch.to_digit(10) else { continue };
            let x = x0 + i as u16 * (DIGIT_WIDTH + DIGIT_GAP);
            for (row, line) in GLYPHS[d as usize].iter().enumerate() {
                buf.set_string(x, y0 + row as u16, line, self.style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::row_text;

    #[test]
    fn test_width() {
        assert_eq!(BigNumberWidget::new(7).width(), 3);
        assert_eq!(BigNumberWidget::new(42).width(), 7);
    }

    #[test]
    fn test_renders_block_digits() {
        let area = Rect::new(0, 0, 7, 5);
        let mut buf = Buffer::empty(area);
        BigNumberWidget::new(17).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), " ██ ███");
        assert_eq!(row_text(&buf, 4), "  █   █");
    }

    #[test]
    fn test_small_area_falls_back_to_text() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        BigNumberWidget::new(42).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0).trim(), "42");
    }
}
