use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// "X / N" counter with a thin bar underneath
pub struct ProgressWidget {
    pub current: usize,
    pub total: usize,
}

impl ProgressWidget {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }

    fn filled(&self, width: u16) -> u16 {
        if self.total == 0 {
            return width;
        }
        let current = self.current.min(self.total);
        (current * width as usize / self.total) as u16
    }
}

impl Widget for ProgressWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let label = self.label();
        let line = Line::from(vec![Span::styled(
            label.clone(),
            Style::default()
                .fg(Theme::BRIGHT_TEXT)
                .add_modifier(Modifier::BOLD),
        )]);
        let x = area.x + area.width.saturating_sub(label.len() as u16) / 2;
        buf.set_line(x, area.y, &line, area.width);

        if area.height < 2 {
            return;
        }

        let filled = self.filled(area.width);
        let y = area.y + 1;
        for dx in 0..area.width {
            let (symbol, color) = if dx < filled {
                ("\u{2501}", Theme::GOLD) // ━
            } else {
                ("\u{2500}", Theme::DIM_TEXT) // ─
            };
            if let Some(cell) = buf.cell_mut((area.x + dx, y)) {
                cell.set_symbol(symbol);
                cell.set_fg(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::row_text;

    #[test]
    fn test_label_format() {
        assert_eq!(ProgressWidget::new(5, 10).label(), "5 / 10");
        assert_eq!(ProgressWidget::new(99, 99).label(), "99 / 99");
    }

    #[test]
    fn test_bar_fills_proportionally() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        ProgressWidget::new(3, 6).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0).trim(), "3 / 6");
        assert_eq!(row_text(&buf, 1), "━━━━━─────");
    }

    #[test]
    fn test_empty_deck_counts_as_full() {
        assert_eq!(ProgressWidget::new(0, 0).filled(8), 8);
    }
}
