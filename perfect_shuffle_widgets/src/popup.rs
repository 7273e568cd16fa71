use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget};

use crate::theme::Theme;

/// A centered dialog drawn over whatever is underneath
pub struct PopupWidget {
    pub title: String,
    pub lines: Vec<(String, Style)>,
    pub width: u16,
}

impl PopupWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            width: 44,
        }
    }

    pub fn line(mut self, text: impl Into<String>, style: Style) -> Self {
        self.lines.push((text.into(), style));
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }
}

impl Widget for PopupWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // border + padding on each side
        let height = self.lines.len() as u16 + 4;
        let popup_area = centered_rect(self.width, height, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Theme::WARNING))
            .style(Style::default().bg(Theme::PANEL_BG))
            .title(Line::from(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            )))
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1));

        let lines: Vec<Line> = self
            .lines
            .into_iter()
            .map(|(text, style)| Line::styled(text, style))
            .collect();

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(popup_area, buf);
    }
}

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::buffer_text;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }

    #[test]
    fn test_popup_draws_title_and_lines() {
        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);
        PopupWidget::new("Stop shuffling?")
            .line("Progress will be lost", Style::default())
            .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Stop shuffling?"));
        assert!(text.contains("Progress will be lost"));
    }
}
