use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Footer line of `[key] action` pairs
pub struct KeyHintsWidget<'a> {
    pub hints: &'a [(&'a str, &'a str)],
}

impl<'a> KeyHintsWidget<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }
}

impl Widget for KeyHintsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.hints.len() * 4);
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", Style::default().fg(Theme::DIM_TEXT)));
            spans.push(Span::styled(*key, Style::default().fg(Theme::GOLD)));
            spans.push(Span::styled(
                format!("] {action}"),
                Style::default().fg(Theme::DIM_TEXT),
            ));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::row_text;

    #[test]
    fn test_hints_are_joined() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        KeyHintsWidget::new(&[("Enter", "Next"), ("Esc", "Stop")]).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0).trim(), "[Enter] Next  [Esc] Stop");
    }
}
