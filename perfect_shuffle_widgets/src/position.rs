use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::digits::{BigNumberWidget, DIGIT_HEIGHT};
use crate::theme::Theme;

/// Single-pile callout: which card, counted from the top of the hand,
/// goes down next.
pub struct PositionWidget {
    pub position: usize,
}

impl PositionWidget {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    pub fn caption(&self) -> String {
        format!("Place card #{} from the top", self.position)
    }
}

impl Widget for PositionWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(DIGIT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        if self.position == 0 {
            Paragraph::new(Line::styled(
                "All cards placed",
                Style::default().fg(Theme::DONE).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
            return;
        }

        BigNumberWidget::new(self.position)
            .style(
                Style::default()
                    .fg(Theme::POSITION)
                    .add_modifier(Modifier::BOLD),
            )
            .render(chunks[1], buf);

        Paragraph::new(Line::styled(
            self.caption(),
            Style::default()
                .fg(Theme::MUTED_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

        Paragraph::new(Line::styled(
            "tap to continue",
            Style::default().fg(Theme::DIM_TEXT),
        ))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);
    }
}
