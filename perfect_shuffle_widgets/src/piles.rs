use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use perfect_shuffle_core::{Pile, PilePositions};

use crate::digits::{BigNumberWidget, DIGIT_HEIGHT};
use crate::theme::Theme;

pub fn pile_color(pile: Pile) -> Color {
    match pile {
        Pile::Left => Theme::LEFT_PILE,
        Pile::Center => Theme::CENTER_PILE,
        Pile::Right => Theme::RIGHT_PILE,
    }
}

/// Three side-by-side pile columns for one round.
/// A pile with position `0` gets a check mark instead of a number.
pub struct PilesWidget {
    pub positions: PilePositions,
    pub round: usize,
    pub total_rounds: usize,
}

impl PilesWidget {
    pub fn new(positions: PilePositions) -> Self {
        Self {
            positions,
            round: 0,
            total_rounds: 0,
        }
    }

    pub fn round(mut self, round: usize, total_rounds: usize) -> Self {
        self.round = round;
        self.total_rounds = total_rounds;
        self
    }
}

impl Widget for PilesWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        if self.total_rounds > 0 {
            Paragraph::new(Line::styled(
                format!(
                    "Round {} of {}",
                    (self.round + 1).min(self.total_rounds),
                    self.total_rounds
                ),
                Style::default().fg(Theme::MUTED_TEXT),
            ))
            .alignment(Alignment::Center)
            .render(rows[0], buf);
        }

        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[2]);

        for (pile, column) in Pile::ALL.into_iter().zip(columns.iter()) {
            render_pile(pile, self.positions.get(pile), *column, buf);
        }

        Paragraph::new(Line::styled(
            "tap to continue",
            Style::default().fg(Theme::DIM_TEXT),
        ))
        .alignment(Alignment::Center)
        .render(rows[3], buf);
    }
}

fn render_pile(pile: Pile, position: usize, area: Rect, buf: &mut Buffer) {
    let color = pile_color(pile);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Line::styled(
            format!(" {} ", pile.name()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    block.render(area, buf);

    let rows = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(DIGIT_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    if position == 0 {
        Paragraph::new(Line::styled(
            "\u{2714}",
            Style::default().fg(Theme::DONE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(rows[2], buf);
        return;
    }

    Paragraph::new(Line::styled("from the top", Style::default().fg(Theme::MUTED_TEXT)))
        .alignment(Alignment::Center)
        .render(rows[1], buf);
    BigNumberWidget::new(position)
        .style(
            Style::default()
                .fg(Theme::POSITION)
                .add_modifier(Modifier::BOLD),
        )
        .render(rows[2], buf);
    Paragraph::new(Line::styled(
        format!("card #{position}"),
        Style::default().fg(color),
    ))
    .alignment(Alignment::Center)
    .render(rows[3], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::buffer_text;

    #[test]
    fn test_renders_every_pile() {
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        let positions = PilePositions {
            left: 1,
            center: 4,
            right: 7,
        };
        PilesWidget::new(positions).round(0, 3).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Left"));
        assert!(text.contains("Center"));
        assert!(text.contains("Right"));
        assert!(text.contains("card #4"));
        assert!(text.contains("Round 1 of 3"));
    }

    #[test]
    fn test_finished_pile_shows_check() {
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        let positions = PilePositions {
            left: 1,
            center: 0,
            right: 0,
        };
        PilesWidget::new(positions).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert_eq!(text.matches('\u{2714}').count(), 2);
        assert!(text.contains("card #1"));
    }
}
