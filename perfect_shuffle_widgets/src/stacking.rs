use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use perfect_shuffle_core::Pile;

use crate::piles::pile_color;
use crate::theme::Theme;

/// Gather order once every pile is dealt: the right pile ends on top, the
/// left pile on the bottom.
pub const STACKING_STEPS: [(Pile, &str); 3] = [
    (Pile::Right, "Pick up the right pile"),
    (Pile::Center, "Put the center pile under it"),
    (Pile::Left, "Put the left pile at the very bottom"),
];

pub struct StackingWidget;

impl Widget for StackingWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::styled(
                "Stack the three piles",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
        ];

        for (i, (pile, text)) in STACKING_STEPS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    Style::default()
                        .fg(Theme::BG)
                        .bg(pile_color(*pile))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {text}"), Style::default().fg(Theme::BRIGHT_TEXT)),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::styled(
            "Right on top, center in the middle, left at the bottom",
            Style::default().fg(Theme::MUTED_TEXT),
        ));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "tap to finish",
            Style::default().fg(Theme::DIM_TEXT),
        ));

        let height = lines.len() as u16;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let inner = Rect::new(area.x, y, area.width, height.min(area.height));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
