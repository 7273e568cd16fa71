use std::rc::Rc;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use perfect_shuffle_core::card_count::QUICK_SELECT_OPTIONS;
use perfect_shuffle_core::DealMode;

use crate::digits::{BigNumberWidget, DIGIT_HEIGHT};
use crate::theme::Theme;

/// Rows the selector needs to draw everything
pub const SELECTOR_HEIGHT: u16 = DIGIT_HEIGHT + 2 + 1 + 3 + 1 + 3 + 1 + 3;

/// Which control a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorHit {
    Decrement,
    Increment,
    Quick(u32),
    ToggleMode,
    Start,
}

/// Card-count picker: -/+ around a big number, quick picks, the deal mode
/// and the start button.
pub struct CountSelectorWidget {
    pub cards: u32,
    pub mode: DealMode,
}

struct SelectorRects {
    decrement: Rect,
    count: Rect,
    increment: Rect,
    quick: Rc<[Rect]>,
    mode: Rect,
    start: Rect,
}

impl CountSelectorWidget {
    pub fn new(cards: u32, mode: DealMode) -> Self {
        Self { cards, mode }
    }

    fn rects(area: Rect) -> SelectorRects {
        let rows = Layout::vertical([
            Constraint::Length(DIGIT_HEIGHT + 2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

        let counter = Layout::horizontal([
            Constraint::Length(7),
            Constraint::Min(0),
            Constraint::Length(7),
        ])
        .split(rows[0]);

        let quick = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[2]);

        SelectorRects {
            decrement: button_row(counter[0]),
            count: counter[1],
            increment: button_row(counter[2]),
            quick,
            mode: rows[4],
            start: rows[6],
        }
    }

    /// Map a click at (col, row) to a control
    pub fn hit_test(area: Rect, col: u16, row: u16) -> Option<SelectorHit> {
        let rects = Self::rects(area);
        if contains(rects.decrement, col, row) {
            return Some(SelectorHit::Decrement);
        }
        if contains(rects.increment, col, row) {
            return Some(SelectorHit::Increment);
        }
        for (rect, cards) in rects.quick.iter().zip(QUICK_SELECT_OPTIONS) {
            if contains(*rect, col, row) {
                return Some(SelectorHit::Quick(cards));
            }
        }
        if contains(rects.mode, col, row) {
            return Some(SelectorHit::ToggleMode);
        }
        if contains(rects.start, col, row) {
            return Some(SelectorHit::Start);
        }
        None
    }
}

/// Vertically center a 3-row button inside a taller slot
fn button_row(area: Rect) -> Rect {
    let y = area.y + area.height.saturating_sub(3) / 2;
    Rect::new(area.x, y, area.width, area.height.min(3))
}

fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.right() && row >= rect.y && row < rect.bottom()
}

fn render_button(label: &str, area: Rect, buf: &mut Buffer, active: bool) {
    let color = if active {
        Theme::BUTTON_ACTIVE
    } else {
        Theme::BUTTON
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    Paragraph::new(Line::styled(
        label.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block)
    .render(area, buf);
}

impl Widget for CountSelectorWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rects = Self::rects(area);

        render_button("-", rects.decrement, buf, false);
        render_button("+", rects.increment, buf, false);
        BigNumberWidget::new(self.cards as usize)
            .style(
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            )
            .render(rects.count, buf);

        for (rect, cards) in rects.quick.iter().zip(QUICK_SELECT_OPTIONS) {
            render_button(&cards.to_string(), *rect, buf, cards == self.cards);
        }

        let mode = match self.mode {
            DealMode::Single => "Mode: one pile",
            DealMode::Triple => "Mode: three piles",
        };
        render_button(mode, rects.mode, buf, false);
        render_button("Start", rects.start, buf, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::buffer_text;

    fn area() -> Rect {
        Rect::new(0, 0, 36, SELECTOR_HEIGHT)
    }

    #[test]
    fn test_hit_test_finds_each_control() {
        let area = area();
        // counter row spans 0..7, buttons centered at rows 2..5
        assert_eq!(
            CountSelectorWidget::hit_test(area, 2, 3),
            Some(SelectorHit::Decrement)
        );
        assert_eq!(
            CountSelectorWidget::hit_test(area, 33, 3),
            Some(SelectorHit::Increment)
        );
        assert_eq!(CountSelectorWidget::hit_test(area, 18, 3), None);
        assert_eq!(
            CountSelectorWidget::hit_test(area, 1, 9),
            Some(SelectorHit::Quick(40))
        );
        assert_eq!(
            CountSelectorWidget::hit_test(area, 34, 9),
            Some(SelectorHit::Quick(99))
        );
        assert_eq!(
            CountSelectorWidget::hit_test(area, 10, 13),
            Some(SelectorHit::ToggleMode)
        );
        assert_eq!(
            CountSelectorWidget::hit_test(area, 10, 17),
            Some(SelectorHit::Start)
        );
        assert_eq!(CountSelectorWidget::hit_test(area, 10, 40), None);
    }

    #[test]
    fn test_renders_mode_and_quick_picks() {
        let area = area();
        let mut buf = Buffer::empty(area);
        CountSelectorWidget::new(60, DealMode::Triple).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("three piles"));
        assert!(text.contains("40"));
        assert!(text.contains("99"));
        assert!(text.contains("Start"));
    }
}
