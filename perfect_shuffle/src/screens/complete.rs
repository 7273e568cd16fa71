use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use perfect_shuffle_core::{DealMode, DealSession};
use perfect_shuffle_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct CompleteScreen;

impl Screen for CompleteScreen {
    fn render(&mut self, frame: &mut Frame, session: &Option<DealSession>) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);

        let mut lines = vec![
            Line::styled(
                "DONE!",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(
                "Your deck is shuffled",
                Style::default().fg(Theme::BRIGHT_TEXT),
            ),
        ];

        if let Some(session) = session {
            let how = match session.mode() {
                DealMode::Single => "one pile",
                DealMode::Triple => "three piles",
            };
            let mut summary = format!("{} cards, {how}", session.cards());
            if let Some(duration) = session.duration() {
                let secs = duration.as_secs();
                summary.push_str(&format!(", {}:{:02}", secs / 60, secs % 60));
            }
            lines.push(Line::styled(summary, Style::default().fg(Theme::MUTED_TEXT)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "[Enter] Home  [q] Quit",
            Style::default().fg(Theme::GOLD),
        ));

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[1],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => Some(ScreenAction::BackToHome),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(ScreenAction::Quit),
            _ => None,
        }
    }
}
