use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use perfect_shuffle_core::DealSession;
use perfect_shuffle_widgets::key_hints::KeyHintsWidget;
use perfect_shuffle_widgets::popup::centered_rect;
use perfect_shuffle_widgets::position::PositionWidget;
use perfect_shuffle_widgets::progress::ProgressWidget;

use crate::app::ScreenAction;
use crate::screens::{dealing_key, dealing_mouse, render_interrupt_prompt, Screen};

/// Single-pile dealing
pub struct ShuffleScreen {
    pub confirming: bool,
}

impl ShuffleScreen {
    pub fn new() -> Self {
        Self { confirming: false }
    }

    pub fn reset(&mut self) {
        self.confirming = false;
    }
}

impl Screen for ShuffleScreen {
    fn render(&mut self, frame: &mut Frame, session: &Option<DealSession>) {
        let Some(session) = session else { return };
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        // "card k of n", counting the one in hand
        let progress = session.progress();
        frame.render_widget(
            ProgressWidget::new(progress.ordinal(), progress.total),
            centered_rect(30, 2, chunks[1]),
        );

        let position = session.card_position().unwrap_or(0);
        frame.render_widget(PositionWidget::new(position), chunks[2]);

        frame.render_widget(
            KeyHintsWidget::new(&[
                ("Enter/click", "Placed it"),
                ("r", "Restart"),
                ("Esc", "Stop"),
            ]),
            chunks[3],
        );

        if self.confirming {
            render_interrupt_prompt(frame, progress);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        dealing_key(&mut self.confirming, key)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ScreenAction> {
        dealing_mouse(self.confirming, mouse)
    }
}
