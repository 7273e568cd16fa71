use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use perfect_shuffle_core::{DealSession, Dealer};
use perfect_shuffle_widgets::key_hints::KeyHintsWidget;
use perfect_shuffle_widgets::piles::PilesWidget;
use perfect_shuffle_widgets::popup::centered_rect;
use perfect_shuffle_widgets::progress::ProgressWidget;

use crate::app::ScreenAction;
use crate::screens::{dealing_key, dealing_mouse, render_interrupt_prompt, Screen};

/// Three-pile dealing, one round per action
pub struct TripleShuffleScreen {
    pub confirming: bool,
}

impl TripleShuffleScreen {
    pub fn new() -> Self {
        Self { confirming: false }
    }

    pub fn reset(&mut self) {
        self.confirming = false;
    }
}

impl Screen for TripleShuffleScreen {
    fn render(&mut self, frame: &mut Frame, session: &Option<DealSession>) {
        let Some(session) = session else { return };
        let Dealer::Triple(tracker) = session.dealer() else {
            return;
        };
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        let progress = tracker.progress();
        frame.render_widget(
            ProgressWidget::new(progress.current, progress.total),
            centered_rect(30, 2, chunks[1]),
        );

        let piles = PilesWidget::new(tracker.current_card_positions())
            .round(tracker.current_round(), tracker.total_rounds());
        frame.render_widget(piles, centered_rect(72, chunks[3].height, chunks[3]));

        frame.render_widget(
            KeyHintsWidget::new(&[
                ("Enter/click", "Round placed"),
                ("r", "Restart"),
                ("Esc", "Stop"),
            ]),
            chunks[4],
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
