use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use perfect_shuffle_core::DealSession;
use perfect_shuffle_widgets::key_hints::KeyHintsWidget;
use perfect_shuffle_widgets::stacking::StackingWidget;

use crate::app::ScreenAction;
use crate::screens::{is_tap, Screen};

/// Restack instructions shown after the last three-pile round
pub struct StackingScreen;

impl Screen for StackingScreen {
    fn render(&mut self, frame: &mut Frame, _session: &Option<DealSession>) {
        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(2)])
            .split(frame.area());
        frame.render_widget(StackingWidget, chunks[0]);
        frame.render_widget(KeyHintsWidget::new(&[("Enter/click", "Done")]), chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(ScreenAction::FinishStacking),
            KeyCode::Esc => Some(ScreenAction::BackToHome),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ScreenAction> {
        is_tap(&mouse).then_some(ScreenAction::FinishStacking)
    }
}
