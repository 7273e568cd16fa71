pub mod complete;
pub mod home;
pub mod shuffle;
pub mod stacking;
pub mod triple_shuffle;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

use perfect_shuffle_core::{DealSession, Progress};
use perfect_shuffle_widgets::popup::PopupWidget;
use perfect_shuffle_widgets::theme::Theme;

use crate::app::ScreenAction;

/// Trait for app screens
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, session: &Option<DealSession>);
    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction>;

    fn handle_mouse(&mut self, _mouse: MouseEvent) -> Option<ScreenAction> {
        None
    }
}

pub(crate) fn is_tap(mouse: &MouseEvent) -> bool {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
}

/// Keys shared by both dealing screens. `confirming` is the open
/// "stop shuffling?" prompt, which swallows every other key.
pub(crate) fn dealing_key(confirming: &mut bool, key: KeyEvent) -> Option<ScreenAction> {
    if *confirming {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                *confirming = false;
                return Some(ScreenAction::Interrupt);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => *confirming = false,
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(ScreenAction::Advance),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ScreenAction::Restart),
        KeyCode::Esc | KeyCode::Char('q') => {
            *confirming = true;
            None
        }
        _ => None,
    }
}

pub(crate) fn dealing_mouse(confirming: bool, mouse: MouseEvent) -> Option<ScreenAction> {
    if !confirming && is_tap(&mouse) {
        Some(ScreenAction::Advance)
    } else {
        None
    }
}

pub(crate) fn render_interrupt_prompt(frame: &mut Frame, progress: Progress) {
    let popup = PopupWidget::new("Stop shuffling?")
        .line(
            format!("{} of {} cards placed", progress.current, progress.total),
            Style::default().fg(Theme::BRIGHT_TEXT),
        )
        .line("Progress will be lost.", Style::default().fg(Theme::MUTED_TEXT))
        .line(String::new(), Style::default())
        .line(
            "[y] Stop  [n] Keep going",
            Style::default()
                .fg(Theme::GOLD)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(popup, frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_prompt_swallows_advance() {
        let mut confirming = false;
        assert!(matches!(
            dealing_key(&mut confirming, key(KeyCode::Enter)),
            Some(ScreenAction::Advance)
        ));
        assert!(dealing_key(&mut confirming, key(KeyCode::Esc)).is_none());
        assert!(confirming);
        assert!(dealing_key(&mut confirming, key(KeyCode::Enter)).is_none());
        assert!(dealing_key(&mut confirming, key(KeyCode::Char('n'))).is_none());
        assert!(!confirming);
    }

    #[test]
    fn test_prompt_confirms_interrupt() {
        let mut confirming = true;
        assert!(matches!(
            dealing_key(&mut confirming, key(KeyCode::Char('y'))),
            Some(ScreenAction::Interrupt)
        ));
        assert!(!confirming);
    }
}
