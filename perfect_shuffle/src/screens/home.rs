use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use perfect_shuffle_core::card_count::QUICK_SELECT_OPTIONS;
use perfect_shuffle_core::{CardSetup, DealSession};
use perfect_shuffle_widgets::count_selector::{CountSelectorWidget, SelectorHit, SELECTOR_HEIGHT};
use perfect_shuffle_widgets::key_hints::KeyHintsWidget;
use perfect_shuffle_widgets::popup::centered_rect;
use perfect_shuffle_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::{is_tap, Screen};

const SELECTOR_WIDTH: u16 = 40;

pub struct HomeScreen {
    pub setup: CardSetup,
    selector_area: Rect,
}

impl HomeScreen {
    pub fn new(setup: CardSetup) -> Self {
        Self {
            setup,
            selector_area: Rect::default(),
        }
    }

    fn apply(&mut self, hit: SelectorHit) -> Option<ScreenAction> {
        match hit {
            SelectorHit::Decrement => self.setup.decrement(),
            SelectorHit::Increment => self.setup.increment(),
            SelectorHit::Quick(cards) => self.setup.quick_select(cards),
            SelectorHit::ToggleMode => self.setup.toggle_mode(),
            SelectorHit::Start => return Some(ScreenAction::StartShuffle),
        }
        None
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, _session: &Option<DealSession>) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(SELECTOR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

        let title = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("\u{2660} \u{2665}  ", Style::default().fg(Theme::MUTED_TEXT)),
                Span::styled(
                    "P E R F E C T   S H U F F L E",
                    Style::default()
                        .fg(Theme::GOLD)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  \u{2666} \u{2663}", Style::default().fg(Theme::MUTED_TEXT)),
            ]),
            Line::from(""),
            Line::styled(
                "Pick how many cards you hold, then start",
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        self.selector_area = centered_rect(SELECTOR_WIDTH, SELECTOR_HEIGHT, chunks[3]);
        frame.render_widget(
            CountSelectorWidget::new(self.setup.cards(), self.setup.mode()),
            self.selector_area,
        );

        frame.render_widget(
            KeyHintsWidget::new(&[
                ("\u{2190}\u{2192}", "Count"),
                ("1-3", "Quick pick"),
                ("Tab", "Mode"),
                ("Enter", "Start"),
                ("q", "Quit"),
            ]),
            chunks[5],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Left | KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('h') => {
                self.setup.decrement();
            }
            KeyCode::Right
            | KeyCode::Up
            | KeyCode::Char('+')
            | KeyCode::Char('=')
            | KeyCode::Char('l') => {
                self.setup.increment();
            }
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                self.setup.quick_select(QUICK_SELECT_OPTIONS[idx]);
            }
            KeyCode::Tab | KeyCode::Char('m') => self.setup.toggle_mode(),
            KeyCode::Enter | KeyCode::Char(' ') => return Some(ScreenAction::StartShuffle),
            KeyCode::Char('q') | KeyCode::Esc => return Some(ScreenAction::Quit),
            _ => {}
        }
        None
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ScreenAction> {
        if !is_tap(&mouse) {
            return None;
        }
        let hit = CountSelectorWidget::hit_test(self.selector_area, mouse.column, mouse.row)?;
        self.apply(hit)
    }
}
