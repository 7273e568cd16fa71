use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use rand::rngs::StdRng;
use ratatui::Frame;
use tachyonfx::Duration;
use tracing::{debug, warn};

use perfect_shuffle_core::{CardSetup, DealMode, DealSession, KeyValueStore};
use perfect_shuffle_widgets::background::{FeltWidget, ProgressFrameWidget};

use crate::effects::{self, FxManager};
use crate::screens::complete::CompleteScreen;
use crate::screens::home::HomeScreen;
use crate::screens::shuffle::ShuffleScreen;
use crate::screens::stacking::StackingScreen;
use crate::screens::triple_shuffle::TripleShuffleScreen;
use crate::screens::Screen;

/// Which screen is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Home,
    Shuffle,
    TripleShuffle,
    Stacking,
    Complete,
}

/// Main application state
pub struct App {
    pub phase: Phase,
    pub session: Option<DealSession>,
    pub tick: u64,
    pub fx: FxManager,
    store: Box<dyn KeyValueStore>,
    rng: StdRng,
    prev_phase: Option<Phase>,

    // Screens
    pub home: HomeScreen,
    pub shuffle: ShuffleScreen,
    pub triple_shuffle: TripleShuffleScreen,
    pub stacking: StackingScreen,
    pub complete: CompleteScreen,
}

impl App {
    pub fn new(setup: CardSetup, store: Box<dyn KeyValueStore>, rng: StdRng) -> Self {
        let mut fx = FxManager::default();
        fx.add_unique_effect("title_shimmer", effects::title_shimmer());

        Self {
            phase: Phase::Home,
            session: None,
            tick: 0,
            fx,
            store,
            rng,
            prev_phase: None,
            home: HomeScreen::new(setup),
            shuffle: ShuffleScreen::new(),
            triple_shuffle: TripleShuffleScreen::new(),
            stacking: StackingScreen,
            complete: CompleteScreen,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(FeltWidget::new(self.tick), area);
        frame.render_widget(ProgressFrameWidget::new(self.frame_progress()), area);

        match self.phase {
            Phase::Home => self.home.render(frame, &self.session),
            Phase::Shuffle => self.shuffle.render(frame, &self.session),
            Phase::TripleShuffle => self.triple_shuffle.render(frame, &self.session),
            Phase::Stacking => self.stacking.render(frame, &self.session),
            Phase::Complete => self.complete.render(frame, &self.session),
        }

        let tick_duration = Duration::from_millis(33); // ~30fps
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }

    /// How much of the border is lit
    fn frame_progress(&self) -> f64 {
        match (self.phase, &self.session) {
            (Phase::Home, _) | (_, None) => 0.0,
            (Phase::Stacking | Phase::Complete, _) => 1.0,
            (_, Some(session)) => session.progress().fraction(),
        }
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.process_action(Some(ScreenAction::Quit));
        }

        let action = match self.phase {
            Phase::Home => self.home.handle_key(key),
            Phase::Shuffle => self.shuffle.handle_key(key),
            Phase::TripleShuffle => self.triple_shuffle.handle_key(key),
            Phase::Stacking => self.stacking.handle_key(key),
            Phase::Complete => self.complete.handle_key(key),
        };

        self.process_action(action)
    }

    /// Handle mouse event. Returns true if should quit.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let action = match self.phase {
            Phase::Home => self.home.handle_mouse(mouse),
            Phase::Shuffle => self.shuffle.handle_mouse(mouse),
            Phase::TripleShuffle => self.triple_shuffle.handle_mouse(mouse),
            Phase::Stacking => self.stacking.handle_mouse(mouse),
            Phase::Complete => self.complete.handle_mouse(mouse),
        };

        self.process_action(action)
    }

    pub fn tick(&mut self) {
        self.tick += 1;

        if self.prev_phase != Some(self.phase) {
            self.fx
                .add_unique_effect("screen_transition", effects::screen_transition());

            if self.phase == Phase::Home {
                self.fx
                    .add_unique_effect("title_shimmer", effects::title_shimmer());
            } else {
                self.fx.cancel_unique_effect("title_shimmer");
            }
            if self.phase == Phase::Complete {
                self.fx
                    .add_unique_effect("celebration", effects::celebration_shimmer());
            }

            debug!(from = ?self.prev_phase, to = ?self.phase, "phase change");
            self.prev_phase = Some(self.phase);
        }
    }

    fn start_shuffle(&mut self) {
        let setup = &self.home.setup;
        if let Err(err) = setup.save(self.store.as_mut()) {
            warn!(error = %err, "could not save card setup");
        }

        let session = DealSession::start_random(setup.mode(), setup.count(), &mut self.rng);
        self.phase = match session.mode() {
            DealMode::Single => {
                self.shuffle.reset();
                Phase::Shuffle
            }
            DealMode::Triple => {
                self.triple_shuffle.reset();
                Phase::TripleShuffle
            }
        };
        self.session = Some(session);
    }

    fn advance(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        if session.is_complete() {
            return;
        }

        session.advance();
        self.fx
            .add_unique_effect("advance_flash", effects::advance_flash());

        if session.is_complete() {
            self.phase = match session.mode() {
                DealMode::Single => Phase::Complete,
                DealMode::Triple => Phase::Stacking,
            };
        }
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => {
                if let Some(session) = self.session.take() {
                    session.abandon();
                }
                return true;
            }
            Some(ScreenAction::StartShuffle) => self.start_shuffle(),
            Some(ScreenAction::Advance) => self.advance(),
            Some(ScreenAction::Restart) => {
                if let Some(session) = &mut self.session {
                    session.reset();
                    self.fx
                        .add_unique_effect("restart", effects::restart_coalesce());
                }
            }
            Some(ScreenAction::Interrupt) => {
                if let Some(session) = self.session.take() {
                    session.abandon();
                }
                self.phase = Phase::Home;
            }
            Some(ScreenAction::FinishStacking) => self.phase = Phase::Complete,
            Some(ScreenAction::BackToHome) => {
                self.session = None;
                self.phase = Phase::Home;
            }
            None => {}
        }

        false
    }
}

/// Actions that screens can return
#[derive(Debug, Clone)]
pub enum ScreenAction {
    Quit,
    StartShuffle,
    /// One card placed, or one round of three in triple mode
    Advance,
    Restart,
    /// Leave a shuffle half way; progress is dropped
    Interrupt,
    FinishStacking,
    BackToHome,
}
