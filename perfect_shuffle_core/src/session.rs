//! One shuffle session: the chosen dealing mode plus its tracker.
//!
//! Sessions report `shuffle_start`, `shuffle_complete` and
//! `shuffle_abandoned` as structured `tracing` events.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::card_count::CardCount;
use crate::deal::Progress;
use crate::permutation::Permutation;
use crate::sequential::SequentialDealTracker;
use crate::triple::{PilePositions, TripleDealTracker};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealMode {
    /// One card at a time onto a single pile
    #[default]
    Single,
    /// One card to each of three piles per round
    Triple,
}

impl DealMode {
    pub fn toggle(self) -> Self {
        match self {
            DealMode::Single => DealMode::Triple,
            DealMode::Triple => DealMode::Single,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DealMode::Single => "single",
            DealMode::Triple => "triple",
        }
    }

    pub fn from_json(value: Option<&serde_json::Value>) -> Option<Self> {
        value.and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

impl fmt::Display for DealMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown deal mode `{0}`, expected `single` or `triple`")]
pub struct UnknownDealMode(pub String);

impl FromStr for DealMode {
    type Err = UnknownDealMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" | "1" => Ok(DealMode::Single),
            "triple" | "3" => Ok(DealMode::Triple),
            _ => Err(UnknownDealMode(s.to_string())),
        }
    }
}

/// The tracker driving a session
#[derive(Debug, Clone)]
pub enum Dealer {
    Single(SequentialDealTracker),
    Triple(TripleDealTracker),
}

impl Dealer {
    pub fn new(mode: DealMode, permutation: Permutation) -> Self {
        match mode {
            DealMode::Single => Dealer::Single(SequentialDealTracker::new(permutation)),
            DealMode::Triple => Dealer::Triple(TripleDealTracker::new(permutation)),
        }
    }

    pub fn mode(&self) -> DealMode {
        match self {
            Dealer::Single(_) => DealMode::Single,
            Dealer::Triple(_) => DealMode::Triple,
        }
    }

    pub fn advance(&mut self) {
        match self {
            Dealer::Single(t) => t.advance(),
            Dealer::Triple(t) => t.next_round(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Dealer::Single(t) => t.reset(),
            Dealer::Triple(t) => t.reset(),
        }
    }

    pub fn progress(&self) -> Progress {
        match self {
            Dealer::Single(t) => t.progress(),
            Dealer::Triple(t) => t.progress(),
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Dealer::Single(t) => t.is_complete(),
            Dealer::Triple(t) => t.is_all_complete(),
        }
    }
}

#[derive(Debug)]
pub struct DealSession {
    dealer: Dealer,
    cards: u32,
    started: Instant,
    finished: Option<Duration>,
}

impl DealSession {
    /// Start dealing `permutation`; the deck size is its length
    pub fn start(mode: DealMode, permutation: Permutation) -> Self {
        let cards = permutation.len() as u32;
        info!(
            event = "shuffle_start",
            card_count = cards,
            mode = %mode,
            "shuffle started"
        );
        Self {
            dealer: Dealer::new(mode, permutation),
            cards,
            started: Instant::now(),
            finished: None,
        }
    }

    /// Start with a fresh random permutation sized from `card_count`
    pub fn start_random<R: rand::Rng>(mode: DealMode, card_count: CardCount, rng: &mut R) -> Self {
        let permutation = Permutation::generate(card_count.cards() as usize, rng);
        Self::start(mode, permutation)
    }

    /// One user action: a card in single mode, a round in triple mode
    pub fn advance(&mut self) {
        self.dealer.advance();
        if self.finished.is_none() && self.dealer.is_complete() {
            let elapsed = self.started.elapsed();
            self.finished = Some(elapsed);
            info!(
                event = "shuffle_complete",
                card_count = self.cards,
                mode = %self.mode(),
                duration_ms = elapsed.as_millis() as u64,
                "shuffle complete"
            );
        }
    }

    /// Restart dealing with the same permutation
    pub fn reset(&mut self) {
        self.dealer.reset();
        self.started = Instant::now();
        self.finished = None;
    }

    /// End an unfinished session. Progress is discarded with `self`.
    pub fn abandon(self) {
        if self.finished.is_none() {
            let progress = self.progress();
            info!(
                event = "shuffle_abandoned",
                card_count = self.cards,
                mode = %self.mode(),
                dealt = progress.current,
                "shuffle abandoned"
            );
        }
    }

    pub fn mode(&self) -> DealMode {
        self.dealer.mode()
    }

    /// Deck size being dealt
    pub fn cards(&self) -> u32 {
        self.cards
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn progress(&self) -> Progress {
        self.dealer.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.dealer.is_complete()
    }

    /// How long the completed shuffle took
    pub fn duration(&self) -> Option<Duration> {
        self.finished
    }

    /// Single mode: position of the next card, `None` in triple mode
    pub fn card_position(&self) -> Option<usize> {
        match &self.dealer {
            Dealer::Single(t) => Some(t.current_card_position()),
            Dealer::Triple(_) => None,
        }
    }

    /// Triple mode: positions for this round, `None` in single mode
    pub fn pile_positions(&self) -> Option<PilePositions> {
        match &self.dealer {
            Dealer::Single(_) => None,
            Dealer::Triple(t) => Some(t.current_card_positions()),
        }
    }
}
