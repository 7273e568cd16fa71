use serde_json::json;
use tracing::{debug, info};

use crate::card_count::{CardCount, MAX_CARD_COUNT, MIN_CARD_COUNT};
use crate::session::DealMode;
use crate::store::{KeyValueStore, StoreError, CARD_COUNT_KEY, DEAL_MODE_KEY};

/// Home-screen choices before a shuffle starts.
///
/// Edits stay in memory until [`CardSetup::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct CardSetup {
    count: u32,
    mode: DealMode,
}

impl CardSetup {
    pub fn new(count: CardCount, mode: DealMode) -> Self {
        Self {
            count: count.cards(),
            mode,
        }
    }

    /// Restore the last saved choices
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let count = CardCount::from_json(store.get(CARD_COUNT_KEY).as_ref());
        let mode = DealMode::from_json(store.get(DEAL_MODE_KEY).as_ref()).unwrap_or_default();
        debug!(card_count = count.cards(), %mode, "loaded card setup");
        Self::new(count, mode)
    }

    pub fn count(&self) -> CardCount {
        CardCount::from_cards(self.count)
    }

    pub fn cards(&self) -> u32 {
        self.count
    }

    pub fn mode(&self) -> DealMode {
        self.mode
    }

    pub fn increment(&mut self) {
        self.count = (self.count + 1).min(MAX_CARD_COUNT);
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1).max(MIN_CARD_COUNT);
    }

    pub fn quick_select(&mut self, cards: u32) {
        self.count = CardCount::from_cards(cards).cards();
        info!(event = "card_count_selection", card_count = self.count, "card count selected");
    }

    pub fn set_mode(&mut self, mode: DealMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    /// Persist both choices. Both keys are attempted even if the first
    /// write fails.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let count = self.count();
        let counted = store.set(CARD_COUNT_KEY, json!(count.cards()));
        let moded = store.set(DEAL_MODE_KEY, json!(self.mode));
        counted.and(moded)
    }
}

impl Default for CardSetup {
    fn default() -> Self {
        Self::new(CardCount::default(), DealMode::default())
    }
}
