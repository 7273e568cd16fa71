//! Three-pile dealing: each round places one card on each of the left,
//! center and right piles.
//!
//! The permutation is cut into three contiguous slices, one per pile. Pile
//! sizes differ by at most one; the remainder of `n / 3` goes to the left
//! pile first, then the center. Positions are always counted against the
//! one combined undealt stack.

use std::ops::Range;

use crate::deal::{Progress, RemainingSet};
use crate::permutation::Permutation;

pub const PILE_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pile {
    Left,
    Center,
    Right,
}

impl Pile {
    pub const ALL: [Pile; PILE_COUNT] = [Pile::Left, Pile::Center, Pile::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Pile::Left => "Left",
            Pile::Center => "Center",
            Pile::Right => "Right",
        }
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where each pile's slice of the permutation starts and ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PilePartition {
    left: Range<usize>,
    center: Range<usize>,
    right: Range<usize>,
}

impl PilePartition {
    pub fn for_deck(n: usize) -> Self {
        let base = n / 3;
        let rem = n % 3;
        let left_len = base + usize::from(rem >= 1);
        let center_len = base + usize::from(rem >= 2);
        Self {
            left: 0..left_len,
            center: left_len..left_len + center_len,
            right: left_len + center_len..n,
        }
    }

    pub fn range(&self, pile: Pile) -> Range<usize> {
        match pile {
            Pile::Left => self.left.clone(),
            Pile::Center => self.center.clone(),
            Pile::Right => self.right.clone(),
        }
    }

    pub fn len(&self, pile: Pile) -> usize {
        self.range(pile).len()
    }

    /// `[left, center, right]`
    pub fn sizes(&self) -> [usize; PILE_COUNT] {
        Pile::ALL.map(|pile| self.len(pile))
    }

    pub fn slice<'a>(&self, permutation: &'a Permutation, pile: Pile) -> &'a [u32] {
        &permutation.labels()[self.range(pile)]
    }
}

/// Per-pile position in the undealt stack for the current round.
/// `0` means the pile takes no card this round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PilePositions {
    pub left: usize,
    pub center: usize,
    pub right: usize,
}

impl PilePositions {
    pub fn get(&self, pile: Pile) -> usize {
        match pile {
            Pile::Left => self.left,
            Pile::Center => self.center,
            Pile::Right => self.right,
        }
    }

    fn set(&mut self, pile: Pile, position: usize) {
        match pile {
            Pile::Left => self.left = position,
            Pile::Center => self.center = position,
            Pile::Right => self.right = position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TripleDealTracker {
    permutation: Permutation,
    partition: PilePartition,
    remaining: RemainingSet,
}

impl TripleDealTracker {
    pub fn new(permutation: Permutation) -> Self {
        let partition = PilePartition::for_deck(permutation.len());
        let remaining = RemainingSet::full(permutation.len());
        Self {
            permutation,
            partition,
            remaining,
        }
    }

    pub fn current_round(&self) -> usize {
        self.remaining.dealt() / PILE_COUNT
    }

    /// Rounds needed to empty the stack; the left pile is never shorter
    pub fn total_rounds(&self) -> usize {
        self.partition.len(Pile::Left)
    }

    /// Label `pile` receives this round, if it still has one
    fn label_for(&self, pile: Pile, round: usize) -> Option<u32> {
        self.partition
            .slice(&self.permutation, pile)
            .get(round)
            .copied()
    }

    pub fn current_card_positions(&self) -> PilePositions {
        let round = self.current_round();
        let mut positions = PilePositions::default();
        for pile in Pile::ALL {
            let position = self
                .label_for(pile, round)
                .and_then(|label| self.remaining.position_of(label))
                .unwrap_or(0);
            positions.set(pile, position);
        }
        positions
    }

    /// Deal this round's cards (up to three) together. No-op once complete.
    pub fn next_round(&mut self) {
        if self.remaining.is_empty() {
            return;
        }
        let round = self.current_round();
        let labels: Vec<u32> = Pile::ALL
            .iter()
            .filter_map(|&pile| self.label_for(pile, round))
            .collect();
        self.remaining.remove_all(&labels);
    }

    pub fn reset(&mut self) {
        self.remaining.reset();
    }

    /// True exactly between rounds
    pub fn is_round_complete(&self) -> bool {
        self.remaining.dealt() % PILE_COUNT == 0
    }

    pub fn is_all_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.is_all_complete()
    }

    pub fn progress(&self) -> Progress {
        self.remaining.progress()
    }

    pub fn remaining(&self) -> &[u32] {
        self.remaining.as_slice()
    }

    pub fn partition(&self) -> &PilePartition {
        &self.partition
    }

    pub fn pile(&self, pile: Pile) -> &[u32] {
        self.partition.slice(&self.permutation, pile)
    }

    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }
}
