use crate::deal::{Progress, RemainingSet};
use crate::permutation::Permutation;

/// Single-pile dealing: one card per step, located in the shrinking stack.
#[derive(Debug, Clone)]
pub struct SequentialDealTracker {
    permutation: Permutation,
    remaining: RemainingSet,
}

impl SequentialDealTracker {
    pub fn new(permutation: Permutation) -> Self {
        let remaining = RemainingSet::full(permutation.len());
        Self {
            permutation,
            remaining,
        }
    }

    /// Label the permutation asks for next, if anything is left
    fn next_label(&self) -> Option<u32> {
        if self.remaining.is_empty() {
            return None;
        }
        self.permutation.get(self.remaining.dealt())
    }

    /// 1-indexed position, from the top of the remaining stack, of the card
    /// to place next. `0` once everything is placed.
    pub fn current_card_position(&self) -> usize {
        self.next_label()
            .and_then(|label| self.remaining.position_of(label))
            .unwrap_or(0)
    }

    /// Place the located card. No-op once complete.
    pub fn advance(&mut self) {
        if let Some(label) = self.next_label() {
            self.remaining.remove(label);
        }
    }

    /// Back to a full stack with the same permutation
    pub fn reset(&mut self) {
        self.remaining.reset();
    }

    pub fn progress(&self) -> Progress {
        self.remaining.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn remaining(&self) -> &[u32] {
        self.remaining.as_slice()
    }

    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(labels: &[u32]) -> SequentialDealTracker {
        SequentialDealTracker::new(Permutation::from_labels(labels.to_vec()).unwrap())
    }

    #[test]
    fn test_positions_follow_shrinking_stack() {
        let mut t = tracker(&[3, 1, 5, 2, 4]);
        // stack [1,2,3,4,5]: label 3 is third
        assert_eq!(t.current_card_position(), 3);
        t.advance();
        // stack [1,2,4,5]: label 1 is first
        assert_eq!(t.remaining(), &[1, 2, 4, 5]);
        assert_eq!(t.current_card_position(), 1);
        t.advance();
        // stack [2,4,5]: label 5 is third
        assert_eq!(t.current_card_position(), 3);
        t.advance();
        assert_eq!(t.current_card_position(), 1);
        t.advance();
        assert_eq!(t.current_card_position(), 1);
        t.advance();
        assert_eq!(t.current_card_position(), 0);
    }

    #[test]
    fn test_five_advances_exhaust_five_cards() {
        let mut t = SequentialDealTracker::new(Permutation::random(5));
        for step in 0..5 {
            assert_eq!(t.progress().current, step);
            assert!(t.current_card_position() >= 1);
            t.advance();
        }
        assert!(t.is_complete());
        assert_eq!(t.current_card_position(), 0);
        assert_eq!(t.progress(), Progress { current: 5, total: 5 });

        t.advance();
        assert!(t.remaining().is_empty());
        assert_eq!(t.progress(), Progress { current: 5, total: 5 });
    }

    #[test]
    fn test_reset_keeps_permutation() {
        let mut t = SequentialDealTracker::new(Permutation::random(5));
        let before = t.permutation().clone();
        t.advance();
        t.advance();
        t.reset();
        assert_eq!(t.remaining(), &[1, 2, 3, 4, 5]);
        assert_eq!(t.progress().current, 0);
        assert_eq!(t.permutation(), &before);
    }

    #[test]
    fn test_single_card() {
        let mut t = tracker(&[1]);
        assert_eq!(t.remaining(), &[1]);
        assert_eq!(t.current_card_position(), 1);
        t.advance();
        assert_eq!(t.current_card_position(), 0);
        assert!(t.is_complete());
    }

    #[test]
    fn test_identity_always_takes_the_top_card() {
        let mut t = SequentialDealTracker::new(Permutation::identity(10));
        while !t.is_complete() {
            assert_eq!(t.current_card_position(), 1);
            t.advance();
        }
    }

    #[test]
    fn test_reverse_always_takes_the_bottom_card() {
        let mut t = tracker(&[4, 3, 2, 1]);
        for expected in [4, 3, 2, 1] {
            assert_eq!(t.current_card_position(), expected);
            t.advance();
        }
    }
}
