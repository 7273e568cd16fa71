//! State shared by both dealing modes: the simulated undealt stack and the
//! progress derived from it.

use tracing::error;

/// Original-position labels not yet dealt, top of the physical stack first.
///
/// Starts as `[1..=n]` in deck order, never in shuffle order, and only
/// shrinks until [`RemainingSet::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingSet {
    total: usize,
    labels: Vec<u32>,
}

impl RemainingSet {
    pub fn full(total: usize) -> Self {
        Self {
            total,
            labels: (1..=total as u32).collect(),
        }
    }

    /// 1-indexed position of `label` counted from the top
    pub fn position_of(&self, label: u32) -> Option<usize> {
        self.labels.iter().position(|&l| l == label).map(|i| i + 1)
    }

    /// Remove a single label keeping the others in order.
    ///
    /// A missing label means the tracker and its permutation have drifted
    /// apart; the removal is skipped so the stack stays intact.
    pub fn remove(&mut self, label: u32) -> bool {
        match self.labels.iter().position(|&l| l == label) {
            Some(idx) => {
                self.labels.remove(idx);
                true
            }
            None => {
                error!(label, remaining = self.labels.len(), "label missing from remaining set");
                false
            }
        }
    }

    /// Remove every label in `labels` in one pass.
    ///
    /// All or nothing: if any label is missing the set is left untouched.
    pub fn remove_all(&mut self, labels: &[u32]) -> bool {
        if let Some(&missing) = labels.iter().find(|&&l| self.position_of(l).is_none()) {
            error!(
                label = missing,
                expected = labels.len(),
                remaining = self.labels.len(),
                "label missing from remaining set"
            );
            return false;
        }
        self.labels.retain(|l| !labels.contains(l));
        true
    }

    pub fn reset(&mut self) {
        self.labels = (1..=self.total as u32).collect();
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Cards already dealt. Also the index of the next prescribed label.
    pub fn dealt(&self) -> usize {
        self.total - self.labels.len()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: self.dealt(),
            total: self.total,
        }
    }
}

/// Cards placed so far out of the whole deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.current == self.total
    }

    /// 1-based number of the card currently being placed, capped at total
    pub fn ordinal(&self) -> usize {
        (self.current + 1).min(self.total)
    }

    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.current as f64 / self.total as f64
    }
}
