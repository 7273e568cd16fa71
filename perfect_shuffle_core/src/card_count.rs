use serde_json::Value;

pub const MIN_CARD_COUNT: u32 = 1;
pub const MAX_CARD_COUNT: u32 = 99;
pub const DEFAULT_CARD_COUNT: u32 = 60;
pub const QUICK_SELECT_OPTIONS: [u32; 3] = [40, 60, 99];

/// A validated deck size.
///
/// Construction never fails: anything missing, non-finite or outside
/// `MIN_CARD_COUNT..=MAX_CARD_COUNT` collapses to `DEFAULT_CARD_COUNT`.
/// In-range fractional input is kept verbatim in [`CardCount::value`];
/// [`CardCount::cards`] truncates it to the whole number of cards dealt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardCount {
    value: f64,
}

impl CardCount {
    pub fn create(input: Option<f64>) -> Self {
        Self {
            value: validate(input),
        }
    }

    /// Validate a raw JSON value as read from the store. Non-numbers count
    /// as missing.
    pub fn from_json(input: Option<&Value>) -> Self {
        Self::create(input.and_then(Value::as_f64))
    }

    pub fn from_cards(cards: u32) -> Self {
        Self::create(Some(f64::from(cards)))
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whole cards to deal; always within the supported range
    pub fn cards(&self) -> u32 {
        // value is finite and in 1.0..=99.0, so the cast cannot wrap
        self.value.trunc() as u32
    }
}

impl Default for CardCount {
    fn default() -> Self {
        Self::from_cards(DEFAULT_CARD_COUNT)
    }
}

fn validate(input: Option<f64>) -> f64 {
    let Some(count) = input.filter(|c| c.is_finite()) else {
        return f64::from(DEFAULT_CARD_COUNT);
    };
    if count < f64::from(MIN_CARD_COUNT) || count > f64::from(MAX_CARD_COUNT) {
        return f64::from(DEFAULT_CARD_COUNT);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boundaries_are_accepted() {
        assert_eq!(CardCount::create(Some(1.0)).value(), 1.0);
        assert_eq!(CardCount::create(Some(99.0)).value(), 99.0);
        assert_eq!(CardCount::create(Some(50.0)).cards(), 50);
    }

    #[test]
    fn test_out_of_range_falls_back_to_default() {
        assert_eq!(CardCount::create(Some(0.0)).value(), 60.0);
        assert_eq!(CardCount::create(Some(100.0)).value(), 60.0);
        assert_eq!(CardCount::create(Some(-5.0)).value(), 60.0);
        assert_eq!(CardCount::create(Some(0.99)).value(), 60.0);
    }

    #[test]
    fn test_non_finite_and_missing_fall_back_to_default() {
        assert_eq!(CardCount::create(None).value(), 60.0);
        assert_eq!(CardCount::create(Some(f64::NAN)).value(), 60.0);
        assert_eq!(CardCount::create(Some(f64::INFINITY)).value(), 60.0);
        assert_eq!(CardCount::create(Some(f64::NEG_INFINITY)).value(), 60.0);
    }

    #[test]
    fn test_fraction_in_range_passes_through() {
        let count = CardCount::create(Some(50.7));
        assert_eq!(count.value(), 50.7);
        assert_eq!(count.cards(), 50);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(CardCount::from_json(Some(&json!(40))).cards(), 40);
        assert_eq!(CardCount::from_json(Some(&json!("40"))).cards(), 60);
        assert_eq!(CardCount::from_json(Some(&json!(null))).cards(), 60);
        assert_eq!(CardCount::from_json(None).cards(), 60);
    }

    #[test]
    fn test_default() {
        assert_eq!(CardCount::default().cards(), DEFAULT_CARD_COUNT);
    }
}
