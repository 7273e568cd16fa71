use std::path::PathBuf;

use clap::Parser;
use perfect_shuffle_core::{CardCount, CardSetup, DealMode};

#[derive(Parser, Debug)]
#[command(name = "perfect-shuffle")]
#[command(about = "Shuffle a physical deck evenly, one card at a time")]
pub struct Cli {
    #[arg(long, help = "Where preferences are kept", default_value = "perfect-shuffle.json")]
    pub store: PathBuf,
    #[arg(long, help = "Deal mode for this run: single or triple")]
    pub mode: Option<DealMode>,
    #[arg(long, help = "Deck size for this run (1-99, anything else means 60)")]
    pub cards: Option<u32>,
    #[arg(long, help = "Seed for a repeatable shuffle order")]
    pub seed: Option<u64>,
    #[arg(long, help = "Log file path", default_value = "perfect-shuffle.log")]
    pub log_file: PathBuf,
    #[arg(long, help = "Log filter, overrides RUST_LOG")]
    pub log_level: Option<String>,
    #[arg(long, help = "Write logs as JSON lines", default_value_t = false)]
    pub log_json: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the stored setup
    pub fn apply(&self, setup: &mut CardSetup) {
        if let Some(cards) = self.cards {
            *setup = CardSetup::new(CardCount::from_cards(cards), setup.mode());
        }
        if let Some(mode) = self.mode {
            setup.set_mode(mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["perfect-shuffle"]);
        assert_eq!(cli.store, PathBuf::from("perfect-shuffle.json"));
        assert!(cli.mode.is_none());
        assert!(!cli.log_json);
    }

    #[test]
    fn test_overrides_apply_to_setup() {
        let cli = Cli::parse_from(["perfect-shuffle", "--mode", "triple", "--cards", "40"]);
        let mut setup = CardSetup::default();
        cli.apply(&mut setup);
        assert_eq!(setup.cards(), 40);
        assert_eq!(setup.mode(), DealMode::Triple);
    }

    #[test]
    fn test_invalid_card_override_uses_default() {
        let cli = Cli::parse_from(["perfect-shuffle", "--cards", "500"]);
        let mut setup = CardSetup::new(CardCount::from_cards(12), DealMode::Single);
        cli.apply(&mut setup);
        assert_eq!(setup.cards(), 60);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["perfect-shuffle", "--mode", "double"]).is_err());
    }
}
