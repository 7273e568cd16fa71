pub mod card_count;
pub mod card_setup;
pub mod deal;
pub mod permutation;
pub mod sequential;
pub mod session;
pub mod store;
pub mod triple;

pub use card_count::CardCount;
pub use card_setup::CardSetup;
pub use deal::{Progress, RemainingSet};
pub use permutation::{Permutation, PermutationError};
pub use sequential::SequentialDealTracker;
pub use session::{DealMode, DealSession, Dealer};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use triple::{Pile, PilePartition, PilePositions, TripleDealTracker};
