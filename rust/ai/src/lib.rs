//! # felt-ai: Automated Seat Strategies
//!
//! Decision-making for the table's automated seats. Strategies implement
//! [`BotStrategy`] against the engine's seat view and are built by id
//! through [`create_strategy`], so the game loop never hard-codes a bot.
//!
//! ## Strategies
//!
//! - `"threshold"` (default) - raises whenever the visible cards score above
//!   the engine's raise threshold, otherwise picks uniformly among raising,
//!   calling, folding and bluffing
//! - `"caller"` - always calls; deterministic, useful for scripted sessions
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::create_strategy;
//!
//! let bot = create_strategy("threshold", Some(42));
//! assert_eq!(bot.name(), "threshold");
//! ```

use felt_engine::round::{SeatAction, SeatView};

pub mod caller;
pub mod threshold;

/// Decision interface for automated seats.
///
/// `decide` receives the same [`SeatView`] the betting round hands to every
/// action source: hole cards, chips, pot, the bet to match and the visible
/// community cards. Implementations must always return some action; the
/// engine degrades unaffordable choices rather than erroring.
pub trait BotStrategy {
    fn decide(&mut self, view: &SeatView<'_>) -> SeatAction;

    /// Identifier of this strategy, matching its factory id.
    fn name(&self) -> &str;
}

/// Build a strategy by id. `seed` makes the strategy deterministic where it
/// is random at all; unknown ids fall back to the threshold bot.
pub fn create_strategy(id: &str, seed: Option<u64>) -> Box<dyn BotStrategy> {
    match id {
        "caller" => Box::new(caller::CallingBot),
        _ => Box::new(match seed {
            Some(s) => threshold::ThresholdBot::with_seed(s),
            None => threshold::ThresholdBot::new(),
        }),
    }
}
