//! The table's stock opponent: a threshold raiser with a random mixed
//! strategy below the threshold.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use felt_engine::round::{SeatAction, SeatView};
use felt_engine::score::{score_hand, RAISE_THRESHOLD};

use crate::BotStrategy;

/// Default wager when the bot opens or raises.
const OPEN_BET: u32 = 50;

/// Scores the hole cards against the visible community cards. Above
/// [`RAISE_THRESHOLD`] it always raises; otherwise it picks uniformly among
/// raising, calling, folding and bluffing. The engine degrades whichever
/// choice the stack cannot cover.
#[derive(Debug)]
pub struct ThresholdBot {
    rng: StdRng,
}

impl ThresholdBot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible sessions and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThresholdBot {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for ThresholdBot {
    fn decide(&mut self, view: &SeatView<'_>) -> SeatAction {
        let strength = score_hand(&view.hole, view.community);
        let pick = if strength > RAISE_THRESHOLD {
            0
        } else {
            self.rng.random_range(0..4)
        };
        match pick {
            0 => SeatAction::Bet(OPEN_BET.min(view.chips)),
            1 => SeatAction::Call,
            2 => SeatAction::Fold,
            _ => SeatAction::Bluff,
        }
    }

    fn name(&self) -> &str {
        "threshold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_engine::cards::{Card, Rank, Suit};
    use felt_engine::player::Controller;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    fn view<'a>(
        controller: &'a Controller,
        hole: [Card; 2],
        community: &'a [Card],
        chips: u32,
    ) -> SeatView<'a> {
        SeatView {
            seat: 0,
            name: "Bot 1",
            controller,
            hole,
            chips,
            pot: 0,
            current_bet: 0,
            community,
        }
    }

    #[test]
    fn strong_hand_always_raises() {
        // trips on the board: score 6 > threshold
        let ctl = Controller::automated("threshold");
        let hole = [card(Rank::Queen, Suit::Hearts), card(Rank::Queen, Suit::Clubs)];
        let community = [card(Rank::Queen, Suit::Spades)];
        let mut bot = ThresholdBot::with_seed(9);
        for _ in 0..20 {
            let action = bot.decide(&view(&ctl, hole, &community, 1000));
            assert_eq!(action, SeatAction::Bet(50));
        }
    }

    #[test]
    fn raise_is_capped_by_the_stack() {
        let ctl = Controller::automated("threshold");
        let hole = [card(Rank::Nine, Suit::Hearts), card(Rank::Nine, Suit::Clubs)];
        let community = [card(Rank::Nine, Suit::Spades)];
        let mut bot = ThresholdBot::with_seed(9);
        let action = bot.decide(&view(&ctl, hole, &community, 30));
        assert_eq!(action, SeatAction::Bet(30));
    }

    #[test]
    fn weak_hand_mixes_all_four_actions() {
        let ctl = Controller::automated("threshold");
        let hole = [card(Rank::Two, Suit::Hearts), card(Rank::Seven, Suit::Clubs)];
        let mut bot = ThresholdBot::with_seed(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(bot.decide(&view(&ctl, hole, &[], 1000)));
        }
        assert_eq!(seen.len(), 4, "uniform pick should hit every option");
    }

    #[test]
    fn seeded_bots_repeat_their_decisions() {
        let ctl = Controller::automated("threshold");
        let hole = [card(Rank::Two, Suit::Hearts), card(Rank::Seven, Suit::Clubs)];
        let mut a = ThresholdBot::with_seed(77);
        let mut b = ThresholdBot::with_seed(77);
        for _ in 0..50 {
            assert_eq!(
                a.decide(&view(&ctl, hole, &[], 500)),
                b.decide(&view(&ctl, hole, &[], 500))
            );
        }
    }
}
