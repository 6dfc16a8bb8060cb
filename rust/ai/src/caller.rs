use felt_engine::round::{SeatAction, SeatView};

use crate::BotStrategy;

/// Always matches the current bet (the engine turns a short call into a
/// check). Deterministic; used as an evaluation baseline and in scripted
/// sessions.
#[derive(Debug, Default)]
pub struct CallingBot;

impl BotStrategy for CallingBot {
    fn decide(&mut self, _view: &SeatView<'_>) -> SeatAction {
        SeatAction::Call
    }

    fn name(&self) -> &str {
        "caller"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_engine::cards::{Card, Rank, Suit};
    use felt_engine::player::Controller;

    #[test]
    fn always_calls() {
        let controller = Controller::automated("caller");
        let hole = [
            Card { suit: Suit::Hearts, rank: Rank::Two },
            Card { suit: Suit::Clubs, rank: Rank::Three },
        ];
        let view = SeatView {
            seat: 2,
            name: "Bot 2",
            controller: &controller,
            hole,
            chips: 10,
            pot: 500,
            current_bet: 400,
            community: &[],
        };
        let mut bot = CallingBot;
        assert_eq!(bot.decide(&view), SeatAction::Call);
    }
}
