use crate::player::Player;
use crate::round::HandState;
use crate::score::score_hand;

/// Result of resolving one hand.
#[derive(Debug, Clone, Default)]
pub struct ShowdownOutcome {
    /// Score of every non-folded seat, in roster order.
    pub scores: Vec<(String, u32)>,
    /// Winners by name. Empty when every seat folded.
    pub winners: Vec<String>,
    /// Chips awarded in total (zero when the pot was carried).
    pub awarded: u32,
    /// Chips left unawarded because every seat folded; the table rolls
    /// them into the next hand's pot.
    pub carried: u32,
}

/// Score the non-folded seats against the revealed community cards and
/// award the pot. The pot splits evenly among all seats tied at the top
/// score, odd chip to the earliest seat in roster order; each winner's
/// `games_won` and `hands_won` counters increment. With no eligible seat
/// the pot comes back as `carried`.
pub fn resolve_showdown(roster: &mut [Player], hand: &mut HandState) -> ShowdownOutcome {
    let mut outcome = ShowdownOutcome::default();
    let mut best: Option<u32> = None;
    let mut contenders: Vec<usize> = Vec::new();

    for (seat, player) in roster.iter().enumerate() {
        if player.is_folded() {
            continue;
        }
        let Some(hole) = player.hand() else { continue };
        let score = score_hand(&hole, hand.community());
        outcome.scores.push((player.name().to_string(), score));
        match best {
            Some(top) if score < top => {}
            Some(top) if score == top => contenders.push(seat),
            _ => {
                best = Some(score);
                contenders = vec![seat];
            }
        }
    }

    let pot = hand.take_pot();
    if contenders.is_empty() {
        outcome.carried = pot;
        return outcome;
    }

    let share = pot / contenders.len() as u32;
    let mut remainder = pot % contenders.len() as u32;
    for &seat in &contenders {
        let player = &mut roster[seat];
        let mut won = share;
        if remainder > 0 {
            won += 1;
            remainder -= 1;
        }
        player.add_chips(won);
        player.stats.games_won += 1;
        player.stats.hands_won += 1;
        outcome.winners.push(player.name().to_string());
    }
    outcome.awarded = pot;
    outcome
}
