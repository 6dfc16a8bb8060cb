//! Deal a single sample hand for inspection: two hole cards, a full
//! five-card board, and the score the table would give them.

use std::io::Write;

use felt_engine::deck::Deck;
use felt_engine::score::score_hand;

use crate::error::CliError;
use crate::formatters::format_board;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "deal: seed={}", seed)?;

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let hole = [deck.deal()?, deck.deal()?];
    let mut board = Vec::with_capacity(5);
    for _ in 0..5 {
        board.push(deck.deal()?);
    }

    writeln!(out, "Hole cards: {}", format_board(&hole))?;
    writeln!(out, "Community cards: {}", format_board(&board))?;
    writeln!(out, "Hand score: {}", score_hand(&hole, &board))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deals_hole_and_board() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Hole cards:"));
        assert!(output.contains("Community cards:"));
        assert!(output.contains("Hand score:"));
    }

    #[test]
    fn same_seed_same_deal() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(7), &mut a).unwrap();
        handle_deal_command(Some(7), &mut b).unwrap();
        assert_eq!(a, b);
    }
}
