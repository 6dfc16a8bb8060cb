use std::collections::BTreeSet;

use crate::deck::Deck;
use crate::errors::EngineError;
use crate::player::Player;
use crate::round::{HandState, Street};

/// Owns the roster, the deck, the eliminated-name record and any chips
/// carried between hands. The game loop orchestrates it hand by hand:
/// `begin_hand` -> four betting rounds with `reveal` between them ->
/// showdown -> `eliminate_busted` -> `sort_by_chips`.
#[derive(Debug)]
pub struct Table {
    roster: Vec<Player>,
    deck: Deck,
    eliminated: BTreeSet<String>,
    carry: u32,
}

impl Table {
    pub fn new(roster: Vec<Player>, seed: u64) -> Self {
        Self {
            roster,
            deck: Deck::new_with_seed(seed),
            eliminated: BTreeSet::new(),
            carry: 0,
        }
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut [Player] {
        &mut self.roster
    }

    pub fn eliminated(&self) -> &BTreeSet<String> {
        &self.eliminated
    }

    /// Seats still holding chips.
    pub fn active_count(&self) -> usize {
        self.roster.iter().filter(|p| p.has_chips()).count()
    }

    /// The game ends when fewer than two seats hold chips.
    pub fn is_over(&self) -> bool {
        self.active_count() <= 1
    }

    /// Chips waiting to seed the next hand's pot.
    pub fn carried(&self) -> u32 {
        self.carry
    }

    /// Stash an unawarded pot for the next hand.
    pub fn carry_pot(&mut self, chips: u32) {
        self.carry += chips;
    }

    /// Shuffle and deal a fresh hand: fold status cleared, two hole cards
    /// per seat, `hands_played` incremented, pot seeded with carried chips.
    /// Dealing past the deck aborts the hand.
    pub fn begin_hand(&mut self) -> Result<HandState, EngineError> {
        self.deck.shuffle();
        for player in &mut self.roster {
            player.reset_for_hand();
        }
        for _ in 0..2 {
            for player in &mut self.roster {
                let card = self.deck.deal()?;
                player.give_card(card)?;
            }
        }
        for player in &mut self.roster {
            player.stats.hands_played += 1;
        }
        Ok(HandState::with_pot(std::mem::take(&mut self.carry)))
    }

    /// Reveal the street's community cards into the hand (flop 3, turn 1,
    /// river 1). Never deals past the five-card board.
    pub fn reveal(&mut self, hand: &mut HandState, street: Street) -> Result<(), EngineError> {
        for _ in 0..street.reveal_count() {
            if hand.community().len() < 5 {
                let card = self.deck.deal()?;
                hand.push_community(card);
            }
        }
        Ok(())
    }

    /// Remove seats with exactly zero chips, keeping survivor order, and
    /// record their names. Returns the names removed by this call.
    pub fn eliminate_busted(&mut self) -> Vec<String> {
        let mut busted = Vec::new();
        self.roster.retain(|p| {
            if p.has_chips() {
                true
            } else {
                busted.push(p.name().to_string());
                false
            }
        });
        for name in &busted {
            self.eliminated.insert(name.clone());
        }
        busted
    }

    /// Reorder the roster by chips, descending. The sort is stable, so
    /// equal stacks keep their relative order.
    pub fn sort_by_chips(&mut self) {
        self.roster.sort_by_key(|p| std::cmp::Reverse(p.chips()));
    }
}
