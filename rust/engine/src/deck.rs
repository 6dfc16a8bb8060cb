use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// An ordered 52-card deck with a cursor marking the next undealt position.
/// Callers sequence shuffle -> deal -> reset (or shuffle again) per hand.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        // Keep the fixed build order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            cursor: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Uniformly permute the 52 cards and rewind the cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
    }

    /// Deal the next card, advancing the cursor. Within one shuffle cycle no
    /// card is dealt twice; dealing past the 52nd card is a hard failure.
    pub fn deal(&mut self) -> Result<Card, EngineError> {
        let card = self
            .cards
            .get(self.cursor)
            .copied()
            .ok_or(EngineError::DeckExhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Rewind the cursor without changing the card order.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }
}
