use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

/// Maximum number of seats at the table.
pub const MAX_SEATS: usize = 6;

/// Chips handed to every freshly created player.
pub const STARTING_CHIPS: u32 = 1000;

/// Who drives a seat. Resolved once when the player is created; gameplay
/// never infers control from the display name.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Automated { strategy: String },
}

impl Controller {
    pub fn automated(strategy: &str) -> Self {
        Controller::Automated {
            strategy: strategy.to_string(),
        }
    }

    pub fn is_automated(&self) -> bool {
        matches!(self, Controller::Automated { .. })
    }
}

/// Lifetime counters carried across hands and save files.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_won: u32,
    pub hands_played: u32,
    pub hands_won: u32,
}

/// A participant: name, two hole-card slots, chip stack, fold status and
/// lifetime stats. Created once at setup (or restored from a save) and kept
/// until elimination.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    controller: Controller,
    hole: [Option<Card>; 2],
    chips: u32,
    folded: bool,
    pub stats: PlayerStats,
}

impl Player {
    pub fn new(name: impl Into<String>, controller: Controller) -> Self {
        Self::with_chips(name, controller, STARTING_CHIPS)
    }

    pub fn with_chips(name: impl Into<String>, controller: Controller, chips: u32) -> Self {
        Self {
            name: name.into(),
            controller,
            hole: [None, None],
            chips,
            folded: false,
            stats: PlayerStats::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn has_chips(&self) -> bool {
        self.chips > 0
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    /// Both hole cards, once the deal is complete.
    pub fn hand(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub fn give_card(&mut self, card: Card) -> Result<(), EngineError> {
        if let Some(slot) = self.hole.iter_mut().find(|s| s.is_none()) {
            *slot = Some(card);
            Ok(())
        } else {
            Err(EngineError::HoleCardsFull {
                name: self.name.clone(),
            })
        }
    }

    /// Clear hole cards and fold status ahead of a fresh deal.
    pub fn reset_for_hand(&mut self) {
        self.hole = [None, None];
        self.folded = false;
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Remove up to `amount` chips and return what was actually taken.
    pub fn deduct(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.chips);
        self.chips -= taken;
        taken
    }
}
